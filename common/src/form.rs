//! フォーム更新操作
//!
//! すべて後勝ち（last-write-wins）。マージは行わない。

use crate::error::{Error, Result};
use crate::types::AppraisalForm;
use crate::vocab::JudgmentField;

/// トップレベルのスカラー項目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarField {
    Brand,
    WarrantyDate,
    ModelNumber,
    SerialNumber,
    Notes,
}

impl AppraisalForm {
    /// スカラー項目の現在値（ブランドは表示ラベル）
    pub fn field(&self, field: ScalarField) -> &str {
        match field {
            ScalarField::Brand => self.brand.label(),
            ScalarField::WarrantyDate => &self.warranty_date,
            ScalarField::ModelNumber => &self.model_number,
            ScalarField::SerialNumber => &self.serial_number,
            ScalarField::Notes => &self.notes,
        }
    }

    /// スカラー項目を1つ置き換える
    ///
    /// テキスト項目は任意の文字列を受け付ける。ブランドは既知のラベルのみ。
    pub fn update_field(&mut self, field: ScalarField, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        match field {
            ScalarField::Brand => self.brand = value.parse()?,
            ScalarField::WarrantyDate => self.warranty_date = value,
            ScalarField::ModelNumber => self.model_number = value,
            ScalarField::SerialNumber => self.serial_number = value,
            ScalarField::Notes => self.notes = value,
        }
        Ok(())
    }

    /// 鑑定項目を1つ置き換える
    ///
    /// 値は項目の語彙に含まれる必要がある。空文字列は未回答に戻す。
    pub fn update_sub_field(&mut self, field: JudgmentField, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        if !value.is_empty() && !field.accepts(&value) {
            return Err(Error::UnknownOption { field, value });
        }
        *self.sub_field_mut(field) = value;
        Ok(())
    }

    /// 附註にクイックタグを追記
    pub fn append_note_tag(&mut self, tag: &str) {
        if !self.notes.is_empty() {
            self.notes.push(' ');
        }
        self.notes.push_str(tag);
    }
}
