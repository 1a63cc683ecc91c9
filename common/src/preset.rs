//! 初期値プリセット
//!
//! 起動時のフォームを決める。鑑定項目と写真は常に空で始まる。

use crate::error::Result;
use crate::types::AppraisalForm;
use crate::vocab::Brand;
use serde::{Deserialize, Serialize};

/// 初期値定義
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormPreset {
    pub brand: Brand,
    pub warranty_date: String,
    pub model_number: String,
    pub serial_number: String,
    pub notes: String,
}

impl FormPreset {
    /// 組み込みプリセットを取得
    pub fn from_preset(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "demo" => Some(Self::demo()),
            "blank" => Some(Self::default()),
            _ => None,
        }
    }

    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let preset: Self = serde_json::from_str(json)?;
        Ok(preset)
    }

    /// デモ用（基本資料を入力済み）
    pub fn demo() -> Self {
        Self {
            brand: Brand::Rolex,
            warranty_date: "23-Feb-2011".into(),
            model_number: "116610LV-0001".into(),
            serial_number: "4981R131".into(),
            notes: String::new(),
        }
    }

    pub fn into_form(self) -> AppraisalForm {
        AppraisalForm {
            brand: self.brand,
            warranty_date: self.warranty_date,
            model_number: self.model_number,
            serial_number: self.serial_number,
            notes: self.notes,
            ..Default::default()
        }
    }
}
