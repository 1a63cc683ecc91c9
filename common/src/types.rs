//! 鑑定レポートの型定義
//!
//! フォーム全体が1つのレコード（AppraisalForm）で表される。
//! 鑑定項目は空文字列 = 未回答。

use crate::vocab::{Brand, JudgmentField};
use serde::{Deserialize, Serialize};

/// 鑑定結論
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Conclusions {
    pub overall: String,
    pub movement: String,
    pub warranty: String,
    pub packaging: String,
}

/// 手錶狀態
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Conditions {
    pub case: String,
    pub strap: String,
    pub crystal: String,
    pub back_crystal: String,
    pub hands: String,
    pub crown: String,
    pub clasp: String,
    pub dial: String,
}

/// 機芯與性能
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Performance {
    pub function: String,
    pub movement_status: String,
    pub waterproof: String,
}

/// 鑑定フォーム（アプリケーション状態の全体）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppraisalForm {
    pub brand: Brand,
    pub warranty_date: String,
    pub model_number: String,
    pub serial_number: String,
    pub conclusions: Conclusions,
    pub conditions: Conditions,
    pub performance: Performance,
    pub notes: String,
    /// data URL（挿入順 = 表示順）
    pub photos: Vec<String>,
    /// 写真リストの変更カウンタ（シリアライズしない）
    #[serde(skip)]
    pub(crate) photo_revision: u64,
}

impl AppraisalForm {
    /// 鑑定項目の現在値
    pub fn sub_field(&self, field: JudgmentField) -> &str {
        use JudgmentField::*;
        match field {
            Overall => &self.conclusions.overall,
            Movement => &self.conclusions.movement,
            Warranty => &self.conclusions.warranty,
            Packaging => &self.conclusions.packaging,
            Case => &self.conditions.case,
            Strap => &self.conditions.strap,
            Crystal => &self.conditions.crystal,
            BackCrystal => &self.conditions.back_crystal,
            Hands => &self.conditions.hands,
            Crown => &self.conditions.crown,
            Clasp => &self.conditions.clasp,
            Dial => &self.conditions.dial,
            Function => &self.performance.function,
            MovementStatus => &self.performance.movement_status,
            Waterproof => &self.performance.waterproof,
        }
    }

    pub(crate) fn sub_field_mut(&mut self, field: JudgmentField) -> &mut String {
        use JudgmentField::*;
        match field {
            Overall => &mut self.conclusions.overall,
            Movement => &mut self.conclusions.movement,
            Warranty => &mut self.conclusions.warranty,
            Packaging => &mut self.conclusions.packaging,
            Case => &mut self.conditions.case,
            Strap => &mut self.conditions.strap,
            Crystal => &mut self.conditions.crystal,
            BackCrystal => &mut self.conditions.back_crystal,
            Hands => &mut self.conditions.hands,
            Crown => &mut self.conditions.crown,
            Clasp => &mut self.conditions.clasp,
            Dial => &mut self.conditions.dial,
            Function => &mut self.performance.function,
            MovementStatus => &mut self.performance.movement_status,
            Waterproof => &mut self.performance.waterproof,
        }
    }
}
