//! 鑑定フォームの選択肢定義
//!
//! ブランド・鑑定項目（結論/状態/性能）・附註クイックタグの閉じた語彙。
//! 画面表示順をそのまま保持する。

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 附註のクイックタグ
pub const QUICK_TAGS: [&str; 5] = [
    "極佳品品相",
    "正常使用歲月痕跡",
    "建議保養",
    "代用錶帶",
    "無盒單",
];

const CONCLUSION_PASS_FAIL: &[&str] = &["符合原廠工藝標準", "不符合原廠工藝標準"];
const CONCLUSION_MOVEMENT: &[&str] = &["符合原廠工藝標準", "不符合原廠工藝標準", "未開蓋檢測"];
const CONCLUSION_OPTIONAL: &[&str] = &["符合原廠工藝標準", "不符合原廠工藝標準", "不適用"];

const WEAR: &[&str] = &[
    "目測無瑕疵",
    "正常使用痕跡",
    "明顯使用痕跡",
    "有打磨痕跡",
    "非原裝",
    "不適用",
];
const GLASS: &[&str] = &[
    "目測無瑕疵",
    "輕微碰崩刮痕",
    "明顯碰崩刮痕",
    "有後加塗層痕跡",
    "非原裝",
    "不適用",
];

const FUNCTION: &[&str] = &["檢測當下運作正常", "部分功能未能正常運作"];
const MOVEMENT_STATUS: &[&str] = &["走時在可接受誤差範圍內", "建議抹油保養", "不適用"];
const WATERPROOF: &[&str] = &["通過一般氣密測試", "不通過一般氣密測試", "不適用"];

/// 時計ブランド
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Brand {
    #[default]
    Rolex,
    #[serde(rename = "Patek Philippe")]
    PatekPhilippe,
    #[serde(rename = "Audemars Piguet")]
    AudemarsPiguet,
    Omega,
}

impl Brand {
    /// セレクトボックスの表示順
    pub const ALL: [Brand; 4] = [
        Brand::Rolex,
        Brand::PatekPhilippe,
        Brand::AudemarsPiguet,
        Brand::Omega,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Brand::Rolex => "Rolex",
            Brand::PatekPhilippe => "Patek Philippe",
            Brand::AudemarsPiguet => "Audemars Piguet",
            Brand::Omega => "Omega",
        }
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Brand {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Brand::ALL
            .into_iter()
            .find(|b| b.label() == s)
            .ok_or_else(|| Error::UnknownBrand(s.to_string()))
    }
}

/// 鑑定項目のグループ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    Conclusions,
    Conditions,
    Performance,
}

impl Group {
    pub const ALL: [Group; 3] = [Group::Conclusions, Group::Conditions, Group::Performance];

    /// セクション見出し
    pub fn title(&self) -> &'static str {
        match self {
            Group::Conclusions => "鑑定結論",
            Group::Conditions => "手錶狀態",
            Group::Performance => "機芯與性能",
        }
    }

    /// グループに属する項目（表示順）
    pub fn fields(self) -> impl Iterator<Item = JudgmentField> {
        JudgmentField::ALL
            .into_iter()
            .filter(move |f| f.group() == self)
    }
}

/// 鑑定項目（全15項目）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JudgmentField {
    // 鑑定結論
    Overall,
    Movement,
    Warranty,
    Packaging,
    // 手錶狀態
    Case,
    Strap,
    Crystal,
    BackCrystal,
    Hands,
    Crown,
    Clasp,
    Dial,
    // 機芯與性能
    Function,
    MovementStatus,
    Waterproof,
}

impl JudgmentField {
    pub const ALL: [JudgmentField; 15] = [
        JudgmentField::Overall,
        JudgmentField::Movement,
        JudgmentField::Warranty,
        JudgmentField::Packaging,
        JudgmentField::Case,
        JudgmentField::Strap,
        JudgmentField::Crystal,
        JudgmentField::BackCrystal,
        JudgmentField::Hands,
        JudgmentField::Crown,
        JudgmentField::Clasp,
        JudgmentField::Dial,
        JudgmentField::Function,
        JudgmentField::MovementStatus,
        JudgmentField::Waterproof,
    ];

    pub fn group(&self) -> Group {
        use JudgmentField::*;
        match self {
            Overall | Movement | Warranty | Packaging => Group::Conclusions,
            Case | Strap | Crystal | BackCrystal | Hands | Crown | Clasp | Dial => Group::Conditions,
            Function | MovementStatus | Waterproof => Group::Performance,
        }
    }

    /// JSONキー（camelCase）
    pub fn key(&self) -> &'static str {
        use JudgmentField::*;
        match self {
            Overall => "overall",
            Movement => "movement",
            Warranty => "warranty",
            Packaging => "packaging",
            Case => "case",
            Strap => "strap",
            Crystal => "crystal",
            BackCrystal => "backCrystal",
            Hands => "hands",
            Crown => "crown",
            Clasp => "clasp",
            Dial => "dial",
            Function => "function",
            MovementStatus => "movementStatus",
            Waterproof => "waterproof",
        }
    }

    pub fn label(&self) -> &'static str {
        use JudgmentField::*;
        match self {
            Overall => "整體鑑定結果",
            Movement => "機芯鑑定結果",
            Warranty => "保卡鑑定結果",
            Packaging => "包裝鑑定結果",
            Case => "錶殼",
            Strap => "錶帶",
            Crystal => "手錶鏡面",
            BackCrystal => "錶底鏡面",
            Hands => "指針",
            Crown => "錶冠",
            Clasp => "錶扣",
            Dial => "錶盤",
            Function => "手錶功能",
            MovementStatus => "機芯狀態",
            Waterproof => "防水功能",
        }
    }

    /// 選択肢（閉じた語彙）
    pub fn options(&self) -> &'static [&'static str] {
        use JudgmentField::*;
        match self {
            Overall => CONCLUSION_PASS_FAIL,
            Movement => CONCLUSION_MOVEMENT,
            Warranty | Packaging => CONCLUSION_OPTIONAL,
            Case | Strap | Hands | Crown | Clasp | Dial => WEAR,
            Crystal | BackCrystal => GLASS,
            Function => FUNCTION,
            MovementStatus => MOVEMENT_STATUS,
            Waterproof => WATERPROOF,
        }
    }

    pub fn accepts(&self, value: &str) -> bool {
        self.options().contains(&value)
    }

    /// 上に区切り線を描くか（手錶狀態の2項目目以降）
    pub fn separated(&self) -> bool {
        self.group() == Group::Conditions && *self != JudgmentField::Case
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_counts_per_group() {
        assert_eq!(JudgmentField::ALL.len(), 15);
        assert_eq!(Group::Conclusions.fields().count(), 4);
        assert_eq!(Group::Conditions.fields().count(), 8);
        assert_eq!(Group::Performance.fields().count(), 3);
    }

    #[test]
    fn test_group_fields_keep_display_order() {
        let keys: Vec<_> = Group::Performance.fields().map(|f| f.key()).collect();
        assert_eq!(keys, vec!["function", "movementStatus", "waterproof"]);
    }

    #[test]
    fn test_options_are_closed_vocabulary() {
        assert!(JudgmentField::Movement.accepts("未開蓋檢測"));
        assert!(!JudgmentField::Overall.accepts("未開蓋檢測"));
        assert!(JudgmentField::BackCrystal.accepts("有後加塗層痕跡"));
        assert!(!JudgmentField::Strap.accepts("有後加塗層痕跡"));
        assert!(!JudgmentField::Waterproof.accepts(""));
    }

    #[test]
    fn test_separated_only_after_first_condition() {
        let separated: Vec<_> = JudgmentField::ALL
            .into_iter()
            .filter(|f| f.separated())
            .collect();
        assert_eq!(separated.len(), 7);
        assert!(!JudgmentField::Case.separated());
        assert!(!JudgmentField::Overall.separated());
    }

    #[test]
    fn test_brand_parse_and_label() {
        assert_eq!("Patek Philippe".parse::<Brand>().unwrap(), Brand::PatekPhilippe);
        assert_eq!(Brand::AudemarsPiguet.to_string(), "Audemars Piguet");
        assert!(matches!("Seiko".parse::<Brand>(), Err(Error::UnknownBrand(_))));
    }

    #[test]
    fn test_brand_serde_uses_label() {
        let json = serde_json::to_string(&Brand::PatekPhilippe).unwrap();
        assert_eq!(json, "\"Patek Philippe\"");
        let brand: Brand = serde_json::from_str("\"Omega\"").unwrap();
        assert_eq!(brand, Brand::Omega);
    }
}
