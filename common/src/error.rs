//! エラー型定義

use crate::vocab::JudgmentField;
use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("未知のブランド: {0}")]
    UnknownBrand(String),

    #[error("{}に無効な選択肢: {}", .field.label(), .value)]
    UnknownOption { field: JudgmentField, value: String },

    #[error("写真インデックスが範囲外: {index} (枚数 {len})")]
    PhotoIndexOutOfRange { index: usize, len: usize },

    #[error("未入力の鑑定項目が{}件あります", .missing.len())]
    Incomplete { missing: Vec<JudgmentField> },

    #[error("不正なdata URL: {0}")]
    InvalidDataUrl(String),

    #[error("{file_name} の読込に失敗: {reason}")]
    Decode { file_name: String, reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_unknown_option() {
        let error = Error::UnknownOption {
            field: JudgmentField::Overall,
            value: "良好".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("整體鑑定結果"));
        assert!(display.contains("良好"));
    }

    #[test]
    fn test_error_display_incomplete() {
        let error = Error::Incomplete {
            missing: vec![JudgmentField::Case, JudgmentField::Dial],
        };
        assert_eq!(format!("{}", error), "未入力の鑑定項目が2件あります");
    }

    #[test]
    fn test_error_display_decode() {
        let error = Error::Decode {
            file_name: "watch.jpg".to_string(),
            reason: "NotReadableError".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("watch.jpg"));
        assert!(display.contains("NotReadableError"));
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::UnknownBrand("Seiko".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("UnknownBrand"));
        assert!(debug.contains("Seiko"));
    }
}
