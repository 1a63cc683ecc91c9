//! 提出処理
//!
//! 送信先は存在しない。検証に通ったレコードをJSON化して返すだけ。

use crate::error::{Error, Result};
use crate::types::AppraisalForm;

/// 未入力時のブロッキングメッセージ
pub const INCOMPLETE_MESSAGE: &str = "請填寫所有鑑定選項後再提交";
/// 提出成功メッセージ
pub const SUCCESS_MESSAGE: &str = "提交成功！";

/// 提出内容
#[derive(Debug, Clone)]
pub struct Submission {
    pub json: String,
    pub message: &'static str,
}

/// 提出前の検証とJSON化。未入力があればフォームには触れずにエラー
pub fn prepare_submission(form: &AppraisalForm) -> Result<Submission> {
    let missing = form.missing_fields();
    if !missing.is_empty() {
        return Err(Error::Incomplete { missing });
    }

    Ok(Submission {
        json: serde_json::to_string_pretty(form)?,
        message: SUCCESS_MESSAGE,
    })
}

/// 「保存」ボタン用のスナップショット（永続化はしない）
pub fn draft_snapshot(form: &AppraisalForm) -> Result<String> {
    Ok(serde_json::to_string(form)?)
}

/// エラーを画面表示用メッセージに変換
pub fn user_message(error: &Error) -> String {
    match error {
        Error::Incomplete { .. } => INCOMPLETE_MESSAGE.to_string(),
        other => other.to_string(),
    }
}
