//! 入力完了判定

use crate::types::AppraisalForm;
use crate::vocab::JudgmentField;

impl AppraisalForm {
    /// 全15項目が回答済みなら true
    pub fn is_form_valid(&self) -> bool {
        JudgmentField::ALL
            .iter()
            .all(|f| !self.sub_field(*f).is_empty())
    }

    /// 未回答の項目（表示順）
    pub fn missing_fields(&self) -> Vec<JudgmentField> {
        JudgmentField::ALL
            .into_iter()
            .filter(|f| self.sub_field(*f).is_empty())
            .collect()
    }

    pub fn answered_count(&self) -> usize {
        JudgmentField::ALL.len() - self.missing_fields().len()
    }
}
