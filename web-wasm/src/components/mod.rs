pub mod header;
pub mod photo_gallery;
pub mod basic_info;
pub mod choice_group;
pub mod judgment_section;
pub mod notes_section;
pub mod footer_actions;

use leptos::prelude::*;
use appraisal_common::{AppraisalForm, ScalarField};

/// テキスト系フィールドの更新。失敗はログに残し、フォームは変更しない
pub(crate) fn set_field(form: RwSignal<AppraisalForm>, field: ScalarField, value: String) {
    form.update(|f| {
        if let Err(e) = f.update_field(field, value) {
            tracing::warn!(error = %e, ?field, "入力を反映できません");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use appraisal_common::Brand;

    #[test]
    fn test_set_field_updates_notes() {
        let form = RwSignal::new(AppraisalForm::default());
        set_field(form, ScalarField::Notes, "錶殼有輕微刮痕".to_string());
        assert_eq!(form.with_untracked(|f| f.notes.clone()), "錶殼有輕微刮痕");
    }

    #[test]
    fn test_set_field_rejects_unknown_brand() {
        let form = RwSignal::new(AppraisalForm::default());
        set_field(form, ScalarField::Brand, "Omega".to_string());
        let before = form.get_untracked();

        set_field(form, ScalarField::Brand, "Seiko".to_string());
        assert_eq!(form.get_untracked(), before);
        assert_eq!(form.with_untracked(|f| f.brand), Brand::Omega);
    }
}
