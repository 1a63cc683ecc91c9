//! 鑑定項目セクション（結論・状態・性能）

use leptos::prelude::*;
use appraisal_common::{AppraisalForm, Group};
use crate::components::choice_group::ChoiceGroup;

#[component]
pub fn JudgmentSection(group: Group, form: RwSignal<AppraisalForm>) -> impl IntoView {
    let choices = group
        .fields()
        .map(|field| {
            let value = Signal::derive(move || form.with(|f| f.sub_field(field).to_string()));
            let on_change = move |choice: String| {
                form.update(|f| {
                    if let Err(e) = f.update_sub_field(field, choice) {
                        tracing::warn!(error = %e, "選択肢を反映できません");
                    }
                });
            };
            view! {
                <ChoiceGroup
                    label=field.label()
                    options=field.options()
                    value=value
                    on_change=on_change
                    border_top=field.separated()
                />
            }
        })
        .collect_view();

    view! {
        <section class="card">
            <h2 class="section-title">{group.title()}</h2>
            {choices}
        </section>
    }
}
