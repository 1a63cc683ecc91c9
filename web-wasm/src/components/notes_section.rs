//! 鑑定附註コンポーネント

use leptos::prelude::*;
use appraisal_common::{AppraisalForm, ScalarField, QUICK_TAGS};
use super::set_field;

#[component]
pub fn NotesSection(form: RwSignal<AppraisalForm>) -> impl IntoView {
    let tags = QUICK_TAGS
        .into_iter()
        .map(|tag| {
            view! {
                <button
                    type="button"
                    class="tag"
                    on:click=move |_| form.update(|f| f.append_note_tag(tag))
                >
                    {tag}
                </button>
            }
        })
        .collect_view();

    view! {
        <section class="card">
            <h2 class="section-title">"鑑定附註"</h2>
            <textarea
                class="notes"
                rows="4"
                placeholder="請輸入補充描述..."
                prop:value=move || form.with(|f| f.notes.clone())
                on:input=move |ev| set_field(form, ScalarField::Notes, event_target_value(&ev))
            />
            <div class="tag-row">{tags}</div>
        </section>
    }
}
