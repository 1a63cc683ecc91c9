//! 画面下部のアクションボタン

use leptos::prelude::*;
use appraisal_common::{AppraisalForm, JudgmentField};

#[component]
pub fn FooterActions<FS, FD>(
    form: RwSignal<AppraisalForm>,
    on_save: FD,
    on_submit: FS,
) -> impl IntoView
where
    FS: Fn(()) + 'static + Clone + Send + Sync,
    FD: Fn(()) + 'static + Clone + Send + Sync,
{
    let is_valid = move || form.with(AppraisalForm::is_form_valid);
    let progress = move || {
        format!(
            "已完成 {}/{}",
            form.with(AppraisalForm::answered_count),
            JudgmentField::ALL.len()
        )
    };

    view! {
        <div class="footer-actions">
            <p class="footer-progress">{progress}</p>
            <div class="footer-buttons">
                <button
                    type="button"
                    class="btn btn-secondary"
                    on:click=move |_| on_save(())
                >
                    "保存"
                </button>
                // 未完了でも押せる（ブロッキングメッセージを出すため）
                <button
                    type="button"
                    class="btn btn-primary btn-submit"
                    class:inactive=move || !is_valid()
                    on:click=move |_| on_submit(())
                >
                    "提交鑑定結果"
                </button>
            </div>
        </div>
    }
}
