//! 選択肢グループコンポーネント
//!
//! 状態を持たない。現在値と一致するボタンを強調し、クリックで on_change を呼ぶ。

use leptos::prelude::*;

#[component]
pub fn ChoiceGroup<F>(
    label: &'static str,
    options: &'static [&'static str],
    #[prop(into)] value: Signal<String>,
    on_change: F,
    #[prop(optional)] border_top: bool,
) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send + Sync,
{
    let buttons = options
        .iter()
        .copied()
        .map(|opt| {
            let on_change = on_change.clone();
            let is_selected = move || value.with(|v| v == opt);
            view! {
                <button
                    type="button"
                    class="choice"
                    class:selected=is_selected
                    on:click=move |_| on_change(opt.to_string())
                >
                    {opt}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="choice-group" class:separated=border_top>
            <p class="choice-label">{label}</p>
            <div class="choice-options">{buttons}</div>
        </div>
    }
}
