//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <nav class="header">
            // 遷移先はない
            <button class="header-back" type="button">
                <span class="header-back-icon">"‹"</span>
                <span>"返回"</span>
            </button>
            <h1>"錄入鑑定報告"</h1>
            <div class="header-spacer"></div>
        </nav>
    }
}
