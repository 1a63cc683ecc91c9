//! メインアプリケーションコンポーネント
//!
//! フォームレコードは1つの RwSignal に集約し、各セクションへ渡す。
//! ドラッグ中の一時状態は StoredValue（再描画に関与しない）。

use leptos::prelude::*;
use leptos::ev::Event;
use web_sys::HtmlInputElement;
use appraisal_common::{
    decode_batch, draft_snapshot, prepare_submission, user_message, AppraisalForm, DragTracker,
    FormPreset, Group,
};
use crate::components::{
    header::Header,
    photo_gallery::PhotoGallery,
    basic_info::BasicInfo,
    judgment_section::JudgmentSection,
    notes_section::NotesSection,
    footer_actions::FooterActions,
};
use crate::reader::{collect_files, read_as_data_url};

/// URLクエリ `?preset=` から初期フォームを作る
fn initial_form() -> AppraisalForm {
    let name = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .and_then(|search| web_sys::UrlSearchParams::new_with_str(&search).ok())
        .and_then(|params| params.get("preset"));

    let preset = match name.as_deref() {
        Some(name) => FormPreset::from_preset(name).unwrap_or_else(|| {
            tracing::warn!(preset = name, "未知のプリセット、demoを使用");
            FormPreset::demo()
        }),
        None => FormPreset::demo(),
    };
    preset.into_form()
}

/// 一括アップロード
///
/// 入力の選択は即座にクリアし、同じファイルを再選択できるようにする。
/// バッチ全件の読込完了後に選択順で追加する。
fn handle_batch_upload(ev: Event, form: RwSignal<AppraisalForm>) {
    let input: HtmlInputElement = event_target(&ev);
    let files = collect_files(input.files());
    input.set_value("");

    if files.is_empty() {
        return;
    }
    tracing::debug!(count = files.len(), "写真の読込開始");

    wasm_bindgen_futures::spawn_local(async move {
        let outcome = decode_batch(files, read_as_data_url).await;
        let skipped = outcome.skipped();
        for failure in &outcome.failures {
            tracing::warn!(error = %failure, "写真をスキップ");
        }

        let added = outcome.photos.len();
        if added > 0 {
            form.update(|f| f.append_photos(outcome.photos));
        }
        tracing::info!(added, skipped, "写真を追加");

        if skipped > 0 {
            gloo::dialogs::alert(&format!("{} 張照片無法讀取，已略過", skipped));
        }
    });
}

fn handle_save(form: RwSignal<AppraisalForm>) {
    match form.with_untracked(draft_snapshot) {
        Ok(json) => tracing::info!(bytes = json.len(), draft = %json, "下書きスナップショット"),
        Err(e) => tracing::warn!(error = %e, "スナップショット作成失敗"),
    }
}

fn handle_submit(form: RwSignal<AppraisalForm>) {
    let result = form.with_untracked(|record| {
        prepare_submission(record).map(|submission| {
            match serde_wasm_bindgen::to_value(record) {
                Ok(value) => web_sys::console::log_2(&"Submitting form:".into(), &value),
                Err(e) => tracing::warn!(error = %e, "consoleへの出力に失敗"),
            }
            (submission, record.photos.len())
        })
    });

    match result {
        Ok((submission, photos)) => {
            tracing::info!(photos, bytes = submission.json.len(), "鑑定結果を提出");
            gloo::dialogs::alert(submission.message);
        }
        Err(e) => {
            tracing::info!(error = %e, "未入力のため提出を中止");
            gloo::dialogs::alert(&user_message(&e));
        }
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // アプリケーション状態
    let form = RwSignal::new(initial_form());
    let drag = StoredValue::new(DragTracker::new());

    let on_upload = move |ev: Event| handle_batch_upload(ev, form);
    let on_save = move |_| handle_save(form);
    let on_submit = move |_| handle_submit(form);

    view! {
        <div class="page">
            <Header />

            <main class="container">
                <PhotoGallery form=form drag=drag on_upload=on_upload />
                <BasicInfo form=form />
                {Group::ALL
                    .into_iter()
                    .map(|group| view! { <JudgmentSection group=group form=form /> })
                    .collect_view()}
                <NotesSection form=form />
            </main>

            <FooterActions form=form on_save=on_save on_submit=on_submit />
        </div>
    }
}
