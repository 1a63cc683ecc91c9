//! 写真ギャラリーコンポーネント
//!
//! サムネイルのドラッグで並べ替え、×で削除、末尾のタイルから一括アップロード。

use leptos::prelude::*;
use leptos::ev::{DragEvent, Event, MouseEvent};
use appraisal_common::{AppraisalForm, DragTracker};

#[component]
pub fn PhotoGallery<FU>(
    form: RwSignal<AppraisalForm>,
    drag: StoredValue<DragTracker>,
    on_upload: FU,
) -> impl IntoView
where
    FU: Fn(Event) + 'static + Clone + Send + Sync,
{
    // 写真リストの変更時のみ再描画（写真本体は複製しない）
    let revision = Memo::new(move |_| form.with(|f| f.photo_revision()));
    let photo_count = move || {
        revision.track();
        form.with_untracked(|f| f.photos.len())
    };

    let thumbnails = move || {
        revision.track();
        form.with_untracked(|f| {
            f.photos
                .iter()
                .cloned()
                .enumerate()
                .map(|(index, data_url)| view! { <PhotoThumb index=index data_url=data_url form=form drag=drag /> })
                .collect_view()
        })
    };

    view! {
        <section class="card">
            <div class="gallery-header">
                <h2 class="gallery-title">"📷 手錶照片紀錄"</h2>
                <span class="text-muted">{move || format!("{} 張照片", photo_count())}</span>
            </div>

            <div class="photo-grid">
                {thumbnails}

                <label class="photo-upload">
                    <input
                        type="file"
                        multiple
                        accept="image/*"
                        class="hidden"
                        on:change=move |ev| on_upload(ev)
                    />
                    <span class="upload-icon">"＋"</span>
                    <span class="upload-label">"批量上傳"</span>
                </label>
            </div>
            <p class="gallery-hint">"提示：長按圖片可拖動調整排序"</p>
        </section>
    }
}

#[component]
fn PhotoThumb(
    index: usize,
    data_url: String,
    form: RwSignal<AppraisalForm>,
    drag: StoredValue<DragTracker>,
) -> impl IntoView {
    let on_dragend = move |_: DragEvent| {
        let mut tracker = drag.get_value();
        let mut moved = None;
        form.maybe_update(|f| {
            let from = tracker.dragged();
            let to = tracker.over();
            let sorted = f.handle_sort(&mut tracker);
            if sorted {
                moved = from.zip(to);
            }
            sorted
        });
        drag.set_value(tracker);
        if let Some((from, to)) = moved {
            tracing::debug!(from, to, "写真を並べ替え");
        }
    };

    let on_remove = move |_: MouseEvent| {
        form.update(|f| match f.remove_photo(index) {
            Ok(_) => tracing::debug!(index, "写真を削除"),
            Err(e) => tracing::warn!(error = %e, "写真を削除できません"),
        });
    };

    view! {
        <div
            class="photo-thumb"
            draggable="true"
            on:dragstart=move |_| {
                drag.update_value(|d| d.start(index));
            }
            on:dragenter=move |_| {
                drag.update_value(|d| d.enter(index));
            }
            on:dragover=move |ev| ev.prevent_default()
            on:dragend=on_dragend
        >
            <img src=data_url alt=format!("Watch {}", index) />
            <button type="button" class="photo-remove" on:click=on_remove>"×"</button>
            <div class="photo-index">{index + 1}</div>
        </div>
    }
}
