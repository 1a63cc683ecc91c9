//! 入力フローの結合テスト
//!
//! 起動 → 写真追加 → 並べ替え → 鑑定入力 → 提出 の一連の流れを検証

use appraisal_common::{
    decode_batch, prepare_submission, AppraisalForm, DataUrl, DragTracker, Error, FormPreset,
    Group, JudgmentField, ScalarField, QUICK_TAGS,
};
use futures::executor::block_on;

fn photo(name: &str) -> String {
    DataUrl::encode("image/jpeg", name.as_bytes())
}

fn answer_all(form: &mut AppraisalForm) {
    for group in Group::ALL {
        for field in group.fields() {
            form.update_sub_field(field, field.options()[0])
                .expect("語彙内の値は受理される");
        }
    }
}

/// 4枚アップロードして先頭を3番目へ移動
#[test]
fn test_upload_then_reorder() {
    let mut form = FormPreset::demo().into_form();

    let outcome = block_on(decode_batch(["A", "B", "C", "D"], |name| async move { Ok(photo(name)) }));
    assert_eq!(outcome.skipped(), 0);
    form.append_photos(outcome.photos);
    assert_eq!(form.photos.len(), 4);

    let mut tracker = DragTracker::new();
    tracker.start(0);
    tracker.enter(2);
    assert!(form.handle_sort(&mut tracker));

    assert_eq!(form.photos, vec![photo("B"), photo("C"), photo("A"), photo("D")]);
}

/// 2回目のバッチは既存写真の後ろに追加される
#[test]
fn test_second_batch_appends() {
    let mut form = AppraisalForm::default();
    for batch in [vec!["A", "B"], vec!["C"]] {
        let outcome = block_on(decode_batch(batch, |name| async move { Ok(photo(name)) }));
        form.append_photos(outcome.photos);
    }
    assert_eq!(form.photos, vec![photo("A"), photo("B"), photo("C")]);

    form.remove_photo(0).unwrap();
    assert_eq!(form.photos, vec![photo("B"), photo("C")]);
}

/// 未入力のまま提出するとブロックされ、状態は変わらない
#[test]
fn test_submit_blocked_until_complete() {
    let mut form = FormPreset::demo().into_form();
    form.append_photos(vec![photo("A")]);
    form.append_note_tag(QUICK_TAGS[1]);
    let before = form.clone();

    let err = prepare_submission(&form).unwrap_err();
    assert!(matches!(err, Error::Incomplete { .. }));
    assert_eq!(form, before);

    answer_all(&mut form);
    form.update_sub_field(JudgmentField::Waterproof, "").unwrap();
    assert!(prepare_submission(&form).is_err());

    form.update_sub_field(JudgmentField::Waterproof, "不適用").unwrap();
    let submission = prepare_submission(&form).expect("全項目入力済み");
    assert!(submission.json.contains("\"waterproof\": \"不適用\""));
    assert!(submission.json.contains("\"serialNumber\": \"4981R131\""));
}

/// 基本資料と附註の編集
#[test]
fn test_basic_info_and_notes() {
    let mut form = FormPreset::demo().into_form();
    form.update_field(ScalarField::Brand, "Omega").unwrap();
    form.update_field(ScalarField::Notes, "錶殼有細紋").unwrap();
    form.append_note_tag("建議保養");

    assert_eq!(form.brand.label(), "Omega");
    assert_eq!(form.notes, "錶殼有細紋 建議保養");
}
