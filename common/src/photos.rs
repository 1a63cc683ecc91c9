//! 写真リスト操作とドラッグ並べ替え

use crate::error::{Error, Result};
use crate::types::AppraisalForm;

/// ドラッグ中の一時状態
///
/// dragstart で `start`、dragenter で `enter`、dragend で `finish`。
/// ジェスチャーを跨いで値は残らない。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragTracker {
    dragged: Option<usize>,
    over: Option<usize>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, index: usize) {
        self.dragged = Some(index);
    }

    pub fn enter(&mut self, index: usize) {
        self.over = Some(index);
    }

    pub fn dragged(&self) -> Option<usize> {
        self.dragged
    }

    pub fn over(&self) -> Option<usize> {
        self.over
    }

    /// 両方そろっていれば (from, to) を返す。どちらにせよ状態はクリアされる
    pub fn finish(&mut self) -> Option<(usize, usize)> {
        let from = self.dragged.take();
        let to = self.over.take();
        from.zip(to)
    }
}

impl AppraisalForm {
    /// バッチを末尾に追加（渡された順序のまま）
    pub fn append_photos(&mut self, batch: impl IntoIterator<Item = String>) {
        let len = self.photos.len();
        self.photos.extend(batch);
        if self.photos.len() > len {
            self.bump_photo_revision();
        }
    }

    /// 写真リストが変わるたびに増える値。サムネイルの再構築判定に使う
    pub fn photo_revision(&self) -> u64 {
        self.photo_revision
    }

    fn bump_photo_revision(&mut self) {
        self.photo_revision = self.photo_revision.wrapping_add(1);
    }

    /// 指定位置の写真を削除
    pub fn remove_photo(&mut self, index: usize) -> Result<String> {
        if index >= self.photos.len() {
            return Err(Error::PhotoIndexOutOfRange {
                index,
                len: self.photos.len(),
            });
        }
        let removed = self.photos.remove(index);
        self.bump_photo_revision();
        Ok(removed)
    }

    /// `from` の写真を取り出して `to` に挿入する
    pub fn move_photo(&mut self, from: usize, to: usize) -> Result<()> {
        let len = self.photos.len();
        for index in [from, to] {
            if index >= len {
                return Err(Error::PhotoIndexOutOfRange { index, len });
            }
        }
        let photo = self.photos.remove(from);
        self.photos.insert(to, photo);
        self.bump_photo_revision();
        Ok(())
    }

    /// ドラッグ完了処理。並べ替えたら true
    pub fn handle_sort(&mut self, tracker: &mut DragTracker) -> bool {
        match tracker.finish() {
            Some((from, to)) if from != to => self.move_photo(from, to).is_ok(),
            _ => false,
        }
    }
}
