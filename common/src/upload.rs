//! 写真のバッチ読込
//!
//! ファイルごとにデコードを同時に開始し、全件完了を待ってから
//! 選択順のまま結果を返す。読込に失敗したファイルはスキップする。
//! 内容（MIMEタイプ）による選別はしない。

use crate::data_url::DataUrl;
use crate::error::{Error, Result};
use futures::future::join_all;
use std::future::Future;

/// バッチ読込の結果
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// 成功した写真（選択順）
    pub photos: Vec<String>,
    /// 失敗したファイル
    pub failures: Vec<Error>,
}

impl BatchOutcome {
    pub fn skipped(&self) -> usize {
        self.failures.len()
    }
}

pub async fn decode_batch<I, F, Fut>(files: I, decode: F) -> BatchOutcome
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future<Output = Result<String>>,
{
    let results = join_all(files.into_iter().map(decode)).await;

    let mut outcome = BatchOutcome::default();
    for result in results {
        // FileReaderの結果がdata URLかどうかのヘッダ確認のみ
        let checked = result.and_then(|url| {
            DataUrl::parse(&url)?;
            Ok(url)
        });
        match checked {
            Ok(url) => outcome.photos.push(url),
            Err(e) => outcome.failures.push(e),
        }
    }
    outcome
}
