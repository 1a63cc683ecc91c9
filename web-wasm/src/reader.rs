//! FileReader による data URL 読込

use appraisal_common::{Error, Result};
use futures::channel::oneshot;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{File, FileList, FileReader, ProgressEvent};

type Sender = Rc<RefCell<Option<oneshot::Sender<std::result::Result<String, String>>>>>;

fn decode_error(file_name: &str, reason: impl Into<String>) -> Error {
    Error::Decode {
        file_name: file_name.to_string(),
        reason: reason.into(),
    }
}

/// FileListをVecに取り出す（選択順）
///
/// 入力の value をクリアする前に呼ぶ。内容による選別はしない。
pub fn collect_files(files: Option<FileList>) -> Vec<File> {
    let Some(files) = files else {
        return Vec::new();
    };

    (0..files.length()).filter_map(|i| files.get(i)).collect()
}

/// 1ファイルを data URL として読み込む
///
/// onload / onerror のどちらかで必ず完了する。
pub async fn read_as_data_url(file: File) -> Result<String> {
    let file_name = file.name();
    let reader = FileReader::new().map_err(|e| decode_error(&file_name, format!("{:?}", e)))?;

    let (tx, rx) = oneshot::channel();
    let tx: Sender = Rc::new(RefCell::new(Some(tx)));

    let onload = {
        let tx = tx.clone();
        let reader = reader.clone();
        Closure::<dyn FnMut(ProgressEvent)>::new(move |_| {
            let result = reader
                .result()
                .ok()
                .and_then(|value| value.as_string())
                .ok_or_else(|| "読込結果が文字列ではありません".to_string());
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(result);
            }
        })
    };

    let onerror = {
        let tx = tx.clone();
        let reader = reader.clone();
        Closure::<dyn FnMut(ProgressEvent)>::new(move |_| {
            let reason = reader
                .error()
                .map(|e| format!("{}: {}", e.name(), e.message()))
                .unwrap_or_else(|| "FileReader error".to_string());
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(Err(reason));
            }
        })
    };

    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    reader
        .read_as_data_url(&file)
        .map_err(|e| decode_error(&file_name, format!("{:?}", e)))?;

    let result = rx
        .await
        .map_err(|_| decode_error(&file_name, "読込が中断されました"))?
        .map_err(|reason| decode_error(&file_name, reason));

    reader.set_onload(None);
    reader.set_onerror(None);
    result
}
