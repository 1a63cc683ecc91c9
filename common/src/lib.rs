//! Watch Appraisal Common Library
//!
//! 鑑定レポート入力フォームのデータモデルと操作。
//! ブラウザ非依存で、Web(WASM)側から利用される。

pub mod types;
pub mod vocab;
pub mod error;
pub mod form;
pub mod photos;
pub mod data_url;
pub mod upload;
pub mod validation;
pub mod submit;
pub mod preset;

pub use types::{AppraisalForm, Conclusions, Conditions, Performance};
pub use vocab::{Brand, Group, JudgmentField, QUICK_TAGS};
pub use error::{Error, Result};
pub use form::ScalarField;
pub use photos::DragTracker;
pub use data_url::DataUrl;
pub use upload::{decode_batch, BatchOutcome};
pub use submit::{prepare_submission, draft_snapshot, user_message, Submission};
pub use preset::FormPreset;
