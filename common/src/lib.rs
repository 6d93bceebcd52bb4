//! Cotton Classifier Common Library
//!
//! CLIとWeb(WASM)で共有される型・アップロードワークフロー・結果表示ロジック

pub mod types;
pub mod disease_info;
pub mod error;
pub mod messages;
pub mod preview;
pub mod render;
pub mod workflow;

pub use types::{FileLike, ImageFile, PredictionResult};
pub use disease_info::{DiseaseInfo, DISEASE_INFO};
pub use error::{PredictionError, PreviewError, SelectError, SubmitError};
pub use preview::{encode_data_uri, split_data_uri};
pub use render::{confidence_tier, is_diseased, lookup_info, render, ConfidenceTier, ResultView, Severity};
pub use workflow::{Phase, PredictionClient, PreviewTicket, SubmitTicket, UploadState, UploadWorkflow};
