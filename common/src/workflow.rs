//! アップロード → 判定のワークフロー（状態機械）
//!
//! I/Oは行わない。プレビュー生成とHTTP送信の2か所の非同期待ちをチケットで表し、
//! ブラウザのイベントループからもtokioからも同じ状態遷移を駆動できるようにする。
//!
//! ```text
//! Idle → FileSelected → Submitting → Succeeded / Failed
//!                 ↑__________________________|  (ファイルは選択されたまま再送信可)
//! ```

use crate::error::{PredictionError, PreviewError, SelectError, SubmitError};
use crate::messages;
use crate::types::{FileLike, PredictionResult};
use tracing::{debug, error, info, warn};

/// 予測サービスのクライアント
///
/// CLIはreqwest、Webはfetchで実装する。
#[allow(async_fn_in_trait)]
pub trait PredictionClient<F> {
    async fn predict(&self, file: &F) -> Result<PredictionResult, PredictionError>;
}

/// UIから読み取る状態
///
/// `error` と `prediction` は同時に埋まらない。
#[derive(Debug, Clone)]
pub struct UploadState<F> {
    pub selected_file: Option<F>,
    pub preview_data_uri: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
    pub prediction: Option<PredictionResult>,
}

impl<F> Default for UploadState<F> {
    fn default() -> Self {
        Self {
            selected_file: None,
            preview_data_uri: None,
            loading: false,
            error: None,
            prediction: None,
        }
    }
}

/// 状態から導出するフェーズ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    FileSelected,
    Submitting,
    Succeeded,
    Failed,
}

/// プレビュー生成待ち
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewTicket {
    pub id: u64,
}

/// 送信待ち（送信するファイルを保持）
#[derive(Debug, Clone)]
pub struct SubmitTicket<F> {
    pub id: u64,
    pub file: F,
}

#[derive(Debug, Clone)]
pub struct UploadWorkflow<F> {
    state: UploadState<F>,
    next_id: u64,
    pending_preview: Option<u64>,
    pending_request: Option<u64>,
}

impl<F> Default for UploadWorkflow<F> {
    fn default() -> Self {
        Self {
            state: UploadState::default(),
            next_id: 1,
            pending_preview: None,
            pending_request: None,
        }
    }
}

impl<F: FileLike + Clone> UploadWorkflow<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &UploadState<F> {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        let state = &self.state;
        if state.loading {
            Phase::Submitting
        } else if state.prediction.is_some() {
            Phase::Succeeded
        } else if state.selected_file.is_none() {
            Phase::Idle
        } else if state.error.is_some() {
            Phase::Failed
        } else {
            Phase::FileSelected
        }
    }

    /// 送信ボタンを有効にできるか
    pub fn can_submit(&self) -> bool {
        self.state.selected_file.is_some() && !self.state.loading
    }

    /// ファイル選択
    ///
    /// 画像以外は拒否し、選択中のファイルは変更しない。
    /// 受け付けた場合は送信中のリクエストを破棄し、プレビュー生成のチケットを返す。
    pub fn select_file(&mut self, file: F) -> Result<PreviewTicket, SelectError> {
        self.clear_feedback();

        if !file.is_image() {
            let mime_type = file.mime_type();
            debug!(file = %file.name(), mime_type = %mime_type, "rejected non-image file");
            self.state.error = Some(messages::SELECT_IMAGE_FILE.to_string());
            return Err(SelectError::NotAnImage { mime_type });
        }

        if self.pending_request.take().is_some() {
            debug!("new file selected while a request was in flight; its response will be discarded");
            self.state.loading = false;
        }

        debug!(file = %file.name(), size = file.size(), "file selected");
        self.state.selected_file = Some(file);
        self.state.preview_data_uri = None;

        let id = self.allocate_id();
        self.pending_preview = Some(id);
        Ok(PreviewTicket { id })
    }

    /// ファイル選択がキャンセルされた場合（エラーと結果のみ消す）
    pub fn clear_feedback(&mut self) {
        self.state.error = None;
        self.state.prediction = None;
    }

    /// プレビュー生成の完了
    ///
    /// 失敗時は選択を解除してエラーを表示し、送信中のリクエストも破棄する。
    /// 古いチケットは無視し `false` を返す。
    pub fn finish_preview(
        &mut self,
        ticket: PreviewTicket,
        result: Result<String, PreviewError>,
    ) -> bool {
        if self.pending_preview != Some(ticket.id) {
            debug!(ticket = ticket.id, "discarding stale preview");
            return false;
        }
        self.pending_preview = None;

        match result {
            Ok(data_uri) => {
                self.state.preview_data_uri = Some(data_uri);
            }
            Err(e) => {
                warn!(error = %e, "failed to generate preview");
                if self.pending_request.take().is_some() {
                    debug!("preview failed while a request was in flight; its response will be discarded");
                    self.state.loading = false;
                }
                self.state.selected_file = None;
                self.state.preview_data_uri = None;
                self.state.prediction = None;
                self.state.error = Some(messages::PREVIEW_FAILED.to_string());
            }
        }
        true
    }

    /// 送信開始
    ///
    /// 送信中は `InFlight` を返し状態を変更しない。ファイル未選択時はエラーを表示する。
    pub fn begin_submit(&mut self) -> Result<SubmitTicket<F>, SubmitError> {
        if self.state.loading {
            debug!("submit ignored: request already in flight");
            return Err(SubmitError::InFlight);
        }

        let Some(file) = self.state.selected_file.clone() else {
            self.state.error = Some(messages::SELECT_IMAGE_FIRST.to_string());
            return Err(SubmitError::NoFileSelected);
        };

        self.state.loading = true;
        self.state.error = None;
        self.state.prediction = None;

        let id = self.allocate_id();
        self.pending_request = Some(id);
        debug!(request = id, file = %file.name(), "submitting image");
        Ok(SubmitTicket { id, file })
    }

    /// 送信完了
    ///
    /// 現在のリクエストであれば成否にかかわらず `loading` を戻す。
    /// 置き換えられたリクエストの応答は捨てて `false` を返す。
    pub fn finish_submit(
        &mut self,
        request_id: u64,
        outcome: Result<PredictionResult, PredictionError>,
    ) -> bool {
        if self.pending_request != Some(request_id) {
            debug!(request = request_id, "discarding response for superseded request");
            return false;
        }
        self.pending_request = None;
        self.state.loading = false;

        match outcome {
            Ok(prediction) => {
                info!(
                    label = %prediction.label,
                    confidence = prediction.confidence,
                    "prediction received"
                );
                self.state.error = None;
                self.state.prediction = Some(prediction);
            }
            Err(e) => {
                error!(error = %e, "prediction request failed");
                self.state.prediction = None;
                self.state.error = Some(messages::PROCESSING_FAILED.to_string());
            }
        }
        true
    }

    /// 送信して応答を待つ
    ///
    /// 通信エラーは `Err` にせず `state().error` に反映する。
    pub async fn submit<C>(&mut self, client: &C) -> Result<(), SubmitError>
    where
        C: PredictionClient<F>,
    {
        let ticket = self.begin_submit()?;
        let outcome = client.predict(&ticket.file).await;
        self.finish_submit(ticket.id, outcome);
        Ok(())
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
