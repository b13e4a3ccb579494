use actix_web::http::StatusCode;
use shared::ErrorKind;
use std::sync::Arc;

use crate::capture::upload::ChartUpload;
use crate::imaging::png_encoder::{ImageError, encode_chart_png};
use crate::inference::client::{InferenceClient, InferenceError};
use crate::prompt::builder::{build_chart_payload, build_metar_payload};

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("{0}")]
    InputMissing(&'static str),
    #[error("Malformed request: {0}")]
    MalformedRequest(String),
    #[error("Malformed upload: {0}")]
    MalformedUpload(String),
    #[error("Unsupported file type '{0}'. Upload a PNG or JPEG image.")]
    UnsupportedFileType(String),
    #[error("Upload exceeds the {limit} byte limit")]
    PayloadTooLarge { limit: usize },
    #[error(transparent)]
    ImageDecode(#[from] ImageError),
    #[error(transparent)]
    RemoteInvocation(#[from] InferenceError),
}

impl AnalysisError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AnalysisError::InputMissing(_) => ErrorKind::InputMissing,
            AnalysisError::MalformedRequest(_) => ErrorKind::MalformedRequest,
            AnalysisError::MalformedUpload(_) => ErrorKind::MalformedUpload,
            AnalysisError::UnsupportedFileType(_) => ErrorKind::UnsupportedFileType,
            AnalysisError::PayloadTooLarge { .. } => ErrorKind::PayloadTooLarge,
            AnalysisError::ImageDecode(_) => ErrorKind::ImageDecode,
            AnalysisError::RemoteInvocation(_) => ErrorKind::RemoteInvocation,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AnalysisError::InputMissing(_)
            | AnalysisError::MalformedRequest(_)
            | AnalysisError::MalformedUpload(_) => StatusCode::BAD_REQUEST,
            AnalysisError::UnsupportedFileType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AnalysisError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            AnalysisError::ImageDecode(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AnalysisError::RemoteInvocation(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Message safe to show in the browser. Remote failures are not
    /// differentiated; the cause only goes to the log.
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::RemoteInvocation(_) => {
                "The inference service could not complete the request. Please try again.".into()
            }
            other => other.to_string(),
        }
    }
}

/// Runs one tool action: build the payload, call the model once, hand back
/// the text.
#[derive(Clone)]
pub struct AnalysisService {
    client: Arc<dyn InferenceClient>,
}

impl AnalysisService {
    pub fn new(client: Arc<dyn InferenceClient>) -> Self {
        Self { client }
    }

    pub fn model_id(&self) -> &str {
        self.client.model_id()
    }

    /// An empty report is rejected without contacting the model. Any other
    /// string, whitespace included, is forwarded as typed.
    pub async fn decode_report(&self, report: &str) -> Result<String, AnalysisError> {
        if report.is_empty() {
            return Err(AnalysisError::InputMissing(
                "Please enter a METAR or TAF string to decode.",
            ));
        }

        let payload = build_metar_payload(report);
        let text = self.client.invoke(&payload).await?;
        Ok(text)
    }

    pub async fn analyze_chart(&self, upload: ChartUpload) -> Result<String, AnalysisError> {
        let ChartUpload {
            bytes, media_type, ..
        } = upload;

        let chart = tokio::task::spawn_blocking(move || encode_chart_png(&bytes))
            .await
            .map_err(|e| ImageError::Worker(e.to_string()))??;

        log::info!(
            "Chart decoded from {}: {}x{} px, {} byte PNG",
            media_type,
            chart.width,
            chart.height,
            chart.png_len
        );

        let payload = build_chart_payload(&chart);
        let text = self.client.invoke(&payload).await?;
        Ok(text)
    }
}
