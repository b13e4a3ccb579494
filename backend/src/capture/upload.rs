use actix_multipart::Multipart;
use futures::TryStreamExt;
use shared::{CHART_FIELD_NAME, ChartMediaType};

use crate::analysis::analysis_service::AnalysisError;

/// A chart image as received from the browser.
#[derive(Debug, Clone)]
pub struct ChartUpload {
    pub bytes: Vec<u8>,
    pub media_type: ChartMediaType,
    pub file_name: Option<String>,
}

/// Only PNG and JPEG reach the pipeline.
pub fn require_chart_media_type(
    content_type: Option<&str>,
    file_name: Option<&str>,
) -> Result<ChartMediaType, AnalysisError> {
    ChartMediaType::detect(content_type, file_name).ok_or_else(|| {
        let declared = content_type
            .filter(|m| !m.is_empty())
            .or(file_name)
            .unwrap_or("unknown");
        AnalysisError::UnsupportedFileType(declared.to_string())
    })
}

/// Reads the `image` part of a multipart body. The media type is checked
/// before any bytes are buffered; other parts are skipped.
pub async fn read_chart_upload(
    mut payload: Multipart,
    max_bytes: usize,
) -> Result<ChartUpload, AnalysisError> {
    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|e| AnalysisError::MalformedUpload(e.to_string()))?
    {
        if field.name() != Some(CHART_FIELD_NAME) {
            continue;
        }

        let content_type = field.content_type().map(|mime| mime.essence_str().to_string());
        let file_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_string);
        let media_type = require_chart_media_type(content_type.as_deref(), file_name.as_deref())?;

        let mut bytes = Vec::new();
        while let Some(chunk) = field
            .try_next()
            .await
            .map_err(|e| AnalysisError::MalformedUpload(e.to_string()))?
        {
            if bytes.len() + chunk.len() > max_bytes {
                return Err(AnalysisError::PayloadTooLarge { limit: max_bytes });
            }
            bytes.extend_from_slice(&chunk);
        }

        if bytes.is_empty() {
            return Err(AnalysisError::InputMissing(
                "The uploaded chart image is empty.",
            ));
        }

        return Ok(ChartUpload {
            bytes,
            media_type,
            file_name,
        });
    }

    Err(AnalysisError::InputMissing(
        "Please upload an aviation sectional chart image.",
    ))
}
