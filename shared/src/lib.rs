mod render;

pub use render::render_markdown;

use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumIter, EnumString};

/// Multipart field name carrying the chart image.
pub const CHART_FIELD_NAME: &str = "image";

/// Value for the `accept` attribute of the chart file picker.
pub const CHART_ACCEPT: &str = ".png,.jpg,.jpeg";

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, EnumIter, AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ToolKind {
    MetarTaf,
    SectionalChart,
}

impl ToolKind {
    pub fn title(&self) -> &'static str {
        match self {
            ToolKind::MetarTaf => "METAR/TAF Decoder",
            ToolKind::SectionalChart => "Aviation Sectional Chart Analyzer",
        }
    }

    pub fn result_heading(&self) -> &'static str {
        match self {
            ToolKind::MetarTaf => "Decoded Explanation:",
            ToolKind::SectionalChart => "Analysis Results:",
        }
    }

    pub fn render_style(&self) -> RenderStyle {
        match self {
            ToolKind::MetarTaf => RenderStyle::Markdown,
            ToolKind::SectionalChart => RenderStyle::PlainText,
        }
    }
}

/// How the model text is put on screen. The text itself is never altered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStyle {
    Markdown,
    PlainText,
}

/// Image types accepted by the chart analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum ChartMediaType {
    #[display(fmt = "image/png")]
    Png,
    #[display(fmt = "image/jpeg")]
    Jpeg,
}

impl ChartMediaType {
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime.trim().to_ascii_lowercase().as_str() {
            "image/png" => Some(ChartMediaType::Png),
            "image/jpeg" | "image/jpg" | "image/pjpeg" => Some(ChartMediaType::Jpeg),
            _ => None,
        }
    }

    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let (_, extension) = file_name.rsplit_once('.')?;
        match extension.to_ascii_lowercase().as_str() {
            "png" => Some(ChartMediaType::Png),
            "jpg" | "jpeg" => Some(ChartMediaType::Jpeg),
            _ => None,
        }
    }

    /// Resolves the media type of an upload. A declared MIME type wins; the
    /// file name is only consulted when the browser sent nothing specific.
    pub fn detect(mime: Option<&str>, file_name: Option<&str>) -> Option<Self> {
        match mime.map(str::trim).filter(|m| !m.is_empty()) {
            Some(m) if m.eq_ignore_ascii_case("application/octet-stream") => {
                file_name.and_then(Self::from_file_name)
            }
            Some(m) => Self::from_mime(m),
            None => file_name.and_then(Self::from_file_name),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DecodeRequest {
    pub report: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AnalysisResult {
    pub tool: ToolKind,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InputMissing,
    MalformedRequest,
    MalformedUpload,
    UnsupportedFileType,
    ImageDecode,
    PayloadTooLarge,
    RemoteInvocation,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ErrorResponse {
    pub kind: ErrorKind,
    pub error: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub model_id: String,
}
