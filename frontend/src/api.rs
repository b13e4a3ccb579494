use gloo_file::File as GlooFile;
use gloo_net::http::{Request, Response};
use shared::{AnalysisResult, CHART_FIELD_NAME, DecodeRequest, ErrorResponse};

pub async fn decode_report(report: &str) -> Result<AnalysisResult, String> {
    let request = Request::post("/api/metar/decode")
        .json(&DecodeRequest {
            report: report.to_string(),
        })
        .map_err(|e| format!("Failed to build request: {}", e))?;

    let response = request
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;
    read_result(response).await
}

pub async fn analyze_chart(file: &GlooFile) -> Result<AnalysisResult, String> {
    let form_data =
        web_sys::FormData::new().map_err(|_| "Failed to build upload form.".to_string())?;
    form_data
        .append_with_blob_and_filename(CHART_FIELD_NAME, file.as_ref(), &file.name())
        .map_err(|_| "Failed to attach chart image.".to_string())?;

    let request = Request::post("/api/chart/analyze")
        .body(form_data)
        .map_err(|e| format!("Failed to build request: {}", e))?;

    let response = request
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;
    read_result(response).await
}

async fn read_result(response: Response) -> Result<AnalysisResult, String> {
    if response.ok() {
        return response
            .json::<AnalysisResult>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e));
    }

    let status = response.status();
    match response.json::<ErrorResponse>().await {
        Ok(body) => Err(body.error),
        Err(_) => Err(format!("Server error: {}", status)),
    }
}
