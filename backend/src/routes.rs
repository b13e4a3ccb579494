use actix_files::Files;
use actix_multipart::Multipart;
use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{HttpRequest, HttpResponse, web};
use log::{error, info, warn};
use shared::{AnalysisResult, DecodeRequest, ErrorResponse, HealthResponse, ToolKind};
use uuid::Uuid;

use crate::analysis::analysis_service::{AnalysisError, AnalysisService};
use crate::capture::upload::read_chart_upload;
use crate::config::AppConfig;

pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error))
        .service(web::resource("/api/metar/decode").route(web::post().to(decode_metar)))
        .service(web::resource("/api/chart/analyze").route(web::post().to(analyze_chart)))
        .service(web::resource("/api/health").route(web::get().to(health)));
}

pub fn configure_routes(cfg: &mut web::ServiceConfig, frontend_dir: String) {
    configure_api(cfg);
    cfg.service(Files::new("/", frontend_dir).index_file("index.html"));
}

async fn decode_metar(
    service: web::Data<AnalysisService>,
    request: web::Json<DecodeRequest>,
) -> HttpResponse {
    let request_id = Uuid::new_v4();
    let report = request.into_inner().report;
    info!(
        "[{}] METAR/TAF decode requested ({} chars)",
        request_id,
        report.chars().count()
    );

    match service.decode_report(&report).await {
        Ok(text) => {
            info!("[{}] Decoded explanation: {} chars", request_id, text.len());
            HttpResponse::Ok().json(AnalysisResult {
                tool: ToolKind::MetarTaf,
                text,
            })
        }
        Err(e) => error_response(request_id, &e),
    }
}

async fn analyze_chart(
    service: web::Data<AnalysisService>,
    config: web::Data<AppConfig>,
    payload: Multipart,
) -> HttpResponse {
    let request_id = Uuid::new_v4();

    let upload = match read_chart_upload(payload, config.max_upload_bytes).await {
        Ok(upload) => upload,
        Err(e) => return error_response(request_id, &e),
    };
    info!(
        "[{}] Chart analysis requested: {} ({}, {} bytes)",
        request_id,
        upload.file_name.as_deref().unwrap_or("unnamed"),
        upload.media_type,
        upload.bytes.len()
    );

    match service.analyze_chart(upload).await {
        Ok(text) => {
            info!("[{}] Chart analysis: {} chars", request_id, text.len());
            HttpResponse::Ok().json(AnalysisResult {
                tool: ToolKind::SectionalChart,
                text,
            })
        }
        Err(e) => error_response(request_id, &e),
    }
}

async fn health(service: web::Data<AnalysisService>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".into(),
        model_id: service.model_id().to_string(),
    })
}

fn json_error(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let request_id = Uuid::new_v4();
    let rejection = AnalysisError::MalformedRequest(err.to_string());
    warn!("[{}] Unreadable JSON body on {}", request_id, req.path());
    InternalError::from_response(err, error_response(request_id, &rejection)).into()
}

fn error_response(request_id: Uuid, err: &AnalysisError) -> HttpResponse {
    match err {
        AnalysisError::RemoteInvocation(cause) => {
            error!("[{}] Model invocation failed: {}", request_id, cause)
        }
        AnalysisError::ImageDecode(cause) => {
            error!("[{}] Chart image rejected: {}", request_id, cause)
        }
        other => warn!("[{}] Request rejected: {}", request_id, other),
    }

    HttpResponse::build(err.status()).json(ErrorResponse {
        kind: err.kind(),
        error: err.user_message(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::png_encoder::tests::sample_chart;
    use crate::inference::testing::{FakeInferenceClient, Reply};
    use actix_web::http::{StatusCode, header};
    use actix_web::{App, test};
    use image::ImageFormat;
    use shared::ErrorKind;
    use std::sync::Arc;

    const BOUNDARY: &str = "----chartboundary7MA4YWxk";

    fn test_config(max_upload_bytes: usize) -> AppConfig {
        AppConfig {
            port: 0,
            model_id: "fake-model".into(),
            frontend_dir: "dist".into(),
            max_upload_bytes,
        }
    }

    fn multipart_body(field: &str, file_name: &str, content_type: &str, bytes: &[u8]) -> Vec<u8> {
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                field, file_name
            )
            .as_bytes(),
        );
        body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", content_type).as_bytes());
        body.extend_from_slice(bytes);
        body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());
        body
    }

    fn chart_request(body: Vec<u8>) -> test::TestRequest {
        test::TestRequest::post()
            .uri("/api/chart/analyze")
            .insert_header((
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", BOUNDARY),
            ))
            .set_payload(body)
    }

    macro_rules! app_with {
        ($fake:expr, $limit:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(AnalysisService::new($fake.clone())))
                    .app_data(web::Data::new(test_config($limit)))
                    .configure(configure_api),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn decode_returns_model_text_exactly() {
        let fake = Arc::new(FakeInferenceClient::replying("DECODED"));
        let app = app_with!(fake, 1024);

        let req = test::TestRequest::post()
            .uri("/api/metar/decode")
            .set_json(DecodeRequest {
                report: "KJFK 121851Z 27015G25KT 10SM FEW050 22/11 A2992".into(),
            })
            .to_request();
        let result: AnalysisResult = test::call_and_read_body_json(&app, req).await;

        assert_eq!(result.text, "DECODED");
        assert_eq!(result.tool, ToolKind::MetarTaf);
        assert_eq!(fake.call_count(), 1);
    }

    #[actix_web::test]
    async fn empty_report_is_a_warning_without_a_remote_call() {
        let fake = Arc::new(FakeInferenceClient::replying("unused"));
        let app = app_with!(fake, 1024);

        let req = test::TestRequest::post()
            .uri("/api/metar/decode")
            .set_json(DecodeRequest {
                report: String::new(),
            })
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.kind, ErrorKind::InputMissing);
        assert_eq!(body.error, "Please enter a METAR or TAF string to decode.");
        assert_eq!(fake.call_count(), 0);
    }

    #[actix_web::test]
    async fn report_body_without_report_field_gets_error_json() {
        let fake = Arc::new(FakeInferenceClient::replying("unused"));
        let app = app_with!(fake, 1024);

        let req = test::TestRequest::post()
            .uri("/api/metar/decode")
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload("{}")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.kind, ErrorKind::MalformedRequest);
        assert!(body.error.contains("report"));
        assert_eq!(fake.call_count(), 0);
    }

    #[actix_web::test]
    async fn non_json_report_body_gets_error_json() {
        let fake = Arc::new(FakeInferenceClient::replying("unused"));
        let app = app_with!(fake, 1024);

        let req = test::TestRequest::post()
            .uri("/api/metar/decode")
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload("KJFK 121851Z")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.kind, ErrorKind::MalformedRequest);
        assert_eq!(fake.call_count(), 0);
    }

    #[actix_web::test]
    async fn remote_failure_leaves_the_server_serving() {
        let fake = Arc::new(FakeInferenceClient::with_reply(Reply::Transport));
        let app = app_with!(fake, 1024);

        let req = test::TestRequest::post()
            .uri("/api/metar/decode")
            .set_json(DecodeRequest {
                report: "KSEA 121853Z 18005KT".into(),
            })
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.kind, ErrorKind::RemoteInvocation);
        assert!(!body.error.contains("connection reset"));

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn malformed_remote_response_is_a_remote_failure() {
        let fake = Arc::new(FakeInferenceClient::with_reply(Reply::Malformed));
        let app = app_with!(fake, 1024);

        let req = test::TestRequest::post()
            .uri("/api/metar/decode")
            .set_json(DecodeRequest {
                report: "TAF KMSP 121720Z".into(),
            })
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }

    #[actix_web::test]
    async fn chart_upload_returns_analysis() {
        let fake = Arc::new(FakeInferenceClient::replying("Restricted areas: 2"));
        let app = app_with!(fake, 1024 * 1024);

        let png = sample_chart(ImageFormat::Png, 40, 30);
        let req = chart_request(multipart_body("image", "chart.png", "image/png", &png)).to_request();
        let result: AnalysisResult = test::call_and_read_body_json(&app, req).await;

        assert_eq!(result.tool, ToolKind::SectionalChart);
        assert_eq!(result.text, "Restricted areas: 2");
        assert_eq!(fake.call_count(), 1);
    }

    #[actix_web::test]
    async fn unsupported_upload_is_rejected_before_the_builder() {
        let fake = Arc::new(FakeInferenceClient::replying("unused"));
        let app = app_with!(fake, 1024 * 1024);

        let req = chart_request(multipart_body(
            "image",
            "briefing.pdf",
            "application/pdf",
            b"%PDF-1.7",
        ))
        .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.kind, ErrorKind::UnsupportedFileType);
        assert_eq!(fake.call_count(), 0);
    }

    #[actix_web::test]
    async fn unreadable_image_is_surfaced() {
        let fake = Arc::new(FakeInferenceClient::replying("unused"));
        let app = app_with!(fake, 1024 * 1024);

        let req = chart_request(multipart_body(
            "image",
            "chart.jpg",
            "image/jpeg",
            b"\xff\xd8\xff\xe0 truncated jpeg",
        ))
        .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.kind, ErrorKind::ImageDecode);
        assert_eq!(fake.call_count(), 0);
    }

    #[actix_web::test]
    async fn missing_image_field_is_input_missing() {
        let fake = Arc::new(FakeInferenceClient::replying("unused"));
        let app = app_with!(fake, 1024 * 1024);

        let png = sample_chart(ImageFormat::Png, 8, 8);
        let req =
            chart_request(multipart_body("attachment", "chart.png", "image/png", &png)).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.kind, ErrorKind::InputMissing);
        assert_eq!(fake.call_count(), 0);
    }

    #[actix_web::test]
    async fn oversized_upload_is_rejected() {
        let fake = Arc::new(FakeInferenceClient::replying("unused"));
        let app = app_with!(fake, 64);

        let png = sample_chart(ImageFormat::Png, 64, 64);
        assert!(png.len() > 64);
        let req = chart_request(multipart_body("image", "chart.png", "image/png", &png)).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(fake.call_count(), 0);
    }

    #[actix_web::test]
    async fn health_reports_model_id() {
        let fake = Arc::new(FakeInferenceClient::replying("unused"));
        let app = app_with!(fake, 1024);

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let health: HealthResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(health.status, "ok");
        assert_eq!(health.model_id, "fake-model");
    }
}
