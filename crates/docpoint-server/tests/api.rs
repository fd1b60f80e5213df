mod common;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use base64::{Engine, engine::general_purpose::STANDARD};
use docpoint_core::{DocumentExtractor, Recognizer, SuffixRecognizer};
use docpoint_server::{AppState, app};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tower::ServiceExt;

use common::{broken_font_pdf, build_pdf, invoice_pdf};

fn test_app() -> Router {
    let extractor = DocumentExtractor::new(Recognizer::new(SuffixRecognizer::new()));
    app(AppState::new(extractor), 10 * 1024 * 1024)
}

async fn post_json(path: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_health() {
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], br#"{"status":"ok"}"#);
}

#[tokio::test]
async fn test_extract_invoice_fields() {
    let (status, body) = post_json(
        "/extract",
        json!({
            "pdf_base64": STANDARD.encode(invoice_pdf()),
            "data_points": ["Invoice Number", "due date", "total amount", "client"],
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "results": {
                "Invoice Number": "INV-2024-001",
                "due date": "2024-03-15",
                "total amount": "$1,234.56",
                "client": "Acme Corp",
            }
        })
    );

    let keys: Vec<&String> = body["results"].as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["Invoice Number", "due date", "total amount", "client"]);
}

#[tokio::test]
async fn test_extract_empty_data_points() {
    let (status, body) = post_json(
        "/extract",
        json!({"pdf_base64": STANDARD.encode(invoice_pdf()), "data_points": []}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"results": {}}));
}

#[tokio::test]
async fn test_extract_invalid_base64() {
    let (status, body) = post_json(
        "/extract",
        json!({"pdf_base64": "not-base64!!", "data_points": ["total"]}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"detail": "Invalid base64-encoded PDF."}));
}

#[tokio::test]
async fn test_extract_empty_pdf() {
    let (status, body) = post_json(
        "/extract",
        json!({"pdf_base64": "", "data_points": ["total"]}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"detail": "PDF content is empty."}));
}

#[tokio::test]
async fn test_extract_unreadable_pdf() {
    let (status, body) = post_json(
        "/extract",
        json!({"pdf_base64": STANDARD.encode(b"this is not a pdf"), "data_points": ["total"]}),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let detail = body["detail"].as_str().unwrap();
    assert!(detail.starts_with("Extraction failed: "), "{detail}");
}

#[tokio::test]
async fn test_extract_missing_field_is_rejected() {
    let (status, body) = post_json("/extract", json!({"data_points": []})).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn test_extract_datapoints() {
    let (status, body) = post_json(
        "/extract-datapoints",
        json!({
            "document_content": STANDARD.encode(invoice_pdf()),
            "data_points": [
                {"name": "invoice_number", "description": "The invoice identifier"},
                {"name": "warranty", "description": "Warranty period"},
                {"name": "invoice_date"},
            ],
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 3);

    assert_eq!(
        results[0],
        json!({"name": "invoice_number", "value": "INV-2024-001", "confidence": 0.95})
    );
    assert_eq!(
        results[1],
        json!({"name": "warranty", "value": "", "confidence": 0.0})
    );
    assert_eq!(results[2]["name"], "invoice_date");
    assert_eq!(results[2]["value"], "2024-03-15");
}

#[tokio::test]
async fn test_extract_datapoints_invalid_base64() {
    let (status, _) = post_json(
        "/extract-datapoints",
        json!({"document_content": "not-base64!!", "data_points": []}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_extract_datapoints_unreadable_pdf_degrades() {
    let (status, body) = post_json(
        "/extract-datapoints",
        json!({
            "document_content": STANDARD.encode(b"this is not a pdf"),
            "data_points": [{"name": "total", "description": "amount due"}],
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"results": [{"name": "total", "value": "", "confidence": 0.0}]})
    );
}

#[tokio::test]
async fn test_extract_datapoints_multi_page() {
    let pdf = build_pdf(&[&["Cover letter"], &["Account Reference: ZX-99"]]);
    let (status, body) = post_json(
        "/extract-datapoints",
        json!({
            "document_content": STANDARD.encode(pdf),
            "data_points": [{"name": "account reference", "description": ""}],
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"][0]["value"], "ZX-99");
}

#[tokio::test]
async fn test_extract_undecodable_font_is_unprocessable() {
    let (status, body) = post_json(
        "/extract",
        json!({"pdf_base64": STANDARD.encode(broken_font_pdf()), "data_points": ["total"]}),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let detail = body["detail"].as_str().unwrap();
    assert!(detail.starts_with("Extraction failed: "), "{detail}");
}

#[tokio::test]
async fn test_extract_datapoints_undecodable_font_degrades() {
    let (status, body) = post_json(
        "/extract-datapoints",
        json!({
            "document_content": STANDARD.encode(broken_font_pdf()),
            "data_points": [{"name": "total", "description": "amount due"}],
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"results": [{"name": "total", "value": "", "confidence": 0.0}]})
    );
}
