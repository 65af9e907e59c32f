//! Router tests driven through `tower::ServiceExt::oneshot`, no socket.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use gedparity_api::state::AppState;

fn app() -> axum::Router {
    gedparity_api::router(Arc::new(AppState::without_converter()))
}

async fn body_json(resp: axum::response::Response) -> serde_json::Value {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn healthz_reports_ok() {
    let resp = app()
        .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["status"], "ok");
}

#[tokio::test]
async fn canonicalize_reorders_header_and_strips_noise() {
    let req = post_json(
        "/v1/canonicalize",
        serde_json::json!({
            "text": "0 HEAD\n1 SOUR GeneWeb\n1 CHAR UTF-8   \n\n1 NOTE hello\n0 TRLR\n"
        }),
    );
    let resp = app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let v = body_json(resp).await;
    assert_eq!(
        v["canonical"],
        "0 HEAD\n1 CHAR UTF-8\n1 SOUR GeneWeb\n1 NOTE hello\n0 TRLR\n"
    );
    assert_eq!(v["digest"].as_str().unwrap().len(), 64);
}

#[tokio::test]
async fn compare_equal_documents() {
    let req = post_json(
        "/v1/compare",
        serde_json::json!({
            "left": "0 HEAD\n1 SOUR GeneWeb\n1 CHAR UTF-8\n",
            "right": "0 HEAD\n1 CHAR UTF-8\n1 SOUR GeneWeb\n"
        }),
    );
    let resp = app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let v = body_json(resp).await;
    assert_eq!(v["equal"], true);
    assert_eq!(v["report"], "identical");
    assert_eq!(v["diffs"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn compare_differing_documents_stays_200() {
    let req = post_json(
        "/v1/compare",
        serde_json::json!({
            "left": "0 HEAD\n1 SOUR A\n",
            "right": "0 HEAD\n1 SOUR B\n"
        }),
    );
    let resp = app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let v = body_json(resp).await;
    assert_eq!(v["equal"], false);
    assert_eq!(v["diffs"][0]["line"], 2);
    assert_eq!(v["diffs"][0]["left"], "1 SOUR A");
    assert_eq!(v["diffs"][0]["right"], "1 SOUR B");
}

#[tokio::test]
async fn compare_with_redact_masks_volatile_fields() {
    let req = post_json(
        "/v1/compare",
        serde_json::json!({
            "left": "0 HEAD\n2 TIME 10:11:12\n0 TRLR\n",
            "right": "0 HEAD\n2 TIME 23:59:59\n0 TRLR\n",
            "redact": true
        }),
    );
    let resp = app().oneshot(req).await.unwrap();
    let v = body_json(resp).await;
    assert_eq!(v["equal"], true);
}

#[tokio::test]
async fn export_without_converter_is_503() {
    let resp = app()
        .oneshot(
            Request::get("/export/gwb2ged?input_dir=/tmp/base")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body_json(resp).await["error"]["code"], "CONVERTER_UNAVAILABLE");
}

#[tokio::test]
async fn export_missing_input_dir_is_400() {
    let resp = app()
        .oneshot(
            Request::get("/export/gwb2ged?input_dir=")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
