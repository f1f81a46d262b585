//! `GET /logo?url=` and `POST /logo` handlers.

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use brandmark_extractor::{ExtractionResult, FailureReason, LogoResponse};
use serde::Deserialize;

use super::AppState;
use crate::middleware::RequestId;

#[derive(Debug, Default, Deserialize)]
pub(super) struct LogoParams {
    url: Option<String>,
}

fn status_for(result: &ExtractionResult) -> StatusCode {
    match result.failure_reason() {
        None => StatusCode::OK,
        Some(FailureReason::EmptyUrl | FailureReason::MalformedUrl) => StatusCode::BAD_REQUEST,
        Some(FailureReason::CouldNotIdentifyLogo) => StatusCode::NOT_FOUND,
        Some(FailureReason::LogoTooLarge) => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

async fn respond(state: &AppState, request_id: &str, url: Option<String>) -> Response {
    let Some(url) = url.filter(|u| !u.trim().is_empty()) else {
        tracing::debug!(request_id, "logo request without url");
        return (StatusCode::BAD_REQUEST, Json(LogoResponse::empty_url())).into_response();
    };

    let result = state.extractor.extract(&url).await;
    let status = status_for(&result);
    tracing::info!(
        request_id,
        url = %url,
        status = status.as_u16(),
        outcome = result.failure_reason().map_or("ok", FailureReason::code),
        "logo request completed"
    );

    (status, Json(LogoResponse::from(result))).into_response()
}

pub(super) async fn get_logo(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<LogoParams>,
) -> Response {
    respond(&state, &req_id.0, params.url).await
}

/// A missing or unparseable JSON body is treated the same as a blank `url`.
pub(super) async fn post_logo(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Result<Json<LogoParams>, JsonRejection>,
) -> Response {
    let params = match body {
        Ok(Json(params)) => params,
        Err(rejection) => {
            tracing::debug!(request_id = %req_id.0, error = %rejection, "unreadable logo request body");
            LogoParams::default()
        }
    };
    respond(&state, &req_id.0, params.url).await
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use base64::Engine;
    use tower::ServiceExt;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::api::tests::test_app;

    async fn send(request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = test_app().oneshot(request).await.expect("response");
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        let json = serde_json::from_slice(&body).expect("json parse");
        (status, json)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request")
    }

    fn post_json(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/logo")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_owned()))
            .expect("request")
    }

    #[tokio::test]
    async fn missing_url_is_bad_request() {
        let (status, json) = send(get("/logo")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            json,
            serde_json::json!({ "success": false, "message": "False" })
        );
    }

    #[tokio::test]
    async fn blank_post_url_is_bad_request() {
        let (status, json) = send(post_json(r#"{"url": "   "}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "False");
        assert!(json.get("socialProfiles").is_none());
    }

    #[tokio::test]
    async fn unparseable_post_body_is_bad_request() {
        let (status, json) = send(post_json("{not json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "False");
    }

    #[tokio::test]
    async fn malformed_url_omits_profiles() {
        let (status, json) = send(get("/logo?url=not%20a%20url")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Malformed URL");
        assert!(json.get("logo").is_none());
        assert!(json.get("socialProfiles").is_none());
    }

    #[tokio::test]
    async fn unidentified_logo_includes_null_profiles() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("<p>hi</p>", "text/html"))
            .mount(&server)
            .await;

        let (status, json) = send(post_json(
            &serde_json::json!({ "url": server.uri() }).to_string(),
        ))
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "could not identify logo");
        let profiles = json["socialProfiles"].as_object().expect("profiles object");
        assert_eq!(profiles.len(), 9);
        assert!(profiles.values().all(serde_json::Value::is_null));
    }

    #[tokio::test]
    async fn success_encodes_logo_as_base64() {
        let png: Vec<u8> = vec![0x89, b'P', b'N', b'G', 0, 255, 17, 42];
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"<img class="logo" src="/logo.png"><a href="https://discord.com/invite/acme">chat</a>"#,
                "text/html",
            ))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/logo.png"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(png.clone(), "image/png"))
            .mount(&server)
            .await;

        let (status, json) = send(get(&format!("/logo?url={}", server.uri()))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "OK");
        assert_eq!(json["logo"]["contentType"], "image/png");
        assert_eq!(json["logo"]["size"], png.len());
        assert_eq!(json["logo"]["url"], format!("{}/logo.png", server.uri()));
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(json["logo"]["data"].as_str().expect("data string"))
            .expect("valid base64");
        assert_eq!(decoded, png);
        assert_eq!(
            json["socialProfiles"]["discord"],
            "https://discord.com/invite/acme"
        );
        assert!(json["socialProfiles"]["facebook"].is_null());
    }

    #[test]
    fn status_mapping() {
        let failure = |reason| ExtractionResult::Failure {
            reason,
            social_profiles: None,
        };
        assert_eq!(
            status_for(&failure(FailureReason::MalformedUrl)),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&failure(FailureReason::CouldNotIdentifyLogo)),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(&failure(FailureReason::LogoTooLarge)),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }
}
