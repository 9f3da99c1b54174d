// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::http::StatusCode;
use axum::response::IntoResponse;
use recipebox_api::error::AppError;

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[test]
fn test_error_status_mapping() {
    let cases = [
        (AppError::Unauthorized, StatusCode::UNAUTHORIZED),
        (AppError::InvalidCredentials, StatusCode::UNAUTHORIZED),
        (
            AppError::NotFound("recipe".to_string()),
            StatusCode::NOT_FOUND,
        ),
        (
            AppError::BadRequest("bad".to_string()),
            StatusCode::BAD_REQUEST,
        ),
        (
            AppError::MissingCredential("OPENAI_API_KEY"),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
        (
            AppError::InvalidUpstream("no content".to_string()),
            StatusCode::BAD_GATEWAY,
        ),
        (
            AppError::IdentityApi("boom".to_string()),
            StatusCode::BAD_GATEWAY,
        ),
        (
            AppError::Database("offline".to_string()),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
    ];

    for (error, expected) in cases {
        let response = error.into_response();
        assert_eq!(response.status(), expected);
    }
}

#[tokio::test]
async fn test_upstream_status_relays_body_verbatim() {
    let error = AppError::UpstreamStatus {
        status: 429,
        body: "rate limited".to_string(),
    };

    let response = error.into_response();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body_string(response).await, "rate limited");
}

#[tokio::test]
async fn test_internal_error_leaks_no_details() {
    let error = AppError::Internal(anyhow::anyhow!("secret connection string"));

    let response = error.into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_string(response).await;
    assert!(!body.contains("secret"));
    assert_eq!(body, r#"{"error":"internal_error"}"#);
}
