#![allow(dead_code)]

use axum::{
    Router,
    body::{self, Body},
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt; // for `oneshot`

pub async fn json_response(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("request should succeed");
    let status = response.status();
    let body = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should read");
    let json: Value = serde_json::from_slice(&body).expect("body should be json");
    (status, json)
}

pub fn request(method: &str, uri: &str, auth: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(auth) = auth {
        builder = builder.header("authorization", auth);
    }
    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Signs the user up and in, returning the `Authorization` header value.
pub async fn register(app: &Router, username: &str, password: &str) -> String {
    let (status, _) = json_response(
        app,
        request(
            "POST",
            "/auth/sign-up",
            None,
            Some(json!({ "name": username, "username": username, "password": password })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = json_response(
        app,
        request(
            "POST",
            "/auth/sign-in",
            None,
            Some(json!({ "username": username, "password": password })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().expect("token should be a string");
    format!("Bearer {token}")
}

pub async fn create_list(app: &Router, auth: &str, title: &str, description: &str) -> i64 {
    let (status, body) = json_response(
        app,
        request(
            "POST",
            "/lists",
            Some(auth),
            Some(json!({ "title": title, "description": description })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["id"].as_i64().expect("id should be a number")
}

pub async fn create_item(app: &Router, auth: &str, list_id: i64, title: &str) -> i64 {
    let (status, body) = json_response(
        app,
        request(
            "POST",
            &format!("/lists/{list_id}/items"),
            Some(auth),
            Some(json!({ "title": title })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["id"].as_i64().expect("id should be a number")
}
