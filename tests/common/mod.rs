//! Local answer endpoint shared by the integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use axum::http::{header, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

/// Start an answer server on an ephemeral port and return its base URL.
///
/// Routes:
/// - `/ok`      200 `text/plain` "hi there"
/// - `/json`    200 `{"answer": "..."}`
/// - `/echo`    200 echoing the JSON request body
/// - `/missing` 404 "Not Found"
/// - `/created` 201 "made"
/// - `/broken`  200 claiming JSON with an unparseable body
/// - `/bad_gateway` 502 claiming JSON with an HTML body
/// - `/slow`    200 after five seconds
pub async fn spawn_answer_server() -> String {
    let app = Router::new()
        .route("/ok", post(|| async { "hi there" }))
        .route(
            "/json",
            post(|| async { Json(json!({"answer": "Knowledge graphs link entities."})) }),
        )
        .route("/echo", post(|Json(body): Json<Value>| async move { Json(body) }))
        .route(
            "/missing",
            post(|| async { (StatusCode::NOT_FOUND, "Not Found") }),
        )
        .route("/created", post(|| async { (StatusCode::CREATED, "made") }))
        .route(
            "/broken",
            post(|| async { ([(header::CONTENT_TYPE, "application/json")], "{not json") }),
        )
        .route(
            "/bad_gateway",
            post(|| async {
                (
                    StatusCode::BAD_GATEWAY,
                    [(header::CONTENT_TYPE, "application/json")],
                    "<html>",
                )
            }),
        )
        .route(
            "/slow",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                "late"
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("answer server failed");
    });

    format!("http://{}", addr)
}

/// An address nothing is listening on.
pub fn closed_address() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    listener.local_addr().expect("get local addr")
}
