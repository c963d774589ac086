//! Shared fixtures for integration tests.
#![allow(dead_code)]

use axum::http::{header, StatusCode};
use axum::routing::get;
use axum::Router;
use std::collections::HashMap;
use std::net::SocketAddr;
use tokio::net::TcpListener;

pub const HENRY_STREET_SCHOOLS: &str = r#"[
    {"dbn": "02M260", "school_name": "Clinton School Writers & Artists, M.S. 260",
     "overview_paragraph": "Students who are prepared for college must have an education that encourages them."},
    {"dbn": "01M292", "school_name": "Henry Street School",
     "overview_paragraph": "Henry Street School is a small school on the Lower East Side.",
     "borough": "MANHATTAN"}
]"#;

pub const HENRY_STREET_SCORES: &str = r#"[
    {"dbn": "01M292", "school_name": "HENRY STREET SCHOOL",
     "num_of_sat_test_takers": "29",
     "sat_critical_reading_avg_score": "391",
     "sat_writing_avg_score": "381",
     "sat_math_avg_score": "368"}
]"#;

/// Canned reply for one request path.
#[derive(Clone)]
pub struct Reply {
    pub status: StatusCode,
    pub body: String,
}

impl Reply {
    pub fn ok(body: &str) -> Self {
        Self {
            status: StatusCode::OK,
            body: body.to_string(),
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status: StatusCode::from_u16(status).expect("valid status code"),
            body: String::new(),
        }
    }
}

/// Router answering GETs from a fixed path table. Unknown paths get axum's 404.
fn router(routes: HashMap<&'static str, Reply>) -> Router {
    routes
        .into_iter()
        .fold(Router::new(), |router, (path, reply)| {
            router.route(
                path,
                get(move || async move {
                    (
                        reply.status,
                        [(header::CONTENT_TYPE, "application/json")],
                        reply.body,
                    )
                }),
            )
        })
}

/// Serve `routes` on an ephemeral local port for the rest of the test.
pub async fn serve(routes: HashMap<&'static str, Reply>) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = router(routes);

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server failed");
    });

    addr
}
