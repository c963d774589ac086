mod common;

use common::{serve, Reply, HENRY_STREET_SCHOOLS, HENRY_STREET_SCORES};
use nycschools::data::{DataSource, Endpoints, HttpSource};
use nycschools::error::{Dataset, SchoolsError};
use std::collections::HashMap;

fn source_for(addr: std::net::SocketAddr) -> HttpSource {
    HttpSource::new(Endpoints {
        schools: format!("http://{addr}/schools.json"),
        sat_scores: format!("http://{addr}/sat.json"),
    })
    .expect("build http source")
}

#[tokio::test]
async fn fetches_and_decodes_both_collections() {
    let addr = serve(HashMap::from([
        ("/schools.json", Reply::ok(HENRY_STREET_SCHOOLS)),
        ("/sat.json", Reply::ok(HENRY_STREET_SCORES)),
    ]))
    .await;
    let source = source_for(addr);

    let schools = source.fetch_schools().await.unwrap();
    assert_eq!(schools.rejected, 0);
    let names: Vec<_> = schools
        .records
        .iter()
        .map(|s| s.school_name.as_str())
        .collect();
    assert_eq!(
        names,
        ["Clinton School Writers & Artists, M.S. 260", "Henry Street School"]
    );

    let scores = source.fetch_scores().await.unwrap();
    assert_eq!(scores.records.len(), 1);
    assert_eq!(scores.records[0].reading, "391");
    assert_eq!(scores.records[0].writing, "381");
    assert_eq!(scores.records[0].math, "368");
}

#[tokio::test]
async fn non_success_status_is_a_fetch_failure() {
    let addr = serve(HashMap::from([("/schools.json", Reply::status(503))])).await;
    let source = source_for(addr);

    match source.fetch_schools().await.unwrap_err() {
        SchoolsError::FetchError { dataset, message } => {
            assert_eq!(dataset, Dataset::Schools);
            assert_eq!(message, "HTTP status 503");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    // No route for the scores path at all: 404
    let err = source.fetch_scores().await.unwrap_err();
    assert!(err.is_fetch_failure());
    assert!(err.to_string().contains("404"));
}

#[tokio::test]
async fn undecodable_bodies_are_fetch_failures() {
    let addr = serve(HashMap::from([
        ("/schools.json", Reply::ok("<!doctype html><p>maintenance</p>")),
        ("/sat.json", Reply::ok(r#"{"message": "not an array"}"#)),
    ]))
    .await;
    let source = source_for(addr);

    assert!(source.fetch_schools().await.unwrap_err().is_fetch_failure());
    assert!(source.fetch_scores().await.unwrap_err().is_fetch_failure());
}

#[tokio::test]
async fn malformed_records_are_dropped_individually() {
    let addr = serve(HashMap::from([(
        "/sat.json",
        Reply::ok(
            r#"[
                {"dbn": "01M292", "sat_critical_reading_avg_score": "391",
                 "sat_writing_avg_score": "381", "sat_math_avg_score": "368"},
                {"dbn": "01M448", "sat_critical_reading_avg_score": "383"}
            ]"#,
        ),
    )]))
    .await;
    let source = source_for(addr);

    let scores = source.fetch_scores().await.unwrap();
    assert_eq!(scores.records.len(), 1);
    assert_eq!(scores.rejected, 1);
}
