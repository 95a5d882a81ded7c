//! PubChemProvider contra un servidor PUG REST falso en 127.0.0.1.

use std::collections::HashMap;
use std::time::Duration;

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use chem_domain::{Cid, SimilarityQuery};
use chem_providers::{CompoundProvider, ProviderError, PubChemProvider};

async fn similarity(Path(smiles): Path<String>, Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
    if params.get("MaxRecords").map(String::as_str) != Some("100") {
        return (StatusCode::BAD_REQUEST, Json(json!({"Fault": "missing MaxRecords"})));
    }
    match (smiles.as_str(), params.get("Threshold").map(String::as_str)) {
        ("CC(=O)C", Some("70")) => (StatusCode::OK, Json(json!({"IdentifierList": {"CID": [180, 6581]}}))),
        ("C#N", _) => (StatusCode::OK, Json(json!({"IdentifierList": {"CID": [768]}}))),
        ("CCCC", _) => (StatusCode::OK, Json(json!({"Waiting": {"ListKey": "42"}}))),
        _ => (StatusCode::SERVICE_UNAVAILABLE, Json(json!({"Fault": "busy"}))),
    }
}

async fn properties(Path((cid, props)): Path<(u64, String)>) -> impl IntoResponse {
    if props != "IUPACName,CAS" {
        return (StatusCode::BAD_REQUEST, Json(json!({"Fault": "bad property list"})));
    }
    match cid {
        180 => (StatusCode::OK, Json(json!({"PropertyTable": {"Properties": [{"CID": 180, "IUPACName": "propan-2-one", "CAS": "67-64-1"}]}}))),
        768 => (StatusCode::OK, Json(json!({"PropertyTable": {"Properties": []}}))),
        _ => (StatusCode::NOT_FOUND, Json(json!({"Fault": {"Code": "PUGREST.NotFound"}}))),
    }
}

async fn slow() -> &'static str {
    tokio::time::sleep(Duration::from_secs(2)).await;
    "{}"
}

async fn spawn_stub() -> String {
    let app = Router::new().route("/rest/pug/compound/fastsimilarity_2d/smiles/:smiles/JSON", get(similarity))
                           .route("/rest/pug/compound/cid/:cid/property/:props/JSON", get(properties))
                           .route("/slow/compound/cid/:cid/property/:props/JSON", get(slow));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind stub");
    let addr = listener.local_addr().expect("stub addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server");
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn test_similarity_returns_cids_in_order() {
    let base = spawn_stub().await;
    let provider = PubChemProvider::new(&format!("{base}/rest/pug"), Duration::from_secs(5)).unwrap();
    let q = SimilarityQuery::with_defaults("CC(=O)C").unwrap();
    let cids = provider.similar_compounds(&q).await.unwrap();
    assert_eq!(cids, vec![Cid(180), Cid(6581)]);
}

#[tokio::test]
async fn test_similarity_percent_encodes_triple_bond() {
    let base = spawn_stub().await;
    let provider = PubChemProvider::new(&format!("{base}/rest/pug"), Duration::from_secs(5)).unwrap();
    let q = SimilarityQuery::with_defaults("C#N").unwrap();
    assert_eq!(provider.similar_compounds(&q).await.unwrap(), vec![Cid(768)]);
}

#[tokio::test]
async fn test_similarity_without_identifier_list_is_empty() {
    let base = spawn_stub().await;
    let provider = PubChemProvider::new(&format!("{base}/rest/pug"), Duration::from_secs(5)).unwrap();
    let q = SimilarityQuery::with_defaults("CCCC").unwrap();
    assert!(provider.similar_compounds(&q).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_similarity_error_status_is_reported() {
    let base = spawn_stub().await;
    let provider = PubChemProvider::new(&format!("{base}/rest/pug"), Duration::from_secs(5)).unwrap();
    let q = SimilarityQuery::with_defaults("O").unwrap();
    match provider.similar_compounds(&q).await {
        Err(ProviderError::Status { status, body, .. }) => {
            assert_eq!(status, 503);
            assert!(body.contains("busy"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_properties_found_missing_and_empty() {
    let base = spawn_stub().await;
    let provider = PubChemProvider::new(&format!("{base}/rest/pug"), Duration::from_secs(5)).unwrap();

    let acetone = provider.compound_properties(Cid(180)).await.unwrap();
    assert_eq!(acetone.name.as_deref(), Some("propan-2-one"));
    assert_eq!(acetone.cas.as_deref(), Some("67-64-1"));

    assert!(matches!(provider.compound_properties(Cid(6581)).await, Err(ProviderError::Status { status: 404, .. })));
    assert!(matches!(provider.compound_properties(Cid(768)).await, Err(ProviderError::Decode(_))));
}

#[tokio::test]
async fn test_timeout_surfaces_as_network_error() {
    let base = spawn_stub().await;
    let provider = PubChemProvider::new(&format!("{base}/slow"), Duration::from_millis(200)).unwrap();
    assert!(matches!(provider.compound_properties(Cid(1)).await, Err(ProviderError::Network(_))));
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    // Bind and drop to get a port with nothing listening.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let provider = PubChemProvider::new(&format!("http://{addr}/rest/pug"), Duration::from_secs(2)).unwrap();
    let q = SimilarityQuery::with_defaults("CCO").unwrap();
    assert!(matches!(provider.similar_compounds(&q).await, Err(ProviderError::Network(_))));
}
