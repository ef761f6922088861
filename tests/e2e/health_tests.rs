//! Welcome, health and readiness endpoints

use crate::mocks::payloads::FRUIT_CATALOG;
use crate::mocks::{MockSupplierServer, TestServer};
use reqwest::StatusCode;

#[tokio::test]
async fn test_welcome_page() {
	let server = TestServer::spawn(&[]).await.unwrap();

	let response = server.get("/food-aggregator").await;
	assert_eq!(response.status(), StatusCode::OK);
	assert_eq!(
		response.text().await.unwrap(),
		"<h1>Welcome to Food Aggregator</h1>"
	);
}

#[tokio::test]
async fn test_health_carries_request_id() {
	let server = TestServer::spawn(&[]).await.unwrap();

	let response = server.get("/health").await;
	assert_eq!(response.status(), StatusCode::OK);
	assert!(response.headers().contains_key("x-request-id"));
	assert_eq!(response.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn test_ready_reports_supplier_count() {
	let fruit = MockSupplierServer::spawn(FRUIT_CATALOG).await;
	let server = TestServer::spawn(&[&fruit.url]).await.unwrap();

	let (status, body) = server.get_json("/ready").await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["status"], "ready");
	assert_eq!(body["suppliers"], 1);
}

#[tokio::test]
async fn test_no_suppliers_is_not_found() {
	let server = TestServer::spawn(&[]).await.unwrap();

	let (status, _) = server.get_json("/buy-item/Apple").await;
	assert_eq!(status, StatusCode::NOT_FOUND);
}
