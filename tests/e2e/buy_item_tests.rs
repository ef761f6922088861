//! Sequential lookups over HTTP

use crate::mocks::payloads::{FRUIT_CATALOG, GRAIN_CATALOG, VEGETABLE_CATALOG};
use crate::mocks::test_server::settings_for;
use crate::mocks::{MockSupplierServer, TestServer};
use axum::http::StatusCode as AxumStatus;
use reqwest::StatusCode;
use serde_json::json;
use std::time::Duration;

async fn three_suppliers() -> (
	MockSupplierServer,
	MockSupplierServer,
	MockSupplierServer,
	TestServer,
) {
	let fruit = MockSupplierServer::spawn(FRUIT_CATALOG).await;
	let vegetables = MockSupplierServer::spawn(VEGETABLE_CATALOG).await;
	let grains = MockSupplierServer::spawn(GRAIN_CATALOG).await;
	let server = TestServer::spawn(&[&fruit.url, &vegetables.url, &grains.url])
		.await
		.unwrap();
	(fruit, vegetables, grains, server)
}

#[tokio::test]
async fn test_buy_item_normalizes_supplier_schema() {
	let (_fruit, _vegetables, _grains, server) = three_suppliers().await;

	let (status, body) = server.get_json("/buy-item/Apple").await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(
		body,
		json!({"id": "f-1", "name": "Apple", "quantity": 5, "price": "$1.00"})
	);

	let (status, body) = server.get_json("/buy-item/Carrot").await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(
		body,
		json!({"id": "v-1", "name": "Carrot", "quantity": 40, "price": "$0.40"})
	);
}

#[tokio::test]
async fn test_buy_item_respects_priority_order() {
	let (fruit, vegetables, grains, server) = three_suppliers().await;

	let (_, body) = server.get_json("/buy-item/Apple").await;
	assert_eq!(body["id"], "f-1");
	assert_eq!(fruit.hits(), 1);
	assert_eq!(vegetables.hits(), 0);
	assert_eq!(grains.hits(), 0);
}

#[tokio::test]
async fn test_names_are_case_sensitive() {
	let (_fruit, _vegetables, _grains, server) = three_suppliers().await;

	let (status, body) = server.get_json("/buy-item/apple").await;
	assert_eq!(status, StatusCode::NOT_FOUND);
	assert_eq!(body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_quantity_filter() {
	let (_fruit, _vegetables, _grains, server) = three_suppliers().await;

	// fruit only has 5 apples, grains has 50
	let (status, body) = server.get_json("/buy-item-qty/Apple&10").await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["id"], "g-2");

	let (status, body) = server.get_json("/buy-item-qty/Apple&60").await;
	assert_eq!(status, StatusCode::NOT_FOUND);
	assert_eq!(body["error"], "NOT_FOUND");
	assert!(body["timestamp"].is_i64());
}

#[tokio::test]
async fn test_only_supplier_with_too_little_stock_is_not_found() {
	let fruit = MockSupplierServer::spawn(FRUIT_CATALOG).await;
	let server = TestServer::spawn(&[&fruit.url]).await.unwrap();

	let (status, _) = server.get_json("/buy-item-qty/Apple&10").await;
	assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invalid_requests_are_rejected_before_any_fetch() {
	let (fruit, _vegetables, _grains, server) = three_suppliers().await;

	for path in [
		"/buy-item-qty/Apple&0",
		"/buy-item-qty/Apple&-3",
		"/buy-item-qty/Apple&many",
		"/buy-item-qty/Apple",
		"/buy-item-qty-price/Apple&2&",
		"/buy-item-qty-price/Apple&0&1.00",
	] {
		let (status, body) = server.get_json(path).await;
		assert_eq!(status, StatusCode::BAD_REQUEST, "{path}");
		assert_eq!(body["error"], "INVALID_REQUEST", "{path}");
	}
	assert_eq!(fruit.hits(), 0);
}

#[tokio::test]
async fn test_failing_suppliers_are_skipped() {
	let unreachable = MockSupplierServer::unreachable_url().await;
	let broken = MockSupplierServer::spawn_failing(AxumStatus::INTERNAL_SERVER_ERROR).await;
	let grains = MockSupplierServer::spawn(GRAIN_CATALOG).await;
	let server = TestServer::spawn(&[&unreachable, &broken.url, &grains.url])
		.await
		.unwrap();

	let (status, body) = server.get_json("/buy-item/Rice").await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["id"], "g-1");
	assert_eq!(broken.hits(), 1);
}

#[tokio::test]
async fn test_malformed_supplier_is_skipped() {
	let garbage = MockSupplierServer::spawn(r#"{"not": "a list"}"#).await;
	let fruit = MockSupplierServer::spawn(FRUIT_CATALOG).await;
	let server = TestServer::spawn(&[&garbage.url, &fruit.url]).await.unwrap();

	let (status, body) = server.get_json("/buy-item/Banana").await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["price"], "$0.25");
}

#[tokio::test]
async fn test_total_outage_is_bad_gateway() {
	let unreachable = MockSupplierServer::unreachable_url().await;
	let broken = MockSupplierServer::spawn_failing(AxumStatus::SERVICE_UNAVAILABLE).await;
	let server = TestServer::spawn(&[&unreachable, &broken.url]).await.unwrap();

	let (status, body) = server.get_json("/buy-item/Apple").await;
	assert_eq!(status, StatusCode::BAD_GATEWAY);
	assert_eq!(body["error"], "SUPPLIERS_UNAVAILABLE");
}

#[tokio::test]
async fn test_slow_supplier_is_abandoned_after_per_supplier_timeout() {
	let slow = MockSupplierServer::spawn_delayed(FRUIT_CATALOG, Duration::from_secs(5)).await;
	let grains = MockSupplierServer::spawn(GRAIN_CATALOG).await;
	let mut settings = settings_for(&[&slow.url, &grains.url]);
	settings.timeouts.per_supplier_ms = 200;
	let server = TestServer::spawn_with_settings(settings).await.unwrap();

	let started = std::time::Instant::now();
	let (status, body) = server.get_json("/buy-item/Apple").await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["id"], "g-2");
	assert!(started.elapsed() < Duration::from_secs(3));
}
