//! Race lookups over HTTP

use crate::mocks::payloads::{FRUIT_CATALOG, GRAIN_CATALOG, VEGETABLE_CATALOG};
use crate::mocks::test_server::settings_for;
use crate::mocks::{MockSupplierServer, TestServer};
use reqwest::StatusCode;
use std::time::{Duration, Instant};

#[tokio::test]
async fn test_fast_buy_does_not_wait_for_slow_suppliers() {
	let slow_vegetables =
		MockSupplierServer::spawn_delayed(VEGETABLE_CATALOG, Duration::from_secs(3)).await;
	let fruit = MockSupplierServer::spawn(FRUIT_CATALOG).await;
	let slow_grains = MockSupplierServer::spawn_delayed(GRAIN_CATALOG, Duration::from_secs(3)).await;
	let server = TestServer::spawn(&[&slow_vegetables.url, &fruit.url, &slow_grains.url])
		.await
		.unwrap();

	let started = Instant::now();
	let (status, body) = server.get_json("/fast-buy-item/Banana").await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["id"], "f-2");
	assert!(started.elapsed() < Duration::from_secs(2));
}

#[tokio::test]
async fn test_fast_buy_winner_is_faster_supplier_not_first_listed() {
	let slow_fruit = MockSupplierServer::spawn_delayed(FRUIT_CATALOG, Duration::from_secs(2)).await;
	let grains = MockSupplierServer::spawn(GRAIN_CATALOG).await;
	let server = TestServer::spawn(&[&slow_fruit.url, &grains.url])
		.await
		.unwrap();

	let (status, body) = server.get_json("/fast-buy-item/Apple").await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["id"], "g-2");
}

#[tokio::test]
async fn test_fast_buy_without_match_is_not_found() {
	let fruit = MockSupplierServer::spawn(FRUIT_CATALOG).await;
	let vegetables = MockSupplierServer::spawn(VEGETABLE_CATALOG).await;
	let server = TestServer::spawn(&[&fruit.url, &vegetables.url])
		.await
		.unwrap();

	let (status, body) = server.get_json("/fast-buy-item/Mango").await;
	assert_eq!(status, StatusCode::NOT_FOUND);
	assert_eq!(body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_fast_buy_times_out() {
	let slow = MockSupplierServer::spawn_delayed(FRUIT_CATALOG, Duration::from_secs(5)).await;
	let mut settings = settings_for(&[&slow.url]);
	settings.timeouts.race_ms = 300;
	let server = TestServer::spawn_with_settings(settings).await.unwrap();

	let started = Instant::now();
	let (status, body) = server.get_json("/fast-buy-item/Apple").await;

	assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
	assert_eq!(body["error"], "TIMEOUT");
	assert!(started.elapsed() < Duration::from_secs(3));
}

#[tokio::test]
async fn test_fast_buy_survives_unreachable_supplier() {
	let unreachable = MockSupplierServer::unreachable_url().await;
	let fruit = MockSupplierServer::spawn(FRUIT_CATALOG).await;
	let server = TestServer::spawn(&[&unreachable, &fruit.url]).await.unwrap();

	let (status, body) = server.get_json("/fast-buy-item/Apple").await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["id"], "f-1");
}
