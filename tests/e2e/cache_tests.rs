//! Price-qualified lookups and the cache summary

use crate::mocks::payloads::{FRUIT_CATALOG, GRAIN_CATALOG};
use crate::mocks::{MockSupplierServer, TestServer};
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_price_lookup_is_cached_and_pinned() {
	let fruit = MockSupplierServer::spawn(FRUIT_CATALOG).await;
	let server = TestServer::spawn(&[&fruit.url]).await.unwrap();

	let (status, first) = server.get_json("/buy-item-qty-price/Apple&5&1.00").await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(fruit.hits(), 1);

	let (status, second) = server.get_json("/buy-item-qty-price/Apple&5&1.00").await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(second, first);
	assert_eq!(fruit.hits(), 1);

	let (status, summary) = server.get_json("/show-summary").await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(
		summary,
		json!({
			"Apple": {
				"item": {"id": "f-1", "name": "Apple", "quantity": 5, "price": "$1.00"},
				"retention": "pinned",
				"expires_in_ms": null
			}
		})
	);
}

#[tokio::test]
async fn test_price_must_match_exactly() {
	let fruit = MockSupplierServer::spawn(FRUIT_CATALOG).await;
	let server = TestServer::spawn(&[&fruit.url]).await.unwrap();

	for path in [
		"/buy-item-qty-price/Apple&5&1",
		"/buy-item-qty-price/Apple&5&$1.00",
		"/buy-item-qty-price/Apple&6&1.00",
	] {
		let (status, _) = server.get_json(path).await;
		assert_eq!(status, StatusCode::NOT_FOUND, "{path}");
	}

	let (_, summary) = server.get_json("/show-summary").await;
	assert_eq!(summary, json!({}));
}

#[tokio::test]
async fn test_cached_entry_is_rechecked_against_new_filters() {
	let fruit = MockSupplierServer::spawn(FRUIT_CATALOG).await;
	let grains = MockSupplierServer::spawn(GRAIN_CATALOG).await;
	let server = TestServer::spawn(&[&fruit.url, &grains.url]).await.unwrap();

	let (_, cached) = server.get_json("/buy-item-qty-price/Apple&1&1.00").await;
	assert_eq!(cached["id"], "f-1");

	let (status, body) = server.get_json("/buy-item-qty-price/Apple&20&1.10").await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["id"], "g-2");

	let (_, summary) = server.get_json("/show-summary").await;
	assert_eq!(summary["Apple"]["item"]["id"], "g-2");
}

#[tokio::test]
async fn test_plain_lookups_do_not_populate_cache() {
	let fruit = MockSupplierServer::spawn(FRUIT_CATALOG).await;
	let server = TestServer::spawn(&[&fruit.url]).await.unwrap();

	server.get_json("/buy-item/Apple").await;
	server.get_json("/buy-item-qty/Apple&2").await;
	server.get_json("/fast-buy-item/Apple").await;

	let (_, summary) = server.get_json("/show-summary").await;
	assert_eq!(summary, json!({}));
	assert_eq!(fruit.hits(), 3);
}
