//! Item lookup handlers
//!
//! Filtered routes pack their arguments into one path segment joined by `&`,
//! e.g. `/buy-item-qty-price/Apple&5&1.00`. Segments are split from the right
//! so item names may themselves contain `&`.

use axum::{
	extract::{Path, State},
	http::StatusCode,
	response::Json,
};
use food_service::AggregatorError;
use food_types::{Item, ItemQuery, QueryValidationError};
use tracing::debug;

use crate::handlers::common::{error_response, lookup_response, ApiError};
use crate::state::AppState;

/// GET /buy-item/{name} - Sequential lookup by name
pub async fn buy_item(
	State(state): State<AppState>,
	Path(name): Path<String>,
) -> Result<Json<Item>, ApiError> {
	debug!("buy-item '{}'", name);
	let result = state
		.sequential
		.find_sequential(&ItemQuery::by_name(name.as_str()))
		.await;
	lookup_response(&name, result)
}

/// GET /buy-item-qty/{name}&{quantity} - Sequential lookup with minimum stock
pub async fn buy_item_with_quantity(
	State(state): State<AppState>,
	Path(segment): Path<String>,
) -> Result<Json<Item>, ApiError> {
	let query = parse_quantity_query(&segment).map_err(invalid_request)?;
	debug!("buy-item-qty '{}' x{:?}", query.name, query.quantity);
	let result = state.sequential.find_sequential(&query).await;
	lookup_response(&query.name, result)
}

/// GET /buy-item-qty-price/{name}&{quantity}&{price} - Sequential lookup through the cache
pub async fn buy_item_with_quantity_and_price(
	State(state): State<AppState>,
	Path(segment): Path<String>,
) -> Result<Json<Item>, ApiError> {
	let query = parse_price_query(&segment).map_err(invalid_request)?;
	debug!(
		"buy-item-qty-price '{}' x{:?} at {:?}",
		query.name, query.quantity, query.price
	);
	let result = state.sequential.find_sequential(&query).await;
	lookup_response(&query.name, result)
}

/// GET /fast-buy-item/{name} - Race every supplier
pub async fn fast_buy_item(
	State(state): State<AppState>,
	Path(name): Path<String>,
) -> Result<Json<Item>, ApiError> {
	debug!("fast-buy-item '{}'", name);
	let result = state.race.find_fast(&name).await;
	lookup_response(&name, result)
}

fn invalid_request(e: QueryValidationError) -> ApiError {
	let e = AggregatorError::from(e);
	error_response(StatusCode::BAD_REQUEST, "INVALID_REQUEST", e.to_string())
}

/// `name&quantity`
fn parse_quantity_query(segment: &str) -> Result<ItemQuery, QueryValidationError> {
	let (name, quantity) = split_last(segment)?;
	Ok(ItemQuery::by_name(name).with_quantity(parse_quantity(quantity)?))
}

/// `name&quantity&price`
fn parse_price_query(segment: &str) -> Result<ItemQuery, QueryValidationError> {
	let (rest, price) = split_last(segment)?;
	let (name, quantity) = split_last(rest)?;
	Ok(ItemQuery::by_name(name)
		.with_quantity(parse_quantity(quantity)?)
		.with_price(price))
}

fn split_last(segment: &str) -> Result<(&str, &str), QueryValidationError> {
	segment
		.rsplit_once('&')
		.ok_or_else(|| QueryValidationError::MalformedSegment {
			segment: segment.to_string(),
		})
}

fn parse_quantity(value: &str) -> Result<i64, QueryValidationError> {
	value
		.parse()
		.map_err(|_| QueryValidationError::UnparseableQuantity {
			value: value.to_string(),
		})
}
