use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
	cors::CorsLayer,
	request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
	trace::TraceLayer,
};
use tracing::Level;

use crate::handlers::{
	buy_item, buy_item_with_quantity, buy_item_with_quantity_and_price, fast_buy_item, health,
	ready, show_summary, welcome,
};
use crate::state::AppState;

pub fn create_router() -> Router<AppState> {
	let cors = CorsLayer::permissive();
	let trace = TraceLayer::new_for_http()
		.make_span_with(|req: &axum::http::Request<_>| {
			let req_id = req
				.headers()
				.get("x-request-id")
				.and_then(|v| v.to_str().ok())
				.unwrap_or("-");
			tracing::info_span!(
				"http_request",
				method = %req.method(),
				uri = %req.uri(),
				req_id
			)
		})
		.on_request(tower_http::trace::DefaultOnRequest::new().level(Level::INFO))
		.on_response(
			tower_http::trace::DefaultOnResponse::new()
				.level(Level::INFO)
				.latency_unit(tower_http::LatencyUnit::Millis),
		);
	let req_id = ServiceBuilder::new()
		.layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
		.layer(PropagateRequestIdLayer::x_request_id());

	Router::new()
		.route("/food-aggregator", get(welcome))
		.route("/health", get(health))
		.route("/ready", get(ready))
		.route("/buy-item/{name}", get(buy_item))
		.route("/buy-item-qty/{segment}", get(buy_item_with_quantity))
		.route(
			"/buy-item-qty-price/{segment}",
			get(buy_item_with_quantity_and_price),
		)
		.route("/show-summary", get(show_summary))
		.route("/fast-buy-item/{name}", get(fast_buy_item))
		.layer(cors)
		.layer(trace)
		.layer(req_id)
}
