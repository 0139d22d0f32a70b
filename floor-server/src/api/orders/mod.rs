//! Order API 模块

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/orders", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", get(handler::get_by_id).put(handler::update))
        .route("/{id}/items", post(handler::add_item))
        .route("/{id}/items/{item_id}", axum::routing::delete(handler::remove_item))
        .route("/{id}/items/{item_id}/status", put(handler::set_item_status))
        .route("/{id}/kot", post(handler::send_kot))
        .route("/{id}/discount", post(handler::apply_discount))
}
