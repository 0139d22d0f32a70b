//! Customer API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::utils::AppResult;
use shared::models::{Customer, CustomerCreate, CustomerUpdate};

/// Search query params
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Substring matched against name, phone and email
    #[serde(default)]
    pub q: String,
}

/// GET /api/customers?q= - 搜索顾客
pub async fn search(
    State(state): State<ServerState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<Vec<Customer>>> {
    Ok(Json(state.store.search_customers(&query.q)))
}

/// POST /api/customers - 创建顾客
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CustomerCreate>,
) -> AppResult<Json<Customer>> {
    Ok(Json(state.store.create_customer(payload)))
}

/// GET /api/customers/:id - 获取单个顾客
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Customer>> {
    let customer = state.store.get_customer(&id)?;
    Ok(Json(customer))
}

/// PUT /api/customers/:id - 更新顾客
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<CustomerUpdate>,
) -> AppResult<Json<Customer>> {
    let customer = state.store.update_customer(&id, payload)?;
    Ok(Json(customer))
}

/// POST /api/customers/:id/visit - 记录回访
pub async fn record_visit(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Customer>> {
    let customer = state.store.record_visit(&id)?;
    Ok(Json(customer))
}
