//! Table Group API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::utils::AppResult;
use shared::models::{Order, TableGroup, TableGroupCreate, TableGroupUpdate};

/// POST /api/groups - 新桌组入座
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<TableGroupCreate>,
) -> AppResult<Json<TableGroup>> {
    let group = state.store.create_group(payload)?;
    Ok(Json(group))
}

/// GET /api/groups/:id - 获取单个桌组
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<TableGroup>> {
    let group = state.store.get_group(&id)?;
    Ok(Json(group))
}

/// PUT /api/groups/:id - 更新桌组
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<TableGroupUpdate>,
) -> AppResult<Json<TableGroup>> {
    let group = state.store.update_group(&id, payload)?;
    Ok(Json(group))
}

/// DELETE /api/groups/:id - 删除桌组 (级联删除订单)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    state.store.delete_group(&id)?;
    Ok(Json(true))
}

/// GET /api/groups/:id/orders - 桌组的订单
pub async fn orders(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<Order>>> {
    state.store.get_group(&id)?;
    Ok(Json(state.store.orders_by_group(&id)))
}
