//! Dining Table API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::utils::AppResult;
use shared::models::{Order, Table, TableCreate, TableGroup, TableStatusUpdate};

/// GET /api/tables - 获取所有桌台
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Table>>> {
    Ok(Json(state.store.list_tables()))
}

/// GET /api/tables/:id - 获取单个桌台
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Table>> {
    let table = state.store.get_table(&id)?;
    Ok(Json(table))
}

/// POST /api/tables - 创建桌台 (setup flow)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<TableCreate>,
) -> AppResult<Json<Table>> {
    Ok(Json(state.store.create_table(payload)))
}

/// PUT /api/tables/:id/status - 手动覆盖桌台状态
pub async fn set_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<TableStatusUpdate>,
) -> AppResult<Json<Table>> {
    let table = state.store.set_table_status(&id, payload.status)?;
    Ok(Json(table))
}

/// GET /api/tables/:id/groups - 桌台的活跃桌组
pub async fn active_groups(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<TableGroup>>> {
    // Surface NotFound for an unknown table instead of an empty list
    state.store.get_table(&id)?;
    Ok(Json(state.store.active_groups_by_table(&id)))
}

/// GET /api/tables/:id/orders - 桌台的订单
pub async fn orders(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<Order>>> {
    state.store.get_table(&id)?;
    Ok(Json(state.store.orders_by_table(&id)))
}
