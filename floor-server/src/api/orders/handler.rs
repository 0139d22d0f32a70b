//! Order API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::utils::AppResult;
use shared::models::{
    Order, OrderCreate, OrderDiscount, OrderItemCreate, OrderItemStatusUpdate, OrderUpdate,
};

/// Query params for listing orders
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Filter by table group
    pub group_id: Option<String>,
    /// Filter by table
    pub table_id: Option<String>,
}

/// GET /api/orders - 获取订单列表 (可按桌组/桌台过滤)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Order>>> {
    let orders = match (query.group_id, query.table_id) {
        (Some(group_id), _) => state.store.orders_by_group(&group_id),
        (None, Some(table_id)) => state.store.orders_by_table(&table_id),
        (None, None) => state.store.list_orders(),
    };
    Ok(Json(orders))
}

/// POST /api/orders - 创建订单
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OrderCreate>,
) -> AppResult<Json<Order>> {
    let order = state.store.create_order(payload)?;
    Ok(Json(order))
}

/// GET /api/orders/:id - 获取单个订单
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let order = state.store.get_order(&id)?;
    Ok(Json(order))
}

/// PUT /api/orders/:id - 更新订单字段 (不重算金额)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<OrderUpdate>,
) -> AppResult<Json<Order>> {
    let order = state.store.update_order(&id, payload)?;
    Ok(Json(order))
}

/// POST /api/orders/:id/items - 添加菜品 (重算金额)
pub async fn add_item(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<OrderItemCreate>,
) -> AppResult<Json<Order>> {
    let order = state.store.add_item(&id, payload)?;
    Ok(Json(order))
}

/// DELETE /api/orders/:id/items/:item_id - 移除菜品 (重算金额)
pub async fn remove_item(
    State(state): State<ServerState>,
    Path((id, item_id)): Path<(String, String)>,
) -> AppResult<Json<Order>> {
    let order = state.store.remove_item(&id, &item_id)?;
    Ok(Json(order))
}

/// PUT /api/orders/:id/items/:item_id/status - 更新菜品状态
pub async fn set_item_status(
    State(state): State<ServerState>,
    Path((id, item_id)): Path<(String, String)>,
    Json(payload): Json<OrderItemStatusUpdate>,
) -> AppResult<Json<Order>> {
    let order = state.store.update_item_status(&id, &item_id, payload)?;
    Ok(Json(order))
}

/// POST /api/orders/:id/kot - 发送厨房单据
pub async fn send_kot(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let order = state.store.send_kot(&id)?;
    Ok(Json(order))
}

/// POST /api/orders/:id/discount - 调整折扣 (重算金额)
pub async fn apply_discount(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<OrderDiscount>,
) -> AppResult<Json<Order>> {
    let order = state.store.apply_discount(&id, payload)?;
    Ok(Json(order))
}
