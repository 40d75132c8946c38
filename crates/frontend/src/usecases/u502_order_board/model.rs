use crate::shared::http;
use contracts::domain::a005_order::{Order, OrderId, UploadedPhoto, UrgentPatch};
use contracts::domain::common::AggregateRoot;
use contracts::shared::api_envelope::ApiError;
use contracts::usecases::u502_order_board::{BoardQuery, MoveOrderRequest};

fn order_action(id: OrderId, action: &str) -> String {
    format!("{}/{}", Order::item_path(id), action)
}

pub async fn fetch_orders(query: BoardQuery) -> Result<Vec<Order>, ApiError> {
    let path = http::with_query(&Order::list_path(), &query)?;
    http::get_json(&path).await
}

pub async fn move_order(id: OrderId, request: &MoveOrderRequest) -> Result<(), ApiError> {
    http::put_unit(&order_action(id, "estado"), request).await
}

pub async fn set_urgent(id: OrderId, urgent: bool) -> Result<(), ApiError> {
    http::put_unit(&order_action(id, "urgente"), &UrgentPatch { urgent }).await
}

/// Подтвердить рецепт: бэкенд списывает цветы со склада
pub async fn confirm_recipe(id: OrderId) -> Result<(), ApiError> {
    http::post_unit(&order_action(id, "confirmar-receta"), &serde_json::json!({})).await
}

pub async fn upload_photo(id: OrderId, file: &web_sys::File) -> Result<UploadedPhoto, ApiError> {
    http::upload_file(&order_action(id, "foto"), "foto", file).await
}
