use crate::shared::http;
use contracts::domain::a004_product::Product;
use contracts::domain::a005_order::{Order, OrderDto};
use contracts::domain::common::AggregateRoot;
use contracts::shared::api_envelope::ApiError;

/// Для выбора в форме нужны только активные продукты
pub async fn fetch_products() -> Result<Vec<Product>, ApiError> {
    let products: Vec<Product> = http::get_json(&Product::list_path()).await?;
    Ok(products.into_iter().filter(|p| p.active).collect())
}

pub async fn create_order(dto: &OrderDto) -> Result<(), ApiError> {
    http::post_unit(&Order::list_path(), dto).await
}
