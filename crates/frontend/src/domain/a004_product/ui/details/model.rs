use crate::shared::http;
use contracts::domain::a004_product::{Product, ProductDto, ProductId};
use contracts::domain::common::AggregateRoot;
use contracts::shared::api_envelope::ApiError;

pub async fn save_form(dto: &ProductDto) -> Result<(), ApiError> {
    match dto.id {
        Some(id) => http::put_unit(&Product::item_path(id), dto).await,
        None => http::post_unit(&Product::list_path(), dto).await,
    }
}

/// Загрузить фото продукта; бэкенд возвращает обновлённый продукт
pub async fn upload_image(id: ProductId, file: &web_sys::File) -> Result<Product, ApiError> {
    http::upload_file(&format!("{}/imagen", Product::item_path(id)), "imagen", file).await
}
