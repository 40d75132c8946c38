use crate::shared::http;
use contracts::domain::a001_flower::Flower;
use contracts::domain::a002_container::Container;
use contracts::domain::a004_product::{Product, ProductId, Recipe};
use contracts::domain::common::AggregateRoot;
use contracts::shared::api_envelope::ApiError;
use contracts::usecases::u501_cost_simulation::SimulationCatalog;

fn recipe_path(product_id: ProductId) -> String {
    format!("{}/receta", Product::item_path(product_id))
}

/// Рецепт продукта; продукт без рецепта получает пустой
pub async fn fetch_recipe(product_id: ProductId) -> Result<Recipe, ApiError> {
    match http::get_json::<Recipe>(&recipe_path(product_id)).await {
        Err(ApiError::MissingData) => Ok(Recipe::empty(product_id)),
        other => other,
    }
}

/// Справочники цен для симуляции: цветы и упаковка
pub async fn fetch_catalog() -> Result<SimulationCatalog, ApiError> {
    let flowers = http::get_json::<Vec<Flower>>(&Flower::list_path()).await?;
    let containers = http::get_json::<Vec<Container>>(&Container::list_path()).await?;
    Ok(SimulationCatalog {
        flowers,
        containers,
    })
}

pub async fn save_recipe(recipe: &Recipe) -> Result<(), ApiError> {
    http::put_unit(&recipe_path(recipe.product_id), recipe).await
}
