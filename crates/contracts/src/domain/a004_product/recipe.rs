//! Сохранённый рецепт продукта - как его отдаёт и принимает бэкенд

use crate::shared::serde_helpers::null_as_default;
use super::aggregate::{ProductColorId, ProductId};
use crate::domain::a001_flower::FlowerId;
use crate::domain::a002_container::ContainerId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(rename = "producto_id")]
    pub product_id: ProductId,

    #[serde(rename = "colores", default, deserialize_with = "null_as_default")]
    pub colors: Vec<RecipeColor>,

    #[serde(rename = "envase_id", default)]
    pub container_id: Option<ContainerId>,

    /// Цена продажи, сохранённая вместе с рецептом (если отличается от прайса)
    #[serde(rename = "precio_venta", default)]
    pub sale_price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeColor {
    #[serde(rename = "color_id")]
    pub color_id: ProductColorId,

    #[serde(rename = "color_nombre", default, deserialize_with = "null_as_default")]
    pub color_name: String,

    #[serde(rename = "flores", default, deserialize_with = "null_as_default")]
    pub flowers: Vec<RecipeFlower>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeFlower {
    #[serde(rename = "flor_id")]
    pub flower_id: FlowerId,

    #[serde(rename = "cantidad", default, deserialize_with = "null_as_default")]
    pub quantity: u32,

    /// Первый (основной) цветок группы
    #[serde(rename = "is_default", default, deserialize_with = "null_as_default")]
    pub is_default: bool,
}

impl Recipe {
    /// Пустой рецепт: у продукта ещё ничего не сохранено
    pub fn empty(product_id: ProductId) -> Self {
        Self {
            product_id,
            colors: Vec::new(),
            container_id: None,
            sale_price: None,
        }
    }

    pub fn color(&self, color_id: ProductColorId) -> Option<&RecipeColor> {
        self.colors.iter().find(|c| c.color_id == color_id)
    }
}
