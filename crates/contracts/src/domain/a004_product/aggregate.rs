use crate::domain::common::AggregateRoot;
use crate::shared::serde_helpers::null_as_default;
use crate::shared::validation::{ValidationError, ValidationRules};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Types
// ============================================================================
crate::aggregate_id!(ProductId);
crate::aggregate_id!(ProductColorId);

// ============================================================================
// Aggregate Root
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,

    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "descripcion", default, deserialize_with = "null_as_default")]
    pub details: String,

    /// Цена по прайсу; стартовая цена продажи в симуляторе
    #[serde(rename = "precio", default, deserialize_with = "null_as_default")]
    pub price: f64,

    #[serde(rename = "categoria", default, deserialize_with = "null_as_default")]
    pub category: String,

    #[serde(rename = "imagen_url", default)]
    pub image_url: Option<String>,

    /// Слоты рецепта: по одному на цвет
    #[serde(rename = "colores", default, deserialize_with = "null_as_default")]
    pub colors: Vec<ProductColor>,

    #[serde(rename = "activo", default = "default_true")]
    pub active: bool,
}

fn default_true() -> bool {
    true
}

/// Цветовая группа продукта ("Rojo", "Blanco")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductColor {
    pub id: ProductColorId,
    #[serde(rename = "nombre")]
    pub name: String,
}

impl Product {
    pub fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.trim().to_lowercase();
        needle.is_empty()
            || self.name.to_lowercase().contains(&needle)
            || self.category.to_lowercase().contains(&needle)
    }
}

impl AggregateRoot for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn description(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "productos"
    }

    fn element_name() -> &'static str {
        "Producto"
    }

    fn list_name() -> &'static str {
        "Productos"
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub details: String,
    #[serde(rename = "precio")]
    pub price: f64,
    #[serde(rename = "categoria")]
    pub category: String,
    /// Названия цветовых групп; бэкенд сам назначает им ID
    #[serde(rename = "colores")]
    pub colors: Vec<String>,
    #[serde(rename = "activo")]
    pub active: bool,
}

impl From<&Product> for ProductDto {
    fn from(p: &Product) -> Self {
        Self {
            id: Some(p.id),
            name: p.name.clone(),
            details: p.details.clone(),
            price: p.price,
            category: p.category.clone(),
            colors: p.colors.iter().map(|c| c.name.clone()).collect(),
            active: p.active,
        }
    }
}

impl ProductDto {
    pub fn new_for_insert() -> Self {
        Self {
            active: true,
            ..Self::default()
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        ValidationRules::required()
            .with_max_length(120)
            .validate_string(&self.name, "Nombre")?;
        ValidationRules::non_negative().validate_number(self.price, "Precio")?;
        for color in &self.colors {
            ValidationRules::required()
                .with_max_length(40)
                .validate_string(color, "Color")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_defaults_active() {
        let json = r#"{"id":1,"nombre":"Ramo 12 rosas","precio":15000,"colores":[{"id":4,"nombre":"Rojo"}]}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.active);
        assert_eq!(product.colors[0].id, ProductColorId(4));
    }

    #[test]
    fn test_dto_rejects_blank_color() {
        let dto = ProductDto {
            name: "Ramo".into(),
            colors: vec!["Rojo".into(), " ".into()],
            ..ProductDto::new_for_insert()
        };
        assert_eq!(dto.validate(), Err(ValidationError::Required("Color")));
    }

    #[test]
    fn test_filter_matches_category() {
        let product = Product {
            id: ProductId(1),
            name: "Caja Amor".into(),
            details: String::new(),
            price: 0.0,
            category: "Cajas".into(),
            image_url: None,
            colors: vec![],
            active: true,
        };
        assert!(product.matches_filter("caja"));
        assert!(product.matches_filter(""));
        assert!(!product.matches_filter("ramo"));
    }
}
