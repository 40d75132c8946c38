use crate::domain::a003_supplier::SupplierId;
use crate::domain::common::AggregateRoot;
use crate::shared::editable::{EditableField, EditableRecord};
use crate::shared::serde_helpers::null_as_default;
use crate::shared::validation::{
    parse_amount, parse_count, ValidationError, ValidationRules,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

// ============================================================================
// ID Type
// ============================================================================
crate::aggregate_id!(FlowerId);

// ============================================================================
// Aggregate Root
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flower {
    pub id: FlowerId,

    #[serde(rename = "nombre")]
    pub name: String,

    /// Свободный текст: "Rojo", "rojo intenso", "Blanco/Crema"
    #[serde(rename = "color", default, deserialize_with = "null_as_default")]
    pub color: String,

    #[serde(rename = "costo_unitario", default, deserialize_with = "null_as_default")]
    pub unit_cost: f64,

    #[serde(rename = "stock", default, deserialize_with = "null_as_default")]
    pub stock: i32,

    #[serde(rename = "stock_minimo", default, deserialize_with = "null_as_default")]
    pub min_stock: i32,

    #[serde(rename = "proveedor_id", default)]
    pub supplier_id: Option<SupplierId>,
}

impl Flower {
    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.min_stock
    }
}

impl AggregateRoot for Flower {
    type Id = FlowerId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn description(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "inventario/flores"
    }

    fn element_name() -> &'static str {
        "Flor"
    }

    fn list_name() -> &'static str {
        "Flores"
    }
}

// ============================================================================
// Inline edit
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowerField {
    Name,
    Color,
    UnitCost,
    Stock,
    MinStock,
}

impl EditableField for FlowerField {
    fn key(&self) -> &'static str {
        match self {
            FlowerField::Name => "nombre",
            FlowerField::Color => "color",
            FlowerField::UnitCost => "costo_unitario",
            FlowerField::Stock => "stock",
            FlowerField::MinStock => "stock_minimo",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            FlowerField::Name => "Nombre",
            FlowerField::Color => "Color",
            FlowerField::UnitCost => "Costo unitario",
            FlowerField::Stock => "Stock",
            FlowerField::MinStock => "Stock mínimo",
        }
    }

    fn is_numeric(&self) -> bool {
        matches!(
            self,
            FlowerField::UnitCost | FlowerField::Stock | FlowerField::MinStock
        )
    }
}

const FLOWER_FIELDS: &[FlowerField] = &[
    FlowerField::Name,
    FlowerField::Color,
    FlowerField::UnitCost,
    FlowerField::Stock,
    FlowerField::MinStock,
];

impl EditableRecord for Flower {
    type Field = FlowerField;
    type Draft = FlowerDto;

    fn fields() -> &'static [Self::Field] {
        FLOWER_FIELDS
    }

    fn field_value(&self, field: Self::Field) -> String {
        match field {
            FlowerField::Name => self.name.clone(),
            FlowerField::Color => self.color.clone(),
            FlowerField::UnitCost => format!("{}", self.unit_cost),
            FlowerField::Stock => self.stock.to_string(),
            FlowerField::MinStock => self.min_stock.to_string(),
        }
    }

    fn set_field(&mut self, field: Self::Field, raw: &str) -> Result<(), ValidationError> {
        match field {
            FlowerField::Name => self.name = raw.trim().to_string(),
            FlowerField::Color => self.color = raw.trim().to_string(),
            FlowerField::UnitCost => self.unit_cost = parse_amount(raw, "Costo unitario")?,
            FlowerField::Stock => self.stock = parse_count(raw, "Stock")? as i32,
            FlowerField::MinStock => self.min_stock = parse_count(raw, "Stock mínimo")? as i32,
        }
        Ok(())
    }

    fn field_json(&self, field: Self::Field) -> serde_json::Value {
        match field {
            FlowerField::Name => json!(self.name),
            FlowerField::Color => json!(self.color),
            FlowerField::UnitCost => json!(self.unit_cost),
            FlowerField::Stock => json!(self.stock),
            FlowerField::MinStock => json!(self.min_stock),
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        ValidationRules::required()
            .with_max_length(80)
            .validate_string(&self.name, "Nombre")?;
        ValidationRules::none()
            .with_max_length(40)
            .validate_string(&self.color, "Color")?;
        ValidationRules::non_negative().validate_number(self.unit_cost, "Costo unitario")?;
        Ok(())
    }

    fn draft(name: &str) -> Result<Self::Draft, ValidationError> {
        let dto = FlowerDto {
            name: name.trim().to_string(),
            ..FlowerDto::default()
        };
        dto.validate()?;
        Ok(dto)
    }

    fn needs_attention(&self) -> bool {
        self.is_low_stock()
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlowerDto {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "color")]
    pub color: String,
    #[serde(rename = "costo_unitario")]
    pub unit_cost: f64,
    #[serde(rename = "stock")]
    pub stock: i32,
    #[serde(rename = "stock_minimo")]
    pub min_stock: i32,
    #[serde(rename = "proveedor_id")]
    pub supplier_id: Option<SupplierId>,
}

impl FlowerDto {
    pub fn validate(&self) -> Result<(), ValidationError> {
        ValidationRules::required()
            .with_max_length(80)
            .validate_string(&self.name, "Nombre")?;
        ValidationRules::non_negative().validate_number(self.unit_cost, "Costo unitario")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rosa() -> Flower {
        Flower {
            id: FlowerId(1),
            name: "Rosa".into(),
            color: "Rojo".into(),
            unit_cost: 500.0,
            stock: 120,
            min_stock: 20,
            supplier_id: None,
        }
    }

    #[test]
    fn test_deserialize_backend_shape() {
        let json = r#"{"id":3,"nombre":"Lilium","color":"Blanco","costo_unitario":800,"stock":5,"stock_minimo":10}"#;
        let flower: Flower = serde_json::from_str(json).unwrap();
        assert_eq!(flower.id, FlowerId(3));
        assert_eq!(flower.unit_cost, 800.0);
        assert!(flower.is_low_stock());
    }

    #[test]
    fn test_null_color_and_cost_read_as_default() {
        let json = r#"[{"id":4,"nombre":"Gerbera","color":null,"costo_unitario":null,"stock":null},
                       {"id":5,"nombre":"Rosa","color":"Rojo","costo_unitario":500}]"#;
        let flowers: Vec<Flower> = serde_json::from_str(json).unwrap();
        assert_eq!(flowers[0].color, "");
        assert_eq!(flowers[0].unit_cost, 0.0);
        assert_eq!(flowers[0].stock, 0);
        assert_eq!(flowers[1].unit_cost, 500.0);
    }

    #[test]
    fn test_edit_cell_builds_single_field_patch() {
        let (updated, patch) = rosa().edit_cell(FlowerField::UnitCost, "650").unwrap();
        assert_eq!(updated.unit_cost, 650.0);
        assert_eq!(patch, json!({ "costo_unitario": 650.0 }));
    }

    #[test]
    fn test_edit_cell_rejects_blank_name() {
        assert_eq!(
            rosa().edit_cell(FlowerField::Name, "  "),
            Err(ValidationError::Required("Nombre"))
        );
    }

    #[test]
    fn test_collection_paths() {
        assert_eq!(Flower::list_path(), "/inventario/flores");
        assert_eq!(Flower::item_path(FlowerId(9)), "/inventario/flores/9");
        assert_eq!(Flower::tab_key(), "a001_flores");
    }
}
