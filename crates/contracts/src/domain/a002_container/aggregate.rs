use crate::domain::common::AggregateRoot;
use crate::shared::editable::{EditableField, EditableRecord};
use crate::shared::serde_helpers::null_as_default;
use crate::shared::validation::{parse_amount, parse_count, ValidationError, ValidationRules};
use serde::{Deserialize, Serialize};
use serde_json::json;

crate::aggregate_id!(ContainerId);

/// Envase: florero, caja, canasto
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Container {
    pub id: ContainerId,

    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "tipo", default, deserialize_with = "null_as_default")]
    pub kind: String,

    #[serde(rename = "costo_unitario", default, deserialize_with = "null_as_default")]
    pub unit_cost: f64,

    #[serde(rename = "stock", default, deserialize_with = "null_as_default")]
    pub stock: i32,
}

impl AggregateRoot for Container {
    type Id = ContainerId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn description(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "inventario/envases"
    }

    fn element_name() -> &'static str {
        "Envase"
    }

    fn list_name() -> &'static str {
        "Envases"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerField {
    Name,
    Kind,
    UnitCost,
    Stock,
}

impl EditableField for ContainerField {
    fn key(&self) -> &'static str {
        match self {
            ContainerField::Name => "nombre",
            ContainerField::Kind => "tipo",
            ContainerField::UnitCost => "costo_unitario",
            ContainerField::Stock => "stock",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ContainerField::Name => "Nombre",
            ContainerField::Kind => "Tipo",
            ContainerField::UnitCost => "Costo unitario",
            ContainerField::Stock => "Stock",
        }
    }

    fn is_numeric(&self) -> bool {
        matches!(self, ContainerField::UnitCost | ContainerField::Stock)
    }
}

const CONTAINER_FIELDS: &[ContainerField] = &[
    ContainerField::Name,
    ContainerField::Kind,
    ContainerField::UnitCost,
    ContainerField::Stock,
];

impl EditableRecord for Container {
    type Field = ContainerField;
    type Draft = ContainerDto;

    fn fields() -> &'static [Self::Field] {
        CONTAINER_FIELDS
    }

    fn field_value(&self, field: Self::Field) -> String {
        match field {
            ContainerField::Name => self.name.clone(),
            ContainerField::Kind => self.kind.clone(),
            ContainerField::UnitCost => format!("{}", self.unit_cost),
            ContainerField::Stock => self.stock.to_string(),
        }
    }

    fn set_field(&mut self, field: Self::Field, raw: &str) -> Result<(), ValidationError> {
        match field {
            ContainerField::Name => self.name = raw.trim().to_string(),
            ContainerField::Kind => self.kind = raw.trim().to_string(),
            ContainerField::UnitCost => self.unit_cost = parse_amount(raw, "Costo unitario")?,
            ContainerField::Stock => self.stock = parse_count(raw, "Stock")? as i32,
        }
        Ok(())
    }

    fn field_json(&self, field: Self::Field) -> serde_json::Value {
        match field {
            ContainerField::Name => json!(self.name),
            ContainerField::Kind => json!(self.kind),
            ContainerField::UnitCost => json!(self.unit_cost),
            ContainerField::Stock => json!(self.stock),
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        ValidationRules::required()
            .with_max_length(80)
            .validate_string(&self.name, "Nombre")?;
        ValidationRules::non_negative().validate_number(self.unit_cost, "Costo unitario")
    }

    fn draft(name: &str) -> Result<Self::Draft, ValidationError> {
        let dto = ContainerDto {
            name: name.trim().to_string(),
            ..ContainerDto::default()
        };
        ValidationRules::required().validate_string(&dto.name, "Nombre")?;
        Ok(dto)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContainerDto {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "tipo")]
    pub kind: String,
    #[serde(rename = "costo_unitario")]
    pub unit_cost: f64,
    #[serde(rename = "stock")]
    pub stock: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_rejects_text() {
        let florero = Container {
            id: ContainerId(1),
            name: "Florero vidrio".into(),
            kind: "Florero".into(),
            unit_cost: 3000.0,
            stock: 4,
        };
        assert_eq!(
            florero.edit_cell(ContainerField::Stock, "cuatro"),
            Err(ValidationError::NotANumber { field: "Stock" })
        );
    }

    #[test]
    fn test_draft_requires_name() {
        assert!(Container::draft("").is_err());
        assert_eq!(Container::draft(" Caja ").unwrap().name, "Caja");
    }
}
