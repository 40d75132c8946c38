use crate::domain::common::AggregateRoot;
use crate::shared::serde_helpers::null_as_default;
use crate::shared::validation::{ValidationError, ValidationRules};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

crate::aggregate_id!(EventId);

/// Evento: boda, funeral, corporativo - cotización por partidas de costo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,

    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "cliente", default, deserialize_with = "null_as_default")]
    pub customer: String,

    #[serde(rename = "fecha", default)]
    pub date: Option<NaiveDate>,

    #[serde(rename = "lugar", default, deserialize_with = "null_as_default")]
    pub venue: String,

    #[serde(rename = "items", default, deserialize_with = "null_as_default")]
    pub items: Vec<EventItem>,

    #[serde(rename = "margen_porcentaje", default, deserialize_with = "null_as_default")]
    pub margin_percent: f64,

    #[serde(rename = "precio_propuesto", default)]
    pub proposed_price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventItem {
    #[serde(rename = "descripcion")]
    pub description: String,

    #[serde(rename = "cantidad", default, deserialize_with = "null_as_default")]
    pub quantity: u32,

    #[serde(rename = "costo_unitario", default, deserialize_with = "null_as_default")]
    pub unit_cost: f64,
}

impl AggregateRoot for Event {
    type Id = EventId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn description(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a006"
    }

    fn collection_name() -> &'static str {
        "eventos"
    }

    fn element_name() -> &'static str {
        "Evento"
    }

    fn list_name() -> &'static str {
        "Eventos"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EventId>,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "cliente")]
    pub customer: String,
    #[serde(rename = "fecha")]
    pub date: Option<NaiveDate>,
    #[serde(rename = "lugar")]
    pub venue: String,
    #[serde(rename = "items")]
    pub items: Vec<EventItem>,
    #[serde(rename = "margen_porcentaje")]
    pub margin_percent: f64,
    #[serde(rename = "precio_propuesto")]
    pub proposed_price: Option<f64>,
}

impl From<&Event> for EventDto {
    fn from(e: &Event) -> Self {
        Self {
            id: Some(e.id),
            name: e.name.clone(),
            customer: e.customer.clone(),
            date: e.date,
            venue: e.venue.clone(),
            items: e.items.clone(),
            margin_percent: e.margin_percent,
            proposed_price: e.proposed_price,
        }
    }
}

impl EventDto {
    pub fn validate(&self) -> Result<(), ValidationError> {
        ValidationRules::required()
            .with_max_length(120)
            .validate_string(&self.name, "Nombre del evento")?;
        ValidationRules::required().validate_string(&self.customer, "Cliente")?;
        ValidationRules::non_negative().validate_number(self.margin_percent, "Margen")?;
        for item in &self.items {
            ValidationRules::required().validate_string(&item.description, "Descripción")?;
            ValidationRules::positive().validate_number(item.quantity as f64, "Cantidad")?;
            ValidationRules::non_negative().validate_number(item.unit_cost, "Costo unitario")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_quantity_must_be_positive() {
        let dto = EventDto {
            name: "Boda Soto".into(),
            customer: "Familia Soto".into(),
            items: vec![EventItem {
                description: "Centro de mesa".into(),
                quantity: 0,
                unit_cost: 12000.0,
            }],
            ..EventDto::default()
        };
        assert!(dto.validate().is_err());
    }
}
