use crate::domain::a004_product::ProductId;
use crate::domain::common::AggregateRoot;
use crate::shared::serde_helpers::null_as_default;
use crate::shared::validation::{ValidationError, ValidationRules};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================
crate::aggregate_id!(OrderId);

// ============================================================================
// Aggregate Root
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,

    #[serde(rename = "cliente_nombre")]
    pub customer_name: String,

    #[serde(rename = "cliente_telefono", default, deserialize_with = "null_as_default")]
    pub customer_phone: String,

    #[serde(rename = "direccion", default, deserialize_with = "null_as_default")]
    pub address: String,

    #[serde(rename = "producto_id", default)]
    pub product_id: Option<ProductId>,

    #[serde(rename = "producto_nombre", default, deserialize_with = "null_as_default")]
    pub product_name: String,

    #[serde(rename = "cantidad", default = "default_quantity")]
    pub quantity: u32,

    #[serde(rename = "fecha_entrega", default)]
    pub delivery_date: Option<NaiveDate>,

    /// Имя колонки канбана как его хранит бэкенд ("Entregas de Hoy", ...)
    #[serde(rename = "estado", default, deserialize_with = "null_as_default")]
    pub state: String,

    #[serde(rename = "urgente", default, deserialize_with = "null_as_default")]
    pub urgent: bool,

    /// Фото-подтверждение доставки
    #[serde(rename = "foto_url", default)]
    pub photo_url: Option<String>,

    #[serde(rename = "notas", default, deserialize_with = "null_as_default")]
    pub notes: String,

    #[serde(rename = "total", default, deserialize_with = "null_as_default")]
    pub total: f64,

    /// Рецепт подтверждён мастерской, остатки списаны
    #[serde(rename = "receta_confirmada", default, deserialize_with = "null_as_default")]
    pub recipe_confirmed: bool,
}

fn default_quantity() -> u32 {
    1
}

impl AggregateRoot for Order {
    type Id = OrderId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn description(&self) -> &str {
        &self.customer_name
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "pedidos"
    }

    fn element_name() -> &'static str {
        "Pedido"
    }

    fn list_name() -> &'static str {
        "Pedidos"
    }
}

// ============================================================================
// DTO
// ============================================================================

/// Форма нового заказа
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderDto {
    #[serde(rename = "cliente_nombre")]
    pub customer_name: String,
    #[serde(rename = "cliente_telefono")]
    pub customer_phone: String,
    #[serde(rename = "direccion")]
    pub address: String,
    #[serde(rename = "producto_id")]
    pub product_id: Option<ProductId>,
    #[serde(rename = "cantidad")]
    pub quantity: u32,
    #[serde(rename = "fecha_entrega")]
    pub delivery_date: Option<NaiveDate>,
    #[serde(rename = "urgente")]
    pub urgent: bool,
    #[serde(rename = "notas")]
    pub notes: String,
}

impl OrderDto {
    pub fn new_for_insert() -> Self {
        Self {
            quantity: 1,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        ValidationRules::required()
            .with_max_length(120)
            .validate_string(&self.customer_name, "Nombre del cliente")?;
        ValidationRules::required()
            .with_min_length(6)
            .with_max_length(20)
            .validate_string(&self.customer_phone, "Teléfono")?;
        if self.product_id.is_none() {
            return Err(ValidationError::Required("Producto"));
        }
        ValidationRules::positive().validate_number(self.quantity as f64, "Cantidad")?;
        Ok(())
    }
}

/// Ответ загрузки фото (`{ success, data, message }`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadedPhoto {
    #[serde(rename = "url")]
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_dto() -> OrderDto {
        OrderDto {
            customer_name: "María Pérez".into(),
            customer_phone: "+56911112222".into(),
            product_id: Some(ProductId(1)),
            ..OrderDto::new_for_insert()
        }
    }

    #[test]
    fn test_null_fields_do_not_break_order_list() {
        let body = r#"{"success":true,"data":[
            {"id":1,"cliente_nombre":"Ana","notas":null,"direccion":null,"estado":null,"total":null},
            {"id":2,"cliente_nombre":"Luis","notas":"Tarjeta"}
        ]}"#;
        let orders: Vec<Order> = crate::shared::api_envelope::decode_envelope(body).unwrap();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].notes, "");
        assert_eq!(orders[0].address, "");
        assert_eq!(orders[0].state, "");
        assert_eq!(orders[0].total, 0.0);
        assert_eq!(orders[1].notes, "Tarjeta");
    }

    #[test]
    fn test_valid_order() {
        assert!(valid_dto().validate().is_ok());
    }

    #[test]
    fn test_phone_required() {
        let dto = OrderDto {
            customer_phone: String::new(),
            ..valid_dto()
        };
        assert_eq!(dto.validate(), Err(ValidationError::Required("Teléfono")));
    }

    #[test]
    fn test_quantity_must_be_positive() {
        let dto = OrderDto {
            quantity: 0,
            ..valid_dto()
        };
        assert!(matches!(
            dto.validate(),
            Err(ValidationError::NotAbove { field: "Cantidad", .. })
        ));
    }

    #[test]
    fn test_order_deserializes_date() {
        let json = r#"{"id":10,"cliente_nombre":"Ana","fecha_entrega":"2026-02-14","estado":"En Proceso"}"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.delivery_date, NaiveDate::from_ymd_opt(2026, 2, 14));
        assert_eq!(order.quantity, 1);
        assert!(!order.urgent);
    }
}
