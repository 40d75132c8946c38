//! Форма нового заказа как редьюсер

use super::aggregate::OrderDto;
use crate::domain::a004_product::ProductId;
use crate::shared::validation::{parse_quantity_lenient, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub enum OrderFormAction {
    CustomerName(String),
    CustomerPhone(String),
    Address(String),
    Product(Option<ProductId>),
    /// Сырое значение поля количества
    Quantity(String),
    /// Дата из `<input type="date">`; пустая строка сбрасывает дату
    DeliveryDate(String),
    Urgent(bool),
    Notes(String),
    Clear,
}

impl OrderDto {
    /// Применить действие формы. Ошибка только у некорректной даты.
    pub fn apply(&mut self, action: OrderFormAction) -> Result<(), ValidationError> {
        match action {
            OrderFormAction::CustomerName(v) => self.customer_name = v,
            OrderFormAction::CustomerPhone(v) => self.customer_phone = v,
            OrderFormAction::Address(v) => self.address = v,
            OrderFormAction::Product(id) => self.product_id = id,
            OrderFormAction::Quantity(raw) => self.quantity = parse_quantity_lenient(&raw),
            OrderFormAction::DeliveryDate(raw) => {
                let raw = raw.trim();
                self.delivery_date = if raw.is_empty() {
                    None
                } else {
                    Some(
                        NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
                            ValidationError::InvalidDate {
                                field: "Fecha de entrega",
                            }
                        })?,
                    )
                };
            }
            OrderFormAction::Urgent(v) => self.urgent = v,
            OrderFormAction::Notes(v) => self.notes = v,
            OrderFormAction::Clear => *self = OrderDto::new_for_insert(),
        }
        Ok(())
    }
}

/// Тело PUT `/pedidos/{id}/urgente`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UrgentPatch {
    #[serde(rename = "urgente")]
    pub urgent: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_builds_valid_order() {
        let mut dto = OrderDto::new_for_insert();
        for action in [
            OrderFormAction::CustomerName("Ana Rojas".into()),
            OrderFormAction::CustomerPhone("+56922223333".into()),
            OrderFormAction::Product(Some(ProductId(3))),
            OrderFormAction::Quantity("2".into()),
            OrderFormAction::DeliveryDate("2026-10-20".into()),
        ] {
            dto.apply(action).unwrap();
        }
        assert!(dto.validate().is_ok());
        assert_eq!(dto.quantity, 2);
        assert_eq!(dto.delivery_date, NaiveDate::from_ymd_opt(2026, 10, 20));
    }

    #[test]
    fn test_bad_date_rejected_and_blank_clears() {
        let mut dto = OrderDto::new_for_insert();
        assert!(dto
            .apply(OrderFormAction::DeliveryDate("20/10/2026".into()))
            .is_err());
        dto.apply(OrderFormAction::DeliveryDate("2026-10-20".into())).unwrap();
        dto.apply(OrderFormAction::DeliveryDate(" ".into())).unwrap();
        assert_eq!(dto.delivery_date, None);
    }

    #[test]
    fn test_zero_quantity_fails_validation() {
        let mut dto = OrderDto::new_for_insert();
        dto.apply(OrderFormAction::CustomerName("Ana".into())).unwrap();
        dto.apply(OrderFormAction::CustomerPhone("222333444".into())).unwrap();
        dto.apply(OrderFormAction::Product(Some(ProductId(1)))).unwrap();
        dto.apply(OrderFormAction::Quantity("x".into())).unwrap();
        assert!(dto.validate().is_err());
        dto.apply(OrderFormAction::Clear).unwrap();
        assert_eq!(dto, OrderDto::new_for_insert());
    }
}
