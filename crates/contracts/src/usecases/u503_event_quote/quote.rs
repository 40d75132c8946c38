//! Котировка события: строки затрат и наценка

use crate::domain::a006_event::{EventDto, EventItem};
use crate::shared::validation::{parse_amount, parse_quantity_lenient, sanitize_amount, ValidationError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub enum QuoteAction {
    AddItem,
    RemoveItem(usize),
    SetDescription(usize, String),
    /// Сырое значение из поля ввода
    SetQuantity(usize, String),
    SetUnitCost(usize, String),
    SetMargin(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct QuoteTotals {
    pub total_cost: f64,
    pub margin_percent: f64,
    pub proposed_price: f64,
    pub margin: f64,
}

/// Редактируемая котировка
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EventQuote {
    pub items: Vec<EventItem>,
    pub margin_percent: f64,
}

impl EventQuote {
    pub fn from_dto(dto: &EventDto) -> Self {
        Self {
            items: dto.items.clone(),
            margin_percent: sanitize_amount(dto.margin_percent),
        }
    }

    /// Применить действие формы
    ///
    /// Некорректное количество становится 0; некорректная сумма - ошибка,
    /// состояние при этом не меняется.
    pub fn apply(&mut self, action: QuoteAction) -> Result<(), ValidationError> {
        match action {
            QuoteAction::AddItem => self.items.push(EventItem {
                description: String::new(),
                quantity: 1,
                unit_cost: 0.0,
            }),
            QuoteAction::RemoveItem(idx) => {
                if idx < self.items.len() {
                    self.items.remove(idx);
                }
            }
            QuoteAction::SetDescription(idx, text) => {
                if let Some(item) = self.items.get_mut(idx) {
                    item.description = text;
                }
            }
            QuoteAction::SetQuantity(idx, raw) => {
                if let Some(item) = self.items.get_mut(idx) {
                    item.quantity = parse_quantity_lenient(&raw);
                }
            }
            QuoteAction::SetUnitCost(idx, raw) => {
                let cost = sanitize_amount(parse_amount(&raw, "Costo unitario")?);
                if let Some(item) = self.items.get_mut(idx) {
                    item.unit_cost = cost;
                }
            }
            QuoteAction::SetMargin(raw) => {
                self.margin_percent = sanitize_amount(parse_amount(&raw, "Margen")?);
            }
        }
        Ok(())
    }

    pub fn total_cost(&self) -> f64 {
        self.items.iter().map(item_cost).sum()
    }

    pub fn totals(&self) -> QuoteTotals {
        let total_cost = self.total_cost();
        let proposed_price = proposed_price(total_cost, self.margin_percent);
        QuoteTotals {
            total_cost,
            margin_percent: self.margin_percent,
            proposed_price,
            margin: proposed_price - total_cost,
        }
    }

    /// Перенести котировку в DTO события для сохранения
    pub fn write_into(&self, dto: &mut EventDto) {
        dto.items = self.items.clone();
        dto.margin_percent = self.margin_percent;
        dto.proposed_price = Some(self.totals().proposed_price);
    }
}

pub fn item_cost(item: &EventItem) -> f64 {
    item.quantity as f64 * item.unit_cost
}

/// Цена с наценкой: cost × (1 + m/100)
pub fn proposed_price(total_cost: f64, margin_percent: f64) -> f64 {
    total_cost * (1.0 + margin_percent / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote() -> EventQuote {
        let mut q = EventQuote::default();
        q.apply(QuoteAction::AddItem).unwrap();
        q.apply(QuoteAction::SetDescription(0, "Centro de mesa".into())).unwrap();
        q.apply(QuoteAction::SetQuantity(0, "10".into())).unwrap();
        q.apply(QuoteAction::SetUnitCost(0, "1000".into())).unwrap();
        q.apply(QuoteAction::AddItem).unwrap();
        q.apply(QuoteAction::SetQuantity(1, "2".into())).unwrap();
        q.apply(QuoteAction::SetUnitCost(1, "5000".into())).unwrap();
        q.apply(QuoteAction::SetMargin("30".into())).unwrap();
        q
    }

    #[test]
    fn test_markup_quote() {
        let totals = quote().totals();
        assert_eq!(totals.total_cost, 20000.0);
        assert_eq!(totals.proposed_price, 26000.0);
        assert_eq!(totals.margin, 6000.0);
    }

    #[test]
    fn test_remove_item() {
        let mut q = quote();
        q.apply(QuoteAction::RemoveItem(1)).unwrap();
        q.apply(QuoteAction::RemoveItem(7)).unwrap();
        assert_eq!(q.total_cost(), 10000.0);
    }

    #[test]
    fn test_bad_cost_keeps_previous_value() {
        let mut q = quote();
        assert!(q.apply(QuoteAction::SetUnitCost(0, "mil".into())).is_err());
        assert_eq!(q.items[0].unit_cost, 1000.0);
    }

    #[test]
    fn test_write_into_dto() {
        let mut dto = EventDto::default();
        quote().write_into(&mut dto);
        assert_eq!(dto.items.len(), 2);
        assert_eq!(dto.margin_percent, 30.0);
        assert_eq!(dto.proposed_price, Some(26000.0));
    }
}
