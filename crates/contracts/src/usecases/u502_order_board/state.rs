//! Колонки канбана заказов
//!
//! Бэкенд хранит состояние заказа строкой - названием колонки. Если строка
//! не распознана, колонка вычисляется по дате доставки.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OrderState {
    #[serde(rename = "Entregas de Hoy")]
    DeliverToday,
    #[serde(rename = "Entregas para Mañana")]
    DeliverTomorrow,
    #[serde(rename = "Entregas Pasado Mañana")]
    DeliverDayAfter,
    #[serde(rename = "Entregas esta Semana")]
    DeliverThisWeek,
    #[serde(rename = "Entregas Próxima Semana")]
    DeliverNextWeek,
    #[serde(rename = "Entregas Futuras")]
    DeliverLater,
    #[serde(rename = "Pendientes sin Fecha")]
    Undated,
    #[serde(rename = "En Proceso")]
    InProgress,
    #[serde(rename = "Listo para Despacho")]
    ReadyToDispatch,
    #[serde(rename = "Despachados")]
    Dispatched,
}

impl OrderState {
    pub const ALL: [OrderState; 10] = [
        OrderState::DeliverToday,
        OrderState::DeliverTomorrow,
        OrderState::DeliverDayAfter,
        OrderState::DeliverThisWeek,
        OrderState::DeliverNextWeek,
        OrderState::DeliverLater,
        OrderState::Undated,
        OrderState::InProgress,
        OrderState::ReadyToDispatch,
        OrderState::Dispatched,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            OrderState::DeliverToday => "Entregas de Hoy",
            OrderState::DeliverTomorrow => "Entregas para Mañana",
            OrderState::DeliverDayAfter => "Entregas Pasado Mañana",
            OrderState::DeliverThisWeek => "Entregas esta Semana",
            OrderState::DeliverNextWeek => "Entregas Próxima Semana",
            OrderState::DeliverLater => "Entregas Futuras",
            OrderState::Undated => "Pendientes sin Fecha",
            OrderState::InProgress => "En Proceso",
            OrderState::ReadyToDispatch => "Listo para Despacho",
            OrderState::Dispatched => "Despachados",
        }
    }

    /// Распознать строку состояния (без учёта регистра и пробелов по краям)
    pub fn from_label(raw: &str) -> Option<OrderState> {
        let needle = raw.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        Self::ALL
            .into_iter()
            .find(|s| s.label().to_lowercase() == needle)
    }

    /// Колонка, в которой заказ ждёт доставки по дате
    pub fn is_date_bucket(&self) -> bool {
        matches!(
            self,
            OrderState::DeliverToday
                | OrderState::DeliverTomorrow
                | OrderState::DeliverDayAfter
                | OrderState::DeliverThisWeek
                | OrderState::DeliverNextWeek
                | OrderState::DeliverLater
                | OrderState::Undated
        )
    }

    /// CSS-модификатор заголовка колонки
    pub fn accent(&self) -> &'static str {
        match self {
            OrderState::DeliverToday => "today",
            OrderState::DeliverTomorrow | OrderState::DeliverDayAfter => "soon",
            OrderState::DeliverThisWeek
            | OrderState::DeliverNextWeek
            | OrderState::DeliverLater => "later",
            OrderState::Undated => "undated",
            OrderState::InProgress => "progress",
            OrderState::ReadyToDispatch => "ready",
            OrderState::Dispatched => "done",
        }
    }
}

impl std::fmt::Display for OrderState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Колонка по дате доставки относительно `today`
///
/// Неделя считается с понедельника по воскресенье. Просроченные заказы
/// попадают в "Entregas de Hoy".
pub fn date_bucket(delivery: Option<NaiveDate>, today: NaiveDate) -> OrderState {
    let Some(date) = delivery else {
        return OrderState::Undated;
    };
    let days = (date - today).num_days();
    let end_of_week = today + Duration::days(6 - today.weekday().num_days_from_monday() as i64);
    let end_of_next_week = end_of_week + Duration::days(7);

    match days {
        d if d <= 0 => OrderState::DeliverToday,
        1 => OrderState::DeliverTomorrow,
        2 => OrderState::DeliverDayAfter,
        _ if date <= end_of_week => OrderState::DeliverThisWeek,
        _ if date <= end_of_next_week => OrderState::DeliverNextWeek,
        _ => OrderState::DeliverLater,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_from_label_is_lenient() {
        assert_eq!(
            OrderState::from_label("  en proceso "),
            Some(OrderState::InProgress)
        );
        assert_eq!(
            OrderState::from_label("Entregas para Mañana"),
            Some(OrderState::DeliverTomorrow)
        );
        assert_eq!(OrderState::from_label(""), None);
        assert_eq!(OrderState::from_label("Cancelado"), None);
    }

    #[test]
    fn test_labels_round_trip() {
        for state in OrderState::ALL {
            assert_eq!(OrderState::from_label(state.label()), Some(state));
        }
    }

    #[test]
    fn test_serde_uses_label() {
        let json = serde_json::to_string(&OrderState::ReadyToDispatch).unwrap();
        assert_eq!(json, "\"Listo para Despacho\"");
    }

    #[test]
    fn test_date_buckets_from_monday() {
        // 2026-10-12 - понедельник
        let today = d(2026, 10, 12);
        assert_eq!(date_bucket(None, today), OrderState::Undated);
        assert_eq!(date_bucket(Some(d(2026, 10, 10)), today), OrderState::DeliverToday);
        assert_eq!(date_bucket(Some(today), today), OrderState::DeliverToday);
        assert_eq!(date_bucket(Some(d(2026, 10, 13)), today), OrderState::DeliverTomorrow);
        assert_eq!(date_bucket(Some(d(2026, 10, 14)), today), OrderState::DeliverDayAfter);
        assert_eq!(date_bucket(Some(d(2026, 10, 18)), today), OrderState::DeliverThisWeek);
        assert_eq!(date_bucket(Some(d(2026, 10, 19)), today), OrderState::DeliverNextWeek);
        assert_eq!(date_bucket(Some(d(2026, 10, 25)), today), OrderState::DeliverNextWeek);
        assert_eq!(date_bucket(Some(d(2026, 10, 26)), today), OrderState::DeliverLater);
    }

    #[test]
    fn test_saturday_day_after_lands_next_week() {
        // 2026-10-17 - суббота: +3 дня уже следующая неделя
        let today = d(2026, 10, 17);
        assert_eq!(date_bucket(Some(d(2026, 10, 19)), today), OrderState::DeliverDayAfter);
        assert_eq!(date_bucket(Some(d(2026, 10, 20)), today), OrderState::DeliverNextWeek);
    }
}
