use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Запрос отчёта продаж за период (границы включительно)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalesReportRequest {
    #[serde(rename = "desde")]
    pub date_from: NaiveDate,
    #[serde(rename = "hasta")]
    pub date_to: NaiveDate,
}

impl SalesReportRequest {
    /// С первого числа месяца `today` по `today`
    pub fn month_to_date(today: NaiveDate) -> Self {
        Self {
            date_from: today.with_day(1).unwrap_or(today),
            date_to: today,
        }
    }

    /// Последние `days` дней, включая `today`
    pub fn last_days(today: NaiveDate, days: i64) -> Self {
        Self {
            date_from: today - Duration::days(days.max(1) - 1),
            date_to: today,
        }
    }

    /// Поменять границы местами, если пользователь ввёл их наоборот
    pub fn normalized(self) -> Self {
        if self.date_from > self.date_to {
            Self {
                date_from: self.date_to,
                date_to: self.date_from,
            }
        } else {
            self
        }
    }
}

/// Агрегаты продаж, посчитанные бэкендом
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SalesReport {
    #[serde(rename = "total_ventas", default)]
    pub total_sales: f64,
    #[serde(rename = "total_costos", default)]
    pub total_cost: f64,
    #[serde(rename = "cantidad_pedidos", default)]
    pub order_count: u32,
    #[serde(rename = "ticket_promedio", default)]
    pub average_ticket: f64,
    /// Изменение выручки к предыдущему периоду, %
    #[serde(rename = "variacion_ventas", default)]
    pub sales_change_percent: Option<f64>,
    #[serde(rename = "ventas_diarias", default)]
    pub daily: Vec<DailySales>,
    #[serde(rename = "productos_top", default)]
    pub top_products: Vec<ProductSales>,
    #[serde(rename = "por_categoria", default)]
    pub by_category: Vec<CategorySales>,
}

impl SalesReport {
    pub fn gross_margin(&self) -> f64 {
        self.total_sales - self.total_cost
    }

    pub fn gross_margin_percent(&self) -> f64 {
        crate::usecases::u501_cost_simulation::totals::margin_percent(
            self.gross_margin(),
            self.total_sales,
        )
    }

    /// Максимум дневной выручки - масштаб столбчатой диаграммы
    pub fn max_daily(&self) -> f64 {
        self.daily.iter().map(|d| d.total).fold(0.0, f64::max)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySales {
    #[serde(rename = "fecha")]
    pub date: NaiveDate,
    #[serde(rename = "total", default)]
    pub total: f64,
    #[serde(rename = "pedidos", default)]
    pub orders: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSales {
    #[serde(rename = "producto")]
    pub product: String,
    #[serde(rename = "cantidad", default)]
    pub quantity: u32,
    #[serde(rename = "total", default)]
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySales {
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "total", default)]
    pub total: f64,
}

/// Доля значения в процентах от максимума (для ширины столбца)
pub fn bar_width_percent(value: f64, max: f64) -> f64 {
    if max > 0.0 && value > 0.0 {
        (value / max * 100.0).min(100.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_month_to_date() {
        let req = SalesReportRequest::month_to_date(d(2026, 10, 16));
        assert_eq!(req.date_from, d(2026, 10, 1));
        assert_eq!(req.date_to, d(2026, 10, 16));
    }

    #[test]
    fn test_last_days_includes_today() {
        let req = SalesReportRequest::last_days(d(2026, 10, 16), 7);
        assert_eq!(req.date_from, d(2026, 10, 10));
    }

    #[test]
    fn test_normalized_swaps() {
        let req = SalesReportRequest {
            date_from: d(2026, 10, 16),
            date_to: d(2026, 10, 1),
        }
        .normalized();
        assert!(req.date_from < req.date_to);
    }

    #[test]
    fn test_decode_with_missing_sections() {
        let json = r#"{"total_ventas": 150000, "total_costos": 90000, "cantidad_pedidos": 6}"#;
        let report: SalesReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.gross_margin(), 60000.0);
        assert_eq!(report.gross_margin_percent(), 40.0);
        assert!(report.daily.is_empty());
        assert_eq!(report.max_daily(), 0.0);
    }

    #[test]
    fn test_bar_width() {
        assert_eq!(bar_width_percent(50.0, 200.0), 25.0);
        assert_eq!(bar_width_percent(10.0, 0.0), 0.0);
    }
}
