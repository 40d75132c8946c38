use serde::{Deserialize, Serialize};

/// Итоги симуляции
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SimulationTotals {
    pub total_flower_cost: f64,
    pub total_container_cost: f64,
    pub total_cost: f64,
    pub sale_price: f64,
    /// Может быть отрицательной
    pub margin: f64,
    pub margin_percent: f64,
}

impl SimulationTotals {
    pub fn new(total_flower_cost: f64, total_container_cost: f64, sale_price: f64) -> Self {
        let total_cost = total_flower_cost + total_container_cost;
        let margin = sale_price - total_cost;
        Self {
            total_flower_cost,
            total_container_cost,
            total_cost,
            sale_price,
            margin,
            margin_percent: margin_percent(margin, sale_price),
        }
    }
}

/// Процент маржи от цены продажи; при нулевой цене - 0
pub fn margin_percent(margin: f64, sale_price: f64) -> f64 {
    if sale_price > 0.0 {
        margin / sale_price * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_price_gives_zero_percent() {
        let totals = SimulationTotals::new(6000.0, 3000.0, 0.0);
        assert_eq!(totals.margin, -9000.0);
        assert_eq!(totals.margin_percent, 0.0);
    }

    #[test]
    fn test_negative_margin_not_clamped() {
        let totals = SimulationTotals::new(6000.0, 3000.0, 5000.0);
        assert_eq!(totals.margin, -4000.0);
        assert_eq!(totals.margin_percent, -80.0);
    }
}
