use serde::{Deserialize, Serialize};

/// How to format the numeric value on the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValueFormat {
    Money { currency: String },
    Number { decimals: u8 },
    Percent { decimals: u8 },
    Integer,
}

impl ValueFormat {
    /// Песо без копеек: все цены магазина целые
    pub fn clp() -> Self {
        ValueFormat::Money {
            currency: "$".to_string(),
        }
    }
}

/// Visual status of the indicator (drives colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IndicatorStatus {
    Good,
    Bad,
    #[default]
    Neutral,
    Warning,
}

/// Маржа ниже этого процента подсвечивается как предупреждение
pub const LOW_MARGIN_PERCENT: f64 = 30.0;

impl IndicatorStatus {
    /// Статус процента маржи: отрицательная - Bad, ниже порога - Warning
    pub fn for_margin_percent(percent: f64) -> Self {
        if percent < 0.0 {
            IndicatorStatus::Bad
        } else if percent < LOW_MARGIN_PERCENT {
            IndicatorStatus::Warning
        } else {
            IndicatorStatus::Good
        }
    }

    /// Статус изменения относительно прошлого периода
    pub fn for_change(change_percent: Option<f64>) -> Self {
        match change_percent {
            Some(p) if p > 0.5 => IndicatorStatus::Good,
            Some(p) if p < -0.5 => IndicatorStatus::Bad,
            _ => IndicatorStatus::Neutral,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_margin_status() {
        assert_eq!(IndicatorStatus::for_margin_percent(-80.0), IndicatorStatus::Bad);
        assert_eq!(IndicatorStatus::for_margin_percent(0.0), IndicatorStatus::Warning);
        assert_eq!(IndicatorStatus::for_margin_percent(40.0), IndicatorStatus::Good);
    }

    #[test]
    fn test_change_status() {
        assert_eq!(IndicatorStatus::for_change(None), IndicatorStatus::Neutral);
        assert_eq!(IndicatorStatus::for_change(Some(0.2)), IndicatorStatus::Neutral);
        assert_eq!(IndicatorStatus::for_change(Some(-3.0)), IndicatorStatus::Bad);
    }
}
