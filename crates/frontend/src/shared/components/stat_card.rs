use crate::shared::icons::icon;
use crate::shared::number_format::{format_clp, format_percent, format_thousands};
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use leptos::prelude::*;

fn format_value(val: f64, fmt: &ValueFormat) -> String {
    match fmt {
        ValueFormat::Money { currency } if currency == "$" => format_clp(val),
        ValueFormat::Money { currency } => {
            format!("{} {}", format_thousands(val.round() as i64), currency)
        }
        ValueFormat::Number { decimals } => {
            format!("{:.prec$}", val, prec = *decimals as usize).replace('.', ",")
        }
        ValueFormat::Percent { decimals: 1 } => format_percent(val),
        ValueFormat::Percent { decimals } => {
            format!("{:.prec$}%", val, prec = *decimals as usize).replace('.', ",")
        }
        ValueFormat::Integer => format_thousands(val.round() as i64),
    }
}

/// Карточка показателя для дашбордов и итогов симулятора
#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] icon_name: String,
    /// None - данные ещё загружаются
    #[prop(into)]
    value: Signal<Option<f64>>,
    format: ValueFormat,
    #[prop(into, optional)] status: Signal<IndicatorStatus>,
    /// Изменение в % к прошлому периоду
    #[prop(into, optional)]
    change_percent: Signal<Option<f64>>,
    #[prop(into, optional)] subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let status_class = move || match status.get() {
        IndicatorStatus::Good => "stat-card stat-card--success",
        IndicatorStatus::Bad => "stat-card stat-card--error",
        IndicatorStatus::Warning => "stat-card stat-card--warning",
        IndicatorStatus::Neutral => "stat-card",
    };

    let formatted = move || match value.get() {
        Some(v) => format_value(v, &format),
        None => "-".to_string(),
    };

    let change_view = move || {
        change_percent.get().map(|pct| {
            let (arrow, cls) = if pct > 0.5 {
                ("\u{2191}", "stat-card__change stat-card__change--up")
            } else if pct < -0.5 {
                ("\u{2193}", "stat-card__change stat-card__change--down")
            } else {
                ("", "stat-card__change stat-card__change--flat")
            };
            view! { <span class=cls>{format!("{}{}", arrow, format_percent(pct.abs()))}</span> }
        })
    };

    view! {
        <div class=status_class>
            <div class="stat-card__icon">{icon(&icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {formatted}
                    {change_view}
                </div>
                {move || subtitle.get().map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value_variants() {
        assert_eq!(format_value(26000.0, &ValueFormat::clp()), "$26.000");
        assert_eq!(format_value(40.0, &ValueFormat::Percent { decimals: 1 }), "40,0%");
        assert_eq!(format_value(1234.0, &ValueFormat::Integer), "1.234");
        assert_eq!(format_value(2.5, &ValueFormat::Number { decimals: 2 }), "2,50");
    }
}
