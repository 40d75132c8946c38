/// Утилиты дат: отображение в формате ДД-ММ-ГГГГ и разбор `<input type="date">`
use chrono::{Local, NaiveDate};

/// Сегодня по часам браузера
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// "2026-10-16" -> "16-10-2026"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d-%m-%Y").to_string()
}

/// Дата или прочерк
pub fn format_optional_date(date: Option<NaiveDate>) -> String {
    date.map(format_date).unwrap_or_else(|| "Sin fecha".to_string())
}

/// Значение для `<input type="date">`
pub fn to_input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Разобрать значение `<input type="date">`; пустое или неверное - None
pub fn parse_input_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let d = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
        assert_eq!(format_date(d), "05-03-2026");
        assert_eq!(format_optional_date(None), "Sin fecha");
    }

    #[test]
    fn test_input_round_trip() {
        let d = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert_eq!(parse_input_date(&to_input_value(Some(d))), Some(d));
        assert_eq!(parse_input_date(""), None);
        assert_eq!(parse_input_date("16/10/2026"), None);
    }
}
