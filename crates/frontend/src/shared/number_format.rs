//! Форматирование чисел для интерфейса (песо, проценты)

/// Разделить тысячи точкой: 1234567 -> "1.234.567"
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    if value < 0 {
        format!("-{}", out)
    } else {
        out
    }
}

/// Сумма в песо без копеек: 15000.0 -> "$15.000"
pub fn format_clp(value: f64) -> String {
    if !value.is_finite() {
        return "$0".to_string();
    }
    let rounded = value.round() as i64;
    if rounded < 0 {
        format!("-${}", format_thousands(-rounded))
    } else {
        format!("${}", format_thousands(rounded))
    }
}

/// Процент с одним знаком и запятой: 40.0 -> "40,0%"
pub fn format_percent(value: f64) -> String {
    if !value.is_finite() {
        return "0,0%".to_string();
    }
    format!("{:.1}%", value).replace('.', ",")
}

/// Значение для `<input type="number">`: без хвоста ".0"
pub fn format_input_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1.000");
        assert_eq!(format_thousands(1234567), "1.234.567");
        assert_eq!(format_thousands(-26000), "-26.000");
    }

    #[test]
    fn test_format_clp() {
        assert_eq!(format_clp(15000.0), "$15.000");
        assert_eq!(format_clp(-4000.0), "-$4.000");
        assert_eq!(format_clp(499.6), "$500");
        assert_eq!(format_clp(f64::NAN), "$0");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(40.0), "40,0%");
        assert_eq!(format_percent(-80.0), "-80,0%");
    }

    #[test]
    fn test_format_input_amount() {
        assert_eq!(format_input_amount(650.0), "650");
        assert_eq!(format_input_amount(12.5), "12.5");
    }
}
