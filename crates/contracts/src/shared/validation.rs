//! Правила валидации полей форм
//!
//! Проверки выполняются до отправки запроса на бэкенд; сообщения
//! показываются пользователю как есть.

use thiserror::Error;

/// Ошибка валидации одного поля формы
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{0} es obligatorio")]
    Required(&'static str),
    #[error("{field} debe tener al menos {min} caracteres")]
    TooShort { field: &'static str, min: usize },
    #[error("{field} no debe superar {max} caracteres")]
    TooLong { field: &'static str, max: usize },
    #[error("{field} debe ser mayor o igual a {min}")]
    BelowMin { field: &'static str, min: f64 },
    #[error("{field} debe ser mayor que {min}")]
    NotAbove { field: &'static str, min: f64 },
    #[error("{field} no es un número válido")]
    NotANumber { field: &'static str },
    #[error("{field} no es una fecha válida (AAAA-MM-DD)")]
    InvalidDate { field: &'static str },
    #[error("Campo desconocido: {0}")]
    UnknownField(String),
}

/// Правила валидации для поля
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    /// Нижняя граница включительно
    pub min: Option<f64>,
    /// Строгая нижняя граница (например, количество > 0)
    pub greater_than: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl ValidationRules {
    /// Пустые правила (все поля необязательны, без ограничений)
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            greater_than: None,
            min_length: None,
            max_length: None,
        }
    }

    /// Правила для обязательного поля
    pub const fn required() -> Self {
        Self {
            required: true,
            ..Self::none()
        }
    }

    /// Правила для неотрицательного числа (цены, себестоимость, остатки)
    pub const fn non_negative() -> Self {
        Self {
            min: Some(0.0),
            ..Self::none()
        }
    }

    /// Правила для строго положительного числа (количество в заказе)
    pub const fn positive() -> Self {
        Self {
            greater_than: Some(0.0),
            ..Self::none()
        }
    }

    pub const fn with_max_length(self, max: usize) -> Self {
        Self {
            max_length: Some(max),
            ..self
        }
    }

    pub const fn with_min_length(self, min: usize) -> Self {
        Self {
            min_length: Some(min),
            ..self
        }
    }

    /// Проверить строковое значение
    pub fn validate_string(&self, value: &str, field: &'static str) -> Result<(), ValidationError> {
        let trimmed = value.trim();
        if self.required && trimmed.is_empty() {
            return Err(ValidationError::Required(field));
        }

        // Длина считается в символах: в названиях цветов есть "ñ" и ударения
        let len = trimmed.chars().count();
        if let Some(min) = self.min_length {
            if !trimmed.is_empty() && len < min {
                return Err(ValidationError::TooShort { field, min });
            }
        }
        if let Some(max) = self.max_length {
            if len > max {
                return Err(ValidationError::TooLong { field, max });
            }
        }

        Ok(())
    }

    /// Проверить числовое значение на min/greater_than
    pub fn validate_number(&self, value: f64, field: &'static str) -> Result<(), ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::NotANumber { field });
        }
        if let Some(min) = self.min {
            if value < min {
                return Err(ValidationError::BelowMin { field, min });
            }
        }
        if let Some(min) = self.greater_than {
            if value <= min {
                return Err(ValidationError::NotAbove { field, min });
            }
        }
        Ok(())
    }
}

/// Разобрать денежное значение из поля ввода
///
/// Запятая трактуется как десятичная точка, разделитель тысяч не поддерживается.
/// Пустая строка - это 0.
pub fn parse_amount(raw: &str, field: &'static str) -> Result<f64, ValidationError> {
    let normalized = raw.trim().replace(',', ".");
    if normalized.is_empty() {
        return Ok(0.0);
    }
    normalized
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(ValidationError::NotANumber { field })
}

/// Разобрать целое количество
pub fn parse_count(raw: &str, field: &'static str) -> Result<u32, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed
        .parse::<u32>()
        .map_err(|_| ValidationError::NotANumber { field })
}

/// Разобрать количество "мягко": пустое, отрицательное или некорректное
/// значение превращается в 0
pub fn parse_quantity_lenient(raw: &str) -> u32 {
    raw.trim().parse::<u32>().unwrap_or(0)
}

/// Привести денежное значение к допустимому: отрицательное и NaN -> 0
pub fn sanitize_amount(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_blank() {
        let rules = ValidationRules::required();
        assert_eq!(
            rules.validate_string("   ", "Nombre"),
            Err(ValidationError::Required("Nombre"))
        );
        assert!(rules.validate_string("Rosa", "Nombre").is_ok());
    }

    #[test]
    fn test_length_counts_chars() {
        let rules = ValidationRules::none().with_max_length(5);
        assert!(rules.validate_string("Ñandú", "Color").is_ok());
        assert!(rules.validate_string("Ñandús", "Color").is_err());
    }

    #[test]
    fn test_positive_quantity() {
        let rules = ValidationRules::positive();
        assert!(rules.validate_number(1.0, "Cantidad").is_ok());
        assert_eq!(
            rules.validate_number(0.0, "Cantidad"),
            Err(ValidationError::NotAbove {
                field: "Cantidad",
                min: 0.0
            })
        );
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1500", "Costo").unwrap(), 1500.0);
        assert_eq!(parse_amount("12,5", "Costo").unwrap(), 12.5);
        assert_eq!(parse_amount("", "Costo").unwrap(), 0.0);
        assert!(parse_amount("abc", "Costo").is_err());
    }

    #[test]
    fn test_parse_quantity_lenient() {
        assert_eq!(parse_quantity_lenient("12"), 12);
        assert_eq!(parse_quantity_lenient(""), 0);
        assert_eq!(parse_quantity_lenient("-3"), 0);
        assert_eq!(parse_quantity_lenient("x"), 0);
    }

    #[test]
    fn test_error_messages_are_user_facing() {
        let err = ValidationError::Required("Teléfono");
        assert_eq!(err.to_string(), "Teléfono es obligatorio");
    }
}
