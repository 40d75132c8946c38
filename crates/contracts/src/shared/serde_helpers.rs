//! Общие десериализаторы для ответов бэкенда

use serde::{Deserialize, Deserializer};

/// Явный `null` превращается в значение по умолчанию
///
/// `#[serde(default)]` покрывает только отсутствующее поле; вместе с этой
/// функцией строка с `"notas": null` не роняет весь список.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        #[serde(default, deserialize_with = "null_as_default")]
        text: String,
        #[serde(default, deserialize_with = "null_as_default")]
        amount: f64,
    }

    #[test]
    fn test_null_and_missing_become_default() {
        let row: Row = serde_json::from_str(r#"{"text": null, "amount": null}"#).unwrap();
        assert_eq!(row, Row { text: String::new(), amount: 0.0 });
        let row: Row = serde_json::from_str("{}").unwrap();
        assert_eq!(row, Row { text: String::new(), amount: 0.0 });
        let row: Row = serde_json::from_str(r#"{"text": "Rojo", "amount": 2.5}"#).unwrap();
        assert_eq!(row, Row { text: "Rojo".into(), amount: 2.5 });
    }
}
