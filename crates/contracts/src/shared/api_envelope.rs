//! Конверт ответа REST API
//!
//! Бэкенд всегда отвечает `{ success, data, error?, message? }`. Декодер
//! превращает конверт в типизированный результат или явную ошибку.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ошибка обращения к API
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Запрос не дошёл до сервера (сеть, CORS)
    #[error("Error de red: {0}")]
    Network(String),
    /// Запрос не удалось собрать: query-строка, multipart-форма
    #[error("Solicitud inválida: {0}")]
    InvalidRequest(String),
    /// Сервер ответил статусом вне диапазона 2xx
    #[error("Error HTTP {0}")]
    Http(u16),
    /// Сервер вернул `success: false`
    #[error("{0}")]
    Rejected(String),
    /// `success: true`, но поле `data` отсутствует
    #[error("Respuesta sin datos")]
    MissingData,
    /// Тело ответа не соответствует ожидаемой схеме
    #[error("Respuesta inválida: {0}")]
    Decode(String),
}

/// Конверт ответа
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            message: None,
        }
    }

    /// Текст ошибки: сначала `error`, затем `message`
    fn rejection_text(&self) -> String {
        self.error
            .clone()
            .or_else(|| self.message.clone())
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| "Error desconocido".to_string())
    }

    /// Развернуть конверт в результат
    pub fn into_result(self) -> Result<T, ApiError> {
        if !self.success {
            return Err(ApiError::Rejected(self.rejection_text()));
        }
        self.data.ok_or(ApiError::MissingData)
    }
}

impl ApiResponse<serde_json::Value> {
    /// Развернуть конверт, в котором `data` не важна (удаление, смена статуса)
    pub fn into_unit(self) -> Result<(), ApiError> {
        if self.success {
            Ok(())
        } else {
            Err(ApiError::Rejected(self.rejection_text()))
        }
    }
}

/// Декодировать тело ответа
pub fn decode_envelope<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let envelope: ApiResponse<T> =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    envelope.into_result()
}

/// Декодировать тело ответа без полезной нагрузки
pub fn decode_unit_envelope(body: &str) -> Result<(), ApiError> {
    let envelope: ApiResponse<serde_json::Value> =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    envelope.into_unit()
}

/// Декодировать ответ с учётом HTTP статуса
///
/// Тело ошибочного ответа тоже может быть конвертом с текстом ошибки;
/// если так, предпочитаем его голому коду статуса.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        return Err(rejection_from_body(body).unwrap_or(ApiError::Http(status)));
    }
    decode_envelope(body)
}

/// То же, что `decode_response`, для ответов без данных
pub fn decode_unit_response(status: u16, body: &str) -> Result<(), ApiError> {
    if !(200..300).contains(&status) {
        return Err(rejection_from_body(body).unwrap_or(ApiError::Http(status)));
    }
    decode_unit_envelope(body)
}

fn rejection_from_body(body: &str) -> Option<ApiError> {
    let envelope: ApiResponse<serde_json::Value> = serde_json::from_str(body).ok()?;
    if envelope.success {
        return None;
    }
    Some(ApiError::Rejected(envelope.rejection_text()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Item {
        id: i64,
        nombre: String,
    }

    #[test]
    fn test_success_with_data() {
        let body = r#"{"success":true,"data":{"id":1,"nombre":"Rosa"}}"#;
        let item: Item = decode_envelope(body).unwrap();
        assert_eq!(
            item,
            Item {
                id: 1,
                nombre: "Rosa".into()
            }
        );
    }

    #[test]
    fn test_rejected_uses_error_then_message() {
        let body = r#"{"success":false,"error":"x"}"#;
        assert_eq!(
            decode_envelope::<Item>(body),
            Err(ApiError::Rejected("x".into()))
        );

        let body = r#"{"success":false,"message":"sin stock"}"#;
        assert_eq!(
            decode_envelope::<Item>(body),
            Err(ApiError::Rejected("sin stock".into()))
        );
    }

    #[test]
    fn test_missing_data() {
        let body = r#"{"success":true}"#;
        assert_eq!(decode_envelope::<Item>(body), Err(ApiError::MissingData));
    }

    #[test]
    fn test_schema_mismatch_is_decode_error() {
        // Альтернативные имена полей ("productos") не подхватываются
        let body = r#"{"success":true,"productos":[{"id":1}]}"#;
        assert_eq!(decode_envelope::<Vec<Item>>(body), Err(ApiError::MissingData));

        let body = r#"{"success":true,"data":{"id":"uno"}}"#;
        assert!(matches!(
            decode_envelope::<Item>(body),
            Err(ApiError::Decode(_))
        ));
    }

    #[test]
    fn test_http_status_prefers_envelope_text() {
        let body = r#"{"success":false,"error":"no autorizado"}"#;
        assert_eq!(
            decode_response::<Item>(401, body),
            Err(ApiError::Rejected("no autorizado".into()))
        );
        assert_eq!(
            decode_response::<Item>(502, "<html>bad gateway</html>"),
            Err(ApiError::Http(502))
        );
    }

    #[test]
    fn test_unit_envelope_ignores_data() {
        assert!(decode_unit_response(200, r#"{"success":true,"data":null}"#).is_ok());
        assert!(decode_unit_response(200, r#"{"success":true}"#).is_ok());
    }
}
