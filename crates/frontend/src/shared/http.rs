//! HTTP-клиент поверх gloo-net
//!
//! Каждый запрос получает заголовок `Authorization: Bearer`, если токен есть,
//! и ответ декодируется из конверта `{ success, data, error, message }`.

use crate::shared::api_utils::api_url;
use crate::system::auth::storage;
use contracts::shared::api_envelope::{decode_response, decode_unit_response, ApiError};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

async fn read_body(response: Response) -> Result<(u16, String), ApiError> {
    let status = response.status();
    let body = response.text().await.map_err(network)?;
    Ok((status, body))
}

fn logged<T>(method: &str, path: &str, result: Result<T, ApiError>) -> Result<T, ApiError> {
    if let Err(e) = &result {
        log::error!("{} {} failed: {}", method, path, e);
    }
    result
}

/// Путь с query-строкой из сериализуемой структуры
pub fn with_query<Q: Serialize>(path: &str, query: &Q) -> Result<String, ApiError> {
    let qs = serde_qs::to_string(query).map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
    if qs.is_empty() {
        Ok(path.to_string())
    } else {
        Ok(format!("{}?{}", path, qs))
    }
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let result = async {
        let response = with_auth(Request::get(&api_url(path)))
            .send()
            .await
            .map_err(network)?;
        let (status, body) = read_body(response).await?;
        decode_response(status, &body)
    }
    .await;
    logged("GET", path, result)
}

/// JSON-тело, заголовок авторизации и чтение ответа для POST/PUT
async fn send_json<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<(u16, String), ApiError> {
    let response = with_auth(builder)
        .json(body)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    read_body(response).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let result = async {
        let (status, text) = send_json(Request::post(&api_url(path)), body).await?;
        decode_response(status, &text)
    }
    .await;
    logged("POST", path, result)
}

pub async fn post_unit<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let result = async {
        let (status, text) = send_json(Request::post(&api_url(path)), body).await?;
        decode_unit_response(status, &text)
    }
    .await;
    logged("POST", path, result)
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let result = async {
        let (status, text) = send_json(Request::put(&api_url(path)), body).await?;
        decode_response(status, &text)
    }
    .await;
    logged("PUT", path, result)
}

pub async fn put_unit<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let result = async {
        let (status, text) = send_json(Request::put(&api_url(path)), body).await?;
        decode_unit_response(status, &text)
    }
    .await;
    logged("PUT", path, result)
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    let result = async {
        let response = with_auth(Request::delete(&api_url(path)))
            .send()
            .await
            .map_err(network)?;
        let (status, text) = read_body(response).await?;
        decode_unit_response(status, &text)
    }
    .await;
    logged("DELETE", path, result)
}

/// Multipart-загрузка одного файла в поле `field`
pub async fn upload_file<T: DeserializeOwned>(
    path: &str,
    field: &str,
    file: &web_sys::File,
) -> Result<T, ApiError> {
    let result = async {
        let form = web_sys::FormData::new()
            .map_err(|e| ApiError::InvalidRequest(format!("{:?}", e)))?;
        form.append_with_blob_and_filename(field, file, &file.name())
            .map_err(|e| ApiError::InvalidRequest(format!("{:?}", e)))?;
        let response = with_auth(Request::post(&api_url(path)))
            .body(form)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        let (status, text) = read_body(response).await?;
        decode_response(status, &text)
    }
    .await;
    logged("UPLOAD", path, result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::usecases::u502_order_board::BoardQuery;

    #[test]
    fn test_with_query_appends_struct_fields() {
        let path = with_query("/pedidos", &BoardQuery::after_move()).unwrap();
        assert!(path.starts_with("/pedidos?"));
        assert!(path.contains("reclasificar=false"));
    }

    #[test]
    fn test_with_query_rejects_scalar_as_invalid_request() {
        let err = with_query("/pedidos", &5u32).unwrap_err();
        assert!(matches!(err, ApiError::InvalidRequest(_)));
    }
}
