use crate::shared::http;
use contracts::shared::api_envelope::ApiError;
use contracts::system::auth::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, UserInfo,
};

pub async fn login(request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    http::post_json("/auth/login", request).await
}

/// Обменять refresh-токен на новый access-токен
pub async fn refresh_token(refresh_token: String) -> Result<RefreshResponse, ApiError> {
    http::post_json("/auth/refresh", &RefreshRequest { refresh_token }).await
}

/// Отозвать refresh-токен
pub async fn logout(refresh_token: String) -> Result<(), ApiError> {
    http::post_unit("/auth/logout", &RefreshRequest { refresh_token }).await
}

/// Текущий пользователь по токену из localStorage
pub async fn get_current_user() -> Result<UserInfo, ApiError> {
    http::get_json("/auth/me").await
}
