use contracts::system::auth::{LoginResponse, UserInfo};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
    /// Восстановление сессии из localStorage ещё идёт
    pub restoring: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user_info.as_ref().is_some_and(UserInfo::is_admin)
    }
}

/// Сохранить токены и вернуть новое состояние сессии
pub fn start_session(response: LoginResponse) -> AuthState {
    storage::save_access_token(&response.access_token);
    if let Some(refresh) = &response.refresh_token {
        storage::save_refresh_token(refresh);
    }
    log::info!("Sesión iniciada: {}", response.user.username);
    AuthState {
        access_token: Some(response.access_token),
        user_info: Some(response.user),
        restoring: false,
    }
}

async fn restore_session() -> AuthState {
    let Some(access_token) = storage::get_access_token() else {
        return AuthState::default();
    };

    if let Ok(user) = api::get_current_user().await {
        return AuthState {
            access_token: Some(access_token),
            user_info: Some(user),
            restoring: false,
        };
    }

    // Access-токен истёк: одна попытка обновления
    let Some(refresh) = storage::get_refresh_token() else {
        storage::clear_tokens();
        return AuthState::default();
    };
    match api::refresh_token(refresh).await {
        Ok(response) => {
            storage::save_access_token(&response.access_token);
            match api::get_current_user().await {
                Ok(user) => AuthState {
                    access_token: Some(response.access_token),
                    user_info: Some(user),
                    restoring: false,
                },
                Err(_) => {
                    storage::clear_tokens();
                    AuthState::default()
                }
            }
        }
        Err(e) => {
            log::warn!("No se pudo renovar la sesión: {}", e);
            storage::clear_tokens();
            AuthState::default()
        }
    }
}

#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let auth_state = RwSignal::new(AuthState {
        restoring: storage::get_access_token().is_some(),
        ..AuthState::default()
    });

    if auth_state.get_untracked().restoring {
        spawn_local(async move {
            auth_state.set(restore_session().await);
        });
    }

    provide_context(auth_state);

    children()
}

pub fn use_auth() -> RwSignal<AuthState> {
    expect_context::<RwSignal<AuthState>>()
}

pub async fn do_logout(auth_state: RwSignal<AuthState>) {
    if let Some(refresh_token) = storage::get_refresh_token() {
        if let Err(e) = api::logout(refresh_token).await {
            log::warn!("Logout: {}", e);
        }
    }
    storage::clear_tokens();
    auth_state.set(AuthState::default());
    log::info!("Sesión cerrada");
}
