//! Блокирующие диалоги браузера

/// Показать сообщение пользователю
pub fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

/// Спросить подтверждение. Без окна браузера - всегда "нет".
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}
