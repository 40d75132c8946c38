//! Адрес REST API
//!
//! База берётся из переменной `API_URL` на этапе сборки. Если переменная не
//! задана, используется хост текущей страницы с портом 3000.

/// Базовый URL бэкенда без завершающего слэша
///
/// # Example
/// ```rust,ignore
/// let url = format!("{}/pedidos/{}", api_base(), id);
/// ```
pub fn api_base() -> String {
    if let Some(configured) = configured_base() {
        return configured;
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000/api", protocol, hostname)
}

fn configured_base() -> Option<String> {
    normalize_base(option_env!("API_URL")?)
}

fn normalize_base(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Полный URL по пути API (путь начинается с "/")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base() {
        assert_eq!(
            normalize_base("https://api.floreria.cl/api/"),
            Some("https://api.floreria.cl/api".to_string())
        );
        assert_eq!(normalize_base("  "), None);
    }
}
