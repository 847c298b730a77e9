/// Порт, на котором слушает backend
pub const BACKEND_PORT: u16 = 3000;

/// Базовый адрес API: хост страницы и порт backend.
/// Пустая строка, если `window` недоступен (тогда запросы идут относительно страницы).
pub fn api_base() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    backend_origin(&protocol, &hostname)
}

fn backend_origin(protocol: &str, hostname: &str) -> String {
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_origin_keeps_page_protocol() {
        assert_eq!(backend_origin("https:", "hr.example.com"), "https://hr.example.com:3000");
        assert_eq!(backend_origin("http:", "127.0.0.1"), "http://127.0.0.1:3000");
    }
}
