use std::net::SocketAddr;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_IMAGE_SERVICE_BASE: &str = "https://image.pollinations.ai";

/// Runtime settings, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub gemini_api_base: String,
    pub gemini_model: String,
    pub image_service_base: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            gemini_api_base: DEFAULT_GEMINI_API_BASE.to_string(),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            image_service_base: DEFAULT_IMAGE_SERVICE_BASE.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_blank = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        Self {
            port: lookup("PORT").and_then(|v| v.trim().parse().ok()).unwrap_or(defaults.port),
            gemini_api_base: non_blank("GEMINI_API_BASE").unwrap_or(defaults.gemini_api_base),
            gemini_model: non_blank("GEMINI_MODEL").unwrap_or(defaults.gemini_model),
            image_service_base: non_blank("IMAGE_SERVICE_BASE").unwrap_or(defaults.image_service_base),
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

/// Short prefix of a secret, safe to print.
pub fn mask_secret(secret: &str) -> String {
    let prefix: String = secret.chars().take(4).collect();
    format!("{}***", prefix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config.port, 8080);
        assert_eq!(config.gemini_model, "gemini-2.5-flash");
        assert_eq!(config.image_service_base, "https://image.pollinations.ai");
    }

    #[test]
    fn overrides_are_applied() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "3000"),
            ("GEMINI_MODEL", "gemini-test"),
            ("IMAGE_SERVICE_BASE", "http://localhost:9000"),
        ]));
        assert_eq!(config.port, 3000);
        assert_eq!(config.gemini_model, "gemini-test");
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:3000");
        assert_eq!(config.image_service_base, "http://localhost:9000");
    }

    #[test]
    fn bad_port_and_blank_values_fall_back() {
        let config = Config::from_lookup(lookup_from(&[("PORT", "eighty"), ("GEMINI_MODEL", "   ")]));
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.gemini_model, DEFAULT_GEMINI_MODEL);
    }

    #[test]
    fn masked_secret_keeps_only_prefix() {
        assert_eq!(mask_secret("AIzaSyExample"), "AIza***");
        assert_eq!(mask_secret("ab"), "ab***");
    }
}
