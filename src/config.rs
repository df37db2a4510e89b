use std::env;

/// Client-side settings loaded from the environment (and `.env` when present).
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Base address of the analysis service. `None` when unset; the submit
    /// path reports that as a configuration error instead of guessing a
    /// default endpoint.
    pub api_base_url: Option<String>,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            api_base_url: clean(env::var("ANALYZER_API_URL").ok()),
        }
    }
}

/// Normalize an env value: trimmed, with empty treated as unset.
fn clean(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_and_blank_values_count_as_missing() {
        assert_eq!(clean(None), None);
        assert_eq!(clean(Some(String::new())), None);
        assert_eq!(clean(Some("   ".to_string())), None);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(
            clean(Some("  http://localhost:8000 ".to_string())),
            Some("http://localhost:8000".to_string())
        );
    }
}
