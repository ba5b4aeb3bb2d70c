use std::path::PathBuf;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_UPLOAD_BYTES: u64 = 20 * 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be a valid {expected}, got '{value}'")]
    Invalid {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    /// Replaces the built-in question bank when set.
    pub seed_dir: Option<PathBuf>,
    pub max_upload_bytes: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            seed_dir: None,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, so tests need not touch the process
    /// environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Settings::default();

        let port = match lookup("STUDYMATE_PORT") {
            Some(v) => v.trim().parse().map_err(|_| ConfigError::Invalid {
                key: "STUDYMATE_PORT",
                expected: "port number",
                value: v,
            })?,
            None => defaults.port,
        };

        let max_upload_bytes = match lookup("STUDYMATE_MAX_UPLOAD_BYTES") {
            Some(v) => v.trim().parse().map_err(|_| ConfigError::Invalid {
                key: "STUDYMATE_MAX_UPLOAD_BYTES",
                expected: "byte count",
                value: v,
            })?,
            None => defaults.max_upload_bytes,
        };

        Ok(Settings {
            host: lookup("STUDYMATE_HOST")
                .filter(|h| !h.trim().is_empty())
                .unwrap_or(defaults.host),
            port,
            seed_dir: lookup("STUDYMATE_SEED_DIR")
                .filter(|d| !d.trim().is_empty())
                .map(PathBuf::from),
            max_upload_bytes,
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let s = settings(&[]).expect("defaults");
        assert_eq!(s, Settings::default());
        assert_eq!(s.address(), "0.0.0.0:8080");
    }

    #[test]
    fn reads_overrides() {
        let s = settings(&[
            ("STUDYMATE_HOST", "127.0.0.1"),
            ("STUDYMATE_PORT", "9000"),
            ("STUDYMATE_SEED_DIR", "/srv/seed"),
            ("STUDYMATE_MAX_UPLOAD_BYTES", "1024"),
        ])
        .expect("valid settings");
        assert_eq!(s.address(), "127.0.0.1:9000");
        assert_eq!(s.seed_dir, Some(PathBuf::from("/srv/seed")));
        assert_eq!(s.max_upload_bytes, 1024);
    }

    #[test]
    fn bad_port_is_an_error() {
        let err = settings(&[("STUDYMATE_PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("STUDYMATE_PORT"));
    }
}
