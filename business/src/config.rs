use chrono::Duration;
use serde::Deserialize;
use ustr::Ustr;

/// How long a toast stays on screen unless configured otherwise.
pub const DEFAULT_TOAST_MS: u64 = 3_000;

/// Longest accepted toast duration: one day.
pub const MAX_TOAST_MS: u64 = 86_400_000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read configuration from environment: {0}")]
    Env(#[from] serde_env::Error),
    #[error("POINTS_ADMIN_TOAST_MS must be greater than zero")]
    ZeroToastDuration,
    #[error("POINTS_ADMIN_TOAST_MS must not exceed {MAX_TOAST_MS}, got {0}")]
    ToastDurationTooLong(u64),
    #[error("POINTS_ADMIN_MAX_TOASTS must be greater than zero when set")]
    ZeroToastCap,
}

#[derive(Debug, Clone)]
pub struct BusinessConfig {
    /// Origin of the points backend. Empty means same-origin (`/api`).
    pub api_base_url: String,
    /// How long a notification stays visible.
    pub toast_duration: Duration,
    /// Upper bound on simultaneously visible notifications; `None` lets them stack.
    pub max_toasts: Option<usize>,
}

// Environment variables are deserialized into this first; unset keys keep defaults.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    points_admin_api_base_url: Option<String>,
    points_admin_toast_ms: Option<u64>,
    points_admin_max_toasts: Option<usize>,
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Read `POINTS_ADMIN_*` variables from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_env::from_env()?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(base) = raw.points_admin_api_base_url {
            config.api_base_url = base.trim_end_matches('/').to_owned();
        }

        if let Some(ms) = raw.points_admin_toast_ms {
            if ms == 0 {
                return Err(ConfigError::ZeroToastDuration);
            }
            if ms > MAX_TOAST_MS {
                return Err(ConfigError::ToastDurationTooLong(ms));
            }
            config.toast_duration = Duration::milliseconds(ms as i64);
        }

        if let Some(cap) = raw.points_admin_max_toasts {
            if cap == 0 {
                return Err(ConfigError::ZeroToastCap);
            }
            config.max_toasts = Some(cap);
        }

        Ok(config)
    }

    pub fn api_url(&self) -> Ustr {
        if self.api_base_url.is_empty() {
            Ustr::from("/api")
        } else {
            Ustr::from(&format!("{}/api", self.api_base_url))
        }
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            api_base_url: if cfg!(target_arch = "wasm32") {
                String::new()
            } else {
                "http://127.0.0.1:8080".to_owned()
            },
            toast_duration: Duration::milliseconds(DEFAULT_TOAST_MS as i64),
            max_toasts: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_env::from_iter;

    #[test]
    fn test_defaults() {
        let config = BusinessConfig::default();

        assert_eq!(config.toast_duration, Duration::seconds(3));
        assert_eq!(config.max_toasts, None);
        if cfg!(target_arch = "wasm32") {
            assert_eq!(config.api_url(), Ustr::from("/api"));
        } else {
            assert_eq!(config.api_url(), Ustr::from("http://127.0.0.1:8080/api"));
        }
    }

    #[test]
    fn test_empty_base_url_is_same_origin() {
        let config = BusinessConfig::new("");
        assert_eq!(config.api_url(), Ustr::from("/api"));
    }

    #[test]
    fn test_env_overrides() {
        let raw: RawConfig = from_iter(vec![
            ("POINTS_ADMIN_API_BASE_URL", "https://points.example.com/"),
            ("POINTS_ADMIN_TOAST_MS", "1500"),
            ("POINTS_ADMIN_MAX_TOASTS", "4"),
        ])
        .expect("RawConfig should deserialize");

        let config = BusinessConfig::from_raw(raw).expect("config should build");
        assert_eq!(config.api_url(), Ustr::from("https://points.example.com/api"));
        assert_eq!(config.toast_duration, Duration::milliseconds(1500));
        assert_eq!(config.max_toasts, Some(4));
    }

    #[test]
    fn test_unset_env_keeps_defaults() {
        let raw: RawConfig =
            from_iter(vec![("UNRELATED", "1")]).expect("RawConfig should deserialize");

        let config = BusinessConfig::from_raw(raw).expect("config should build");
        assert_eq!(config.toast_duration, Duration::seconds(3));
        assert_eq!(config.max_toasts, None);
    }

    #[test]
    fn test_zero_toast_duration_rejected() {
        let raw: RawConfig = from_iter(vec![("POINTS_ADMIN_TOAST_MS", "0")])
            .expect("RawConfig should deserialize");

        let result = BusinessConfig::from_raw(raw);
        assert!(matches!(result, Err(ConfigError::ZeroToastDuration)));
    }

    #[test]
    fn test_oversized_toast_duration_rejected() {
        let raw: RawConfig = from_iter(vec![("POINTS_ADMIN_TOAST_MS", "18446744073709551615")])
            .expect("RawConfig should deserialize");

        let result = BusinessConfig::from_raw(raw);
        assert!(matches!(
            result,
            Err(ConfigError::ToastDurationTooLong(u64::MAX))
        ));
    }

    #[test]
    fn test_toast_duration_upper_bound_is_inclusive() {
        let raw: RawConfig = from_iter(vec![("POINTS_ADMIN_TOAST_MS", "86400000")])
            .expect("RawConfig should deserialize");

        let config = BusinessConfig::from_raw(raw).expect("config should build");
        assert_eq!(config.toast_duration, Duration::days(1));
    }

    #[test]
    fn test_malformed_number_is_an_error() {
        let result: Result<RawConfig, _> = from_iter(vec![("POINTS_ADMIN_MAX_TOASTS", "many")]);
        assert!(result.is_err());
    }
}
