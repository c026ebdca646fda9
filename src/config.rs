use std::{env, str::FromStr, time::Duration};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SOLVE_DELAY_MS: u64 = 1_500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub solve_delay_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            solve_delay_ms: DEFAULT_SOLVE_DELAY_MS,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Missing or unparseable
    /// values keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            port: parse_or(&lookup, "PORT", defaults.port),
            solve_delay_ms: parse_or(&lookup, "SOLVE_DELAY_MS", defaults.solve_delay_ms),
        }
    }

    pub fn response_delay(&self) -> Duration {
        Duration::from_millis(self.solve_delay_ms)
    }
}

fn parse_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    lookup(key)
        .and_then(|value| value.trim().parse::<T>().ok())
        .unwrap_or(default)
}
