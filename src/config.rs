use std::path::PathBuf;

pub const LOG_FILE: &str = "debug.log";
pub const DEFAULT_LOG_FILTER: &str = "debug";

/// Process-level settings, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Write diagnostics to `log_dir/log_file`. Set by a non-empty `DEBUG`.
    pub debug: bool,
    pub log_dir: PathBuf,
    pub log_file: String,
    /// `tracing-subscriber` filter directives, from `VOLLEY_LOG`.
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());
        Self {
            debug: non_empty("DEBUG").is_some(),
            log_dir: PathBuf::from("."),
            log_file: LOG_FILE.to_string(),
            log_filter: non_empty("VOLLEY_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Config {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_debug_off_by_default() {
        let c = config(&[]);
        assert!(!c.debug);
        assert_eq!(c.log_file, "debug.log");
        assert_eq!(c.log_dir, PathBuf::from("."));
        assert_eq!(c.log_filter, "debug");
    }

    #[test]
    fn test_any_non_empty_debug_value_enables_logging() {
        assert!(config(&[("DEBUG", "1")]).debug);
        assert!(config(&[("DEBUG", "false")]).debug);
        assert!(!config(&[("DEBUG", "")]).debug);
    }

    #[test]
    fn test_log_filter_override() {
        let c = config(&[("DEBUG", "1"), ("VOLLEY_LOG", "volley=trace,reqwest=info")]);
        assert_eq!(c.log_filter, "volley=trace,reqwest=info");
        assert_eq!(config(&[("VOLLEY_LOG", "")]).log_filter, "debug");
    }
}
