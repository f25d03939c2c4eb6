use std::path::PathBuf;

/// Environment variable holding a `u64` seed for reproducible mazes
pub const SEED_ENV: &str = "PRIMAZE_SEED";
/// Environment variable holding the log level (`error`, `warn`, `info`, `debug`, `trace`)
pub const LOG_LEVEL_ENV: &str = "PRIMAZE_LOG";
/// Environment variable holding the directory log files are written to
pub const LOG_DIR_ENV: &str = "PRIMAZE_LOG_DIR";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Seed for the maze generator. `None` seeds from the OS
    pub seed: Option<u64>,
    /// Maze dimensions given up front, skipping the prompt
    pub dimensions: Option<(u8, u8)>,
    /// Maximum level of events written to the log file
    pub log_level: tracing::Level,
    /// Directory of the log file
    pub log_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: None,
            dimensions: None,
            log_level: tracing::Level::INFO,
            log_dir: PathBuf::from("logs"),
        }
    }
}

impl AppConfig {
    /// File name of the log inside [`AppConfig::log_dir`]
    pub const LOG_FILE_NAME: &'static str = "primaze.log";

    /// Reads the config from the process environment and command line arguments.
    /// Also returns a warning for every value that failed to parse, to be logged once
    /// logging is set up.
    pub fn from_env() -> (Self, Vec<String>) {
        Self::from_sources(|key| std::env::var(key).ok(), std::env::args().skip(1))
    }

    /// Builds the config from a variable lookup and the arguments after the executable name.
    /// Values that fail to parse fall back to the defaults.
    pub fn from_sources<F, I>(var: F, args: I) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut warnings = Vec::new();

        if let Some(seed) = var(SEED_ENV) {
            match seed.trim().parse::<u64>() {
                Ok(seed) => config.seed = Some(seed),
                Err(_) => warnings.push(format!("Ignoring invalid {}={:?}", SEED_ENV, seed)),
            }
        }

        if let Some(level) = var(LOG_LEVEL_ENV) {
            match level.trim().parse::<tracing::Level>() {
                Ok(level) => config.log_level = level,
                Err(_) => warnings.push(format!("Ignoring invalid {}={:?}", LOG_LEVEL_ENV, level)),
            }
        }

        if let Some(dir) = var(LOG_DIR_ENV).filter(|dir| !dir.trim().is_empty()) {
            config.log_dir = PathBuf::from(dir);
        }

        let args = args.into_iter().take(2).collect::<Vec<_>>();
        match args.as_slice() {
            [] => {}
            [width, height] => match (parse_dimension(width), parse_dimension(height)) {
                (Some(width), Some(height)) => config.dimensions = Some((width, height)),
                _ => warnings.push(format!(
                    "Ignoring invalid dimensions {:?} {:?}, expected two numbers between 1 and 255",
                    width, height
                )),
            },
            [single] => warnings.push(format!(
                "Ignoring lone dimension {:?}, expected both width and height",
                single
            )),
            _ => unreachable!("at most two arguments are taken"),
        }

        (config, warnings)
    }
}

/// Parses a maze dimension between 1 and 255.
pub fn parse_dimension(s: &str) -> Option<u8> {
    s.trim().parse::<u8>().ok().filter(|&n| n >= 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)], args: &[&str]) -> (AppConfig, Vec<String>) {
        let vars = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        AppConfig::from_sources(
            |key| vars.get(key).cloned(),
            args.iter().map(|s| s.to_string()),
        )
    }

    #[test]
    fn test_defaults() {
        let (config, warnings) = config_from(&[], &[]);
        assert_eq!(config, AppConfig::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_reads_env_and_args() {
        let (config, warnings) = config_from(
            &[
                (SEED_ENV, "1234"),
                (LOG_LEVEL_ENV, "debug"),
                (LOG_DIR_ENV, "/tmp/primaze"),
            ],
            &["20", "10"],
        );
        assert!(warnings.is_empty());
        assert_eq!(config.seed, Some(1234));
        assert_eq!(config.log_level, tracing::Level::DEBUG);
        assert_eq!(config.log_dir, PathBuf::from("/tmp/primaze"));
        assert_eq!(config.dimensions, Some((20, 10)));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let (config, warnings) = config_from(
            &[(SEED_ENV, "abc"), (LOG_LEVEL_ENV, "loud")],
            &["0", "300"],
        );
        assert_eq!(config, AppConfig::default());
        assert_eq!(warnings.len(), 3);
    }

    #[test]
    fn test_parse_dimension() {
        assert_eq!(parse_dimension(" 7 "), Some(7));
        assert_eq!(parse_dimension("255"), Some(255));
        assert_eq!(parse_dimension("0"), None);
        assert_eq!(parse_dimension("256"), None);
        assert_eq!(parse_dimension("-1"), None);
    }
}
