use log::LevelFilter;

/// Any non-empty value turns on full error diagnostics.
pub const DEBUG_ENV: &str = "DEBUG";

/// env_logger filter directives, e.g. `DEVTOOLS_LOG=debug`.
pub const LOG_ENV: &str = "DEVTOOLS_LOG";

const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

/// Runtime settings, resolved once at startup from global flags and the
/// environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Print the full cause chain and error structure on failure
    pub debug: bool,

    /// Base log level, before `DEVTOOLS_LOG` directives are applied
    pub log_level: LevelFilter,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: false,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl Settings {
    /// Resolves settings from the process environment.
    pub fn load(debug_flag: bool, log_level: Option<LevelFilter>) -> Self {
        let debug_env = std::env::var(DEBUG_ENV).ok();
        Self::resolve(debug_flag, debug_env.as_deref(), log_level)
    }

    pub fn resolve(
        debug_flag: bool,
        debug_env: Option<&str>,
        log_level: Option<LevelFilter>,
    ) -> Self {
        let debug = debug_flag || debug_env.is_some_and(|v| !v.is_empty());
        Self {
            debug,
            log_level: log_level.unwrap_or(DEFAULT_LOG_LEVEL),
        }
    }
}
