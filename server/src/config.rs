//! Process configuration, read once from the environment at startup.

/// Server configuration.
///
/// Constructed at process start and passed into [`crate::app`]; nothing else
/// reads the environment. Defaults are production-safe: internal fault
/// messages stay suppressed unless `APP_ENV=development`.
#[derive(Debug, Clone)]
pub struct Config {
    /// TCP port to listen on.
    pub port: u16,
    /// Expose raw internal error messages in 500 responses.
    pub dev_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            dev_mode: false,
        }
    }
}

impl Config {
    /// Read `PORT` and `APP_ENV` from the environment. An unset or
    /// unparseable `PORT` falls back to the default.
    pub fn from_env() -> Self {
        let default = Self::default();
        let port = std::env::var("PORT")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(default.port);
        let dev_mode = std::env::var("APP_ENV")
            .map(|env| env.eq_ignore_ascii_case("development"))
            .unwrap_or(default.dev_mode);
        Self { port, dev_mode }
    }
}
