use clap::ValueEnum;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::{fmt, EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::settings::{LogFormat, LoggingConfig, Settings};


#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    TRACE,
    DEBUG,
    INFO,
    WARN,
    ERROR,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match *self {
            LogLevel::TRACE => "trace",
            LogLevel::DEBUG => "debug",
            LogLevel::INFO => "info",
            LogLevel::WARN => "warn",
            LogLevel::ERROR => "error",
        }
    }
}

/// Command line flags win over the settings file, which wins over defaults.
pub fn logging_config(
    settings: &Settings,
    arg_log_level: Option<LogLevel>,
    arg_log_format: Option<LogFormat>,
) -> LoggingConfig {
    let base = settings.logging.clone().unwrap_or_default();
    LoggingConfig::new(
        arg_log_level
            .map(|level| level.as_str().to_owned())
            .unwrap_or(base.level),
        arg_log_format.unwrap_or(base.format),
    )
}

/// Initialize tracing with the desired config. Events go to stderr.
pub fn init_logging(cfg: &LoggingConfig) {
    let env_filter = EnvFilter::try_new(&cfg.level)
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // Base layer: filter + writer
    let registry = tracing_subscriber::registry().with(env_filter);

    // Choose format layer
    match cfg.format {
        LogFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_timer(UtcTime::rfc_3339())
                .flatten_event(true)
                .with_ansi(false);

            let _ = registry.with(layer).try_init();
        }
        LogFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_writer(std::io::stderr)
                .with_timer(UtcTime::rfc_3339())
                .with_ansi(true);

            let _ = registry.with(layer).try_init();
        }
    };
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn flags_override_settings() {
        let settings = Settings {
            logging: Some(LoggingConfig::new("info".to_owned(), LogFormat::Json)),
            ..Settings::default()
        };

        let cfg = logging_config(&settings, Some(LogLevel::DEBUG), None);
        assert_eq!(cfg, LoggingConfig::new("debug".to_owned(), LogFormat::Json));

        let cfg = logging_config(&settings, None, Some(LogFormat::Compact));
        assert_eq!(cfg, LoggingConfig::new("info".to_owned(), LogFormat::Compact));
    }

    #[test]
    fn defaults_without_settings_or_flags() {
        let cfg = logging_config(&Settings::default(), None, None);
        assert_eq!(cfg, LoggingConfig::new("warn".to_owned(), LogFormat::Compact));
    }
}
