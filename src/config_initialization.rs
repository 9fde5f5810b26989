//! Configuration initialization and hierarchy management

use std::path::Path;

use tracing::{debug, info};

use crate::adapters::toml_config::{AppConfig, TomlConfigAdapter, DEFAULT_CONFIG_FILE};
use crate::adapters::tracing_log::{LogFormat, LoggingConfig};
use crate::cli::args::CommonArgs;
use crate::domain::errors::DomainError;

/// Build configuration following precedence: CLI > Env > File > Defaults
pub fn initialize_configuration(common: &CommonArgs) -> Result<AppConfig, DomainError> {
    initialize_configuration_with(common, |key| std::env::var(key).ok())
}

/// Same as [`initialize_configuration`] with an explicit environment lookup
pub fn initialize_configuration_with<F>(
    common: &CommonArgs,
    lookup: F,
) -> Result<AppConfig, DomainError>
where
    F: Fn(&str) -> Option<String>,
{
    // Step 1 and 2: defaults, overlaid by a config file if there is one
    let mut config = match &common.config {
        Some(path) => TomlConfigAdapter::load(path)?,
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
            TomlConfigAdapter::load(Path::new(DEFAULT_CONFIG_FILE))?
        }
        None => AppConfig::default(),
    };

    // Step 3: environment variables
    let env_overrides = config.apply_env(lookup)?;

    // Step 4: CLI arguments
    if let Some(level) = &common.log_level {
        config.log_level = level.clone();
    }

    config.validate()?;
    debug!("Configuration resolved with {} environment overrides", env_overrides);
    Ok(config)
}

/// Install logging for a resolved configuration
pub fn initialize_logging(common: &CommonArgs, config: &AppConfig) -> Result<(), DomainError> {
    let logging = LoggingConfig {
        level: config.log_level.clone(),
        format: LogFormat::parse(&common.log_format)?,
    };
    logging.init()?;
    info!("Starting mediafix {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
