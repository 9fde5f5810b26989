//! Command implementations

use anyhow::{Context, Result};
use tracing::info;

use crate::adapters::AppConfig;
use crate::app::{AppContainer, DefaultAppContainer};
use crate::cli::{FixArgs, FixRotationsCli, SetFileTimesCli};
use crate::config_initialization::{initialize_configuration, initialize_logging};
use crate::domain::errors::DomainError;
use crate::domain::model::*;

/// Execute the timestamp rewrite
pub async fn set_file_times(cli: SetFileTimesCli) -> Result<()> {
    let config = initialize_configuration(&cli.common)?;
    initialize_logging(&cli.common, &config)?;

    // Checked once, before the metadata tool is involved
    let target = TargetPath::new(&cli.path)?;

    let container = DefaultAppContainer::new(&config);
    let report = container
        .timestamp_interactor()
        .execute(TimestampRequest { target })
        .await
        .context("Failed to set file times")?;

    println!("Operation completed successfully");
    println!("{}", report.stdout);
    Ok(())
}

/// Execute the rotation fix over a directory
pub async fn fix_rotations(cli: FixRotationsCli) -> Result<()> {
    let config = initialize_configuration(&cli.common)?;
    initialize_logging(&cli.common, &config)?;

    let request = build_rotation_request(cli.path, &cli.fix, &config)?;
    let container = DefaultAppContainer::new(&config);
    let report = container.rotation_interactor().execute(request).await?;

    if !report.is_success() {
        anyhow::bail!(
            "{} of {} rotated files could not be fixed",
            report.failures.len(),
            report.failures.len() + report.transcoded.len()
        );
    }

    info!("Fixed {} rotated files", report.transcoded.len());
    Ok(())
}

/// Merge CLI options over configuration into a rotation request
pub fn build_rotation_request(
    directory: std::path::PathBuf,
    fix: &FixArgs,
    config: &AppConfig,
) -> Result<RotationRequest, DomainError> {
    let mut request = RotationRequest::new(directory);

    request.encode = config.encode_params();
    if let Some(crf) = fix.crf {
        request.encode.crf = crf;
    }
    if let Some(preset) = &fix.preset {
        request.encode.preset = preset.clone();
    }

    request.suffix = fix
        .suffix
        .clone()
        .unwrap_or_else(|| config.encode.suffix.clone());

    request.policy = match &fix.on_error {
        Some(policy) => BatchPolicy::parse(policy)?,
        None => config.batch.on_error,
    };

    request.replace = if fix.atomic_replace {
        ReplaceStrategy::RenameOver
    } else {
        config.batch.replace
    };

    request.validate()?;
    Ok(request)
}
