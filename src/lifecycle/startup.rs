//! Startup orchestration.
//!
//! # Responsibilities
//! - Read the redirects document named by the configuration
//! - Decode and fold it into a Mapping
//! - Report duplicate paths that later entries override
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - No redirects document means an empty mapping, not an error

use std::collections::HashSet;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::{ConfigError, RedirectsConfig};
use crate::mapping::{decode, DecodeError, Mapping, PathUrlRecord};

/// Errors that abort startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to read redirects from {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot determine the format of {}; set redirects.format", .0.display())]
    UnknownFormat(PathBuf),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },
}

/// Load the mapping described by `config`.
pub async fn load_mapping(config: &RedirectsConfig) -> Result<Mapping, StartupError> {
    let Some(path) = &config.path else {
        tracing::warn!("No redirects document configured, every request goes to the fallback");
        return Ok(Mapping::default());
    };

    let format = config
        .resolved_format()
        .ok_or_else(|| StartupError::UnknownFormat(path.clone()))?;

    let bytes = tokio::fs::read(path).await.map_err(|source| StartupError::Read {
        path: path.clone(),
        source,
    })?;

    let records = decode(format, &bytes)?;
    let record_count = records.len();
    warn_overridden(&records);

    let mapping = Mapping::from_records(records);

    tracing::info!(
        path = %path.display(),
        format = %format,
        records = record_count,
        mappings = mapping.len(),
        "Redirects loaded"
    );

    Ok(mapping)
}

/// Log each path that appears more than once; the last entry wins.
fn warn_overridden(records: &[PathUrlRecord]) {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.path.as_str()) {
            tracing::warn!(
                path = %record.path,
                url = %record.url,
                "Duplicate redirect path, later entry overrides earlier one"
            );
        }
    }
}
