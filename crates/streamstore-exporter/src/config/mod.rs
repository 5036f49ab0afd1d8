//! Exporter configuration.
//!
//! The host loads and merges configuration sources (files, environment);
//! this module only defines the shape, the defaults, and the validation the
//! exporter runs at construction. A destination is fixed per exporter
//! instance: every batch the host hands over goes to the configured
//! (group, stream) pair.

use serde::Deserialize;
use streamstore_client::client::SessionSettings;

use crate::error::ConfigError;

/// Static configuration of one exporter instance.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Destination group the exporter appends to.
    pub log_group_name: String,
    /// Destination stream within the group.
    pub log_stream_name: String,
    /// Store session settings handed to the client factory.
    pub session: SessionSettings,
}

impl Config {
    /// Validates the configuration.
    ///
    /// The destination key is required; everything else has workable
    /// defaults. Values are trimmed before the emptiness check, matching the
    /// host's whitespace handling for the rest of its configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log_group_name.trim().is_empty() {
            return Err(ConfigError::EmptyLogGroupName);
        }
        if self.log_stream_name.trim().is_empty() {
            return Err(ConfigError::EmptyLogStreamName);
        }
        Ok(())
    }
}
