// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy for the exporter.
//!
//! Construction failures ([`BuildError`]) are fatal: the exporter is never
//! started. Translation failures ([`TranslationError`]) are per-record and
//! recoverable. Append and flush errors live in `streamstore-client` with the
//! pusher that produces them; only flush errors escalate to the host.

use streamstore_client::client::ClientError;

/// Invalid exporter configuration, detected at construction.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("log_group_name must not be empty")]
    EmptyLogGroupName,

    #[error("log_stream_name must not be empty")]
    EmptyLogStreamName,
}

/// Failure constructing the exporter.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("invalid exporter configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Failure translating a single log record into a delivery event.
///
/// Per-record: the record is counted as dropped and the batch continues.
#[derive(Debug, thiserror::Error)]
pub enum TranslationError {
    #[error("failed to encode log body: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("log event of {size} bytes exceeds the {limit} byte event limit")]
    EventTooLarge { size: usize, limit: usize },
}
