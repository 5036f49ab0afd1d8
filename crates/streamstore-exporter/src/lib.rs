// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! # Streamstore Exporter
//!
//! Export stage delivering batches of structured log records to a sequenced,
//! append-only log store. One logical stream per (group, stream) destination;
//! the store accepts appends from at most one writer at a time, so the whole
//! append-and-flush cycle runs behind a single process-wide lock.
//!
//! ## Architecture
//!
//! ```text
//!    Host pipeline (batches)
//!           │
//!           v
//!    ┌──────────────┐
//!    │  LogsExporter │  (sequencing lock, batch walk)
//!    └──────┬───────┘
//!           │
//!           v
//!    ┌──────────────┐
//!    │  Translator   │  (record → JSON body + ms timestamp)
//!    └──────┬───────┘
//!           │
//!           v
//!    ┌──────────────┐
//!    │   Registry    │  (one pusher per (group, stream), lazy)
//!    └──────┬───────┘
//!           │
//!           v
//!    ┌──────────────┐
//!    │    Pusher     │  (batching, retry, sequencing — external)
//!    └──────────────┘
//! ```
//!
//! ## Delivery semantics
//!
//! Best-effort within a batch: records that cannot be translated and events
//! that fail to append are logged and dropped without aborting the batch.
//! Only a flush failure reaches the host pipeline, which owns batch-level
//! retry and backpressure.

#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(unused_extern_crates)]
#![deny(unused_allocation)]
#![deny(unused_assignments)]
#![deny(unused_comparisons)]
#![deny(unreachable_pub)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

/// Exporter configuration and validation
pub mod config;

/// Error taxonomy for construction and translation
pub mod error;

/// Export coordinator, record translation, and pusher registry
pub mod exporter;

/// Logging infrastructure and tracing setup
pub mod logger;

/// Log record batch model consumed by the exporter
pub mod model;
