// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! # Streamstore Client
//!
//! Collaborator-facing types for delivering log events to a sequenced,
//! append-only log store. A destination is a (group, stream) pair; each
//! stream accepts events strictly in order, one writer at a time.
//!
//! This crate defines the seams the exporter core programs against:
//!
//! - [`event::LogEvent`]: a single wire-ready event (millisecond timestamp
//!   plus a serialized message)
//! - [`pusher::Pusher`]: the per-stream delivery collaborator that owns
//!   batching, retries, and the store's sequencing handshake
//! - [`client::StoreClient`] / [`client::ClientFactory`]: session
//!   establishment and pusher construction against the remote store
//!
//! The store's wire protocol, authentication, and retry policy live entirely
//! behind these traits; this crate carries no network code.

#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(unused_extern_crates)]
#![deny(unreachable_pub)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

/// Session establishment and pusher construction seams.
pub mod client;

/// Wire-ready delivery event.
pub mod event;

/// Per-stream delivery collaborator and its error types.
pub mod pusher;
