//! Lazy cache of delivery pushers, keyed by destination.
//!
//! For every log group there are multiple log streams, and for every stream
//! there is exactly one pusher for the lifetime of the exporter. Pushers are
//! constructed on first use via the caller's callback and never rebound or
//! pruned.
//!
//! The registry has no internal locking: callers access it only while
//! holding the exporter's sequencing lock. A finer-grained concurrency model
//! would need a registry lock of its own plus per-pusher serialization.

use std::collections::HashMap;
use std::sync::Arc;

use streamstore_client::pusher::Pusher;

pub(crate) struct PusherRegistry {
    pushers: HashMap<String, HashMap<String, Arc<dyn Pusher>>>,
}

impl PusherRegistry {
    pub(crate) fn new() -> Self {
        PusherRegistry {
            pushers: HashMap::new(),
        }
    }

    /// Returns the pusher for (group, stream), constructing it via `create`
    /// on first use. Construction happens at most once per key.
    pub(crate) fn resolve(
        &mut self,
        group: &str,
        stream: &str,
        create: impl FnOnce() -> Arc<dyn Pusher>,
    ) -> Arc<dyn Pusher> {
        self.pushers
            .entry(group.to_string())
            .or_default()
            .entry(stream.to_string())
            .or_insert_with(create)
            .clone()
    }

    /// Returns the pusher for (group, stream) if one was ever resolved.
    pub(crate) fn get(&self, group: &str, stream: &str) -> Option<Arc<dyn Pusher>> {
        self.pushers
            .get(group)
            .and_then(|streams| streams.get(stream))
            .cloned()
    }
}
