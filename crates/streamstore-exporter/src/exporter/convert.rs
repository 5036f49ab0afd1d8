// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Record translation: one structured log record in, one wire-ready event
//! out.
//!
//! The store's envelope is flat — a millisecond timestamp plus an opaque
//! message — so everything hierarchical about a record (typed attributes,
//! the resource that produced it, trace correlation) is flattened into a
//! single JSON object. Field presence mirrors source presence: absent or
//! zero-value fields are omitted from the serialized form, never emitted as
//! null or zero.

use serde::Serialize;
use serde_json::{Map, Number, Value};
use streamstore_client::event::LogEvent;
use tracing::debug;

use crate::error::TranslationError;
use crate::model::{AttributeMap, AttributeValue, LogRecord, LogsBatch};

/// Hard ceiling the store places on a single event, message plus envelope
/// overhead.
pub const MAX_EVENT_BYTES: usize = 256 * 1024;

/// Envelope overhead the store charges per event on top of the message
/// body.
pub const EVENT_OVERHEAD_BYTES: usize = 26;

const NANOS_PER_MILLI: u64 = 1_000_000;

/// Serialized projection of one record, as appended to the store.
///
/// Field order here is field order on the wire.
#[derive(Serialize)]
struct StoreLogBody<'a> {
    #[serde(skip_serializing_if = "str::is_empty")]
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<Value>,
    #[serde(skip_serializing_if = "is_zero_i32")]
    severity_number: i32,
    #[serde(skip_serializing_if = "str::is_empty")]
    severity_text: &'a str,
    #[serde(skip_serializing_if = "is_zero_u32")]
    dropped_attributes_count: u32,
    #[serde(skip_serializing_if = "is_zero_u32")]
    flags: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    span_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    attributes: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    resource: Option<&'a Map<String, Value>>,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_zero_i32(value: &i32) -> bool {
    *value == 0
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_zero_u32(value: &u32) -> bool {
    *value == 0
}

/// Flattens one attribute value into a plain JSON value.
///
/// Total over the variant set: scalars map to themselves, maps and arrays
/// recurse (arrays keep their order), and the empty marker becomes null.
/// Non-finite doubles have no JSON representation and flatten to null as
/// well.
#[must_use]
pub fn flatten_value(value: &AttributeValue) -> Value {
    match value {
        AttributeValue::Str(s) => Value::String(s.clone()),
        AttributeValue::Int(i) => Value::Number((*i).into()),
        AttributeValue::Double(d) => Number::from_f64(*d).map_or(Value::Null, Value::Number),
        AttributeValue::Bool(b) => Value::Bool(*b),
        AttributeValue::Map(entries) => Value::Object(
            entries
                .iter()
                .map(|(key, entry)| (key.clone(), flatten_value(entry)))
                .collect(),
        ),
        AttributeValue::Array(items) => Value::Array(items.iter().map(flatten_value).collect()),
        AttributeValue::Empty => Value::Null,
    }
}

/// Flattens a whole attribute collection.
///
/// A zero-entry collection yields `None` so the serialized field is absent
/// rather than an empty object — "no attributes" is distinguishable from
/// "attributes present but all flattened away".
#[must_use]
pub fn flatten_attributes(attributes: &AttributeMap) -> Option<Map<String, Value>> {
    if attributes.is_empty() {
        return None;
    }
    Some(
        attributes
            .iter()
            .map(|(key, value)| (key.clone(), flatten_value(value)))
            .collect(),
    )
}

/// Translates one record into a delivery event.
///
/// `resource` is the flattened attribute map of the record's resource
/// group, computed once per group and shared by every record in it. Pure:
/// no I/O, no state.
pub fn translate(
    resource: Option<&Map<String, Value>>,
    record: &LogRecord,
) -> Result<LogEvent, TranslationError> {
    let body = match flatten_value(&record.body) {
        Value::Null => None,
        value => Some(value),
    };

    let store_body = StoreLogBody {
        name: &record.name,
        body,
        severity_number: record.severity_number,
        severity_text: &record.severity_text,
        dropped_attributes_count: record.dropped_attributes_count,
        flags: record.flags,
        trace_id: (!record.trace_id.is_empty()).then(|| record.trace_id.to_hex()),
        span_id: (!record.span_id.is_empty()).then(|| record.span_id.to_hex()),
        attributes: flatten_attributes(&record.attributes),
        resource,
    };

    let message = serde_json::to_string(&store_body)?;
    let limit = MAX_EVENT_BYTES - EVENT_OVERHEAD_BYTES;
    if message.len() > limit {
        return Err(TranslationError::EventTooLarge {
            size: message.len(),
            limit,
        });
    }

    // Truncating division: the envelope carries milliseconds.
    let timestamp =
        i64::try_from(record.time_unix_nano / NANOS_PER_MILLI).unwrap_or(i64::MAX);
    Ok(LogEvent::new(timestamp, message))
}

/// Translates every record of a batch, flattening each resource group's
/// attributes once.
///
/// Returns the translated events and the number of records dropped because
/// translation failed. Drops never abort the batch.
pub(crate) fn translate_batch(batch: &LogsBatch) -> (Vec<LogEvent>, usize) {
    let mut events = Vec::new();
    let mut dropped = 0_usize;

    for resource_logs in &batch.resource_logs {
        let resource = flatten_attributes(&resource_logs.resource);
        for scope_logs in &resource_logs.scope_logs {
            for record in &scope_logs.records {
                match translate(resource.as_ref(), record) {
                    Ok(event) => events.push(event),
                    Err(e) => {
                        debug!(error = %e, "LOGS | Failed to translate log record");
                        dropped += 1;
                    }
                }
            }
        }
    }

    (events, dropped)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::{ResourceLogs, ScopeLogs, SpanId, TraceId};

    fn parse(event: &LogEvent) -> Value {
        serde_json::from_str(&event.message).unwrap()
    }

    fn attrs(entries: &[(&str, AttributeValue)]) -> AttributeMap {
        entries
            .iter()
            .map(|(key, value)| ((*key).to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn test_flatten_scalars() {
        assert_eq!(flatten_value(&AttributeValue::from("s")), Value::from("s"));
        assert_eq!(flatten_value(&AttributeValue::from(7_i64)), Value::from(7));
        assert_eq!(
            flatten_value(&AttributeValue::from(true)),
            Value::from(true)
        );
        assert_eq!(
            flatten_value(&AttributeValue::from(1.5_f64)),
            Value::from(1.5)
        );
    }

    #[test]
    fn test_flatten_empty_is_null() {
        assert_eq!(flatten_value(&AttributeValue::Empty), Value::Null);
    }

    #[test]
    fn test_flatten_non_finite_double_is_null() {
        assert_eq!(
            flatten_value(&AttributeValue::Double(f64::NAN)),
            Value::Null
        );
        assert_eq!(
            flatten_value(&AttributeValue::Double(f64::INFINITY)),
            Value::Null
        );
    }

    #[test]
    fn test_flatten_nested_map() {
        let value = AttributeValue::Map(attrs(&[
            ("outer", AttributeValue::from(1_i64)),
            (
                "nested",
                AttributeValue::Map(attrs(&[("inner", AttributeValue::from("deep"))])),
            ),
        ]));
        let flattened = flatten_value(&value);
        assert_eq!(flattened["outer"], Value::from(1));
        assert_eq!(flattened["nested"]["inner"], Value::from("deep"));
    }

    #[test]
    fn test_flatten_array_preserves_order() {
        let value = AttributeValue::Array(vec![
            AttributeValue::from(3_i64),
            AttributeValue::from(1_i64),
            AttributeValue::from(2_i64),
        ]);
        assert_eq!(
            flatten_value(&value),
            Value::Array(vec![Value::from(3), Value::from(1), Value::from(2)])
        );
    }

    #[test]
    fn test_flatten_empty_array_stays_array() {
        assert_eq!(
            flatten_value(&AttributeValue::Array(Vec::new())),
            Value::Array(Vec::new())
        );
    }

    #[test]
    fn test_flatten_attributes_empty_is_absent() {
        assert!(flatten_attributes(&AttributeMap::new()).is_none());
    }

    #[test]
    fn test_translate_minimal_record_omits_everything() {
        let record = LogRecord::default();
        let event = translate(None, &record).unwrap();

        assert_eq!(event.message, "{}");
        assert_eq!(event.timestamp, 0);
    }

    #[test]
    fn test_translate_full_record_field_set() {
        let record = LogRecord {
            name: "ProcessStarted".to_string(),
            body: AttributeValue::from("hello"),
            severity_number: 9,
            severity_text: "Info".to_string(),
            dropped_attributes_count: 1,
            flags: 1,
            trace_id: TraceId([0xab; 16]),
            span_id: SpanId([0xcd; 8]),
            attributes: attrs(&[("key", AttributeValue::from("value"))]),
            time_unix_nano: 1_700_000_000_000_000_000,
        };
        let resource = flatten_attributes(&attrs(&[("host", AttributeValue::from("web-1"))]));

        let event = translate(resource.as_ref(), &record).unwrap();
        let body = parse(&event);

        let keys: Vec<&str> = body.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![
                "name",
                "body",
                "severity_number",
                "severity_text",
                "dropped_attributes_count",
                "flags",
                "trace_id",
                "span_id",
                "attributes",
                "resource",
            ]
        );
        assert_eq!(body["name"], "ProcessStarted");
        assert_eq!(body["body"], "hello");
        assert_eq!(body["severity_number"], 9);
        assert_eq!(body["trace_id"], "ab".repeat(16));
        assert_eq!(body["span_id"], "cd".repeat(8));
        assert_eq!(body["attributes"]["key"], "value");
        assert_eq!(body["resource"]["host"], "web-1");
        assert_eq!(event.timestamp, 1_700_000_000_000);
    }

    #[test]
    fn test_translate_omits_unset_trace_and_span() {
        let record = LogRecord {
            name: "NoTrace".to_string(),
            trace_id: TraceId::INVALID,
            span_id: SpanId::INVALID,
            ..LogRecord::default()
        };
        let body = parse(&translate(None, &record).unwrap());
        assert!(body.get("trace_id").is_none());
        assert!(body.get("span_id").is_none());
    }

    #[test]
    fn test_translate_omits_zero_severity_and_flags() {
        let record = LogRecord {
            name: "Quiet".to_string(),
            ..LogRecord::default()
        };
        let body = parse(&translate(None, &record).unwrap());
        assert!(body.get("severity_number").is_none());
        assert!(body.get("flags").is_none());
        assert!(body.get("dropped_attributes_count").is_none());
    }

    #[test]
    fn test_translate_omits_empty_attribute_collections() {
        let record = LogRecord {
            name: "Bare".to_string(),
            ..LogRecord::default()
        };
        let body = parse(&translate(None, &record).unwrap());
        assert!(body.get("attributes").is_none());
        assert!(body.get("resource").is_none());
    }

    #[test]
    fn test_translate_empty_body_is_omitted() {
        let record = LogRecord {
            name: "NoBody".to_string(),
            body: AttributeValue::Empty,
            ..LogRecord::default()
        };
        let body = parse(&translate(None, &record).unwrap());
        assert!(body.get("body").is_none());
    }

    #[test]
    fn test_timestamp_truncates_not_rounds() {
        let at = |time_unix_nano: u64| LogRecord {
            time_unix_nano,
            ..LogRecord::default()
        };
        assert_eq!(translate(None, &at(1_500_000)).unwrap().timestamp, 1);
        assert_eq!(translate(None, &at(1_999_999)).unwrap().timestamp, 1);
        assert_eq!(translate(None, &at(2_000_000)).unwrap().timestamp, 2);
    }

    #[test]
    fn test_translate_rejects_oversized_event() {
        let record = LogRecord {
            body: AttributeValue::from("x".repeat(MAX_EVENT_BYTES)),
            ..LogRecord::default()
        };
        let err = translate(None, &record).unwrap_err();
        assert!(matches!(err, TranslationError::EventTooLarge { .. }));
    }

    #[test]
    fn test_translate_batch_flattens_resource_once_per_group() {
        let batch = LogsBatch {
            resource_logs: vec![
                ResourceLogs {
                    resource: attrs(&[("host", AttributeValue::from("web-1"))]),
                    scope_logs: vec![ScopeLogs {
                        records: vec![LogRecord::default(), LogRecord::default()],
                        ..ScopeLogs::default()
                    }],
                },
                ResourceLogs {
                    resource: attrs(&[("host", AttributeValue::from("web-2"))]),
                    scope_logs: vec![ScopeLogs {
                        records: vec![LogRecord::default()],
                        ..ScopeLogs::default()
                    }],
                },
            ],
        };

        let (events, dropped) = translate_batch(&batch);
        assert_eq!(events.len(), 3);
        assert_eq!(dropped, 0);
        assert_eq!(parse(&events[0])["resource"]["host"], "web-1");
        assert_eq!(parse(&events[1])["resource"]["host"], "web-1");
        assert_eq!(parse(&events[2])["resource"]["host"], "web-2");
    }

    #[test]
    fn test_translate_batch_counts_drops_and_continues() {
        let oversized = LogRecord {
            body: AttributeValue::from("x".repeat(MAX_EVENT_BYTES)),
            ..LogRecord::default()
        };
        let batch = LogsBatch {
            resource_logs: vec![ResourceLogs {
                resource: AttributeMap::new(),
                scope_logs: vec![ScopeLogs {
                    records: vec![
                        LogRecord::default(),
                        oversized,
                        LogRecord::default(),
                    ],
                    ..ScopeLogs::default()
                }],
            }],
        };

        let (events, dropped) = translate_batch(&batch);
        assert_eq!(events.len(), 2);
        assert_eq!(dropped, 1);
    }

    #[test]
    fn test_translate_batch_empty() {
        let (events, dropped) = translate_batch(&LogsBatch::default());
        assert!(events.is_empty());
        assert_eq!(dropped, 0);
    }
}
