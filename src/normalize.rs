//! # Payload Normalization
//!
//! Maps the host's loosely-typed session document onto [`SessionPayload`].
//! Every canonical field has a primary (snake_case) and a secondary
//! (camelCase) input key; the first one present wins.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

use crate::error::HookError;
use crate::models::{HookInput, SessionPayload};

pub const UNKNOWN_MODEL: &str = "unknown";

/// Input keys for one canonical field, in lookup order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldAliases {
    pub canonical: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
}

impl FieldAliases {
    const fn new(canonical: &'static str, primary: &'static str, secondary: &'static str) -> Self {
        Self {
            canonical,
            primary,
            secondary,
        }
    }

    pub fn keys(&self) -> [&'static str; 2] {
        [self.primary, self.secondary]
    }

    /// First present value, `null` counting as absent.
    pub fn resolve<'a>(&self, input: &'a HookInput) -> Option<&'a Value> {
        self.keys().into_iter().find_map(|k| input.get(k))
    }
}

pub const SESSION_ID: FieldAliases = FieldAliases::new("session_id", "session_id", "sessionId");
pub const STARTED_AT: FieldAliases = FieldAliases::new("started_at", "started_at", "startedAt");
pub const ENDED_AT: FieldAliases = FieldAliases::new("ended_at", "ended_at", "endedAt");
pub const INPUT_TOKENS: FieldAliases =
    FieldAliases::new("input_tokens", "input_tokens", "inputTokens");
pub const OUTPUT_TOKENS: FieldAliases =
    FieldAliases::new("output_tokens", "output_tokens", "outputTokens");
pub const CACHE_CREATION_TOKENS: FieldAliases = FieldAliases::new(
    "cache_creation_tokens",
    "cache_creation_tokens",
    "cacheCreationTokens",
);
pub const CACHE_READ_TOKENS: FieldAliases =
    FieldAliases::new("cache_read_tokens", "cache_read_tokens", "cacheReadTokens");
pub const MODEL_NAME: FieldAliases = FieldAliases::new("model_name", "model_name", "modelName");

pub const FIELD_ALIASES: [FieldAliases; 8] = [
    SESSION_ID,
    STARTED_AT,
    ENDED_AT,
    INPUT_TOKENS,
    OUTPUT_TOKENS,
    CACHE_CREATION_TOKENS,
    CACHE_READ_TOKENS,
    MODEL_NAME,
];

/// ISO-8601 UTC timestamp with an explicit `+00:00` offset.
pub fn iso_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Micros, false)
}

/// Build the canonical payload. `now` fills a missing end timestamp.
pub fn normalize(input: &HookInput, now: DateTime<Utc>) -> Result<SessionPayload, HookError> {
    let ended_at = string_field(input, ENDED_AT);
    let ended_at = if ended_at.is_empty() {
        iso_timestamp(now)
    } else {
        ended_at
    };
    let model_name = string_field(input, MODEL_NAME);
    let model_name = if model_name.is_empty() {
        UNKNOWN_MODEL.to_string()
    } else {
        model_name
    };

    Ok(SessionPayload {
        cache_creation_tokens: token_field(input, CACHE_CREATION_TOKENS)?,
        cache_read_tokens: token_field(input, CACHE_READ_TOKENS)?,
        ended_at,
        input_tokens: token_field(input, INPUT_TOKENS)?,
        model_name,
        output_tokens: token_field(input, OUTPUT_TOKENS)?,
        session_id: string_field(input, SESSION_ID),
        started_at: string_field(input, STARTED_AT),
    })
}

fn string_field(input: &HookInput, field: FieldAliases) -> String {
    match field.resolve(input) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

fn token_field(input: &HookInput, field: FieldAliases) -> Result<i64, HookError> {
    match field.resolve(input) {
        None => Ok(0),
        Some(value) => coerce_count(value).ok_or_else(|| HookError::InvalidTokenCount {
            field: field.canonical,
            value: value.to_string(),
        }),
    }
}

/// Integer view of a token counter, or `None` when the value is not numeric.
pub fn coerce_count(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().and_then(|u| i64::try_from(u).ok()))
            .or_else(|| n.as_f64().and_then(truncate_f64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(truncate_f64))
        }
        Value::Bool(b) => Some(i64::from(*b)),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn truncate_f64(f: f64) -> Option<i64> {
    // 2^63; anything at or past it cannot be represented without clamping
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    let t = f.trunc();
    (t.is_finite() && (-LIMIT..LIMIT).contains(&t)).then(|| t as i64)
}
