use serde::{Deserialize, Serialize};
use serde_json::{Map as JsonMap, Value as JsonValue};

/// Product record as delivered by the catalog service.
///
/// The shape is owned upstream: any field may be missing, renamed, `null` or of
/// an unexpected JSON type. Readers go through the lenient accessors below and
/// never fail.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawProductRecord(JsonMap<String, JsonValue>);

impl RawProductRecord {
    pub fn new(fields: JsonMap<String, JsonValue>) -> Self {
        Self(fields)
    }

    pub fn fields(&self) -> &JsonMap<String, JsonValue> {
        &self.0
    }

    /// Look up a dotted path (`inventory.available`), descending through objects.
    pub fn get_path(&self, path: &str) -> Option<&JsonValue> {
        lookup_path(&self.0, path)
    }

    /// Like [`get_path`](Self::get_path) but treats `null` as absent.
    pub fn get_present(&self, path: &str) -> Option<&JsonValue> {
        self.get_path(path).filter(|v| !v.is_null())
    }
}

/// Non-object JSON values become an empty record.
impl From<JsonValue> for RawProductRecord {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Object(map) => Self(map),
            _ => Self::default(),
        }
    }
}

impl From<JsonMap<String, JsonValue>> for RawProductRecord {
    fn from(map: JsonMap<String, JsonValue>) -> Self {
        Self(map)
    }
}

/// Resolve a dotted path against a JSON object.
pub fn lookup_path<'a>(fields: &'a JsonMap<String, JsonValue>, path: &str) -> Option<&'a JsonValue> {
    let mut segments = path.split('.');
    let mut current = fields.get(segments.next()?)?;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// Numeric coercion of an upstream value.
///
/// Numbers pass through, booleans become 1/0, strings are trimmed and parsed
/// (blank strings are 0, `0x`/`0o`/`0b` prefixes select the radix). Anything
/// else, and any non-finite result, is `None`. `-0` comes back as `0`.
pub fn coerce_number(value: &JsonValue) -> Option<f64> {
    let n = match value {
        JsonValue::Number(n) => n.as_f64()?,
        JsonValue::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        JsonValue::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                0.0
            } else {
                parse_numeric_text(s)?
            }
        }
        JsonValue::Null | JsonValue::Array(_) | JsonValue::Object(_) => return None,
    };
    // Adding 0.0 turns -0.0 into 0.0.
    n.is_finite().then_some(n + 0.0)
}

fn parse_numeric_text(s: &str) -> Option<f64> {
    let radix = match s.get(..2) {
        Some("0x" | "0X") => 16,
        Some("0o" | "0O") => 8,
        Some("0b" | "0B") => 2,
        _ => return s.parse().ok(),
    };
    let digits = &s[2..];
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0f64, |acc, c| {
        c.to_digit(radix)
            .map(|d| acc * f64::from(radix) + f64::from(d))
    })
}

/// Truthiness of an upstream flag.
pub fn is_truthy(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => false,
        JsonValue::Bool(b) => *b,
        JsonValue::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        JsonValue::String(s) => !s.is_empty(),
        JsonValue::Array(_) | JsonValue::Object(_) => true,
    }
}

/// Text view of an upstream value: strings as-is, numbers rendered.
pub fn coerce_text(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
