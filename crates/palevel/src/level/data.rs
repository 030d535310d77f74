use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::codec::{self, JsonCodec, RawFileCodec};
use crate::error::{Error, Result};

/// A JSON object document as stored in `.lsb` / `.lst` files.
pub type Document = Map<String, JsonValue>;

macro_rules! json_document {
    ($(#[$meta:meta])* $name:ident, $context:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
        #[serde(deny_unknown_fields)]
        pub struct $name {
            pub data: Document,
        }

        impl $name {
            pub fn new(data: Document) -> Self {
                Self { data }
            }

            /// Follow `path` through nested objects.
            pub fn lookup(&self, path: &[&str]) -> Option<&JsonValue> {
                lookup(&self.data, path)
            }
        }

        impl JsonCodec for $name {
            fn to_json(&self) -> Result<JsonValue> {
                codec::encode(self)
            }

            fn from_json(value: JsonValue) -> Result<Self> {
                codec::decode(value, $context)
            }
        }

        impl RawFileCodec for $name {
            fn from_raw_bytes(bytes: Vec<u8>) -> Result<Self> {
                match serde_json::from_slice(&bytes)? {
                    JsonValue::Object(data) => Ok(Self { data }),
                    other => Err(Error::Decode(format!(
                        "{}: expected a JSON object, found {}",
                        $context,
                        kind(&other)
                    ))),
                }
            }

            fn to_raw_bytes(&self) -> Result<Vec<u8>> {
                Ok(serde_json::to_vec(&self.data)?)
            }
        }
    };
}

json_document!(
    /// A `level.lsb` document.
    Level,
    "level"
);

json_document!(
    /// A `metadata.lsb` document.
    Metadata,
    "metadata"
);

json_document!(
    /// A `.lst` theme document.
    Theme,
    "theme"
);

impl Theme {
    /// The theme's `id`, if present and coercible to an integer.
    pub fn id(&self) -> Option<i64> {
        self.data.get("id").and_then(coerce_int)
    }
}

/// The `level.ogg` audio of a level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Audio {
    #[serde(with = "base64_bytes")]
    pub audio_bytes: Vec<u8>,
}

impl Audio {
    pub fn new(audio_bytes: Vec<u8>) -> Self {
        Self { audio_bytes }
    }
}

impl JsonCodec for Audio {
    fn to_json(&self) -> Result<JsonValue> {
        codec::encode(self)
    }

    fn from_json(value: JsonValue) -> Result<Self> {
        codec::decode(value, "audio")
    }
}

impl RawFileCodec for Audio {
    fn from_raw_bytes(bytes: Vec<u8>) -> Result<Self> {
        Ok(Self::new(bytes))
    }

    fn to_raw_bytes(&self) -> Result<Vec<u8>> {
        Ok(self.audio_bytes.clone())
    }
}

mod base64_bytes {
    use super::*;
    use serde::{Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(
        bytes: &[u8],
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Vec<u8>, D::Error> {
        let text = String::deserialize(deserializer)?;
        STANDARD.decode(text.as_bytes()).map_err(de::Error::custom)
    }
}

/// Follow `path` through nested JSON objects.
pub fn lookup<'a>(data: &'a Document, path: &[&str]) -> Option<&'a JsonValue> {
    let (first, rest) = path.split_first()?;
    let mut current = data.get(*first)?;
    for key in rest {
        current = current.as_object()?.get(*key)?;
    }
    Some(current)
}

/// Coerce a stringified or numeric JSON value to an integer.
///
/// Strings are trimmed before parsing; floats are truncated toward zero.
pub fn coerce_int(value: &JsonValue) -> Option<i64> {
    match value {
        JsonValue::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
                .map(|f| f.trunc() as i64)
        }),
        JsonValue::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
