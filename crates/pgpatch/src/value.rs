//! Scalar values carried by an update payload.
//!
//! [`Value`] is what a request body usually holds for a column: null, a
//! boolean, a number or a string. Nested JSON is kept as [`Value::Json`] so it
//! can be bound to a `json`/`jsonb` column.

use bytes::BytesMut;
use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use tokio_postgres::types::{IsNull, ToSql, Type};

/// A dynamically typed bind value.
///
/// Each variant binds only to the column types its Rust counterpart binds to
/// in `tokio-postgres`:
///
/// | Variant | Column types |
/// |---|---|
/// | `Null` | any |
/// | `Bool` | `bool` |
/// | `Int` | `int2`, `int4`, `int8`, `float4`, `float8` |
/// | `Float` | `float4`, `float8` |
/// | `Text` | `text`, `varchar`, `bpchar`, `name`, unknown |
/// | `Json` | `json`, `jsonb` |
///
/// Anything else (`numeric`, `date`, `timestamptz`, `uuid`, ...) fails when
/// the statement is executed with a "cannot convert" error. Cast in SQL
/// (`"founded"=$1::text::date`) or bind a concrete type through
/// `SetClause<V>` for such columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    /// Arrays, objects and integers above `i64::MAX`.
    Json(serde_json::Value),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the string if this is a [`Value::Text`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns the integer if this is a [`Value::Int`].
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Self::Int(v.into())
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(v.into())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => match (n.as_i64(), n.as_f64()) {
                (Some(i), _) => Self::Int(i),
                (None, Some(f)) if n.is_f64() => Self::Float(f),
                // u64 above i64::MAX stays exact
                _ => Self::Json(serde_json::Value::Number(n)),
            },
            serde_json::Value::String(s) => Self::Text(s),
            other => Self::Json(other),
        }
    }
}

// Goes through `serde_json::Value` so numbers get the same treatment as
// `From<serde_json::Value>`; an untagged derive would widen large u64 to f64.
impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        serde_json::Value::deserialize(deserializer).map(Into::into)
    }
}

// ─── ToSql ──────────────────────────────────────────────────────────────────

impl ToSql for Value {
    fn to_sql(
        &self,
        ty: &Type,
        out: &mut BytesMut,
    ) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
        match self {
            Self::Null => Ok(IsNull::Yes),
            Self::Bool(v) => v.to_sql_checked(ty, out),
            // Integers follow the column width; out-of-range values are errors.
            Self::Int(v) => match *ty {
                Type::INT2 => i16::try_from(*v)?.to_sql(ty, out),
                Type::INT4 => i32::try_from(*v)?.to_sql(ty, out),
                Type::FLOAT4 => (*v as f32).to_sql(ty, out),
                Type::FLOAT8 => (*v as f64).to_sql(ty, out),
                _ => v.to_sql_checked(ty, out),
            },
            Self::Float(v) => match *ty {
                Type::FLOAT4 => (*v as f32).to_sql(ty, out),
                _ => v.to_sql_checked(ty, out),
            },
            Self::Text(v) => v.to_sql_checked(ty, out),
            Self::Json(v) => v.to_sql_checked(ty, out),
        }
    }

    // Type checking happens per variant in `to_sql`.
    fn accepts(_ty: &Type) -> bool {
        true
    }

    tokio_postgres::types::to_sql_checked!();
}
