//! # pgpatch
//!
//! Build the `SET` clause of a PostgreSQL partial `UPDATE`.
//!
//! A PATCH-style request carries only the fields that changed. `pgpatch`
//! turns that payload into `"column"=$N` fragments plus the values to bind,
//! numbering placeholders in payload order and renaming fields to their
//! storage columns where they differ.
//!
//! ## Features
//!
//! - **Order preserving**: [`UpdatePayload`] keeps insertion (or JSON member) order
//! - **Field renaming**: [`FieldNameMap`] maps `firstName` to `first_name`
//! - **Offset-aware**: start numbering past earlier parameters, bind trailing ones
//! - **tokio-postgres ready**: [`Value`] implements `ToSql`
//!
//! ## Example
//!
//! ```
//! use pgpatch::{FieldNameMap, UpdatePayload, sql_for_partial_update};
//!
//! let payload: UpdatePayload =
//!     serde_json::from_str(r#"{"firstName": "Aliya", "age": 32}"#).unwrap();
//! let map = FieldNameMap::new().map("firstName", "first_name");
//!
//! let mut clause = sql_for_partial_update(payload, &map).unwrap();
//! let idx = clause.bind("aliya").unwrap();
//! let sql = format!("UPDATE users SET {} WHERE username = ${idx}", clause.set_cols());
//!
//! assert_eq!(sql, r#"UPDATE users SET "first_name"=$1, "age"=$2 WHERE username = $3"#);
//! assert_eq!(clause.params().len(), 3);
//! ```
//!
//! An empty payload is rejected with [`PatchError::BadRequest`].

pub mod error;
pub mod field_map;
pub mod payload;
pub mod set_clause;
pub mod value;

pub use error::{PatchError, PatchResult};
pub use field_map::FieldNameMap;
pub use payload::UpdatePayload;
pub use set_clause::{MAX_PARAMS, SetClause, SetClauseBuilder, sql_for_partial_update};
pub use value::Value;
