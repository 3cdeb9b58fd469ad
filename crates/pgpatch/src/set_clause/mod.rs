//! SET clause construction for partial UPDATE statements.
//!
//! A partial update only touches the columns the caller sent. This module
//! turns such a payload into the `SET` part of the statement and the values
//! to bind, leaving the rest of the statement to the caller.
//!
//! # Example
//!
//! ```ignore
//! use pgpatch::{FieldNameMap, UpdatePayload, sql_for_partial_update};
//!
//! let payload: UpdatePayload = serde_json::from_str(body)?;
//! let map = FieldNameMap::new().map("firstName", "first_name");
//!
//! let mut clause = sql_for_partial_update(payload, &map)?;
//! let idx = clause.bind(username)?;
//! let sql = format!(
//!     "UPDATE users SET {} WHERE username = ${idx} RETURNING username",
//!     clause.set_cols()
//! );
//! client.query_one(&sql, &clause.params()).await?;
//! ```

mod builder;
mod clause;


/// Highest placeholder number PostgreSQL accepts (`$65535`).
pub const MAX_PARAMS: usize = u16::MAX as usize;

pub use builder::{SetClauseBuilder, sql_for_partial_update};
pub use clause::SetClause;
