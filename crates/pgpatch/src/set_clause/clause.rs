use super::MAX_PARAMS;
use super::builder::too_many_params;
use crate::error::PatchResult;
use std::fmt;
use tokio_postgres::types::ToSql;

/// The SET clause of a partial UPDATE together with its bind values.
///
/// The Nth `"column"=$N` fragment in [`set_cols`](Self::set_cols) is bound to
/// the Nth entry of [`values`](Self::values).
#[derive(Debug, Clone, PartialEq)]
pub struct SetClause<V> {
    pub(crate) set_cols: String,
    pub(crate) values: Vec<V>,
    pub(crate) start_index: usize,
}

impl<V> SetClause<V> {
    /// Comma-joined `"column"=$N` fragments.
    pub fn set_cols(&self) -> &str {
        &self.set_cols
    }

    /// Bind values in placeholder order.
    pub fn values(&self) -> &[V] {
        &self.values
    }

    pub fn into_parts(self) -> (String, Vec<V>) {
        (self.set_cols, self.values)
    }

    /// Number of bound values (SET columns plus anything added with [`bind`](Self::bind)).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Placeholder number the caller should use for the next parameter.
    ///
    /// ```ignore
    /// let clause = sql_for_partial_update(payload, &map)?;
    /// let sql = format!(
    ///     "UPDATE users SET {} WHERE username = ${}",
    ///     clause.set_cols(),
    ///     clause.next_placeholder()
    /// );
    /// ```
    pub fn next_placeholder(&self) -> usize {
        self.start_index + self.values.len()
    }

    /// Append a trailing parameter (for example the WHERE key) and return its
    /// 1-based placeholder number. `set_cols` is left untouched.
    ///
    /// Fails once the placeholder would pass [`MAX_PARAMS`].
    pub fn bind(&mut self, value: impl Into<V>) -> PatchResult<usize> {
        let idx = self.next_placeholder();
        if idx > MAX_PARAMS {
            return Err(too_many_params(self.start_index, self.values.len() + 1));
        }
        self.values.push(value.into());
        Ok(idx)
    }
}

impl<V> SetClause<V>
where
    V: ToSql + Sync,
{
    /// Parameter refs compatible with `tokio-postgres`.
    pub fn params(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.values
            .iter()
            .map(|v| v as &(dyn ToSql + Sync))
            .collect()
    }
}

impl<V> fmt::Display for SetClause<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.set_cols)
    }
}
