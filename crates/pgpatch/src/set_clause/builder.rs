use super::MAX_PARAMS;
use super::clause::SetClause;
use crate::error::{PatchError, PatchResult};
use crate::field_map::FieldNameMap;
use crate::payload::UpdatePayload;

/// Builds the SET clause for a partial UPDATE.
///
/// By default placeholders start at `$1`, every field is its own column and
/// column names are only wrapped in double quotes.
#[derive(Debug, Clone)]
pub struct SetClauseBuilder {
    field_map: FieldNameMap,
    /// Never 0.
    start_index: usize,
    strict_columns: bool,
}

impl Default for SetClauseBuilder {
    fn default() -> Self {
        Self {
            field_map: FieldNameMap::new(),
            start_index: 1,
            strict_columns: false,
        }
    }
}

impl SetClauseBuilder {
    /// Create a builder with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate field names through `field_map`.
    pub fn with_field_map(mut self, field_map: FieldNameMap) -> Self {
        self.field_map = field_map;
        self
    }

    /// Number the first placeholder `start` instead of 1.
    ///
    /// Use this when the statement binds other parameters before the SET
    /// clause. `0` is treated as `1`.
    pub fn with_start_index(mut self, start: usize) -> Self {
        self.start_index = start.max(1);
        self
    }

    /// Enable or disable the column-name check.
    pub fn with_strict_columns(mut self, strict: bool) -> Self {
        self.strict_columns = strict;
        self
    }

    /// Build the clause, consuming `payload`.
    ///
    /// Fails with [`PatchError::BadRequest`] when the payload is empty or the
    /// last placeholder would exceed [`MAX_PARAMS`].
    pub fn build<V>(&self, payload: UpdatePayload<V>) -> PatchResult<SetClause<V>> {
        if payload.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::debug!(target: "pgpatch.sql", "rejected empty update payload");
            return Err(PatchError::no_data());
        }

        let start = self.start_index;
        let last = match start.checked_add(payload.len() - 1) {
            Some(last) if last <= MAX_PARAMS => last,
            _ => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    target: "pgpatch.sql",
                    start_index = start,
                    params = payload.len(),
                    "rejected update payload past the parameter limit"
                );
                return Err(too_many_params(start, payload.len()));
            }
        };

        // Pre-size: quotes + '=' + '$' + digits per fragment, ", " between.
        let mut cap = (payload.len() - 1) * 2;
        for field in payload.keys() {
            cap += self.field_map.column_for(field).len() + 4 + decimal_digits(last);
        }

        let mut set_cols = String::with_capacity(cap);
        let mut values = Vec::with_capacity(payload.len());

        for (i, (field, value)) in payload.into_iter().enumerate() {
            let column = self.field_map.column_for(&field);
            if self.strict_columns {
                check_column(column)?;
            }

            if i > 0 {
                set_cols.push_str(", ");
            }
            set_cols.push('"');
            set_cols.push_str(column);
            set_cols.push_str("\"=$");
            push_usize(&mut set_cols, start + i);

            values.push(value);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "pgpatch.sql",
            set_cols = %set_cols,
            params = values.len(),
            start_index = start,
            "built partial update SET clause"
        );

        Ok(SetClause {
            set_cols,
            values,
            start_index: start,
        })
    }
}

/// Build the SET clause of a partial UPDATE.
///
/// Fields are numbered `$1, $2, ...` in payload order and renamed through
/// `field_map` where an entry exists.
///
/// ```
/// use pgpatch::{FieldNameMap, UpdatePayload, Value, sql_for_partial_update};
///
/// let payload = UpdatePayload::<Value>::new()
///     .set("firstName", "Aliya")
///     .set("age", 32);
/// let map = FieldNameMap::new().map("firstName", "first_name");
///
/// let clause = sql_for_partial_update(payload, &map).unwrap();
/// assert_eq!(clause.set_cols(), r#""first_name"=$1, "age"=$2"#);
/// assert_eq!(clause.values(), &[Value::from("Aliya"), Value::from(32)]);
/// ```
pub fn sql_for_partial_update<V>(
    payload: UpdatePayload<V>,
    field_map: &FieldNameMap,
) -> PatchResult<SetClause<V>> {
    SetClauseBuilder::new()
        .with_field_map(field_map.clone())
        .build(payload)
}

pub(super) fn too_many_params(start: usize, count: usize) -> PatchError {
    PatchError::bad_request(format!(
        "{count} parameter(s) starting at ${start} exceed the limit of {MAX_PARAMS}"
    ))
}

fn check_column(column: &str) -> PatchResult<()> {
    if column.is_empty() {
        return Err(PatchError::invalid_column("column name cannot be empty"));
    }
    if column.contains('\0') {
        return Err(PatchError::invalid_column(format!(
            "'{}' contains a NUL character",
            column.escape_debug()
        )));
    }
    if column.contains('"') {
        return Err(PatchError::invalid_column(format!(
            "'{column}' contains a double quote"
        )));
    }
    Ok(())
}

#[inline]
fn decimal_digits(n: usize) -> usize {
    if n < 10 {
        1
    } else {
        (n.ilog10() as usize) + 1
    }
}

// Write a usize as decimal digits without going through fmt.
#[inline]
fn push_usize(out: &mut String, mut n: usize) {
    if n < 10 {
        out.push((b'0' + n as u8) as char);
        return;
    }
    let mut buf = [0u8; 20];
    let mut pos = buf.len();
    while n > 0 {
        pos -= 1;
        buf[pos] = b'0' + (n % 10) as u8;
        n /= 10;
    }
    for &digit in &buf[pos..] {
        out.push(digit as char);
    }
}
