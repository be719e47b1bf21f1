//! SQL builder for single-row INSERT statements.
//!
//! Identifiers are validated and quoted; values are always bound as
//! positional parameters, never interpolated.

use super::StorageError;

/// Upper bound on identifier length in Postgres (NAMEDATALEN - 1).
const MAX_IDENTIFIER_LEN: usize = 63;

/// Checks that `ident` is a plain SQL identifier: ASCII letters, digits and
/// underscores, not starting with a digit.
pub fn validate_identifier(ident: &str) -> Result<(), StorageError> {
    let mut chars = ident.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    let valid_rest = chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

    if valid_start && valid_rest && ident.len() <= MAX_IDENTIFIER_LEN {
        Ok(())
    } else {
        Err(StorageError::InvalidIdentifier(ident.to_string()))
    }
}

/// Builder for `INSERT INTO ... VALUES ...` with parameter tracking.
///
/// # Example
/// ```ignore
/// let mut ib = InsertBuilder::new("robots")?;
/// ib.add_column("name")?;
/// ib.add_column("year")?;
/// assert_eq!(ib.build(), r#"INSERT INTO "robots" ("name", "year") VALUES ($1, $2)"#);
/// ```
#[derive(Debug)]
pub struct InsertBuilder {
    table: String,
    columns: Vec<String>,
    param_idx: usize,
}

impl InsertBuilder {
    /// Creates a builder for `table`, rejecting invalid names.
    pub fn new(table: &str) -> Result<Self, StorageError> {
        validate_identifier(table)?;
        Ok(Self {
            table: table.to_string(),
            columns: Vec::new(),
            param_idx: 1,
        })
    }

    /// Adds a column and returns the parameter index it binds to.
    pub fn add_column(&mut self, column: &str) -> Result<usize, StorageError> {
        validate_identifier(column)?;
        let idx = self.param_idx;
        self.columns.push(column.to_string());
        self.param_idx += 1;
        Ok(idx)
    }

    /// Adds every column in order.
    pub fn add_columns<'a>(
        &mut self,
        columns: impl IntoIterator<Item = &'a str>,
    ) -> Result<&mut Self, StorageError> {
        for column in columns {
            self.add_column(column)?;
        }
        Ok(self)
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Builds the statement. With no columns the row takes column defaults.
    pub fn build(&self) -> String {
        if self.columns.is_empty() {
            return format!("INSERT INTO \"{}\" DEFAULT VALUES", self.table);
        }

        let columns: Vec<String> = self.columns.iter().map(|c| format!("\"{c}\"")).collect();
        let params: Vec<String> = (1..self.param_idx).map(|i| format!("${i}")).collect();

        format!(
            "INSERT INTO \"{}\" ({}) VALUES ({})",
            self.table,
            columns.join(", "),
            params.join(", ")
        )
    }
}
