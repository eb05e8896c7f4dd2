use super::DbConn;
use crate::domain::{StoreError, StoreResult};
use crate::infra::db::schema::{DELETED_COLUMN, ID_COLUMN, TableSchema};
use rusqlite::types::Value;
use rusqlite::{Row, params_from_iter};

/// Generic storage operations over one table.
///
/// Every call locks the shared connection, runs a single statement, and
/// releases the lock before returning; there is no atomicity across calls.
/// Rows are read back through caller-supplied mapping closures so typed
/// repositories stay in charge of their own row shapes.
pub struct RecordRepository {
    conn: DbConn,
    schema: &'static TableSchema,
}

impl RecordRepository {
    pub fn new(conn: DbConn, schema: &'static TableSchema) -> Self {
        Self { conn, schema }
    }

    pub fn schema(&self) -> &'static TableSchema {
        self.schema
    }

    /// Insert a row from (column, value) pairs and return the assigned id.
    ///
    /// The identifier must not be supplied; every required column must be.
    pub fn insert(&self, fields: &[(&str, Value)]) -> StoreResult<i64> {
        self.check_known(fields)?;
        for column in self.schema.required_columns() {
            if !fields.iter().any(|(name, _)| *name == column.name) {
                return Err(StoreError::validation(format!(
                    "missing required field '{}' for {}",
                    column.name,
                    self.schema.table()
                )));
            }
        }

        let columns = fields
            .iter()
            .map(|(name, _)| *name)
            .collect::<Vec<_>>()
            .join(", ");
        let placeholders = (1..=fields.len())
            .map(|i| format!("?{i}"))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.schema.table(),
            columns,
            placeholders
        );

        let conn = self.conn.lock().unwrap();
        conn.execute(&sql, params_from_iter(fields.iter().map(|(_, v)| v)))?;
        Ok(conn.last_insert_rowid())
    }

    /// Update only the supplied columns of the row matching `id`.
    pub fn update(&self, id: i64, fields: &[(&str, Value)]) -> StoreResult<()> {
        if fields.is_empty() {
            return Err(StoreError::validation(format!(
                "no fields to update for {}",
                self.schema.table()
            )));
        }
        self.check_known(fields)?;

        let assignments = fields
            .iter()
            .enumerate()
            .map(|(i, (name, _))| format!("{} = ?{}", name, i + 1))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "UPDATE {} SET {} WHERE {} = ?{}",
            self.schema.table(),
            assignments,
            ID_COLUMN,
            fields.len() + 1
        );
        let params = fields
            .iter()
            .map(|(_, value)| value.clone())
            .chain(std::iter::once(Value::Integer(id)));

        let conn = self.conn.lock().unwrap();
        let affected = conn.execute(&sql, params_from_iter(params))?;
        if affected == 0 {
            return Err(StoreError::not_found(self.schema.table(), id));
        }
        Ok(())
    }

    /// Flag the row as deleted. The row stays readable through `fetch`.
    pub fn soft_delete(&self, id: i64) -> StoreResult<()> {
        let sql = format!(
            "UPDATE {} SET {} = 1 WHERE {} = ?1",
            self.schema.table(),
            DELETED_COLUMN,
            ID_COLUMN
        );
        let conn = self.conn.lock().unwrap();
        let affected = conn.execute(&sql, [id])?;
        if affected == 0 {
            return Err(StoreError::not_found(self.schema.table(), id));
        }
        Ok(())
    }

    /// Read one row by id, regardless of its soft-delete state.
    pub fn fetch<T, F>(&self, id: i64, map: F) -> StoreResult<T>
    where
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let sql = format!(
            "SELECT {} FROM {} WHERE {} = ?1",
            self.schema.select_list(),
            self.schema.table(),
            ID_COLUMN
        );
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(&sql)?;
        let mut rows = stmt.query_map([id], map)?;
        match rows.next() {
            Some(row) => Ok(row?),
            None => Err(StoreError::not_found(self.schema.table(), id)),
        }
    }

    /// Read all rows whose soft-delete flag is clear. Order is unspecified
    /// unless `order_by` names a column.
    pub fn fetch_all<T, F>(&self, order_by: Option<&str>, map: F) -> StoreResult<Vec<T>>
    where
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let mut sql = format!(
            "SELECT {} FROM {} WHERE {} = 0",
            self.schema.select_list(),
            self.schema.table(),
            DELETED_COLUMN
        );
        if let Some(column) = order_by {
            if !self.schema.has_column(column) {
                return Err(StoreError::validation(format!(
                    "unknown sort column '{}' for {}",
                    column,
                    self.schema.table()
                )));
            }
            sql.push_str(" ORDER BY ");
            sql.push_str(column);
        }

        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map([], map)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Read all live rows matching one column filter.
    pub fn fetch_where<T, F>(&self, column: &str, value: Value, map: F) -> StoreResult<Vec<T>>
    where
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        if !self.schema.has_column(column) {
            return Err(StoreError::validation(format!(
                "unknown filter column '{}' for {}",
                column,
                self.schema.table()
            )));
        }
        let sql = format!(
            "SELECT {} FROM {} WHERE {} = 0 AND {} = ?1",
            self.schema.select_list(),
            self.schema.table(),
            DELETED_COLUMN,
            column
        );

        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map([value], map)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    fn check_known(&self, fields: &[(&str, Value)]) -> StoreResult<()> {
        for (name, _) in fields {
            if *name == ID_COLUMN {
                return Err(StoreError::validation(format!(
                    "{ID_COLUMN} is assigned by the store and immutable"
                )));
            }
            if !self.schema.has_column(name) {
                return Err(StoreError::validation(format!(
                    "unknown column '{}' for {}",
                    name,
                    self.schema.table()
                )));
            }
        }
        Ok(())
    }
}
