//! Table definitions for the quiz store.
//!
//! Each table is described once as data; the SQL fragments the repositories
//! need (column lists, placeholder lists, CREATE TABLE statements) are
//! derived at construction and served from the shared statics below.

use once_cell::sync::Lazy;

/// Name of the identifier column every table carries.
pub const ID_COLUMN: &str = "id";
/// Name of the soft-delete flag column every table carries.
pub const DELETED_COLUMN: &str = "is_deleted";

/// One column: storage name, type, and constraints.
#[derive(Debug, Clone)]
pub struct ColumnDef {
    pub name: &'static str,
    pub sql_type: &'static str,
    pub primary_key: bool,
    pub not_null: bool,
    pub default: Option<&'static str>,
    pub references: Option<&'static str>,
}

impl ColumnDef {
    /// The auto-generated integer primary key. AUTOINCREMENT keeps ids
    /// monotonic so an id is never reused after deletion.
    pub fn id() -> Self {
        Self {
            name: ID_COLUMN,
            sql_type: "INTEGER",
            primary_key: true,
            not_null: false,
            default: None,
            references: None,
        }
    }

    pub fn text(name: &'static str) -> Self {
        Self {
            name,
            sql_type: "TEXT",
            primary_key: false,
            not_null: false,
            default: None,
            references: None,
        }
    }

    pub fn integer(name: &'static str) -> Self {
        Self {
            name,
            sql_type: "INTEGER",
            primary_key: false,
            not_null: false,
            default: None,
            references: None,
        }
    }

    pub fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }

    pub fn default(mut self, expr: &'static str) -> Self {
        self.default = Some(expr);
        self
    }

    pub fn references(mut self, target: &'static str) -> Self {
        self.references = Some(target);
        self
    }

    /// Whether an insert must supply this column.
    pub fn required(&self) -> bool {
        self.not_null && self.default.is_none() && !self.primary_key
    }

    fn ddl(&self) -> String {
        let mut out = format!("{} {}", self.name, self.sql_type);
        if self.primary_key {
            out.push_str(" PRIMARY KEY AUTOINCREMENT");
        }
        if self.not_null {
            out.push_str(" NOT NULL");
        }
        if let Some(expr) = self.default {
            out.push_str(" DEFAULT ");
            out.push_str(expr);
        }
        out
    }
}

/// Static description of one table plus the SQL fragments derived from it.
pub struct TableSchema {
    table: &'static str,
    columns: Vec<ColumnDef>,
    select_list: String,
    qualified_list: String,
    insert_list: String,
    insert_placeholders: String,
    update_assignments: String,
    create_sql: String,
}

impl TableSchema {
    pub fn new(table: &'static str, columns: Vec<ColumnDef>) -> Self {
        let names: Vec<&str> = columns.iter().map(|c| c.name).collect();
        let select_list = names.join(", ");
        let qualified_list = names
            .iter()
            .map(|name| format!("{table}.{name}"))
            .collect::<Vec<_>>()
            .join(", ");

        let non_id: Vec<&str> = columns
            .iter()
            .filter(|c| !c.primary_key)
            .map(|c| c.name)
            .collect();
        let insert_list = non_id.join(", ");
        let insert_placeholders = (1..=non_id.len())
            .map(|i| format!("?{i}"))
            .collect::<Vec<_>>()
            .join(", ");
        let update_assignments = non_id
            .iter()
            .enumerate()
            .map(|(i, name)| format!("{} = ?{}", name, i + 1))
            .collect::<Vec<_>>()
            .join(", ");

        let mut lines: Vec<String> = columns.iter().map(ColumnDef::ddl).collect();
        for column in &columns {
            if let Some(target) = column.references {
                lines.push(format!("FOREIGN KEY({}) REFERENCES {}", column.name, target));
            }
        }
        let create_sql = format!(
            "CREATE TABLE IF NOT EXISTS {} (\n    {}\n)",
            table,
            lines.join(",\n    ")
        );

        Self {
            table,
            columns,
            select_list,
            qualified_list,
            insert_list,
            insert_placeholders,
            update_assignments,
            create_sql,
        }
    }

    pub fn table(&self) -> &'static str {
        self.table
    }

    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Unqualified column list in schema order ("id, question, ...").
    pub fn select_list(&self) -> &str {
        &self.select_list
    }

    /// Table-qualified column list ("quizzes.id, quizzes.question, ...").
    pub fn qualified_list(&self) -> &str {
        &self.qualified_list
    }

    /// Column list without the identifier, matching `insert_placeholders`.
    pub fn insert_list(&self) -> &str {
        &self.insert_list
    }

    /// Placeholder list for a full insert ("?1, ?2, ...").
    pub fn insert_placeholders(&self) -> &str {
        &self.insert_placeholders
    }

    /// Assignment list for a full-row update ("name = ?1, ...").
    pub fn update_assignments(&self) -> &str {
        &self.update_assignments
    }

    pub fn create_sql(&self) -> &str {
        &self.create_sql
    }

    /// Columns an insert must supply (NOT NULL, no default, not the id).
    pub fn required_columns(&self) -> impl Iterator<Item = &ColumnDef> {
        self.columns.iter().filter(|c| c.required())
    }
}

pub static QUIZZES: Lazy<TableSchema> = Lazy::new(|| {
    TableSchema::new(
        "quizzes",
        vec![
            ColumnDef::id(),
            ColumnDef::text("question").not_null(),
            ColumnDef::text("contents").not_null(),
            ColumnDef::text("answer").not_null(),
            ColumnDef::text("commentary"),
            ColumnDef::text("author"),
            ColumnDef::text("category"),
            ColumnDef::text("created_at")
                .not_null()
                .default("CURRENT_TIMESTAMP"),
            ColumnDef::integer("is_deleted").not_null().default("0"),
            ColumnDef::text("reference_url"),
            ColumnDef::text("label"),
        ],
    )
});

pub static ANSWERS: Lazy<TableSchema> = Lazy::new(|| {
    TableSchema::new(
        "answers",
        vec![
            ColumnDef::id(),
            ColumnDef::integer("quiz_id")
                .not_null()
                .references("quizzes(id)"),
            ColumnDef::text("respondent"),
            ColumnDef::text("answer").not_null(),
            ColumnDef::integer("is_correct").not_null().default("0"),
            ColumnDef::text("created_at")
                .not_null()
                .default("CURRENT_TIMESTAMP"),
            ColumnDef::integer("is_deleted").not_null().default("0"),
        ],
    )
});

pub static EVENTS: Lazy<TableSchema> = Lazy::new(|| {
    TableSchema::new(
        "events",
        vec![
            ColumnDef::id(),
            ColumnDef::text("name").not_null(),
            ColumnDef::text("description"),
            ColumnDef::text("starts_at"),
            ColumnDef::text("created_at")
                .not_null()
                .default("CURRENT_TIMESTAMP"),
            ColumnDef::integer("is_deleted").not_null().default("0"),
        ],
    )
});

pub static EVENT_TICKETS: Lazy<TableSchema> = Lazy::new(|| {
    TableSchema::new(
        "event_tickets",
        vec![
            ColumnDef::id(),
            ColumnDef::integer("event_id")
                .not_null()
                .references("events(id)"),
            ColumnDef::text("code").not_null(),
            ColumnDef::text("holder"),
            ColumnDef::text("created_at")
                .not_null()
                .default("CURRENT_TIMESTAMP"),
            ColumnDef::integer("is_deleted").not_null().default("0"),
        ],
    )
});

/// Every table the store manages, in creation order (parents first).
pub fn all() -> [&'static TableSchema; 4] {
    [&QUIZZES, &EVENTS, &ANSWERS, &EVENT_TICKETS]
}
