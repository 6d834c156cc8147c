//! Builds parameterized SELECT, INSERT, DELETE and the DDL used by schema sync.

use crate::sql::{ColumnDef, TableDef};

/// Quote identifier for PostgreSQL (safe: only from static table definitions).
pub fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Full qualified table name.
pub fn qualified_table(table: &TableDef) -> String {
    format!("{}.{}", quoted(table.schema), quoted(table.name))
}

fn select_column_list(table: &TableDef) -> String {
    table
        .exposed_columns()
        .map(|c| quoted(c.name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// SELECT every row, oldest first.
pub fn select_all(table: &TableDef) -> String {
    format!(
        "SELECT {} FROM {} ORDER BY {}",
        select_column_list(table),
        qualified_table(table),
        quoted(table.pk)
    )
}

/// INSERT of every exposed non-key column, in declaration order, as `$1..$n`.
/// Columns with a default (and the key) are left to the database.
pub fn insert(table: &TableDef) -> String {
    let cols: Vec<&ColumnDef> = table
        .exposed_columns()
        .filter(|c| c.name != table.pk && c.default.is_none())
        .collect();
    let names: Vec<String> = cols.iter().map(|c| quoted(c.name)).collect();
    let placeholders: Vec<String> = (1..=cols.len()).map(|n| format!("${}", n)).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        qualified_table(table),
        names.join(", "),
        placeholders.join(", "),
        select_column_list(table)
    )
}

/// DELETE by primary key. Caller binds id as `$1`.
pub fn delete_by_id(table: &TableDef) -> String {
    format!("DELETE FROM {} WHERE {} = $1", qualified_table(table), quoted(table.pk))
}

fn column_definition(c: &ColumnDef, pk: &str) -> String {
    let mut def = format!("{} {}", quoted(c.name), c.pg_type);
    if c.name == pk {
        def.push_str(" PRIMARY KEY");
    } else if !c.nullable {
        def.push_str(" NOT NULL");
    }
    if let Some(d) = c.default {
        def.push_str(&format!(" DEFAULT {}", d));
    }
    def
}

pub fn create_table(table: &TableDef) -> String {
    let defs: Vec<String> = table.columns.iter().map(|c| column_definition(c, table.pk)).collect();
    format!("CREATE TABLE IF NOT EXISTS {} ({})", qualified_table(table), defs.join(", "))
}

/// Statements that bring an already existing table in line with the definition:
/// missing columns are added and defaults are (re)applied. The key column is never altered.
pub fn reconcile_columns(table: &TableDef) -> Vec<String> {
    let full = qualified_table(table);
    let mut out = Vec::new();
    for c in table.columns.iter().filter(|c| c.name != table.pk) {
        out.push(format!("ALTER TABLE {} ADD COLUMN IF NOT EXISTS {}", full, column_definition(c, table.pk)));
        if let Some(d) = c.default {
            out.push(format!("ALTER TABLE {} ALTER COLUMN {} SET DEFAULT {}", full, quoted(c.name), d));
        }
    }
    out
}
