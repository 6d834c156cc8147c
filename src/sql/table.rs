//! Static description of the product table.

/// One column of a managed table.
#[derive(Clone, Copy, Debug)]
pub struct ColumnDef {
    pub name: &'static str,
    pub pg_type: &'static str,
    pub nullable: bool,
    pub default: Option<&'static str>,
    /// Part of the JSON projection (bookkeeping columns are not).
    pub exposed: bool,
}

#[derive(Clone, Copy, Debug)]
pub struct TableDef {
    pub schema: &'static str,
    pub name: &'static str,
    pub pk: &'static str,
    pub columns: &'static [ColumnDef],
}

impl TableDef {
    pub fn exposed_columns(&self) -> impl Iterator<Item = &ColumnDef> {
        self.columns.iter().filter(|c| c.exposed)
    }
}

/// `"Products"` is the name an existing deployment already uses; keep it.
pub const PRODUCTS: TableDef = TableDef {
    schema: "public",
    name: "Products",
    pk: "id",
    columns: &[
        ColumnDef { name: "id", pg_type: "SERIAL", nullable: false, default: None, exposed: true },
        ColumnDef { name: "name", pg_type: "VARCHAR(255)", nullable: false, default: None, exposed: true },
        ColumnDef { name: "price", pg_type: "DOUBLE PRECISION", nullable: false, default: None, exposed: true },
        ColumnDef { name: "description", pg_type: "TEXT", nullable: true, default: None, exposed: true },
        ColumnDef { name: "createdAt", pg_type: "TIMESTAMPTZ", nullable: false, default: Some("NOW()"), exposed: false },
        ColumnDef { name: "updatedAt", pg_type: "TIMESTAMPTZ", nullable: false, default: Some("NOW()"), exposed: false },
    ],
};
