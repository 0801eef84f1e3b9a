pub mod migrator;
pub mod tables;

/// Postgres column types used across the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    BigSerial,
    BigInt,
    Integer,
    Text,
    VarChar(u16),
    Boolean,
    TimestampTz,
    Date,
    Uuid,
    Jsonb,
}

impl ColumnType {
    pub fn as_sql(&self) -> String {
        match self {
            ColumnType::BigSerial => "BIGSERIAL".to_string(),
            ColumnType::BigInt => "BIGINT".to_string(),
            ColumnType::Integer => "INTEGER".to_string(),
            ColumnType::Text => "TEXT".to_string(),
            ColumnType::VarChar(len) => format!("VARCHAR({})", len),
            ColumnType::Boolean => "BOOLEAN".to_string(),
            ColumnType::TimestampTz => "TIMESTAMPTZ".to_string(),
            ColumnType::Date => "DATE".to_string(),
            ColumnType::Uuid => "UUID".to_string(),
            ColumnType::Jsonb => "JSONB".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FkAction {
    Cascade,
    Restrict,
    SetNull,
    NoAction,
}

impl FkAction {
    pub fn as_sql(&self) -> &'static str {
        match self {
            FkAction::Cascade => "CASCADE",
            FkAction::Restrict => "RESTRICT",
            FkAction::SetNull => "SET NULL",
            FkAction::NoAction => "NO ACTION",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ForeignKey {
    pub column: &'static str,
    pub references_table: &'static str,
    pub references_column: &'static str,
    pub on_delete: FkAction,
    pub on_update: FkAction,
}

#[derive(Debug, Clone)]
pub struct Column {
    pub name: &'static str,
    pub ty: ColumnType,
    pub nullable: bool,
    pub unique: bool,
    pub default: Option<&'static str>,
    pub check: Option<&'static str>,
}

impl Column {
    fn render(&self) -> String {
        let mut sql = format!("{} {}", self.name, self.ty.as_sql());
        if !self.nullable {
            sql.push_str(" NOT NULL");
        }
        if self.unique {
            sql.push_str(" UNIQUE");
        }
        if let Some(default) = self.default {
            sql.push_str(&format!(" DEFAULT {}", default));
        }
        if let Some(check) = self.check {
            sql.push_str(&format!(" CHECK ({})", check));
        }
        sql
    }
}

/// Declarative table descriptor. One value per relational entity; the
/// migrator turns it into CREATE TABLE / DROP TABLE statements.
#[derive(Debug, Clone)]
pub struct TableDef {
    pub name: &'static str,
    pub columns: Vec<Column>,
    pub primary_key: &'static [&'static str],
    pub foreign_keys: Vec<ForeignKey>,
    pub uniques: Vec<&'static [&'static str]>,
}

impl TableDef {
    pub fn create_sql(&self) -> String {
        let mut lines: Vec<String> = self.columns.iter().map(Column::render).collect();

        if !self.primary_key.is_empty() {
            lines.push(format!("PRIMARY KEY ({})", self.primary_key.join(", ")));
        }
        for unique in &self.uniques {
            lines.push(format!("UNIQUE ({})", unique.join(", ")));
        }
        for fk in &self.foreign_keys {
            lines.push(format!(
                "FOREIGN KEY ({}) REFERENCES {} ({}) ON DELETE {} ON UPDATE {}",
                fk.column,
                fk.references_table,
                fk.references_column,
                fk.on_delete.as_sql(),
                fk.on_update.as_sql(),
            ));
        }

        format!("CREATE TABLE {} (\n    {}\n)", self.name, lines.join(",\n    "))
    }

    pub fn drop_sql(&self) -> String {
        format!("DROP TABLE {}", self.name)
    }
}

/// Shorthand for a NOT NULL column with no extra constraints.
pub fn col(name: &'static str, ty: ColumnType) -> Column {
    Column {
        name,
        ty,
        nullable: false,
        unique: false,
        default: None,
        check: None,
    }
}

/// Shorthand for a nullable column with no extra constraints.
pub fn nullable(name: &'static str, ty: ColumnType) -> Column {
    Column {
        nullable: true,
        ..col(name, ty)
    }
}

pub fn foreign_key(
    column: &'static str,
    references_table: &'static str,
    on_delete: FkAction,
    on_update: FkAction,
) -> ForeignKey {
    ForeignKey {
        column,
        references_table,
        references_column: "id",
        on_delete,
        on_update,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> TableDef {
        TableDef {
            name: "widgets",
            columns: vec![
                col("id", ColumnType::BigSerial),
                Column {
                    unique: true,
                    ..col("name", ColumnType::Text)
                },
                Column {
                    default: Some("'active'"),
                    check: Some("status IN ('active', 'inactive')"),
                    ..col("status", ColumnType::Text)
                },
                nullable("owner_id", ColumnType::BigInt),
            ],
            primary_key: &["id"],
            foreign_keys: vec![foreign_key(
                "owner_id",
                "users",
                FkAction::Restrict,
                FkAction::NoAction,
            )],
            uniques: vec![&["name", "status"][..]],
        }
    }

    #[test]
    fn renders_column_constraints() {
        let sql = sample_table().create_sql();
        assert!(sql.starts_with("CREATE TABLE widgets ("));
        assert!(sql.contains("id BIGSERIAL NOT NULL"));
        assert!(sql.contains("name TEXT NOT NULL UNIQUE"));
        assert!(sql.contains("status TEXT NOT NULL DEFAULT 'active' CHECK (status IN ('active', 'inactive'))"));
        assert!(sql.contains("owner_id BIGINT,"));
    }

    #[test]
    fn renders_table_constraints() {
        let sql = sample_table().create_sql();
        assert!(sql.contains("PRIMARY KEY (id)"));
        assert!(sql.contains("UNIQUE (name, status)"));
        assert!(sql.contains(
            "FOREIGN KEY (owner_id) REFERENCES users (id) ON DELETE RESTRICT ON UPDATE NO ACTION"
        ));
    }

    #[test]
    fn drop_targets_exactly_one_table() {
        assert_eq!(sample_table().drop_sql(), "DROP TABLE widgets");
    }

    #[test]
    fn varchar_carries_length() {
        assert_eq!(ColumnType::VarChar(45).as_sql(), "VARCHAR(45)");
    }
}
