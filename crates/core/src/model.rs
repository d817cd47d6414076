//! Catalog-facing data model: raw column rows as read from `information_schema`
//! and the reduced [`FieldDescriptor`] handed to the rule renderer.

/// Returns true for tables treated as backup/shadow copies.
///
/// Any underscore in the name marks a table as a shadow table. This is a
/// naming-convention heuristic and excludes legitimate names such as
/// `order_items` as well.
pub fn is_shadow_table(name: &str) -> bool {
    name.contains('_')
}

/// Keeps the table names eligible for rule generation, in catalog order.
pub fn filter_tables<I>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    names.into_iter().filter(|name| !is_shadow_table(name)).collect()
}

/// One row of the column metadata query, every value still in its text form.
///
/// Values stay as strings so that decoding can fall back to defaults instead
/// of failing the row (see [`crate::reducer`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawColumn {
    pub name: String,
    pub data_type: Option<String>,
    pub max_length: Option<String>,
    pub default_value: Option<String>,
    pub is_nullable: Option<String>,
    pub primary: Option<String>,
}

impl RawColumn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_type(mut self, data_type: &str) -> Self {
        self.data_type = Some(data_type.to_string());
        self
    }

    pub fn with_max_length(mut self, max_length: &str) -> Self {
        self.max_length = Some(max_length.to_string());
        self
    }

    pub fn with_default(mut self, default_value: &str) -> Self {
        self.default_value = Some(default_value.to_string());
        self
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.is_nullable = Some(if nullable { "YES" } else { "NO" }.to_string());
        self
    }

    pub fn primary(mut self) -> Self {
        self.primary = Some("1".to_string());
        self
    }
}

/// A column that takes part in rule generation.
///
/// Only built for columns that are neither part of the primary key nor carry
/// a default value; those are populated by the database, not by user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Column identifier, used verbatim as the member name in rules.
    pub name: String,
    /// Declared SQL type. Not used by any rule kind yet.
    pub data_type: String,
    /// Character maximum length, `0` when not applicable.
    pub max_length: u32,
    pub is_nullable: bool,
    pub is_primary: bool,
}
