pub use crate::catalog::postgres::PostgresCatalog;
pub use crate::catalog::{Catalog, CatalogConfig, CatalogError, ColumnFetch};
pub use crate::model::{filter_tables, is_shadow_table, FieldDescriptor, RawColumn};
pub use crate::reducer::{reduce, reduce_all};
