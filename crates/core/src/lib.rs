//! Catalog reading and field reduction for validgen.
//!
//! # Overview
//!
//! This crate reads table and column metadata from a database catalog and
//! reduces each column to a [`model::FieldDescriptor`] when it is relevant to
//! user-input validation.
//!
//! - [`catalog`]: the [`catalog::Catalog`] trait and the PostgreSQL reader
//! - [`reducer`]: exclusion of primary-key and defaulted columns
//! - [`model`]: raw rows, descriptors and the shadow-table filter
//!
//! # Quick Start
//!
//! ```rust
//! use validgen_core::prelude::*;
//!
//! let rows = vec![
//!     RawColumn::new("Id").with_type("integer").nullable(false).primary(),
//!     RawColumn::new("Name").with_type("character varying").with_max_length("50").nullable(false),
//! ];
//!
//! let fields = reduce_all(rows);
//! assert_eq!(fields.len(), 1);
//! assert_eq!(fields[0].max_length, 50);
//! ```

pub mod catalog;
pub mod model;
pub mod prelude;
pub mod reducer;
