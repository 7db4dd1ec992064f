//! Shared value types for envelope records.

mod field_table;

pub use field_table::{FieldTable, FieldValue};
