//! Constraint naming convention.
//!
//! Foreign keys are named `fk_<table>_<column>_<referred_table>` so that
//! regenerated schemas diff cleanly against existing databases.

/// Build the foreign key constraint name for `table.column -> referred_table`.
pub fn fk_name(table: &str, column: &str, referred_table: &str) -> String {
    format!("fk_{table}_{column}_{referred_table}")
}
