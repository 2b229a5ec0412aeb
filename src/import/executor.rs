//! Sequential statement execution.
//!
//! Statements run in build order on the caller's connection. The first
//! failure aborts the run and is propagated untouched: statements already
//! executed stay executed, later ones are never attempted. Transactional
//! wrapping, if wanted, belongs to the caller.

use crate::connection::Connection;
use crate::error::ExecutionError;

/// Execute every statement in order, stopping at the first failure.
pub fn execute_all(conn: &mut dyn Connection, statements: &[String]) -> Result<(), ExecutionError> {
    for (index, statement) in statements.iter().enumerate() {
        log::trace!("executing statement {}/{}", index + 1, statements.len());
        conn.execute(statement)?;
    }
    Ok(())
}
