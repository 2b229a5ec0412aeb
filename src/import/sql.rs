//! Multi-row `INSERT` construction.
//!
//! Statements are built as plain text with every identifier and literal
//! quoted through the [`Connection`], so dialect overrides apply uniformly.
//! Value quoting is driven by each target column's declared type, and values
//! are zipped against the resolved column list positionally, which keeps
//! reordered column subsets aligned.

use crate::connection::Connection;
use crate::model::{Field, Record, Value};

/// Extract the value matrix for instances: one row per instance, one value
/// per resolved column, looked up by column name.
pub fn matrix_from_instances<M: Record>(instances: &[M], columns: &[Field]) -> Vec<Vec<Value>> {
    instances
        .iter()
        .map(|instance| columns.iter().map(|column| instance.get(&column.name)).collect())
        .collect()
}

/// Build the `INSERT` statements for `matrix`.
///
/// With `batch_size` unset (or zero) all rows go into a single multi-row
/// statement; otherwise rows are chunked in order into statements of at most
/// `batch_size` rows each.
pub fn insert_statements(
    conn: &dyn Connection,
    table: &str,
    columns: &[Field],
    matrix: &[Vec<Value>],
    batch_size: Option<usize>,
) -> Vec<String> {
    let quoted_table = conn.quote_identifier(table);
    let column_list = columns
        .iter()
        .map(|column| conn.quote_identifier(&column.name))
        .collect::<Vec<_>>()
        .join(", ");

    let chunk_size = batch_size
        .filter(|size| *size > 0)
        .unwrap_or_else(|| matrix.len().max(1));

    let statements: Vec<String> = matrix
        .chunks(chunk_size)
        .map(|rows| {
            let tuples = rows
                .iter()
                .map(|row| {
                    let literals = row
                        .iter()
                        .zip(columns)
                        .map(|(value, column)| conn.quote_value(value, column.column_type))
                        .collect::<Vec<_>>()
                        .join(", ");
                    format!("({literals})")
                })
                .collect::<Vec<_>>()
                .join(", ");
            format!("INSERT INTO {quoted_table} ({column_list}) VALUES {tuples}")
        })
        .collect();

    log::trace!(
        "built {} insert statement(s) for {} row(s) into {}",
        statements.len(),
        matrix.len(),
        table
    );
    statements
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{sample_developer, MemoryConnection};
    use crate::model::ColumnType;

    fn name_and_salary() -> Vec<Field> {
        vec![
            Field::new("name", ColumnType::Text),
            Field::new("salary", ColumnType::Integer),
        ]
    }

    #[test]
    fn test_single_statement_for_all_rows_by_default() {
        let conn = MemoryConnection::new();
        let matrix = vec![
            vec![Value::from("Zach"), Value::from(70000i64)],
            vec![Value::from("John"), Value::from(40000i64)],
        ];
        let statements =
            insert_statements(&conn, "developers", &name_and_salary(), &matrix, None);
        assert_eq!(
            statements,
            vec![
                "INSERT INTO \"developers\" (\"name\", \"salary\") VALUES ('Zach', 70000), \
                 ('John', 40000)"
                    .to_string()
            ]
        );
    }

    #[test]
    fn test_batching_chunks_rows_in_order() {
        let conn = MemoryConnection::new();
        let matrix: Vec<Vec<Value>> = (1..=5)
            .map(|i| vec![Value::from(format!("dev{i}")), Value::from(i as i64)])
            .collect();
        let statements =
            insert_statements(&conn, "developers", &name_and_salary(), &matrix, Some(2));
        assert_eq!(statements.len(), 3);
        assert!(statements[0].contains("('dev1', 1), ('dev2', 2)"));
        assert!(statements[1].contains("('dev3', 3), ('dev4', 4)"));
        assert!(statements[2].ends_with("VALUES ('dev5', 5)"));
    }

    #[test]
    fn test_zero_batch_size_behaves_like_unbatched() {
        let conn = MemoryConnection::new();
        let matrix = vec![vec![Value::from("a"), Value::from(1i64)]];
        let statements =
            insert_statements(&conn, "developers", &name_and_salary(), &matrix, Some(0));
        assert_eq!(statements.len(), 1);
    }

    #[test]
    fn test_values_follow_column_order_not_schema_order() {
        let columns = vec![
            Field::new("salary", ColumnType::Integer),
            Field::new("name", ColumnType::Text),
        ];
        let matrix = matrix_from_instances(&[sample_developer(1, "Zach", 70000)], &columns);
        assert_eq!(
            matrix,
            vec![vec![Value::from(70000i64), Value::from("Zach")]]
        );

        let conn = MemoryConnection::new();
        let statements = insert_statements(&conn, "developers", &columns, &matrix, None);
        assert_eq!(
            statements[0],
            "INSERT INTO \"developers\" (\"salary\", \"name\") VALUES (70000, 'Zach')"
        );
    }

    #[test]
    fn test_literal_quoting_goes_through_the_connection() {
        let conn = MemoryConnection::new();
        let columns = vec![Field::new("name", ColumnType::Text)];
        let matrix = vec![vec![Value::from("O'Brien")]];
        let statements = insert_statements(&conn, "developers", &columns, &matrix, None);
        assert_eq!(
            statements[0],
            "INSERT INTO \"developers\" (\"name\") VALUES ('O''Brien')"
        );
    }
}
