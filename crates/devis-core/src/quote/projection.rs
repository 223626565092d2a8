//! Projection of page records onto the template columns.

use tracing::debug;

use crate::models::{FieldValue, PageRecord, Table};

/// Lay `records` out under `columns`.
///
/// The result has one row per record and exactly `columns`, in order.
/// Columns no record fills are `Empty`; record fields outside `columns`
/// are dropped.
pub fn project(records: &[PageRecord], columns: &[String]) -> Table {
    let rows: Vec<Vec<FieldValue>> = records
        .iter()
        .map(|record| {
            columns
                .iter()
                .map(|column| record.get(column).cloned().unwrap_or_default())
                .collect()
        })
        .collect();

    let unmapped = columns
        .iter()
        .filter(|c| records.iter().all(|r| r.get(c).is_none()))
        .count();
    debug!(
        "Projected {} records onto {} columns ({} unmapped)",
        rows.len(),
        columns.len(),
        unmapped
    );

    Table {
        columns: columns.to_vec(),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(pairs: &[(&'static str, &str)]) -> PageRecord {
        let mut record = PageRecord::new();
        for (k, v) in pairs {
            record.set(*k, *v);
        }
        record
    }

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_project_orders_and_fills() {
        let records = vec![
            record(&[("a", "1"), ("b", "2"), ("internal", "x")]),
            record(&[("b", "3")]),
        ];
        let table = project(&records, &columns(&["b", "missing", "a"]));

        assert_eq!(table.columns, columns(&["b", "missing", "a"]));
        assert_eq!(
            table.rows,
            vec![
                vec![FieldValue::text("2"), FieldValue::Empty, FieldValue::text("1")],
                vec![FieldValue::text("3"), FieldValue::Empty, FieldValue::Empty],
            ]
        );
    }

    #[test]
    fn test_project_no_records() {
        let table = project(&[], &columns(&["a"]));
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 1);
    }

    #[test]
    fn test_project_no_columns() {
        let table = project(&[record(&[("a", "1")])], &[]);
        assert_eq!(table.row_count(), 1);
        assert!(table.rows[0].is_empty());
    }
}
