//! Read-only record table
//!
//! The table is recomputed from scratch from `(schema, records)` every time
//! either changes. There is no diffing and no hidden state, so rendering
//! the same inputs twice gives the same [`TableView`].

use std::fmt;

use super::resolver::derive_fields;
use crate::domain::{Record, Schema};

/// Text of the single row shown when there are no records
pub const NO_RECORDS: &str = "no records";

/// Column header: field name plus the kind label underneath
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnHeader {
    pub name: String,
    pub kind_label: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableBody {
    /// One full-width row spanning `colspan` columns
    Placeholder { colspan: usize },
    /// One row per record, one cell per column
    Rows(Vec<Vec<String>>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableView {
    pub columns: Vec<ColumnHeader>,
    pub body: TableBody,
}

impl TableView {
    pub fn is_placeholder(&self) -> bool {
        matches!(self.body, TableBody::Placeholder { .. })
    }

    /// Number of body rows, the placeholder included
    pub fn row_count(&self) -> usize {
        match &self.body {
            TableBody::Placeholder { .. } => 1,
            TableBody::Rows(rows) => rows.len(),
        }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        match &self.body {
            TableBody::Placeholder { .. } => &[],
            TableBody::Rows(rows) => rows,
        }
    }
}

/// Project `records` onto the columns of `schema`. Missing keys render as
/// empty cells; keys the schema doesn't know are not shown.
pub fn render_table(schema: &Schema, records: &[Record]) -> TableView {
    let fields = derive_fields(schema);

    let columns: Vec<ColumnHeader> = fields
        .iter()
        .map(|f| ColumnHeader {
            name: f.name.clone(),
            kind_label: f.kind.label(),
        })
        .collect();

    let body = if records.is_empty() {
        TableBody::Placeholder {
            colspan: columns.len().max(1),
        }
    } else {
        TableBody::Rows(
            records
                .iter()
                .map(|record| {
                    fields
                        .iter()
                        .map(|f| {
                            record
                                .get(&f.name)
                                .map(|v| v.to_string())
                                .unwrap_or_default()
                        })
                        .collect()
                })
                .collect(),
        )
    };

    TableView { columns, body }
}

impl fmt::Display for TableView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: Vec<String> = self
            .columns
            .iter()
            .map(|c| format!("{} <{}>", c.name, c.kind_label))
            .collect();

        let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
        for row in self.rows() {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let line = |cells: &[String]| -> String {
            cells
                .iter()
                .zip(&widths)
                .map(|(cell, width)| format!("{:<width$}", cell, width = width))
                .collect::<Vec<_>>()
                .join(" | ")
                .trim_end()
                .to_string()
        };

        writeln!(f, "{}", line(&headers))?;
        let rule_len = widths.iter().sum::<usize>() + 3 * widths.len().saturating_sub(1);
        writeln!(f, "{}", "-".repeat(rule_len.max(NO_RECORDS.len())))?;

        match &self.body {
            TableBody::Placeholder { .. } => writeln!(f, "({})", NO_RECORDS),
            TableBody::Rows(rows) => {
                for row in rows {
                    writeln!(f, "{}", line(row))?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PrimitiveKind, PropertySpec, RecordValue};

    fn people() -> Schema {
        Schema::new()
            .with_property("name", PropertySpec::Primitive(PrimitiveKind::String))
            .with_property("age", PropertySpec::Primitive(PrimitiveKind::Integer))
            .with_property("manager", PropertySpec::Reference("Employee".into()))
    }

    #[test]
    fn test_empty_collection_shows_placeholder() {
        let view = render_table(&people(), &[]);
        assert_eq!(view.columns.len(), 3);
        assert_eq!(view.body, TableBody::Placeholder { colspan: 3 });
        assert_eq!(view.row_count(), 1);
        assert!(view.rows().is_empty());
    }

    #[test]
    fn test_missing_keys_render_empty() {
        let mut record = Record::new();
        record.insert("age", RecordValue::Number(41.0));
        record.insert("nickname", RecordValue::Text("ignored".into()));

        let view = render_table(&people(), &[record]);
        assert_eq!(view.rows(), &[vec!["".to_string(), "41".to_string(), "".to_string()]]);
    }

    #[test]
    fn test_schema_without_fields() {
        let view = render_table(&Schema::new(), &[]);
        assert!(view.columns.is_empty());
        assert_eq!(view.body, TableBody::Placeholder { colspan: 1 });

        let view = render_table(&Schema::new(), &[Record::new()]);
        assert_eq!(view.rows(), &[Vec::<String>::new()]);
    }

    #[test]
    fn test_plain_text_rendering() {
        let record: Record = [
            ("name", RecordValue::Text("Alice".into())),
            ("age", RecordValue::Number(30.0)),
            ("manager", RecordValue::Text("E1".into())),
        ]
        .into_iter()
        .collect();

        let text = render_table(&people(), &[record]).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "name <String> | age <Integer> | manager <ref>");
        assert_eq!(lines[2], "Alice         | 30            | E1");

        let empty = render_table(&people(), &[]).to_string();
        assert!(empty.ends_with("(no records)\n"));
    }
}
