//! Program grid cells and their LaTeX serialization
//!
//! The packer produces a [`Grid`] first and serializes it afterwards, so the
//! column bookkeeping can be checked on the cells themselves.

use chrono::{Duration, NaiveDateTime};

use super::geometry::TableGeometry;

/// One cell after the session header
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    /// Declared column without content
    Empty,
    /// Single-column content
    Text(String),
    /// Content merged over `span` columns (double-length talks)
    Merged { span: usize, content: String },
    /// Nested minisymposium table over `span` columns with one sub-column
    /// per entry in `talks` (empty strings for unfilled sub-slots)
    Nested { span: usize, talks: Vec<String> },
}

impl Cell {
    /// Number of declared grid columns this cell consumes
    pub fn span(&self) -> usize {
        match self {
            Cell::Empty | Cell::Text(_) => 1,
            Cell::Merged { span, .. } | Cell::Nested { span, .. } => *span,
        }
    }
}

/// One session row
#[derive(Clone, Debug, PartialEq)]
pub struct GridRow {
    /// Leftmost field: session id, room and chair
    pub header: String,
    pub cells: Vec<Cell>,
}

impl GridRow {
    /// Total declared columns covered by the cells
    pub fn covered_columns(&self) -> usize {
        self.cells.iter().map(Cell::span).sum()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridKind {
    /// One column per default-length time slot
    Slots,
    /// One wide column, one row per poster
    Posters,
}

/// A rendered cohort table before serialization
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    pub kind: GridKind,
    pub start: NaiveDateTime,
    pub columns: usize,
    /// Default slot length used for the time labels
    pub slot_minutes: i64,
    pub rows: Vec<GridRow>,
}

impl Grid {
    /// Serialize to a `longtable`
    pub fn render(&self, geometry: &TableGeometry) -> String {
        let mut out = String::new();
        match self.kind {
            GridKind::Slots => {
                out.push_str(&format!(
                    "\\begin{{longtable}}{{P{}|}}\n",
                    geometry.column_sequence(self.columns)
                ));
                out.push_str("    \\rowcolor{primary}");
                for i in 0..self.columns {
                    let label = self.start + Duration::minutes(self.slot_minutes * i as i64);
                    out.push_str(&format!(
                        "& \\raisebox{{-2pt}}{{\\Large\\bfseries\\textcolor{{white}}{{{}}}}}",
                        label.format("%H:%M")
                    ));
                }
            }
            GridKind::Posters => {
                out.push_str(&format!(
                    "\\begin{{longtable}}{{PX{}|}}\n",
                    geometry.column_spec(1, 1)
                ));
                out.push_str("    \\rowcolor{primary}");
                out.push_str(&format!("&\\white{{{}}}", self.start.format("%H:%M")));
            }
        }
        out.push_str("\\\\\n\\endhead\n");

        for row in &self.rows {
            out.push_str(&row.header);
            for cell in &row.cells {
                render_cell(&mut out, cell, self.columns, geometry);
            }
            out.push_str("\\\\\\hline\n");
        }
        out.push_str("\\end{longtable}\n");
        out
    }
}

fn render_cell(out: &mut String, cell: &Cell, columns: usize, geometry: &TableGeometry) {
    // every cell opens with the column separator, even when empty
    out.push_str("\n&");
    match cell {
        Cell::Empty => {}
        Cell::Text(content) => out.push_str(content),
        Cell::Merged { span, content } => {
            out.push_str(&format!(
                "\\multicolumn{{{}}}{{T{}}}{{{}}}",
                span,
                geometry.column_spec(columns, *span),
                content
            ));
        }
        Cell::Nested { span, talks } => {
            let sub_columns: String = (0..talks.len())
                .map(|i| if i % 2 == 0 { 'B' } else { 'C' })
                .collect();
            out.push_str(&format!(
                "\\multicolumn{{{}}}{{p{}}}{{\\noindent\\begin{{tabularx}}{{\\linewidth}}{{@{{}}{}@{{}}}}",
                span,
                geometry.column_spec(columns, *span),
                sub_columns
            ));
            out.push_str(&talks.join("\n&"));
            out.push_str("\\end{tabularx}}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::session::testing::at;

    fn grid(rows: Vec<GridRow>, columns: usize) -> Grid {
        Grid {
            kind: GridKind::Slots,
            start: at(9, 0),
            columns,
            slot_minutes: 15,
            rows,
        }
    }

    #[test]
    fn test_header_has_one_label_per_column() {
        let text = grid(Vec::new(), 3).render(&TableGeometry::default());
        assert!(text.contains("{09:00}"));
        assert!(text.contains("{09:15}"));
        assert!(text.contains("{09:30}"));
        assert!(!text.contains("{09:45}"));
        assert!(text.ends_with("\\end{longtable}\n"));
    }

    #[test]
    fn test_merged_and_nested_cells() {
        let row = GridRow {
            header: "H".to_string(),
            cells: vec![
                Cell::Merged { span: 2, content: "double".to_string() },
                Cell::Nested { span: 4, talks: vec!["a".into(), "b".into(), "c".into(), "".into()] },
            ],
        };
        assert_eq!(row.covered_columns(), 6);

        let text = grid(vec![row], 6).render(&TableGeometry::default());
        assert!(text.contains("\\multicolumn{2}{T{"));
        assert!(text.contains("{@{}BCBC@{}}a\n&b\n&c\n&\\end{tabularx}}"));
        assert!(text.contains("H\n&\\multicolumn{2}"));
    }
}
