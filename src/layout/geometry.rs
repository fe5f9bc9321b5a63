//! Physical column widths of the program grid

use serde::{Deserialize, Serialize};

/// Table dimensions; widths in cm, margin in pt
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct TableGeometry {
    /// Total target width of the table
    pub total_width_cm: f64,
    /// Width of the leftmost field holding session id, room and chair
    pub header_width_cm: f64,
    /// Cell margin on each side; longtable's default is 6pt
    pub margin_pt: f64,
}

impl Default for TableGeometry {
    fn default() -> Self {
        Self {
            total_width_cm: 26.0,
            header_width_cm: 2.0,
            margin_pt: 6.0,
        }
    }
}

impl TableGeometry {
    /// Margin in cm (1pt = 1/72 inch, 1 inch = 2.54cm)
    pub fn margin_cm(&self) -> f64 {
        self.margin_pt / 72.0 * 2.54
    }

    /// Content width of a cell spanning `factor` of `n` equal columns
    pub fn column_width(&self, n: usize, factor: usize) -> f64 {
        let margin = self.margin_cm();
        let mut width = self.total_width_cm;
        width -= self.header_width_cm + margin * 2.0;
        width /= n.max(1) as f64;
        width *= factor as f64;
        // margins are added on by LaTeX
        width -= margin * 2.0;
        width
    }

    /// Column width as a LaTeX length argument, e.g. `{5.47cm}`
    pub fn column_spec(&self, n: usize, factor: usize) -> String {
        format!("{{{}cm}}", self.column_width(n, factor))
    }

    /// Alternating `X`/`Y` column types for `n` time-slot columns
    pub fn column_sequence(&self, n: usize) -> String {
        let spec = self.column_spec(n, 1);
        (0..n)
            .map(|i| if i % 2 == 0 { format!("X{}", spec) } else { format!("Y{}", spec) })
            .collect()
    }
}
