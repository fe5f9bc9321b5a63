//! Slot-table packer
//!
//! Fills one [`Grid`] per cohort. Each row walks the declared columns from
//! left to right with an explicit count of columns still to fill; every cell
//! subtracts the width it actually covers, so a row always spans exactly the
//! declared number of columns.
//!
//! Contributions are fetched by increasing slot index. The index advances
//! with every filled or skipped column, except when a default-length talk
//! starts later than the column's nominal time: then the column is left
//! empty and the same talk is tried again in the next column.

use chrono::{Duration, NaiveDateTime};

use super::cohort::{Cohort, CohortLayout};
use super::grid::{Cell, Grid, GridKind, GridRow};
use super::slot_case::SlotCase;
use crate::config::LayoutConfig;
use crate::errors::LayoutError;
use crate::models::{Category, Contribution, Session};

/// Shown instead of prize lecture content until the winners are announced
pub const PRIZE_PLACEHOLDER: &str =
    r"\footnotesize{\bfseries Price winner(s) and title(s) will be announced in the Opening}";

/// Packs cohorts into program grids
#[derive(Clone, Debug)]
pub struct SlotTablePacker<'a> {
    config: &'a LayoutConfig,
    reveal_prize_lectures: bool,
}

impl<'a> SlotTablePacker<'a> {
    pub fn new(config: &'a LayoutConfig, reveal_prize_lectures: bool) -> Self {
        Self {
            config,
            reveal_prize_lectures,
        }
    }

    /// Pack a cohort using its own column rule and serialize it
    pub fn render_cohort(&self, cohort: &Cohort<'_>) -> Result<String, LayoutError> {
        let grid = match cohort.layout(&self.config.slots) {
            CohortLayout::Posters => self.pack_posters(&cohort.sessions, cohort.start),
            CohortLayout::Slots(columns) => self.pack(&cohort.sessions, cohort.start, columns)?,
        };
        log::debug!(
            "Packed cohort at {} into {} columns, {} rows",
            cohort.start,
            grid.columns,
            grid.rows.len()
        );
        Ok(grid.render(&self.config.geometry))
    }

    /// Pack sessions starting at `start` into `columns` time-slot columns
    pub fn pack(
        &self,
        sessions: &[&Session],
        start: NaiveDateTime,
        columns: usize,
    ) -> Result<Grid, LayoutError> {
        let columns = columns.max(1);
        let rows = sessions
            .iter()
            .map(|session| self.pack_row(session, start, columns))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Grid {
            kind: GridKind::Slots,
            start,
            columns,
            slot_minutes: self.config.slots.default,
            rows,
        })
    }

    /// One wide column, one row per poster; no per-slot logic
    pub fn pack_posters(&self, sessions: &[&Session], start: NaiveDateTime) -> Grid {
        let mut rows = Vec::new();
        for session in sessions {
            let header = format!(
                "\\white{{\\detokenize{{{}}}}}\\newline\\white{{\\small\\detokenize{{ ({})}}}}",
                session.id, session.room
            );
            let posters: Vec<Contribution> = session.contributions().collect();
            if posters.is_empty() {
                rows.push(GridRow {
                    header,
                    cells: vec![Cell::Empty],
                });
                continue;
            }
            for (i, poster) in posters.iter().enumerate() {
                rows.push(GridRow {
                    // continuation rows leave the session field blank
                    header: if i == 0 { header.clone() } else { String::new() },
                    cells: vec![Cell::Text(info_field(poster))],
                });
            }
        }

        Grid {
            kind: GridKind::Posters,
            start,
            columns: 1,
            slot_minutes: self.config.slots.default,
            rows,
        }
    }

    fn pack_row(
        &self,
        session: &Session,
        start: NaiveDateTime,
        columns: usize,
    ) -> Result<GridRow, LayoutError> {
        let lengths = &self.config.slots;
        let category = session.category();
        let mut cells = Vec::with_capacity(columns);
        let mut remaining = columns;
        let mut index = 1;

        while remaining > 0 {
            let column = columns - remaining;
            let Some(contribution) = session.contribution(index) else {
                cells.push(if category == Category::PrizeLecture {
                    Cell::Text(PRIZE_PLACEHOLDER.to_string())
                } else {
                    Cell::Empty
                });
                remaining -= 1;
                index += 1;
                continue;
            };

            let case = SlotCase::classify(contribution.duration, category, lengths);
            let masked = category == Category::PrizeLecture && !self.reveal_prize_lectures;
            let cell = match case {
                SlotCase::Unrecognized(minutes) => {
                    return Err(LayoutError::UnrecognizedDuration {
                        session: session.id.clone(),
                        slot: index,
                        minutes,
                    });
                }
                // unannounced prize talks keep their width but never their content
                SlotCase::DoubleSlot if masked => {
                    index += 1;
                    Cell::Merged {
                        span: remaining.min(2),
                        content: PRIZE_PLACEHOLDER.to_string(),
                    }
                }
                _ if masked => {
                    index += 1;
                    Cell::Text(PRIZE_PLACEHOLDER.to_string())
                }
                SlotCase::Plenary | SlotCase::PosterSlot | SlotCase::PrizeLectureSlot => {
                    index += 1;
                    Cell::Text(info_field(&contribution))
                }
                SlotCase::DoubleSlot => {
                    index += 1;
                    Cell::Merged {
                        span: remaining.min(2),
                        content: info_field(&contribution),
                    }
                }
                SlotCase::MinisymposiumSlot => {
                    // the nested table takes every remaining column and ends the row
                    self.nested_table(session, index, remaining)
                }
                SlotCase::DefaultSlot => {
                    let nominal = start + Duration::minutes(lengths.default * column as i64);
                    if contribution.start.is_some_and(|actual| actual > nominal) {
                        // gap in the schedule: retry this talk in the next column
                        Cell::Empty
                    } else {
                        index += 1;
                        Cell::Text(info_field(&contribution))
                    }
                }
            };
            remaining -= cell.span();
            cells.push(cell);
        }

        Ok(GridRow {
            header: session_header(session),
            cells,
        })
    }

    /// Nested table with `(span * default) / minisymposium` sub-slots
    fn nested_table(&self, session: &Session, first: usize, span: usize) -> Cell {
        let lengths = &self.config.slots;
        let sub_slots = ((span as i64 * lengths.default) / lengths.minisymposium()).max(1) as usize;
        let talks = (0..sub_slots)
            .map(|offset| {
                session
                    .contribution(first + offset)
                    .map(|c| info_field(&c))
                    .unwrap_or_default()
            })
            .collect();
        Cell::Nested { span, talks }
    }
}

/// Leftmost field: id, room and first chair
fn session_header(session: &Session) -> String {
    let mut header = format!(
        "\\white{{\\detokenize{{{}}}}}\\newline\\white{{\\small\\detokenize{{ ({})}}}}",
        session.id, session.room
    );
    if let Some(chair) = session.first_chair() {
        header.push_str(&format!(
            "\\newline\\newline\\white{{\\small\\detokenize{{{}}}}}",
            chair
        ));
    }
    header
}

/// Title and presenter of a contribution as cell content
fn info_field(contribution: &Contribution) -> String {
    format!(
        "\\footnotesize{{\\bfseries {}}}\\newline\\presenter{{{}}}",
        contribution.title, contribution.presenter
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::session::testing::{at, session, talk, with_talks};
    use crate::models::SlotFields;

    fn config() -> LayoutConfig {
        LayoutConfig::default()
    }

    fn pack_one(session: &Session, columns: usize, reveal: bool) -> Result<Grid, LayoutError> {
        let config = config();
        let packer = SlotTablePacker::new(&config, reveal);
        packer.pack(&[session], session.start, columns)
    }

    #[test]
    fn test_gap_keeps_contribution_for_next_column() {
        let s = with_talks(
            session("A01_01", at(9, 0), at(9, 45)),
            vec![
                talk("First", "Doe, Jane", at(9, 0), at(9, 15)),
                talk("Second", "Roe, Rick", at(9, 30), at(9, 45)),
            ],
        );
        let grid = pack_one(&s, 3, false).expect("valid lengths");
        let cells = &grid.rows[0].cells;

        assert_eq!(cells.len(), 3);
        assert!(matches!(&cells[0], Cell::Text(t) if t.contains("First")));
        assert_eq!(cells[1], Cell::Empty);
        assert!(matches!(&cells[2], Cell::Text(t) if t.contains("Second")));
    }

    #[test]
    fn test_double_slot_merges_two_columns() {
        let s = with_talks(
            session("A01_01", at(9, 0), at(9, 30)),
            vec![talk("Topical", "Doe, Jane", at(9, 0), at(9, 30))],
        );
        let grid = pack_one(&s, 2, false).expect("valid lengths");
        let row = &grid.rows[0];

        assert_eq!(row.cells.len(), 1);
        assert!(matches!(&row.cells[0], Cell::Merged { span: 2, content } if content.contains("Topical")));
        assert_eq!(row.covered_columns(), 2);
    }

    #[test]
    fn test_double_slot_clamped_at_row_end() {
        let s = with_talks(
            session("A01_01", at(9, 0), at(9, 45)),
            vec![
                talk("A", "Doe, Jane", at(9, 0), at(9, 15)),
                talk("B", "Doe, John", at(9, 15), at(9, 30)),
                talk("Topical", "Roe, Rick", at(9, 30), at(10, 0)),
            ],
        );
        let grid = pack_one(&s, 3, false).expect("valid lengths");
        assert_eq!(grid.rows[0].covered_columns(), 3);
        assert!(matches!(grid.rows[0].cells[2], Cell::Merged { span: 1, .. }));
    }

    #[test]
    fn test_prize_lecture_masked() {
        let s = with_talks(
            session("RvML", at(11, 0), at(11, 45)),
            vec![
                talk("Secret One", "Winner, A", at(11, 0), at(11, 22)),
                talk("Secret Two", "Winner, B", at(11, 22), at(11, 44)),
            ],
        );
        let grid = pack_one(&s, 2, false).expect("valid lengths");
        let cells = &grid.rows[0].cells;
        assert_eq!(cells.len(), 2);
        for cell in cells {
            assert_eq!(cell, &Cell::Text(PRIZE_PLACEHOLDER.to_string()));
        }

        let revealed = pack_one(&s, 2, true).expect("valid lengths");
        assert!(matches!(&revealed.rows[0].cells[1], Cell::Text(t) if t.contains("Secret Two")));
    }

    #[test]
    fn test_prize_lecture_masked_at_any_length() {
        for minutes in [15, 30, 60] {
            let s = with_talks(
                session("RvML", at(11, 0), at(12, 0)),
                vec![talk("Secret Winner Talk", "Winner, A", at(11, 0), at(11, 0) + Duration::minutes(minutes))],
            );
            let config = config();
            let text = pack_one(&s, 2, false)
                .expect("valid lengths")
                .render(&config.geometry);
            assert!(!text.contains("Secret Winner Talk"), "{} minute talk leaked", minutes);
            assert!(text.contains(PRIZE_PLACEHOLDER));
        }
    }

    #[test]
    fn test_masked_double_prize_talk_keeps_width() {
        let s = with_talks(
            session("RvML", at(11, 0), at(11, 30)),
            vec![talk("Secret Winner Talk", "Winner, A", at(11, 0), at(11, 30))],
        );
        let grid = pack_one(&s, 2, false).expect("valid lengths");
        let row = &grid.rows[0];
        assert_eq!(row.cells.len(), 1);
        assert!(matches!(&row.cells[0], Cell::Merged { span: 2, content } if content == PRIZE_PLACEHOLDER));

        let revealed = pack_one(&s, 2, true).expect("valid lengths");
        assert!(matches!(&revealed.rows[0].cells[0], Cell::Merged { content, .. } if content.contains("Secret Winner Talk")));
    }

    #[test]
    fn test_masked_prize_talk_with_odd_length_is_fatal() {
        let s = with_talks(
            session("RvML", at(11, 0), at(11, 45)),
            vec![talk("Secret", "Winner, A", at(11, 0), at(11, 17))],
        );
        assert!(matches!(
            pack_one(&s, 2, false),
            Err(LayoutError::UnrecognizedDuration { minutes: 17, .. })
        ));
    }

    #[test]
    fn test_empty_prize_session_shows_placeholder() {
        let s = session("RvML", at(11, 0), at(11, 45));
        let grid = pack_one(&s, 2, true).expect("no contributions");
        assert!(grid.rows[0]
            .cells
            .iter()
            .all(|c| c == &Cell::Text(PRIZE_PLACEHOLDER.to_string())));
    }

    #[test]
    fn test_minisymposium_nested_table() {
        let talks = (0..4)
            .map(|i| {
                let begin = at(9, 0) + Duration::minutes(22 * i);
                talk(&format!("MS talk {}", i + 1), "Doe, Jane", begin, begin + Duration::minutes(22))
            })
            .collect();
        let s = with_talks(session("MS04_01", at(9, 0), at(10, 30)), talks);
        let grid = pack_one(&s, 6, false).expect("valid lengths");
        let row = &grid.rows[0];

        assert_eq!(row.cells.len(), 1);
        assert_eq!(row.covered_columns(), 6);
        match &row.cells[0] {
            Cell::Nested { span, talks } => {
                assert_eq!(*span, 6);
                assert_eq!(talks.len(), 4);
                assert!(talks[3].contains("MS talk 4"));
            }
            other => panic!("expected nested table, got {:?}", other),
        }
    }

    #[test]
    fn test_nested_table_sized_by_its_span() {
        let mut talks = vec![talk("Opening", "Doe, Jane", at(9, 0), at(9, 15))];
        for i in 0..4 {
            let begin = at(9, 15) + Duration::minutes(22 * i);
            talks.push(talk(&format!("MS talk {}", i + 1), "Roe, Rick", begin, begin + Duration::minutes(22)));
        }
        let s = with_talks(session("MS05_01", at(9, 0), at(10, 30)), talks);
        let grid = pack_one(&s, 6, false).expect("valid lengths");
        let row = &grid.rows[0];

        assert_eq!(row.covered_columns(), 6);
        match &row.cells[1] {
            Cell::Nested { span, talks } => {
                assert_eq!(*span, 5);
                // 5 columns of 15 minutes hold three 22-minute talks
                assert_eq!(talks.len(), 3);
                assert!(talks[0].contains("MS talk 1"));
            }
            other => panic!("expected nested table, got {:?}", other),
        }
    }

    #[test]
    fn test_minisymposium_missing_talk_still_closes() {
        let mut talks: Vec<SlotFields> = (0..3)
            .map(|i| {
                let begin = at(9, 0) + Duration::minutes(22 * i);
                talk(&format!("MS talk {}", i + 1), "Doe, Jane", begin, begin + Duration::minutes(22))
            })
            .collect();
        talks[1].presenting_author = None;
        let s = with_talks(session("MS04_02", at(9, 0), at(10, 30)), talks);
        let config = config();
        let packer = SlotTablePacker::new(&config, false);
        let text = packer
            .pack(&[&s], s.start, 6)
            .expect("valid lengths")
            .render(&config.geometry);

        assert_eq!(text.matches("\\begin{tabularx}").count(), 1);
        assert_eq!(text.matches("\\end{tabularx}").count(), 1);
    }

    #[test]
    fn test_unrecognized_duration_is_fatal() {
        let s = with_talks(
            session("A01_01", at(9, 0), at(10, 0)),
            vec![talk("Odd", "Doe, Jane", at(9, 0), at(9, 25))],
        );
        let err = pack_one(&s, 4, false).unwrap_err();
        assert_eq!(
            err,
            LayoutError::UnrecognizedDuration {
                session: "A01_01".to_string(),
                slot: 1,
                minutes: 25,
            }
        );
    }

    #[test]
    fn test_every_row_covers_declared_columns() {
        let sessions = vec![
            with_talks(
                session("A01_01", at(9, 0), at(10, 30)),
                vec![
                    talk("A", "P", at(9, 0), at(9, 15)),
                    talk("B", "P", at(9, 15), at(9, 45)),
                    talk("C", "P", at(10, 0), at(10, 15)),
                ],
            ),
            session("A02_01", at(9, 0), at(10, 30)),
            with_talks(
                session("A03_01", at(9, 0), at(10, 30)),
                vec![talk("Late", "P", at(10, 15), at(10, 30))],
            ),
        ];
        let refs: Vec<&Session> = sessions.iter().collect();
        let config = config();
        let grid = SlotTablePacker::new(&config, false)
            .pack(&refs, at(9, 0), 6)
            .expect("valid lengths");
        for row in &grid.rows {
            assert_eq!(row.covered_columns(), 6, "row {}", row.header);
        }
    }

    #[test]
    fn test_packing_is_deterministic() {
        let s = with_talks(
            session("A01_01", at(9, 0), at(10, 0)),
            vec![talk("A", "Doe, Jane", at(9, 0), at(9, 15))],
        );
        let config = config();
        let packer = SlotTablePacker::new(&config, false);
        let first = packer.pack(&[&s], s.start, 4).expect("valid").render(&config.geometry);
        let second = packer.pack(&[&s], s.start, 4).expect("valid").render(&config.geometry);
        assert_eq!(first, second);
    }

    #[test]
    fn test_poster_table_one_row_per_poster() {
        let s = with_talks(
            session("Poster1", at(16, 0), at(18, 0)),
            vec![
                talk("Poster A", "Doe, Jane", at(16, 0), at(18, 0)),
                talk("Poster B", "Roe, Rick", at(16, 0), at(18, 0)),
            ],
        );
        let config = config();
        let grid = SlotTablePacker::new(&config, false).pack_posters(&[&s], s.start);
        assert_eq!(grid.kind, GridKind::Posters);
        assert_eq!(grid.columns, 1);
        assert_eq!(grid.rows.len(), 2);
        assert!(grid.rows[0].header.contains("Poster1"));
        assert!(grid.rows[1].header.is_empty());
    }
}
