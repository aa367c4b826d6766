//! Grid notation parsing and serialization for [`Snapshot`].
//!
//! A grid is written top row first, one character per cell: `*` (or `.`) for
//! empty, `X` and `O` for stones. Rows are separated by `/` or newlines, so
//! `"*****/**X**/*****/*****/*****"` and a multi-line block both parse.

use std::fmt;
use std::str::FromStr;

use crate::cell::Cell;
use crate::coord::Move;
use crate::error::NotationError;
use crate::snapshot::{MIN_GRID_SIZE, Snapshot};

impl FromStr for Snapshot {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Snapshot, NotationError> {
        let rows: Vec<&str> = s
            .split(['/', '\n'])
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .collect();
        if rows.is_empty() {
            return Err(NotationError::Empty);
        }

        let size = rows.len();
        if size < MIN_GRID_SIZE {
            return Err(NotationError::TooSmall { size });
        }

        let mut snapshot = Snapshot::empty(size);
        for (y, row) in rows.iter().enumerate() {
            let length = row.chars().count();
            if length != size {
                return Err(NotationError::RaggedRow {
                    row: y,
                    length,
                    expected: size,
                });
            }
            for (x, c) in row.chars().enumerate() {
                let cell = Cell::from_symbol(c).ok_or(NotationError::InvalidCell { character: c })?;
                if let Cell::Stone(mover) = cell {
                    // Rows are validated above, so every placement is on an empty cell.
                    snapshot
                        .place(Move::new(x, y), mover)
                        .map_err(|_| NotationError::InvalidCell { character: c })?;
                }
            }
        }
        Ok(snapshot)
    }
}

impl Snapshot {
    /// Serialize to single-line notation with `/` between rows.
    pub fn to_notation(&self) -> String {
        self.rows().collect::<Vec<_>>().join("/")
    }

    fn rows(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.size()).map(move |y| {
            (0..self.size())
                .map(|x| self.get(Move::new(x, y)).symbol())
                .collect()
        })
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            write!(f, "{row}")?;
        }
        Ok(())
    }
}
