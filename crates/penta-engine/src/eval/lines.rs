//! Line-family scans through a freshly placed stone.

use penta_core::{Axis, Cell, Move, Mover, Ray, Snapshot, WIN_LENGTH};

use super::Score;
use super::weights::{
    ABLE_TO_BUILD_FIVE_SCORE, END_OF_GRID_SCORE, FOUR_IN_A_ROW_SCORE, FRIENDLY_NEIGHBOR_SCORE,
    HOSTILE_NEIGHBOR_SCORE, PREVENT_FOUR_IN_A_ROW_SCORE, PROTECTION_SCORE,
    UNABLE_TO_BUILD_FIVE_SCORE,
};

/// The placed stone completes five in a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Five;

/// A group of axes scored together, each with its own border penalty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Family {
    Vertical,
    Horizontal,
    Diagonal,
}

impl Family {
    pub(crate) const ALL: [Family; 3] = [Family::Vertical, Family::Horizontal, Family::Diagonal];

    fn axes(self) -> &'static [Axis] {
        match self {
            Family::Vertical => &[Axis::Vertical],
            Family::Horizontal => &[Axis::Horizontal],
            Family::Diagonal => &[Axis::Rising, Axis::Falling],
        }
    }

    /// Penalty for a stone placed on the border. Columns are checked for
    /// the vertical family, rows for the horizontal family, both for diagonals.
    fn border_penalty(self, mv: Move, size: usize) -> Score {
        let side = if mv.on_side_edge(size) { END_OF_GRID_SCORE } else { 0.0 };
        let end = if mv.on_end_edge(size) { END_OF_GRID_SCORE } else { 0.0 };
        match self {
            Family::Vertical => side,
            Family::Horizontal => end,
            Family::Diagonal => side + end,
        }
    }

    /// Score the stone at `mv` for `mover` across this family.
    ///
    /// Returns [`Five`] as soon as any axis completes five in a row; the
    /// partial sum is then irrelevant.
    pub(crate) fn score(self, snapshot: &Snapshot, mover: Mover, mv: Move) -> Result<Score, Five> {
        let mut score = 0.0;
        let mut cramped = false;
        let mut four = false;
        for &axis in self.axes() {
            let scan = scan_axis(snapshot, mover, mv, axis)?;
            score += scan.score;
            cramped |= scan.span < WIN_LENGTH;
            four |= scan.run == WIN_LENGTH - 1;
        }

        score += if cramped {
            UNABLE_TO_BUILD_FIVE_SCORE
        } else {
            ABLE_TO_BUILD_FIVE_SCORE
        };
        if four {
            score += FOUR_IN_A_ROW_SCORE;
        }
        Ok(score + self.border_penalty(mv, snapshot.size()))
    }
}

/// Totals gathered along both directions of one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct AxisScan {
    /// Own stones in the unbroken run through the placed stone, itself included.
    pub run: usize,
    /// Cells through the placed stone not blocked by the opponent.
    pub span: usize,
    /// Neighbour, border and threat contributions.
    pub score: Score,
}

/// Walk both directions of `axis` away from `origin`, positive first.
///
/// Per direction, the friendly walk runs until an opponent stone. It counts
/// every non-opponent cell toward the span but extends the run only through
/// own stones seen before the first other cell. The hostile walk runs
/// through opponent stones only. The hostile count carries over from the
/// positive to the negative direction.
pub(crate) fn scan_axis(
    snapshot: &Snapshot,
    mover: Mover,
    origin: Move,
    axis: Axis,
) -> Result<AxisScan, Five> {
    let own = Cell::Stone(mover);
    let foe = Cell::Stone(mover.flip());
    let size = snapshot.size();
    let mut scan = AxisScan {
        run: 1,
        span: 1,
        score: 0.0,
    };
    let mut hostile = 0;

    for step in axis.directions() {
        let mut unbroken = true;
        for (mv, last) in Ray::new(origin, step, size) {
            let cell = snapshot.get(mv);
            if cell == foe {
                break;
            }
            scan.span += 1;
            if cell != own {
                unbroken = false;
            } else if unbroken {
                scan.run += 1;
                if scan.run == WIN_LENGTH {
                    return Err(Five);
                }
                if last {
                    scan.score += END_OF_GRID_SCORE;
                }
                scan.score += FRIENDLY_NEIGHBOR_SCORE;
            }
        }

        for (mv, last) in Ray::new(origin, step, size) {
            let cell = snapshot.get(mv);
            if hostile == WIN_LENGTH - 2 && cell.is_empty() {
                scan.score += PREVENT_FOUR_IN_A_ROW_SCORE;
            }
            if cell != foe {
                break;
            }
            hostile += 1;
            if hostile == WIN_LENGTH - 1 {
                scan.score += PROTECTION_SCORE;
            }
            if last {
                scan.score += END_OF_GRID_SCORE;
            }
            scan.score += HOSTILE_NEIGHBOR_SCORE;
        }
    }
    Ok(scan)
}

#[cfg(test)]
mod tests {
    use super::{AxisScan, Family, Five, scan_axis};
    use penta_core::{Axis, Move, Mover, Snapshot};

    fn grid(s: &str) -> Snapshot {
        s.parse().unwrap()
    }

    #[test]
    fn lone_stone_in_open_row() {
        let snap = grid("******/******/**X***/******/******/******");
        let scan = scan_axis(&snap, Mover::Cross, Move::new(2, 2), Axis::Horizontal).unwrap();
        assert_eq!(
            scan,
            AxisScan {
                run: 1,
                span: 6,
                score: 0.0
            }
        );
    }

    #[test]
    fn run_stops_at_first_gap() {
        // O at (1,1); the O at (3,1) sits past a gap and does not extend the run.
        let snap = grid("******/OO*O**/******/******/******/******");
        let scan = scan_axis(&snap, Mover::Nought, Move::new(1, 1), Axis::Horizontal).unwrap();
        assert_eq!(scan.run, 2);
        assert_eq!(scan.span, 6);
        // One friendly neighbour at (0,1), which is also the last cell of its ray.
        assert_eq!(scan.score, 2.0 - 0.5);
    }

    #[test]
    fn opponent_blocks_the_span() {
        let snap = grid("******/**OOX*/******/******/******/******");
        let scan = scan_axis(&snap, Mover::Nought, Move::new(1, 1), Axis::Horizontal).unwrap();
        assert_eq!(scan.run, 3);
        assert_eq!(scan.span, 4);
    }

    #[test]
    fn five_returns_early() {
        let snap = grid("******/******/*OOOOO/******/******/******");
        assert_eq!(
            scan_axis(&snap, Mover::Nought, Move::new(2, 2), Axis::Horizontal),
            Err(Five)
        );
        assert_eq!(Family::Horizontal.score(&snap, Mover::Nought, Move::new(2, 2)), Err(Five));
    }

    #[test]
    fn four_hostile_stones_earn_protection() {
        // X at (0,3) caps four O stones running right.
        let snap = grid("******/******/******/XOOOO*/******/******");
        let scan = scan_axis(&snap, Mover::Cross, Move::new(0, 3), Axis::Horizontal).unwrap();
        assert_eq!(scan.score, 1_000_000.0 + 4.0 * 0.5);
    }

    #[test]
    fn open_three_earns_prevention() {
        let snap = grid("******/******/******/XOOO**/******/******");
        let scan = scan_axis(&snap, Mover::Cross, Move::new(0, 3), Axis::Horizontal).unwrap();
        assert_eq!(scan.score, 1_000.0 + 3.0 * 0.5);
    }

    #[test]
    fn hostile_count_carries_across_directions() {
        // One O below and two above the X: the count reaches three on the
        // way up, and the empty cell after it is an open end.
        let snap = grid("******/**O***/**O***/**X***/**O***/******");
        let scan = scan_axis(&snap, Mover::Cross, Move::new(2, 3), Axis::Vertical).unwrap();
        assert_eq!(scan.score, 1_000.0 + 3.0 * 0.5);
    }

    #[test]
    fn diagonal_neighbour_on_the_border_pays_edge_penalty() {
        // X at (5,1) is the last cell of the rising ray from (4,2).
        let snap = grid("******/*****X/****X*/******/******/******");
        let mv = Move::new(4, 2);
        let scan = scan_axis(&snap, Mover::Cross, mv, Axis::Rising).unwrap();
        assert_eq!(scan.run, 2);
        assert_eq!(scan.score, 2.0 - 0.5);
        // Falling span is 4, so the family is cramped.
        assert_eq!(Family::Diagonal.score(&snap, Mover::Cross, mv), Ok(-0.5));
    }

    #[test]
    fn border_penalty_depends_on_family() {
        let snap = grid("X*****/******/******/******/******/******");
        let mv = Move::new(0, 0);
        // Vertical: span 6, +1; column 0 border -0.5.
        assert_eq!(Family::Vertical.score(&snap, Mover::Cross, mv), Ok(0.5));
        // Horizontal: span 6, +1; row 0 border -0.5.
        assert_eq!(Family::Horizontal.score(&snap, Mover::Cross, mv), Ok(0.5));
        // Diagonal: rising span is 1, -2; both borders -1.
        assert_eq!(Family::Diagonal.score(&snap, Mover::Cross, mv), Ok(-3.0));
    }

    #[test]
    fn four_bonus_counts_once_per_family() {
        let snap = grid("******/******/*OOOO*/******/******/******");
        let score = Family::Horizontal.score(&snap, Mover::Nought, Move::new(2, 2)).unwrap();
        // Three friendly neighbours, open span, four bonus.
        assert_eq!(score, 6.0 + 1.0 + 100_000.0);
    }
}
