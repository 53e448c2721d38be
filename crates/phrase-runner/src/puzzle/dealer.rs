use crate::puzzle::state::Puzzle;

/// Chooses which piece the spawner should place next.
///
/// Walks the non-space indices in phrase order and wraps around, so a piece
/// the player flew past comes back later. Pieces collected in the meantime
/// are skipped.
#[derive(Debug, Clone, Default)]
pub struct PieceDealer {
    cursor: usize,
}

impl PieceDealer {
    pub fn new() -> Self {
        Self { cursor: 0 }
    }

    /// Next uncollected, non-space index to spawn, or `None` once the puzzle
    /// has nothing left to collect.
    pub fn next_index(&mut self, puzzle: &Puzzle) -> Option<usize> {
        let total = puzzle.total_count();
        if total == 0 {
            return None;
        }
        for step in 0..total {
            let index = (self.cursor + step) % total;
            let Some(piece) = puzzle.piece(index) else {
                continue;
            };
            if piece != ' ' && !puzzle.is_collected(index) {
                self.cursor = (index + 1) % total;
                return Some(index);
            }
        }
        None
    }

    /// Start dealing from the first piece again.
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }
}
