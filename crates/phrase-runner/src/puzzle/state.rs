use crate::puzzle::hud::HudSnapshot;

/// Placeholder shown in the reconstructed phrase for uncollected pieces.
pub const MASK_CHAR: char = '_';

#[inline]
fn is_space(piece: char) -> bool {
    piece == ' '
}

/// Collection state for one secret phrase.
///
/// The phrase is split into one piece per Unicode scalar value. Each piece is
/// either collected or not; spaces are pinned collected from construction on
/// so they are never presented as a goal. `pieces` and `collected` are
/// index-aligned and always the same length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    original_phrase: String,
    pieces: Vec<char>,
    collected: Vec<bool>,
}

impl Puzzle {
    pub fn new(phrase: impl Into<String>) -> Self {
        let original_phrase = phrase.into();
        let pieces: Vec<char> = original_phrase.chars().collect();
        let collected = vec![false; pieces.len()];
        let mut puzzle = Self {
            original_phrase,
            pieces,
            collected,
        };
        puzzle.pin_spaces();
        puzzle
    }

    fn pin_spaces(&mut self) {
        for (flag, &piece) in self.collected.iter_mut().zip(&self.pieces) {
            if is_space(piece) {
                *flag = true;
            }
        }
    }

    /// The phrase exactly as it was given.
    pub fn original_phrase(&self) -> &str {
        &self.original_phrase
    }

    /// All pieces in phrase order.
    pub fn pieces(&self) -> &[char] {
        &self.pieces
    }

    /// Whether the piece at `index` is collected. Out of range is `false`.
    pub fn is_collected(&self, index: usize) -> bool {
        self.collected.get(index).copied().unwrap_or(false)
    }

    /// Mark a piece collected.
    ///
    /// Returns `true` only on the uncollected → collected transition, so the
    /// caller can award feedback exactly once per piece. Indices outside the
    /// phrase (including negative ones) are a silent no-op.
    pub fn collect_piece(&mut self, index: isize) -> bool {
        let Ok(index) = usize::try_from(index) else {
            return false;
        };
        match self.collected.get_mut(index) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }

    /// Forget all player progress. Spaces stay collected.
    pub fn reset_collected(&mut self) {
        for (flag, &piece) in self.collected.iter_mut().zip(&self.pieces) {
            *flag = is_space(piece);
        }
    }

    /// The HUD string: collected pieces shown, the rest masked with `_`.
    pub fn reconstructed_phrase(&self) -> String {
        self.reconstructed_with(MASK_CHAR)
    }

    /// Same as [`Puzzle::reconstructed_phrase`] with a caller-chosen mask.
    pub fn reconstructed_with(&self, mask: char) -> String {
        self.pieces
            .iter()
            .zip(&self.collected)
            .map(|(&piece, &collected)| if collected { piece } else { mask })
            .collect()
    }

    /// True once every piece is collected. Vacuously true for an empty phrase.
    pub fn is_complete(&self) -> bool {
        self.collected.iter().all(|&c| c)
    }

    /// Collected pieces, counting the auto-collected spaces.
    pub fn collected_count(&self) -> usize {
        self.collected.iter().filter(|&&c| c).count()
    }

    /// All pieces, spaces included.
    pub fn total_count(&self) -> usize {
        self.pieces.len()
    }

    /// Pieces the player actually has to collect.
    pub fn non_space_count(&self) -> usize {
        self.pieces.iter().filter(|&&p| !is_space(p)).count()
    }

    pub fn collected_non_space_count(&self) -> usize {
        self.pieces
            .iter()
            .zip(&self.collected)
            .filter(|(&piece, &collected)| collected && !is_space(piece))
            .count()
    }

    /// Indices requiring player action, ascending.
    pub fn non_space_indices(&self) -> Vec<usize> {
        self.pieces
            .iter()
            .enumerate()
            .filter(|(_, &p)| !is_space(p))
            .map(|(i, _)| i)
            .collect()
    }

    /// Smallest index not yet collected, if any.
    pub fn next_uncollected_index(&self) -> Option<usize> {
        self.collected.iter().position(|&c| !c)
    }

    pub fn piece(&self, index: usize) -> Option<char> {
        self.pieces.get(index).copied()
    }

    /// Player-facing progress in `[0, 1]`, ignoring spaces.
    /// A phrase with nothing to collect counts as fully done.
    pub fn progress(&self) -> f32 {
        let total = self.non_space_count();
        if total == 0 {
            return 1.0;
        }
        self.collected_non_space_count() as f32 / total as f32
    }

    /// Snapshot of everything the HUD reads each refresh.
    pub fn hud(&self, mask: char) -> HudSnapshot {
        HudSnapshot {
            reconstructed: self.reconstructed_with(mask),
            collected_non_space: self.collected_non_space_count(),
            non_space_total: self.non_space_count(),
            collected: self.collected_count(),
            total: self.total_count(),
            complete: self.is_complete(),
            progress: self.progress(),
        }
    }
}
