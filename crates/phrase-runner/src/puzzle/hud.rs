use serde::Serialize;

/// Everything the HUD reads once per display refresh.
/// Serialized to JSON for the browser overlay.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HudSnapshot {
    /// Phrase with uncollected pieces masked.
    pub reconstructed: String,
    /// Player-collected pieces (spaces excluded).
    pub collected_non_space: usize,
    /// Pieces the player has to collect.
    pub non_space_total: usize,
    /// Collected pieces including pinned spaces.
    pub collected: usize,
    /// All pieces including spaces.
    pub total: usize,
    pub complete: bool,
    /// `collected_non_space / non_space_total`, 1.0 when there is nothing to collect.
    pub progress: f32,
}

impl HudSnapshot {
    /// Short "3/7" counter text.
    pub fn counter_label(&self) -> String {
        format!("{}/{}", self.collected_non_space, self.non_space_total)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::puzzle::{Puzzle, MASK_CHAR};

    #[test]
    fn snapshot_tracks_puzzle() {
        let mut puzzle = Puzzle::new("AB CD");
        puzzle.collect_piece(0);
        let hud = puzzle.hud(MASK_CHAR);
        assert_eq!(hud.reconstructed, "A_ __");
        assert_eq!(hud.collected_non_space, 1);
        assert_eq!(hud.non_space_total, 4);
        assert_eq!(hud.collected, 2);
        assert_eq!(hud.total, 5);
        assert!(!hud.complete);
        assert_eq!(hud.progress, 0.25);
        assert_eq!(hud.counter_label(), "1/4");
    }

    #[test]
    fn json_uses_camel_case() {
        let hud = Puzzle::new("a").hud('*');
        let json = hud.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["reconstructed"], "*");
        assert_eq!(value["nonSpaceTotal"], 1);
        assert_eq!(value["collectedNonSpace"], 0);
        assert_eq!(value["complete"], false);
    }
}
