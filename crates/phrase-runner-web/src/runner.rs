use phrase_runner::{GameSession, PhraseConfig, SessionEvent};

/// Browser-facing wrapper around a `GameSession`.
///
/// wasm-bindgen cannot hand out borrowed Rust data, so every accessor here
/// returns plain values (`-1` standing in for "none").
pub struct SessionRunner {
    session: GameSession,
}

impl SessionRunner {
    pub fn from_query(search: &str, config: PhraseConfig) -> Self {
        Self {
            session: GameSession::from_query(search, config),
        }
    }

    pub fn collect_piece(&mut self, index: i32) -> bool {
        self.session.collect(index as isize)
    }

    pub fn reset(&mut self) {
        self.session.restart_collection();
    }

    pub fn reconstructed_phrase(&self) -> String {
        self.session.hud().reconstructed
    }

    /// "3/7" progress text for the HUD counter.
    pub fn counter_label(&self) -> String {
        self.session.hud().counter_label()
    }

    pub fn collected_non_space_count(&self) -> u32 {
        self.session.puzzle().collected_non_space_count() as u32
    }

    pub fn non_space_count(&self) -> u32 {
        self.session.puzzle().non_space_count() as u32
    }

    pub fn collected_count(&self) -> u32 {
        self.session.puzzle().collected_count() as u32
    }

    pub fn total_count(&self) -> u32 {
        self.session.puzzle().total_count() as u32
    }

    pub fn is_complete(&self) -> bool {
        self.session.puzzle().is_complete()
    }

    pub fn non_space_indices(&self) -> Vec<u32> {
        self.session
            .puzzle()
            .non_space_indices()
            .into_iter()
            .map(|i| i as u32)
            .collect()
    }

    pub fn next_uncollected_index(&self) -> i32 {
        to_js_index(self.session.puzzle().next_uncollected_index())
    }

    pub fn next_spawn_index(&mut self) -> i32 {
        to_js_index(self.session.next_spawn_index())
    }

    pub fn piece(&self, index: u32) -> Option<String> {
        self.session
            .puzzle()
            .piece(index as usize)
            .map(String::from)
    }

    pub fn score(&self) -> u32 {
        self.session.score()
    }

    pub fn used_fallback(&self) -> bool {
        self.session.origin().is_fallback()
    }

    pub fn hud_json(&self) -> Result<String, serde_json::Error> {
        self.session.hud().to_json()
    }

    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        self.session.drain_events()
    }
}

fn to_js_index(index: Option<usize>) -> i32 {
    index.map(|i| i as i32).unwrap_or(-1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_label_follows_collection() {
        let search = format!("?p={}", phrase_runner::encode("AB CD"));
        let mut runner = SessionRunner::from_query(&search, PhraseConfig::default());
        assert_eq!(runner.counter_label(), "0/4");
        assert!(runner.collect_piece(3));
        assert_eq!(runner.counter_label(), "1/4");
        assert!(!runner.used_fallback());
    }

    #[test]
    fn none_maps_to_minus_one() {
        let runner = SessionRunner::from_query("?p=", PhraseConfig::default());
        assert!(runner.used_fallback());
        assert_eq!(to_js_index(None), -1);
        assert_eq!(runner.next_uncollected_index(), 0);
    }
}
