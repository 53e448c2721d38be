use crate::api::types::{PhraseOrigin, SessionEvent};
use crate::config::PhraseConfig;
use crate::link::phrase_from_query;
use crate::puzzle::{HudSnapshot, PieceDealer, Puzzle};

/// Upper bound on undrained events.
pub const MAX_PENDING_EVENTS: usize = 256;

/// One play-through of a phrase.
///
/// Owns the puzzle exclusively; gameplay code goes through `collect` and
/// `restart_collection`, the HUD reads `hud`. Events queue up until the
/// caller drains them, which the UI layer does once per frame; past
/// `MAX_PENDING_EVENTS` the oldest are dropped.
pub struct GameSession {
    config: PhraseConfig,
    puzzle: Puzzle,
    dealer: PieceDealer,
    origin: PhraseOrigin,
    score: u32,
    events: Vec<SessionEvent>,
}

impl GameSession {
    /// Start a session for a phrase the caller already has.
    pub fn new(phrase: impl Into<String>, config: PhraseConfig) -> Self {
        Self::with_origin(phrase.into(), PhraseOrigin::Direct, config)
    }

    /// Start a session from the game page's `location.search`.
    ///
    /// A missing, blank or undecodable token falls back to
    /// `config.default_phrase`; `origin()` reports which case happened.
    pub fn from_query(search: &str, config: PhraseConfig) -> Self {
        let (phrase, origin) = match phrase_from_query(search, &config.query_param) {
            Ok(Some(phrase)) if !phrase.trim().is_empty() => (phrase, PhraseOrigin::Link),
            Ok(_) => (config.default_phrase.clone(), PhraseOrigin::Default),
            Err(err) => {
                log::warn!("ignoring phrase token: {}", err);
                (config.default_phrase.clone(), PhraseOrigin::InvalidLink)
            }
        };
        Self::with_origin(phrase, origin, config)
    }

    fn with_origin(phrase: String, origin: PhraseOrigin, config: PhraseConfig) -> Self {
        let puzzle = Puzzle::new(phrase);
        log::info!(
            "session started: {} pieces, {} to collect ({:?})",
            puzzle.total_count(),
            puzzle.non_space_count(),
            origin
        );
        Self {
            config,
            puzzle,
            dealer: PieceDealer::new(),
            origin,
            score: 0,
            events: Vec::new(),
        }
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn config(&self) -> &PhraseConfig {
        &self.config
    }

    pub fn origin(&self) -> PhraseOrigin {
        self.origin
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// The player reached the collectible for `index`.
    ///
    /// Score and events happen only when the piece was newly collected.
    pub fn collect(&mut self, index: isize) -> bool {
        if !self.puzzle.collect_piece(index) {
            return false;
        }

        // collect_piece only succeeds for in-range indices.
        let index = index as usize;
        self.score = self.score.saturating_add(self.config.points_per_piece);
        if let Some(piece) = self.puzzle.piece(index) {
            self.push_event(SessionEvent::PieceCollected {
                index,
                piece,
                score: self.score,
            });
        }

        if self.puzzle.is_complete() {
            log::info!("phrase complete, score {}", self.score);
            self.push_event(SessionEvent::PhraseComplete { score: self.score });
        }
        true
    }

    /// Replay the collection part of the level with the same phrase.
    pub fn restart_collection(&mut self) {
        self.puzzle.reset_collected();
        self.dealer.rewind();
        self.score = 0;
        self.push_event(SessionEvent::CollectionReset);
        log::debug!("collection reset");
    }

    /// Next piece the spawner should place in the world.
    pub fn next_spawn_index(&mut self) -> Option<usize> {
        self.dealer.next_index(&self.puzzle)
    }

    pub fn hud(&self) -> HudSnapshot {
        self.puzzle.hud(self.config.mask_char)
    }

    fn push_event(&mut self, event: SessionEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            self.events.remove(0);
        }
        self.events.push(event);
    }

    /// Pending events, oldest first.
    pub fn events(&self) -> &[SessionEvent] {
        &self.events
    }

    /// Take all pending events, leaving the queue empty.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }
}
