pub mod dealer;
pub mod hud;
pub mod state;

pub use dealer::PieceDealer;
pub use hud::HudSnapshot;
pub use state::{Puzzle, MASK_CHAR};
