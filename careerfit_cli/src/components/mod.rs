pub mod radio;
/// Component module exports
pub mod scorebar;

pub use radio::RadioState;
pub use scorebar::{score_color, ScoreBar};
