mod component;
mod confetti;
mod state;
mod types;

pub use component::{Ghost, SpeechBubble};
pub use confetti::CanvasConfetti;
pub use state::SpeechBubbleState;
pub use types::SpeakKey;
