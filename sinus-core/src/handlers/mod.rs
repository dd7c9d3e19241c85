pub mod reactions;
pub mod serenity;

pub use reactions::{apply_control, handle_reaction, Control, ReactionOutcome};
pub use serenity::{emoji_key, handle_event};
