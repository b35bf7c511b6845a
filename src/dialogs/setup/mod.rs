//! Animation setup dialog

mod setup;
pub mod setup_events;

pub use setup::{MAX_FRAMES, SetupDialog};
pub use setup_events::ApplySetupEvent;
