pub mod compare;
pub mod export;
pub mod favorites;
pub mod fonts;
pub mod presets;
pub mod state;

pub use state::{EventEmitter, ViewerState};
