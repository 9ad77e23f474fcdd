pub mod config;
pub mod editor;
pub mod input;
pub mod interaction;
pub mod shortcuts;
pub mod status;

pub use config::EditorConfig;
pub use editor::Editor;
pub use input::InputEvent;
pub use interaction::{DragState, Interaction};
pub use shortcuts::{Direction, ShortcutAction, ShortcutMap};
pub use status::EditStatus;
