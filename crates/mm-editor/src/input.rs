//! Input abstraction layer.
//!
//! Normalizes browser pointer, wheel, and keyboard events into one enum.
//! Pointer coordinates are in screen space; the editor maps them to model
//! space through its viewport.

#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed over the canvas.
    PointerDown { x: f64, y: f64 },

    PointerMove { x: f64, y: f64 },

    /// Pointer released (anywhere).
    PointerUp { x: f64, y: f64 },

    /// Press and release resolved into a click on the canvas.
    Click { x: f64, y: f64 },

    /// A click landed somewhere on the page other than the canvas.
    ClickOutside,

    /// Scroll wheel over the canvas. Positive `delta_y` scrolls down.
    Wheel { delta_y: f64 },

    /// Key press, as `KeyboardEvent.key` (e.g. `"ArrowUp"`).
    Key { key: String },
}

impl InputEvent {
    pub fn key(key: impl Into<String>) -> Self {
        Self::Key { key: key.into() }
    }
}
