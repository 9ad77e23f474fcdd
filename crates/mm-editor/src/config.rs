//! Editor configuration.

use mm_core::{NODE_HEIGHT, NODE_WIDTH, Size};
use serde::Deserialize;
use std::ops::Range;

// ─── Config ───────────────────────────────────────────────────────────────

/// Tunables for an [`crate::Editor`] session.
///
/// Missing JSON fields fall back to the defaults, which match an 800×600
/// canvas.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    /// Canvas width in pixels. Default: **800**.
    pub canvas_width: f64,
    /// Canvas height in pixels. Default: **600**.
    pub canvas_height: f64,
    /// Minimum gap between a freshly placed node and the canvas edge. Default: **25**.
    pub placement_margin: f64,
    /// Distance an arrow key moves the selected node, in model units. Default: **5**.
    pub nudge_step: f64,
    /// Zoom multiplier for scrolling up. Default: **1.1**.
    pub zoom_in_factor: f64,
    /// Zoom multiplier for scrolling down. Default: **0.9**.
    pub zoom_out_factor: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800.0,
            canvas_height: 600.0,
            placement_margin: 25.0,
            nudge_step: 5.0,
            zoom_in_factor: 1.1,
            zoom_out_factor: 0.9,
        }
    }
}

impl EditorConfig {
    /// Parse a (possibly partial) JSON config and validate it.
    ///
    /// # Errors
    /// Returns a message for malformed JSON or out-of-range values.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: Self = serde_json::from_str(json).map_err(|e| format!("invalid config: {e}"))?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    /// Returns a message naming the first field that is out of range.
    pub fn validate(&self) -> Result<(), String> {
        let positive = |name: &str, v: f64| {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(format!("{name} must be a positive number, got {v}"))
            }
        };
        positive("canvasWidth", self.canvas_width)?;
        positive("canvasHeight", self.canvas_height)?;
        positive("nudgeStep", self.nudge_step)?;
        positive("zoomInFactor", self.zoom_in_factor)?;
        positive("zoomOutFactor", self.zoom_out_factor)?;
        if !self.placement_margin.is_finite() || self.placement_margin < 0.0 {
            return Err(format!(
                "placementMargin must be zero or positive, got {}",
                self.placement_margin
            ));
        }
        Ok(())
    }

    pub fn canvas_size(&self) -> Size {
        Size::new(self.canvas_width, self.canvas_height)
    }

    /// Where a new node's top-left corner may land so its whole footprint
    /// stays inside the margin. Collapses to the margin on tiny canvases.
    pub fn placement_ranges(&self) -> (Range<f64>, Range<f64>) {
        let m = self.placement_margin;
        let max_x = (self.canvas_width - NODE_WIDTH - m).max(m);
        let max_y = (self.canvas_height - NODE_HEIGHT - m).max(m);
        (m..max_x, m..max_y)
    }
}
