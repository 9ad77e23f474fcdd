pub mod hit;
pub mod paint;
pub mod record;
pub mod vello_surface;

pub use hit::{hit_test, hit_test_all};
pub use paint::{DrawContext, RenderStyle, draw_rounded_rect, render_scene};
pub use record::{DrawOp, RecordingSurface};
