pub mod bullets;
pub mod id;
pub mod model;
pub mod transform;

pub use bullets::BulletList;
pub use id::NodeId;
pub use model::*;
pub use transform::Viewport;

// Re-export kurbo geometry so downstream crates share one set of point types
pub use kurbo::{Point, Rect, Size, Vec2};
