//! Core data structures: points, per-anchor state, segments and the editable path.

pub mod anchor;
pub mod macros;
pub mod path;
pub mod point;
pub mod segment;

pub use anchor::AnchorState;
pub use path::Path;
pub use point::Point;
pub use segment::BezierSegment;
