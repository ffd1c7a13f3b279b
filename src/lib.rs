// Module definitions
pub mod constants;
pub mod data;
pub mod error;
pub mod modules;

// export the core data structures at crate level
pub use data::anchor::AnchorState;
pub use data::path::Path;
pub use data::point::Point;
pub use data::segment::BezierSegment;
pub use error::{PathError, PathResult};
pub use modules::road::{RoadMesh, RoadProfile, RoadSettings};
