//! Export paths and resampled points to other formats
//!
//! # Available Export Formats
//!
//! - [SVG path data](svg_path/index.html) - `d` attribute strings for paths,
//!   segments and polylines

pub mod svg_path;
