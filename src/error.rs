use thiserror::Error;

/// Errors raised by path queries and edits.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    #[error("point index {index} out of range for a path with {len} points")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("point index {0} is not an anchor")]
    NotAnAnchor(usize),
    #[error("segment index {index} out of range for a path with {count} segments")]
    SegmentOutOfRange { index: usize, count: usize },
    #[error("cannot append a segment to a closed path")]
    ClosedPath,
    #[error("spacing must be positive and finite, got {0}")]
    InvalidSpacing(f64),
    #[error("resolution must be positive and finite, got {0}")]
    InvalidResolution(f64),
    #[error("reference axis must be a finite non-zero vector")]
    InvalidReferenceAxis,
    #[error("corrupt topology: {points} points with {anchors} anchor records (closed: {closed})")]
    CorruptTopology {
        points: usize,
        anchors: usize,
        closed: bool,
    },
}

pub type PathResult<T> = Result<T, PathError>;
