#![allow(missing_docs)]

use std::{error, fmt};

/// Why a timeline operation was rejected.
///
/// The silent manager methods discard this; the `try_` variants return it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineError {
    EmptyTimeline,
    FrameOutOfRange { frame: u32, limit: u32 },
}

impl fmt::Display for TimelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimelineError::EmptyTimeline => write!(f, "main timeline is empty"),
            TimelineError::FrameOutOfRange { frame, limit } => write!(
                f,
                "frame {} is out of range (next allocatable frame is {})",
                frame, limit
            ),
        }
    }
}

impl error::Error for TimelineError {}
