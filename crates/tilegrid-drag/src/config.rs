#![forbid(unsafe_code)]

//! Drag controller configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Tunables for [`crate::DragController`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    /// Displacement (pixels, per axis) a move must exceed before the session
    /// counts as a drag rather than a click.
    pub threshold: f64,
    /// Ignore move/release/cancel from any stream other than the one that
    /// started the session.
    pub strict_pointer_match: bool,
}

impl DragConfig {
    pub const DEFAULT_THRESHOLD: f64 = 3.0;

    /// Set the drag threshold.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Enable or disable the stream identifier check.
    #[must_use]
    pub fn with_strict_pointer_match(mut self, strict: bool) -> Self {
        self.strict_pointer_match = strict;
        self
    }

    /// Check that the threshold is a finite, non-negative length.
    pub fn validate(&self) -> Result<(), DragError> {
        if self.threshold.is_finite() && self.threshold >= 0.0 {
            Ok(())
        } else {
            Err(DragError::InvalidThreshold {
                threshold: self.threshold,
            })
        }
    }
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            threshold: Self::DEFAULT_THRESHOLD,
            strict_pointer_match: true,
        }
    }
}

/// Drag controller construction errors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragError {
    InvalidThreshold { threshold: f64 },
}

impl fmt::Display for DragError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidThreshold { threshold } => {
                write!(f, "drag threshold must be finite and >= 0 (got {threshold})")
            }
        }
    }
}

impl std::error::Error for DragError {}
