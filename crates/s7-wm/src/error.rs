//! Error types for the window manager
//!
//! Every fallible operation returns [`WmResult`]. None of these errors are
//! fatal: the manager state is left unchanged when an operation fails.

use core::fmt;

use crate::window::WindowId;

/// Errors that can occur in window manager operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WmError {
    /// No window was ever issued with this id
    WindowNotFound(WindowId),

    /// The window this id referred to has been disposed
    StaleWindow(WindowId),

    /// The region allocator could not supply a region
    OutOfRegions,

    /// The configured window limit has been reached
    TooManyWindows {
        /// Configured maximum
        limit: usize,
    },

    /// A title longer than 255 bytes was supplied
    TitleTooLong {
        /// Length of the rejected title
        len: usize,
    },

    /// A Pascal string whose length byte exceeds the bytes that follow it
    MalformedTitle {
        /// Length announced by the first byte
        declared: usize,
        /// Bytes actually present after the length byte
        available: usize,
    },

    /// An operation was attempted that is not valid in the current state
    InvalidOperation {
        /// The operation that was attempted
        op: &'static str,
        /// Why the operation failed
        reason: &'static str,
    },
}

impl fmt::Display for WmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WindowNotFound(id) => write!(f, "window not found: {}", id),
            Self::StaleWindow(id) => write!(f, "window already disposed: {}", id),
            Self::OutOfRegions => write!(f, "out of regions"),
            Self::TooManyWindows { limit } => {
                write!(f, "too many windows (limit: {})", limit)
            }
            Self::TitleTooLong { len } => {
                write!(f, "title too long: {} bytes (max 255)", len)
            }
            Self::MalformedTitle {
                declared,
                available,
            } => write!(
                f,
                "malformed title: length byte says {} but {} bytes follow",
                declared, available
            ),
            Self::InvalidOperation { op, reason } => {
                write!(f, "invalid operation '{}': {}", op, reason)
            }
        }
    }
}

impl core::error::Error for WmError {}

/// Result type alias for window manager operations
pub type WmResult<T> = Result<T, WmError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::ToString;

    #[test]
    fn test_error_display() {
        let id = WindowId::new(3, 1);
        assert_eq!(
            WmError::WindowNotFound(id).to_string(),
            "window not found: window#3.1"
        );
        assert_eq!(
            WmError::StaleWindow(id).to_string(),
            "window already disposed: window#3.1"
        );
        assert_eq!(WmError::OutOfRegions.to_string(), "out of regions");
        assert_eq!(
            WmError::TooManyWindows { limit: 64 }.to_string(),
            "too many windows (limit: 64)"
        );
        assert_eq!(
            WmError::TitleTooLong { len: 300 }.to_string(),
            "title too long: 300 bytes (max 255)"
        );
        assert_eq!(
            WmError::MalformedTitle {
                declared: 12,
                available: 4
            }
            .to_string(),
            "malformed title: length byte says 12 but 4 bytes follow"
        );

        let err = WmError::InvalidOperation {
            op: "begin_update",
            reason: "update already in progress",
        };
        assert_eq!(
            err.to_string(),
            "invalid operation 'begin_update': update already in progress"
        );
    }

    #[test]
    fn test_error_equality() {
        let err1 = WmError::StaleWindow(WindowId::new(1, 0));
        let err2 = WmError::StaleWindow(WindowId::new(1, 0));
        let err3 = WmError::StaleWindow(WindowId::new(1, 1));

        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
        assert_ne!(err1, WmError::WindowNotFound(WindowId::new(1, 0)));
    }
}
