//! User-facing notices.

use std::fmt;
use std::time::Duration;

/// Severity of a notice, used for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Neutral information
    Info,
    /// A completed action
    Success,
    /// A failed or refused action
    Error,
}

/// Every transient message the UI can show.
///
/// Carrying the message as data keeps the orchestrator free of presentation
/// strings and lets tests assert on outcomes instead of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The input was empty after trimming
    EmptyInput,
    /// The input did not parse as an absolute URL
    InvalidUrl,
    /// The rate limiter rejected the attempt
    RateLimited {
        /// How long the caller should wait (one full window)
        wait: Duration,
    },
    /// The input controls are still disabled after a rejection
    ControlsDisabled {
        /// Time left until the controls come back
        remaining: Duration,
    },
    /// A short URL was produced
    Shortened,
    /// The shorten call failed
    ShortenFailed,
    /// Copy was requested with an empty output field
    NothingToCopy,
    /// The short URL reached the clipboard
    Copied,
    /// The clipboard write failed
    CopyFailed,
}

impl Notice {
    /// Severity for styling purposes.
    pub fn kind(&self) -> NoticeKind {
        match self {
            Notice::Shortened | Notice::Copied => NoticeKind::Success,
            Notice::NothingToCopy | Notice::ControlsDisabled { .. } => NoticeKind::Info,
            Notice::EmptyInput
            | Notice::InvalidUrl
            | Notice::RateLimited { .. }
            | Notice::ShortenFailed
            | Notice::CopyFailed => NoticeKind::Error,
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::EmptyInput => write!(f, "Please enter a valid URL."),
            Notice::InvalidUrl => write!(f, "Invalid URL format."),
            Notice::RateLimited { wait } => write!(
                f,
                "Rate limit reached. Please wait {} seconds before retrying.",
                wait.as_secs()
            ),
            Notice::ControlsDisabled { remaining } => write!(
                f,
                "Input is disabled for another {}s.",
                ceil_secs(*remaining)
            ),
            Notice::Shortened => write!(f, "URL shortened successfully!"),
            Notice::ShortenFailed => write!(f, "Error shortening URL. Please try again."),
            Notice::NothingToCopy => write!(f, "Nothing to copy!"),
            Notice::Copied => write!(f, "Link copied successfully!"),
            Notice::CopyFailed => write!(f, "Failed to copy link."),
        }
    }
}

/// Whole seconds, rounding any fraction up.
fn ceil_secs(duration: Duration) -> u64 {
    (duration.as_millis() as u64 + 999) / 1000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_expected_wording() {
        assert_eq!(Notice::EmptyInput.to_string(), "Please enter a valid URL.");
        assert_eq!(Notice::InvalidUrl.to_string(), "Invalid URL format.");
        assert_eq!(
            Notice::RateLimited {
                wait: Duration::from_millis(30_000)
            }
            .to_string(),
            "Rate limit reached. Please wait 30 seconds before retrying."
        );
        assert_eq!(
            Notice::Shortened.to_string(),
            "URL shortened successfully!"
        );
        assert_eq!(
            Notice::ShortenFailed.to_string(),
            "Error shortening URL. Please try again."
        );
        assert_eq!(Notice::NothingToCopy.to_string(), "Nothing to copy!");
        assert_eq!(Notice::Copied.to_string(), "Link copied successfully!");
        assert_eq!(Notice::CopyFailed.to_string(), "Failed to copy link.");
    }

    #[test]
    fn test_disable_notice_rounds_up() {
        let notice = Notice::ControlsDisabled {
            remaining: Duration::from_millis(1_200),
        };
        assert_eq!(notice.to_string(), "Input is disabled for another 2s.");
    }

    #[test]
    fn test_kinds_group_by_severity() {
        assert_eq!(Notice::Shortened.kind(), NoticeKind::Success);
        assert_eq!(Notice::Copied.kind(), NoticeKind::Success);
        assert_eq!(Notice::NothingToCopy.kind(), NoticeKind::Info);
        assert_eq!(Notice::InvalidUrl.kind(), NoticeKind::Error);
        assert_eq!(
            Notice::RateLimited {
                wait: Duration::ZERO
            }
            .kind(),
            NoticeKind::Error
        );
    }
}
