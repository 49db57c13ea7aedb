//! The rendering surface the orchestrator drives.

use super::notice::Notice;

/// Everything the orchestrator can do to the user interface.
///
/// Implementations decide how each signal renders. The orchestrator only
/// guarantees ordering within a single attempt: a busy marker is always
/// cleared on the same attempt that set it, and the output field changes
/// only on success.
pub trait Frontend: Send + Sync {
    /// Show a transient notice.
    fn notice(&self, notice: Notice);

    /// Replace the output field with the latest short URL.
    fn show_result(&self, short_url: &str);

    /// Mark the shorten action as in progress, or clear the marker.
    fn set_busy(&self, busy: bool);

    /// Enable or disable the input controls.
    fn set_controls_enabled(&self, enabled: bool);
}
