//! Rate limiting logic and time sources.

mod clock;
mod window;

pub use clock::{Clock, ManualClock, SystemClock};
pub use window::{SlidingWindow, DEFAULT_MAX_REQUESTS, DEFAULT_TIME_WINDOW};
