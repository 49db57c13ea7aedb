//! Shorten orchestration: the disabled-controls gate, input validation,
//! rate-limit admission, the shorten call, and the detached journal write.

use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use tracing::{debug, trace, warn};
use url::Url;

use crate::ratelimit::{Clock, SlidingWindow};
use crate::ui::{Frontend, Notice};

use super::journal::{Journal, JournalEntry};
use super::tinyurl::ShortenApi;

/// Sequences a single shorten attempt end to end.
///
/// Takes `&self` throughout and may be invoked concurrently; every attempt
/// consults the rate limiter on its own merits. Each attempt leaves the
/// session idle again, and only a successful shorten changes the output
/// field.
pub struct ShortenService {
    limiter: SlidingWindow,
    clock: Arc<dyn Clock>,
    api: Arc<dyn ShortenApi>,
    journal: Option<Arc<dyn Journal>>,
    frontend: Arc<dyn Frontend>,
    /// Instant until which the input controls stay disabled after a
    /// rate-limit rejection
    disabled_until: Mutex<Option<Instant>>,
}

impl ShortenService {
    /// Create a new service around the given collaborators. A `None`
    /// journal disables transaction recording entirely.
    pub fn new(
        limiter: SlidingWindow,
        clock: Arc<dyn Clock>,
        api: Arc<dyn ShortenApi>,
        journal: Option<Arc<dyn Journal>>,
        frontend: Arc<dyn Frontend>,
    ) -> Self {
        Self {
            limiter,
            clock,
            api,
            journal,
            frontend,
            disabled_until: Mutex::new(None),
        }
    }

    /// Handle one user action on the raw input line.
    pub async fn submit(&self, raw_input: &str) {
        let now = self.clock.now();

        // The disabled gate comes first: a disabled control emits no
        // validation feedback.
        if let Some(remaining) = self.check_disabled(now) {
            self.frontend.notice(Notice::ControlsDisabled { remaining });
            return;
        }

        let input = raw_input.trim();
        if input.is_empty() {
            self.frontend.notice(Notice::EmptyInput);
            return;
        }
        if Url::parse(input).is_err() {
            debug!(input = %input, "Rejected input that is not an absolute URL");
            self.frontend.notice(Notice::InvalidUrl);
            return;
        }

        if !self.limiter.try_admit(now) {
            debug!("Rate limit reached, disabling input for one window");
            self.frontend.notice(Notice::RateLimited {
                wait: self.limiter.window(),
            });
            *self.disabled_until.lock() = Some(now + self.limiter.window());
            self.frontend.set_controls_enabled(false);
            return;
        }

        self.frontend.set_busy(true);
        match self.api.shorten(input).await {
            Ok(short_url) => {
                debug!(short_url = %short_url, "Shorten request succeeded");
                self.frontend.show_result(&short_url);
                self.frontend.notice(Notice::Shortened);
                self.record_transaction(input.to_string(), short_url);
            }
            Err(error) => {
                warn!(error = %error, "Shorten request failed");
                self.frontend.notice(Notice::ShortenFailed);
            }
        }
        self.frontend.set_busy(false);
    }

    /// Remaining disable time at `now`. Clears the gate and re-enables the
    /// controls once the window has elapsed.
    fn check_disabled(&self, now: Instant) -> Option<Duration> {
        let mut disabled_until = self.disabled_until.lock();
        match *disabled_until {
            Some(until) if now < until => Some(until - now),
            Some(_) => {
                *disabled_until = None;
                self.frontend.set_controls_enabled(true);
                None
            }
            None => None,
        }
    }

    /// Detach the journal write for a successful transaction. The task is
    /// never awaited and a failed delivery only leaves a diagnostic.
    fn record_transaction(&self, url_input: String, api_response: String) {
        let Some(journal) = self.journal.as_ref().map(Arc::clone) else {
            trace!("No journal configured, skipping transaction record");
            return;
        };

        let entry = JournalEntry::now(url_input, api_response);
        tokio::spawn(async move {
            if let Err(error) = journal.record(&entry).await {
                warn!(error = %error, "Transaction journal write failed");
            }
        });
    }
}
