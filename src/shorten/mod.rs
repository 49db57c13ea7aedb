//! Shorten orchestration and the external endpoint clients.

mod journal;
mod service;
mod tinyurl;

pub use journal::{Journal, JournalEntry, WebAppJournal};
pub use service::ShortenService;
pub use tinyurl::{ShortenApi, TinyUrlClient};
