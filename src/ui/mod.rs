//! Terminal user interface and the rendering port the orchestrator drives.

mod clipboard;
mod console;
mod frontend;
mod notice;

pub use clipboard::{copy_short_url, Clipboard, SystemClipboard};
pub use console::{Command, Console, ConsoleFrontend};
pub use frontend::Frontend;
pub use notice::{Notice, NoticeKind};
