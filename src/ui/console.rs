//! Interactive terminal session.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use colored::Colorize;
use parking_lot::Mutex;
use rustyline::error::ReadlineError;
use tokio::runtime::Handle;

use crate::error::Result;
use crate::shorten::ShortenService;

use super::clipboard::{copy_short_url, Clipboard};
use super::frontend::Frontend;
use super::notice::{Notice, NoticeKind};

/// What one prompt line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Shorten the given input, possibly empty
    Shorten(String),
    /// Copy the current output field
    Copy,
    /// Show the command summary
    Help,
    /// Leave the session
    Quit,
}

impl Command {
    /// Parse a prompt line. Anything that is not a meta-command is treated
    /// as input for the shortener, including an empty line.
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            ".copy" | "copy" => Command::Copy,
            ".help" | "help" => Command::Help,
            ".quit" | ".exit" | "quit" | "exit" => Command::Quit,
            other => Command::Shorten(other.to_string()),
        }
    }
}

/// What one readline outcome means for the session loop.
#[derive(Debug)]
enum Step {
    /// Execute a parsed command, then prompt again
    Run(Command),
    /// Ctrl-C: drop the current line and prompt again
    Cancel,
    /// End the session, with the error that caused it if any
    End(Option<ReadlineError>),
}

impl Step {
    fn of(readline: rustyline::Result<String>) -> Self {
        match readline {
            Ok(line) => Step::Run(Command::parse(&line)),
            Err(ReadlineError::Interrupted) => Step::Cancel,
            Err(ReadlineError::Eof) => Step::End(None),
            Err(err) => Step::End(Some(err)),
        }
    }
}

/// Terminal rendering of the interactive surface.
///
/// Notices print as styled lines, the output field holds the latest short
/// URL, and the controls flag dims the prompt while input is disabled. A
/// notice identical to the previous one is suppressed while that one is
/// still within its display window.
pub struct ConsoleFrontend {
    output: Mutex<String>,
    last_notice: Mutex<Option<(Notice, Instant)>>,
    notice_ttl: Duration,
    controls_enabled: AtomicBool,
}

impl ConsoleFrontend {
    pub fn new(notice_ttl: Duration) -> Self {
        Self {
            output: Mutex::new(String::new()),
            last_notice: Mutex::new(None),
            notice_ttl,
            controls_enabled: AtomicBool::new(true),
        }
    }

    /// The current output field contents.
    pub fn output(&self) -> String {
        self.output.lock().clone()
    }

    /// Whether the input controls are currently enabled.
    pub fn controls_enabled(&self) -> bool {
        self.controls_enabled.load(Ordering::Relaxed)
    }

    /// Decide whether a notice should render, recording it as the latest
    /// one if so.
    fn should_render(&self, notice: &Notice) -> bool {
        let now = Instant::now();
        let mut last = self.last_notice.lock();
        if let Some((previous, shown_at)) = last.as_ref() {
            if previous == notice && now.duration_since(*shown_at) < self.notice_ttl {
                return false;
            }
        }
        *last = Some((notice.clone(), now));
        true
    }
}

impl Frontend for ConsoleFrontend {
    fn notice(&self, notice: Notice) {
        if !self.should_render(&notice) {
            return;
        }
        let text = notice.to_string();
        match notice.kind() {
            NoticeKind::Success => println!("{}", text.green()),
            NoticeKind::Error => println!("{}", text.red()),
            NoticeKind::Info => println!("{}", text.yellow()),
        }
    }

    fn show_result(&self, short_url: &str) {
        let mut output = self.output.lock();
        output.clear();
        output.push_str(short_url);
        println!("  {} {}", "=>".dimmed(), short_url.bold());
    }

    fn set_busy(&self, busy: bool) {
        if busy {
            println!("{}", "Processing...".dimmed());
        }
    }

    fn set_controls_enabled(&self, enabled: bool) {
        self.controls_enabled.store(enabled, Ordering::Relaxed);
    }
}

/// The prompt loop driving the orchestrator.
///
/// Line input comes from `rustyline`, which owns the terminal while a read
/// is in progress: Ctrl-C surfaces as an interrupted read that cancels the
/// current line, and no read is left pending once the loop exits. While a
/// shorten call is in flight no signal handler is installed, so Ctrl-C
/// keeps its default process-terminating disposition. Network calls run on
/// the provided runtime handle.
pub struct Console {
    service: Arc<ShortenService>,
    frontend: Arc<ConsoleFrontend>,
    clipboard: Arc<dyn Clipboard>,
    handle: Handle,
}

impl Console {
    pub fn new(
        service: Arc<ShortenService>,
        frontend: Arc<ConsoleFrontend>,
        clipboard: Arc<dyn Clipboard>,
        handle: Handle,
    ) -> Self {
        Self {
            service,
            frontend,
            clipboard,
            handle,
        }
    }

    /// Run until quit or end of input.
    pub fn run(&self) -> Result<()> {
        self.print_welcome();

        let config = rustyline::Config::builder().auto_add_history(true).build();
        let mut editor = rustyline::DefaultEditor::with_config(config)?;

        loop {
            let prompt = if self.frontend.controls_enabled() {
                format!("{} ", "snaplink>".green().bold())
            } else {
                format!("{} ", "snaplink>".dimmed())
            };

            match Step::of(editor.readline(&prompt)) {
                Step::Run(Command::Quit) => break,
                Step::Run(Command::Help) => self.print_help(),
                Step::Run(Command::Copy) => copy_short_url(
                    self.clipboard.as_ref(),
                    self.frontend.as_ref(),
                    &self.frontend.output(),
                ),
                Step::Run(Command::Shorten(input)) => {
                    self.handle.block_on(self.service.submit(&input));
                }
                Step::Cancel => println!("^C"),
                Step::End(None) => break,
                Step::End(Some(err)) => {
                    eprintln!("Error reading line: {}", err);
                    break;
                }
            }
        }
        Ok(())
    }

    fn print_welcome(&self) {
        println!("{}", "snaplink".bold());
        println!(
            "Paste a URL to shorten it. Type {} for commands, {} to leave.",
            ".help".cyan(),
            ".quit".cyan()
        );
    }

    fn print_help(&self) {
        println!("  <url>    shorten the URL");
        println!("  .copy    copy the last short URL to the clipboard");
        println!("  .help    show this help");
        println!("  .quit    exit");
    }
}
