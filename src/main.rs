use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use snaplink::config::SnaplinkConfig;
use snaplink::ratelimit::{SlidingWindow, SystemClock};
use snaplink::shorten::{Journal, ShortenService, TinyUrlClient, WebAppJournal};
use snaplink::ui::{Console, ConsoleFrontend, SystemClipboard};

#[derive(Parser, Debug)]
#[command(name = "snaplink", version, about = "Shorten URLs from your terminal")]
struct Args {
    /// Path to a YAML configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable debug-level diagnostics
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing; diagnostics go to stderr so they never interleave
    // with the prompt
    let default_directives = if args.verbose {
        "snaplink=debug"
    } else {
        "snaplink=info"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting Snaplink");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = match &args.config {
        Some(path) => SnaplinkConfig::from_file(path)?,
        None => SnaplinkConfig::default(),
    };
    info!(api_endpoint = %config.shortener.api_endpoint, "Configuration loaded");

    // The runtime carries the network calls and detached journal writes;
    // the prompt loop itself blocks on the main thread
    let runtime = tokio::runtime::Runtime::new()?;

    // One HTTP client shared by both endpoints, with no request timeouts
    let http = reqwest::Client::builder()
        .user_agent(concat!("snaplink/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let api = Arc::new(TinyUrlClient::new(
        http.clone(),
        config.shortener.api_endpoint.clone(),
    ));
    let journal = config
        .journal
        .endpoint
        .clone()
        .map(|endpoint| Arc::new(WebAppJournal::new(http, endpoint)) as Arc<dyn Journal>);
    if journal.is_none() {
        info!("No journal endpoint configured, transaction recording disabled");
    }

    let frontend = Arc::new(ConsoleFrontend::new(config.ui.notice_ttl()));
    let service = Arc::new(ShortenService::new(
        SlidingWindow::new(config.rate_limit.max_requests, config.rate_limit.window()),
        Arc::new(SystemClock::new()),
        api,
        journal,
        frontend.clone(),
    ));

    let console = Console::new(
        service,
        frontend,
        Arc::new(SystemClipboard::new()),
        runtime.handle().clone(),
    );
    console.run()?;

    info!("Snaplink stopped");
    Ok(())
}
