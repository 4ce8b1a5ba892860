//! Research Voice - Entry Point
//!
//! Loads the source list and runs an interactive session where each typed
//! line is handled as a voice transcript.

use clap::Parser;
use research_voice::command::GenerateRequest;
use research_voice::core::config::SessionConfig;
use research_voice::core::error::Result;
use research_voice::session::{ConsoleSpeech, VoiceSession};
use research_voice::sources::SourceList;

use std::io::{self, Write};
use std::path::PathBuf;
use tokio::runtime::Runtime;
use tokio::sync::mpsc::{unbounded_channel, UnboundedSender};
use tracing_subscriber::EnvFilter;

type Session = VoiceSession<ConsoleSpeech, UnboundedSender<GenerateRequest>>;

/// Select research sources with natural-language commands
#[derive(Parser, Debug)]
#[command(name = "research-voice")]
#[command(about = "Select research sources with spoken or typed commands")]
struct Args {
    /// Session config file (TOML)
    #[arg(long, default_value = "research-voice.toml")]
    config: PathBuf,

    /// Source list (JSON array), overrides the config file
    #[arg(long)]
    sources: Option<PathBuf>,

    /// Do not pass replies to the speech output
    #[arg(long, short = 'q')]
    quiet: bool,

    /// Log filter directive, overrides the config file
    #[arg(long)]
    log: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = SessionConfig::load(&args.config)?;
    if let Some(sources) = args.sources {
        config.sources_path = sources;
    }
    if let Some(log) = args.log {
        config.log_filter = log;
    }
    if args.quiet {
        config.speak_responses = false;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Research Voice starting...");

    let rt = Runtime::new()?;
    let sources = SourceList::load(&config.sources_path)?;
    if sources.is_empty() {
        tracing::warn!("Source list {:?} is empty", config.sources_path);
    }

    let (report_tx, mut report_rx) = unbounded_channel::<GenerateRequest>();
    rt.spawn(async move {
        while let Some(request) = report_rx.recv().await {
            match serde_json::to_string_pretty(&request) {
                Ok(json) => println!("\n=== REPORT REQUEST ===\n{}\n", json),
                Err(e) => tracing::error!("Could not serialize report request: {}", e),
            }
        }
    });

    let session: Session = VoiceSession::new(sources, ConsoleSpeech::new(), report_tx, config);

    println!("\n=== RESEARCH VOICE ===");
    print_sources(&session);
    println!();
    println!("Type a command as you would say it, or:");
    println!("  :list           - Show sources and selection");
    println!("  :selection      - Show selected sources");
    println!("  :toggle <n>     - Select or deselect source n");
    println!("  :generate       - Generate the report from the selection");
    println!("  :reset          - Start over");
    println!("  :quit           - Exit");
    println!();
    println!("{}", session.state().message);

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();

        if input.is_empty() {
            continue;
        }

        if input == ":quit" || input == "quit" {
            break;
        }

        if input.starts_with(':') {
            handle_meta_command(&session, input);
            continue;
        }

        session.start_listening();
        if let Some(outcome) = rt.block_on(session.handle_transcript(input)) {
            if let Some(echo) = session.state().transcript {
                tracing::debug!("{}", echo);
            }
            if !outcome.spoken {
                println!("assistant> {}", outcome.message);
            }
        }
    }

    println!("\nGoodbye! {} source(s) selected.", session.selection().len());
    Ok(())
}

fn handle_meta_command(session: &Session, input: &str) {
    match input.split_whitespace().collect::<Vec<_>>().as_slice() {
        [":list"] => print_sources(session),
        [":selection"] => {
            let selection = session.selection();
            let selected = selection.filter_records(session.sources().records());
            if selected.is_empty() {
                println!("Nothing selected.");
            }
            for record in selected {
                println!("  - {}", record.title);
            }
        }
        [":toggle", n] => match n.parse::<usize>().ok().and_then(|n| session.sources().at_position(n)) {
            Some(record) => {
                let selected = session.toggle(&record.id);
                let verb = if selected { "Selected" } else { "Deselected" };
                println!("{}: \"{}\".", verb, record.title);
            }
            None => println!("Usage: :toggle <1..{}>", session.sources().len()),
        },
        [":generate"] => {
            if session.generate_now().is_none() {
                println!("Select at least one source first.");
            }
        }
        [":reset"] => {
            session.reset();
            println!("{}", session.state().message);
        }
        _ => println!("Unknown command. Available: :list, :selection, :toggle <n>, :generate, :reset, :quit"),
    }
}

fn print_sources(session: &Session) {
    let selection = session.selection();
    println!();
    println!("--- {} source(s), {} selected ---", session.sources().len(), selection.len());
    for (i, record) in session.sources().iter().enumerate() {
        let mark = if selection.contains(&record.id) { "x" } else { " " };
        println!("  [{}] {}. {}", mark, i + 1, record.title);
        if !record.authors.is_empty() {
            println!("         {}", record.authors.join(", "));
        }
    }
}
