//! Main module for the solace CLI application.
//!
//! Handles command parsing, configuration loading, one-time engine
//! initialization, and dispatch to the `ask`, `chat`, and `init`
//! subcommands.
//!
//! # Examples
//!
//! Answering a single message:
//!
//! ```sh
//! solace ask "i feel worried about tomorrow"
//! ```
//!
//! Initializing the configuration and starter dataset:
//!
//! ```sh
//! solace init
//! ```

use clap::Parser;
use once_cell::sync::OnceCell;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::{fs, process::ExitCode};
use tracing::{debug, info};

use solace::config::{self, SolaceConfig};
use solace::engine;
use solace::error::{EngineError, Result};
use solace::{commands, config_dir, DATASET_FILE};

static TRACING: OnceCell<()> = OnceCell::new();

/// Starter corpus written by `solace init` so the engine works out of the
/// box; replace it with a real dataset for anything beyond a smoke test.
const STARTER_DATASET: &str = "\
statement,status
i feel sad and alone,it is okay to feel this way. talking about it can help.
everything feels hopeless,those feelings are heavy. you are not alone in carrying them.
work stress keeps me awake at night,that sounds exhausting. winding down before bed can help.
i am worried about the future,uncertainty is hard. focusing on today can make it feel smaller.
i had a fight with my friend,conflicts with people we care about hurt. would you like to talk it through?
i cannot stop overthinking,it can help to write your thoughts down and set them aside.
i feel much better today,that is wonderful to hear. what helped you get there?
nobody understands me,feeling unheard is painful. i am listening.
";

fn main() -> ExitCode {
    TRACING.get_or_init(|| {
        tracing_subscriber::fmt::init();
    });

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Load configuration, parse arguments, and execute the chosen command.
///
/// # Errors
///
/// Returns an error if the configuration cannot be parsed, or if engine
/// initialization fails (missing or malformed dataset). Per-message errors
/// never surface here; the engine converts them to supportive fallbacks.
fn run() -> Result<()> {
    let config = load_or_default_config()?;
    let cli = commands::Cli::parse();

    match cli.command {
        commands::Commands::Ask { message, json } => {
            let engine = engine::shared_engine(&config)?;
            let message = message.unwrap_or_else(|| "how are you?".to_string());
            debug!("answering message: {message:?}");
            let reply = engine.process(&message);
            if json {
                println!("{}", serde_json::to_string(&reply)?);
            } else {
                println!("[{}] {}", reply.emotion, reply.response);
            }
        }
        commands::Commands::Chat => {
            let engine = engine::shared_engine(&config)?;
            chat_loop(engine)?;
        }
        commands::Commands::Init => {
            debug!("initializing configuration");
            init(&config)?;
        }
    }

    Ok(())
}

/// Read `config.yaml` from the config directory, falling back to defaults
/// when the file does not exist.
fn load_or_default_config() -> Result<SolaceConfig> {
    let path = config_path()?;
    if path.is_file() {
        debug!("loading config from: {}", path.display());
        config::load_config(path.to_string_lossy().as_ref())
    } else {
        debug!("no config file at {}, using defaults", path.display());
        Ok(SolaceConfig::default())
    }
}

fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.yaml"))
}

/// Line-oriented REPL over stdin. An empty line, `exit`, or EOF ends the
/// conversation.
fn chat_loop(engine: &engine::Engine) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("solace is listening. Press Enter on an empty line to leave.");
    loop {
        print!("you> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let message = line.trim();
        if message.is_empty() || message == "exit" || message == "quit" {
            break;
        }

        let reply = engine.process(message);
        println!("solace [{}]> {}", reply.emotion, reply.response);
    }
    println!("take care.");

    Ok(())
}

/// Create the config directory and write a default `config.yaml` and a
/// starter `dataset.csv` when they are absent. Existing files are left
/// untouched.
fn init(config: &SolaceConfig) -> Result<()> {
    let dir = config_dir()?;
    info!("creating config directory: {}", dir.display());
    fs::create_dir_all(&dir)?;

    let config_file = dir.join("config.yaml");
    if !config_file.is_file() {
        info!("writing default config: {}", config_file.display());
        let yaml =
            serde_yaml::to_string(config).map_err(|e| EngineError::Config(e.to_string()))?;
        fs::write(&config_file, yaml)?;
    }

    let dataset_file = dir.join(DATASET_FILE);
    if !dataset_file.is_file() {
        info!("writing starter dataset: {}", dataset_file.display());
        fs::write(&dataset_file, STARTER_DATASET)?;
    }

    println!("initialized {}", dir.display());
    Ok(())
}
