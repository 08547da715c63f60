// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{debug, error, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};

use smart_translator::app_config::{self, Config};
use smart_translator::presentation::{self, FormCommand, Renderer};
use smart_translator::{AudioArtifact, Controller, LanguageCatalog, SessionController, SessionState, Theme};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

/// CLI Wrapper for Theme to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliTheme {
    Light,
    Dark,
}

impl From<CliTheme> for Theme {
    fn from(cli_theme: CliTheme) -> Self {
        match cli_theme {
            CliTheme::Light => Theme::Light,
            CliTheme::Dark => Theme::Dark,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate text, or open the interactive form when no text is given (default command)
    Translate(TranslateArgs),

    /// List the supported languages
    Languages {
        /// Include the "Auto Detect" source-only entry
        #[arg(short, long)]
        all: bool,
    },

    /// Generate shell completions for smart-translator
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug, Clone)]
struct TranslateArgs {
    /// Text to translate; omit it to start the interactive form
    #[arg(value_name = "TEXT")]
    text: Option<String>,

    /// Source language name or code ('auto' to detect it)
    #[arg(short, long)]
    source_language: Option<String>,

    /// Target language name or code
    #[arg(short, long)]
    target_language: Option<String>,

    /// Colour theme
    #[arg(long, value_enum)]
    theme: Option<CliTheme>,

    /// Copy the synthesized audio to this path
    #[arg(long, value_name = "PATH")]
    save_audio: Option<PathBuf>,

    /// Skip speech synthesis
    #[arg(long)]
    no_audio: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// Smart Translator - translate text and listen to the result
#[derive(Parser, Debug)]
#[command(name = "smart-translator")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
#[command(about = "Translate text and synthesize the translation to speech")]
#[command(long_about = "Smart Translator translates text with Google Translate and reads the result aloud with Google TTS.

EXAMPLES:
    smart-translator \"Hello\"                       # English to Hindi (config defaults)
    smart-translator -s auto -t french \"Hola\"      # Detect the source language
    smart-translator -t de --save-audio hi.mp3 \"Hi\" # Keep a copy of the audio
    smart-translator                               # Interactive form
    smart-translator languages --all               # List languages
    smart-translator completions bash > st.bash    # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    translate: TranslateArgs,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji and colour for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("❌", "\x1B[1;31m"),
            Level::Warn => ("🚧", "\x1B[1;33m"),
            Level::Info => (" ", "\x1B[1;32m"),
            Level::Debug => ("🔍", "\x1B[1;36m"),
            Level::Trace => ("📋", "\x1B[1;35m"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (emoji, color) = Self::style_for_level(record.level());
            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {} {}\x1B[0m", color, now, emoji, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // The level is lowered or raised once the config is known
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "smart-translator", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Languages { all }) => {
            println!("{}", Renderer::new(Theme::Light, false).languages(all));
            Ok(())
        }
        Some(Commands::Translate(args)) => run(args).await,
        None => run(cli.translate).await,
    }
}

/// Map a user-typed language name or code to its catalog display name
fn resolve_language(query: &str) -> Result<&'static str> {
    LanguageCatalog::find_by_name(query)
        .map(|entry| entry.display_name)
        .ok_or_else(|| anyhow!("Unknown language '{}'. Run `smart-translator languages --all`.", query))
}

/// Load the config file and apply the command line overrides
fn load_config(options: &TranslateArgs) -> Result<Config> {
    if let Some(cmd_log_level) = &options.log_level {
        let level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    let mut config = Config::load_or_create(&options.config_path)?;

    if let Some(source) = &options.source_language {
        config.source_language = resolve_language(source)?.to_string();
    }
    if let Some(target) = &options.target_language {
        config.target_language = resolve_language(target)?.to_string();
    }
    if let Some(theme) = &options.theme {
        config.theme = theme.clone().into();
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    config.validate().context("Configuration validation failed")?;
    log::set_max_level(config.log_level.to_level_filter());

    Ok(config)
}

async fn run(options: TranslateArgs) -> Result<()> {
    let config = load_config(&options)?;
    let state = SessionState::new(&config.source_language, &config.target_language, config.theme)?;

    let mut controller = Controller::with_config(config);
    controller.set_speech_enabled(!options.no_audio);

    let color = std::io::stdout().is_terminal();
    let renderer = Renderer::new(state.theme, color);

    match options.text {
        Some(text) => translate_once(&controller, &state, &renderer, &text, options.save_audio.as_deref()).await,
        None => run_interactive(&controller, SessionController::new(state), renderer).await,
    }
}

async fn translate_once(
    controller: &Controller,
    state: &SessionState,
    renderer: &Renderer,
    text: &str,
    save_audio: Option<&std::path::Path>,
) -> Result<()> {
    let spinner = presentation::spinner("Translating...");
    let outcome = controller.submit(state, text).await;
    spinner.finish_and_clear();

    println!("{}", renderer.outcome(&outcome));

    if !outcome.is_success() {
        return Err(anyhow!("Nothing was translated"));
    }

    if let Some(destination) = save_audio {
        match &outcome.audio {
            Some(audio) => {
                controller.save_audio(audio, Some(destination))?;
            }
            None => warn!("No audio to save"),
        }
    }

    Ok(())
}

async fn run_interactive(controller: &Controller, mut session: SessionController, mut renderer: Renderer) -> Result<()> {
    println!("{}", renderer.header());
    println!("{}", renderer.help());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut last_audio: Option<AudioArtifact> = None;

    loop {
        session.begin_cycle();
        renderer.set_theme(session.state().theme);

        println!();
        println!("{}", renderer.selection(session.state()));
        print!("✍️  ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            break;
        };

        match FormCommand::parse(&line) {
            FormCommand::From(query) => {
                let result = resolve_language(&query)
                    .and_then(|name| session.select_source(name).map_err(anyhow::Error::from));
                if let Err(e) = result {
                    error!("{}", e);
                }
            }
            FormCommand::To(query) => {
                let result = resolve_language(&query)
                    .and_then(|name| session.select_target(name).map_err(anyhow::Error::from));
                if let Err(e) = result {
                    error!("{}", e);
                }
            }
            FormCommand::Swap => session.swap(),
            FormCommand::Theme => {
                let theme = session.toggle_theme();
                renderer.set_theme(theme);
                debug!("Theme set to {}", theme);
                println!("{}", renderer.header());
            }
            FormCommand::Languages => println!("{}", renderer.languages(true)),
            FormCommand::Save(path) => match &last_audio {
                Some(audio) => {
                    let destination = path.map(PathBuf::from);
                    if let Err(e) = controller.save_audio(audio, destination.as_deref()) {
                        error!("{}", e);
                    }
                }
                None => warn!("No audio to save yet"),
            },
            FormCommand::Help => println!("{}", renderer.help()),
            FormCommand::Quit => break,
            FormCommand::Unknown(command) => warn!("Unknown command '{}', try :help", command),
            FormCommand::Translate(text) => {
                let spinner = presentation::spinner("Translating...");
                let outcome = controller.submit(session.state(), &text).await;
                spinner.finish_and_clear();

                println!("{}", renderer.outcome(&outcome));
                if outcome.is_success() {
                    last_audio = outcome.audio;
                }
            }
        }
    }

    Ok(())
}
