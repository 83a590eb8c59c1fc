// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow, Context};
use log::{error, debug, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use scriptclip::app_config::{self, Config};
use scriptclip::{Controller, Mode, PageNumber, ScriptError, SystemClipboard};

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

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for scriptclip
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// scriptclip - copy a script page's dialogue to the clipboard
#[derive(Parser, Debug)]
#[command(name = "scriptclip")]
#[command(version)]
#[command(about = "Extract dialogue from a paged script and copy it to the clipboard")]
#[command(long_about = "scriptclip reads a script split into 【Page N】 blocks, pulls the 「quoted」 dialogue
out of each page, and copies one page at a time to the clipboard.

EXAMPLES:
    scriptclip koma.txt --page 1        # Copy page 1's dialogue
    scriptclip koma.txt --list          # Show every page with previews
    scriptclip completions zsh > _scriptclip

CONFIGURATION:
    Settings are read from --config, or from scriptclip/conf.json in the user
    config directory when present. Without a file the defaults are used
    (pbcopy with LANG=en_US.UTF-8, 30-character previews).")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Script file to read
    #[arg(value_name = "SCRIPT_FILE")]
    script_file: Option<PathBuf>,

    /// Page number to extract and copy
    #[arg(short, long)]
    page: Option<PageNumber>,

    /// List every page instead of copying
    #[arg(short, long)]
    list: bool,

    /// Configuration file path
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,
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

    // @returns: ANSI color for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
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
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {:<5} {}\x1B[0m",
                color, now, record.level(), record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> ExitCode {
    // Trace is the ceiling; the effective level is lowered once config is known
    if let Err(e) = CustomLogger::init(LevelFilter::Trace) {
        eprintln!("Failed to initialize logger: {}", e);
    }
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            if matches!(e.downcast_ref::<ScriptError>(), Some(ScriptError::MissingMode)) {
                let _ = CommandLineOptions::command().print_help();
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: CommandLineOptions) -> Result<()> {
    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "scriptclip", &mut std::io::stdout());
        return Ok(());
    }

    // Apply the command-line level early so config loading is visible at debug
    if let Some(level) = &cli.log_level {
        let level: app_config::LogLevel = level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    let mut config = Config::load(cli.config.as_deref())
        .context("Failed to load configuration")?;

    if let Some(level) = cli.log_level {
        config.log_level = level.into();
    }
    log::set_max_level(config.log_level.to_level_filter());

    config.validate()
        .context("Configuration validation failed")?;

    let script_file = cli.script_file.ok_or_else(|| {
        anyhow!("SCRIPT_FILE is required when no subcommand is specified")
    })?;

    debug!("Processing script {:?}", script_file);

    let controller = Controller::with_config(config);
    let mut clipboard = SystemClipboard::from_config(&controller.config().clipboard);
    let mode = Mode::from_flags(cli.list, cli.page);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    controller.run(&script_file, mode, &mut clipboard, &mut out)?;

    Ok(())
}
