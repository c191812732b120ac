//! Bingo Board - CLI
//!
//! 5×5 bingo board with TUI and CLI modes, saved between runs.

use anyhow::Result;
use bingo_board::{
    commands::{BoardAction, SessionOptions, run_board_action, run_export, run_simple},
    export::{DEFAULT_EXPORT_FILE, SvgExporter},
    logging::{setup_console_logging, setup_file_logging},
    output::{print_board, print_export_result},
    presenter::RenderedBoard,
    wordlists::WordSource,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "bingo_board",
    about = "Bingo board with a free center cell, saved between runs",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: 'embedded' (default, built-in phrases) or path to a file with one entry per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    words: String,

    /// Display configuration file; missing or invalid files fall back to defaults
    #[arg(short, long, global = true, default_value = "config.json")]
    config: PathBuf,

    /// Directory holding the saved board and the TUI log file
    #[arg(short, long, global = true, default_value = ".bingo")]
    data_dir: PathBuf,

    /// Log debug detail
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based play without TUI)
    Simple,

    /// Print the saved board
    Show,

    /// Deal a new board from the current word list
    New,

    /// Reload the word list and deal a new board
    Shuffle,

    /// Flip the mark on one cell
    Toggle {
        /// Cell index, 0-24 in row-major order
        index: usize,
    },

    /// Forget the saved board and deal a new one
    Clear,

    /// Write the board as a one-page document
    Export {
        /// Output file
        #[arg(short, long, default_value = DEFAULT_EXPORT_FILE)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let options = SessionOptions {
        config_path: cli.config,
        words: WordSource::from_arg(&cli.words),
        data_dir: cli.data_dir,
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // The TUI owns the terminal, so its logs go to a file
    let _guard = if matches!(command, Commands::Play) {
        Some(setup_file_logging(&options.data_dir, cli.verbose)?)
    } else {
        setup_console_logging(cli.verbose)?;
        None
    };

    match command {
        Commands::Play => run_play_command(&options),
        Commands::Simple => {
            run_simple(&options, &SvgExporter::default()).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Show => run_board_command(&options, BoardAction::Show),
        Commands::New => run_board_command(&options, BoardAction::New),
        Commands::Shuffle => run_board_command(&options, BoardAction::Shuffle),
        Commands::Toggle { index } => run_board_command(&options, BoardAction::Toggle(index)),
        Commands::Clear => run_board_command(&options, BoardAction::Clear),
        Commands::Export { output } => run_export_command(&options, output),
    }
}

fn run_board_command(options: &SessionOptions, action: BoardAction) -> Result<()> {
    let report = run_board_action(options, action)?;
    print_board(&report);
    if report.win_signalled {
        println!("🎉 That toggle completed a line!\n");
    }
    Ok(())
}

fn run_export_command(options: &SessionOptions, output: PathBuf) -> Result<()> {
    let exporter = SvgExporter::new(output);
    let path = run_export(options, &exporter)?;
    print_export_result(&path);
    Ok(())
}

fn run_play_command(options: &SessionOptions) -> Result<()> {
    use bingo_board::interactive::{App, run_tui};

    let exporter = SvgExporter::default();
    let mut view = RenderedBoard::new();
    let controller = options.open(&mut view);
    let app = App::new(controller, view, &exporter);
    run_tui(app)
}
