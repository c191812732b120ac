//! Simple interactive CLI mode
//!
//! Text-based board without the TUI

use super::SessionOptions;
use super::board::BoardReport;
use super::export::export_view;
use crate::core::{CELL_COUNT, GRID_SIZE, index_of};
use crate::export::Exporter;
use crate::output::print_board;
use crate::presenter::RenderedBoard;
use colored::Colorize;
use std::io::{self, Write};

/// A parsed line of input
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Toggle(usize),
    New,
    Shuffle,
    Clear,
    Export,
    Show,
    Help,
    Quit,
}

impl Command {
    /// Parse `12`, `2 3` (row col, 1-based) or a command word
    fn parse(input: &str) -> Option<Self> {
        let input = input.trim().to_lowercase();
        match input.as_str() {
            "quit" | "q" | "exit" => return Some(Self::Quit),
            "new" | "n" => return Some(Self::New),
            "shuffle" | "s" => return Some(Self::Shuffle),
            "clear" | "c" => return Some(Self::Clear),
            "export" | "e" => return Some(Self::Export),
            "show" | "board" | "" => return Some(Self::Show),
            "help" | "h" | "?" => return Some(Self::Help),
            _ => {}
        }

        let numbers: Vec<usize> = input
            .split_whitespace()
            .map(str::parse::<usize>)
            .collect::<Result<_, _>>()
            .ok()?;
        match numbers.as_slice() {
            [index] if *index < CELL_COUNT => Some(Self::Toggle(*index)),
            [row, col] if (1..=GRID_SIZE).contains(row) && (1..=GRID_SIZE).contains(col) => {
                Some(Self::Toggle(index_of(row - 1, col - 1)))
            }
            _ => None,
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(options: &SessionOptions, exporter: &dyn Exporter) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Bingo - Interactive Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help();

    let mut view = RenderedBoard::new();
    let mut controller = options.open(&mut view);
    print_board(&BoardReport::new(&controller, &view));

    loop {
        let Some(command) = Command::parse(&get_user_input("Cell or command")?) else {
            println!("❌ Enter a cell index 0-24, 'row col' (1-5), or a command. 'help' lists them.\n");
            continue;
        };

        let wins_before = view.wins_signalled();
        match command {
            Command::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Command::Help => {
                print_help();
                continue;
            }
            Command::Show => {}
            Command::Toggle(index) => {
                if let Err(e) = controller.toggle(index, &mut view) {
                    println!("❌ {e}\n");
                    continue;
                }
            }
            Command::New => {
                controller.new_board(&mut view);
                println!("\n🔄 New board!\n");
            }
            Command::Shuffle => {
                controller.shuffle(&mut view);
                println!("\n🔀 Reloaded words ({}) and shuffled!\n", controller.pool().len());
            }
            Command::Clear => {
                controller.clear_saved(&mut view);
                println!("\n🧹 Cleared saved board, started fresh!\n");
            }
            Command::Export => {
                match export_view(controller.config(), &mut view, exporter) {
                    Ok(path) => println!("📄 Exported board to {}\n", path.display()),
                    Err(e) => println!("{}\n", format!("❌ Export failed: {e}").red().bold()),
                }
                continue;
            }
        }

        print_board(&BoardReport::new(&controller, &view));

        if view.wins_signalled() > wins_before {
            println!("\n{}", "═".repeat(70).bright_cyan());
            println!(
                "{}",
                "        🎉 🎊 ✨  B   I   N   G   O   !  ✨ 🎊 🎉        "
                    .bright_green()
                    .bold()
            );
            println!("{}", "═".repeat(70).bright_cyan());
            println!("  Keep playing, or type 'new' for a fresh board.\n");
            view.hide_overlay();
        }
    }
}

fn print_help() {
    println!("Mark cells by index (0-24, row-major) or by 'row col' (1-5 each).");
    println!("Marking the same cell again clears it.\n");
    println!("Commands: 'new' fresh board, 'shuffle' reload words and deal, 'clear' forget saved");
    println!("board, 'export' write the page document, 'show' redraw, 'quit' to exit\n");
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        // EOF behaves like quit
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
