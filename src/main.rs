// Warehouse robot simulator.
// Modes: solve a puzzle file, play it interactively with ratatui, or wander with random moves.
// Tiles: '#' wall, '.' floor, '@' robot, 'O' box, '[' ']' wide box halves.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use warehouse_push::console_interface::{ConsoleInput, cleanup_terminal, handle_input, render_game, render_grid_to_string, setup_terminal};
use warehouse_push::core::{
    DEFAULT_WANDER_MOVES, DEFAULT_WANDER_SEED, MoveStats, UserAction, Warehouse, random_moves, step,
};
use warehouse_push::json_export::get_json_data;
use warehouse_push::models::GameRenderState;
use warehouse_push::puzzle::{PuzzleInput, RunReport, Variant, gps_sum, parse_puzzle, run_variant, widen};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum VariantChoice {
    Narrow,
    Wide,
    Both,
}

impl VariantChoice {
    fn variants(self) -> &'static [Variant] {
        match self {
            VariantChoice::Narrow => &[Variant::Narrow],
            VariantChoice::Wide => &[Variant::Wide],
            VariantChoice::Both => &[Variant::Narrow, Variant::Wide],
        }
    }
}

#[derive(Parser)]
#[command(name = "warehouse_push")]
#[command(about = "Simulates a warehouse robot pushing boxes", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the puzzle's move list and print the GPS checksum
    Solve {
        /// Puzzle file: board, blank line, moves
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Which board to simulate
        #[arg(short, long, value_enum, default_value = "both")]
        variant: VariantChoice,

        /// Also write the final boards as JSON
        #[arg(long, value_name = "OUT")]
        json: Option<PathBuf>,
    },
    /// Drive the robot from the keyboard
    Play {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Play on the widened board
        #[arg(short, long)]
        wide: bool,
    },
    /// Replace the puzzle's moves with a seeded random walk
    Wander {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[arg(short = 'n', long, default_value_t = DEFAULT_WANDER_MOVES)]
        moves: usize,

        #[arg(short, long, default_value_t = DEFAULT_WANDER_SEED)]
        seed: u64,

        #[arg(short, long)]
        wide: bool,

        /// Print the final board
        #[arg(short, long)]
        print: bool,
    },
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn load_puzzle(path: &Path) -> Result<PuzzleInput> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_puzzle(&text).with_context(|| format!("parsing {}", path.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Solve { file, variant, json } => {
            init_tracing("info");
            run_solve(&file, variant, json.as_deref())
        }
        Command::Play { file, wide } => {
            // The terminal owns the screen; only log when asked to.
            init_tracing("off");
            let input = load_puzzle(&file)?;
            let grid = if wide { widen(&input.grid)? } else { input.grid.clone() };
            let warehouse = Warehouse::new(grid)?;
            let mut terminal = setup_terminal().map_err(|e| anyhow::anyhow!("{e}"))?;
            let result = run_interactive(warehouse, &input, wide, &mut terminal);
            cleanup_terminal().map_err(|e| anyhow::anyhow!("{e}"))?;
            result
        }
        Command::Wander { file, moves, seed, wide, print } => {
            init_tracing("info");
            let input = load_puzzle(&file)?;
            let variant = if wide { Variant::Wide } else { Variant::Narrow };
            let walk = random_moves(moves, seed);
            let report = run_variant(&input, variant, &walk)?;
            report.warehouse.check_invariants()?;
            print_report(&report, print);
            Ok(())
        }
    }
}

fn run_solve(file: &Path, choice: VariantChoice, json: Option<&Path>) -> Result<()> {
    let input = load_puzzle(file)?;
    info!(
        width = input.grid.width(),
        height = input.grid.height(),
        moves = input.moves.len(),
        "loaded puzzle"
    );

    let reports = choice
        .variants()
        .iter()
        .map(|&variant| run_variant(&input, variant, &input.moves))
        .collect::<Result<Vec<RunReport>, _>>()?;

    for report in &reports {
        print_report(report, false);
    }

    if let Some(out) = json {
        let refs: Vec<&RunReport> = reports.iter().collect();
        let json_data = get_json_data(&refs)?;
        std::fs::write(out, json_data).with_context(|| format!("writing {}", out.display()))?;
        info!(path = %out.display(), "final boards exported");
    }
    Ok(())
}

fn print_report(report: &RunReport, print_board: bool) {
    println!(
        "{:?}: {} (moves applied: {}, blocked: {})",
        report.variant, report.checksum, report.stats.applied, report.stats.blocked
    );
    if print_board {
        print!("{}", render_grid_to_string(report.warehouse.grid()));
    }
}

fn run_interactive(
    mut warehouse: Warehouse,
    input: &PuzzleInput,
    wide: bool,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    let title = if wide { "Warehouse (wide)" } else { "Warehouse" };
    let mut scripted = input.moves.iter().copied();
    let mut stats = MoveStats::default();
    let mut last_change = None;
    let mut error = None;

    loop {
        let to_render = GameRenderState {
            warehouse: &warehouse,
            title: title.to_string(),
            stats,
            checksum: gps_sum(warehouse.grid()),
            scripted_remaining: scripted.len(),
            error: error.clone(),
            last_change: last_change.clone(),
        };
        render_game(terminal, &to_render).map_err(|e| anyhow::anyhow!("{e}"))?;

        let action = match handle_input().map_err(|e| anyhow::anyhow!("{e}"))? {
            ConsoleInput::Quit => break,
            ConsoleInput::UserAction(action) => action,
            ConsoleInput::NextScripted => match scripted.next() {
                Some(direction) => UserAction::Move(direction),
                None => {
                    error = Some("no scripted moves left".to_string());
                    continue;
                }
            },
            ConsoleInput::Timeout | ConsoleInput::Unknown => continue,
        };

        // A contract violation ends the run; main restores the terminal.
        let update = step(&mut warehouse, action)?;
        stats.record(&update);
        last_change = Some(update);
        error = None;
    }

    Ok(())
}
