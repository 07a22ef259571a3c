use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::console_interface::parse_grid;
use crate::core::{Cell, Direction, EngineError, GPS_ROW_WEIGHT, Grid, MoveStats, Warehouse, BoundedGrid};

/// A parsed puzzle: the narrow starting board and the move list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleInput {
    pub grid: Grid,
    pub moves: Vec<Direction>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Narrow,
    Wide,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub variant: Variant,
    pub warehouse: Warehouse,
    pub stats: MoveStats,
    pub checksum: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleAnswers {
    pub narrow: RunReport,
    pub wide: RunReport,
}

/// Splits puzzle text into the board and the moves after the first blank line.
pub fn parse_puzzle(text: &str) -> Result<PuzzleInput, EngineError> {
    let text = text.trim();
    let mut board_lines = Vec::new();
    let mut lines = text.lines();
    for line in lines.by_ref() {
        if line.trim().is_empty() {
            break;
        }
        board_lines.push(line);
    }
    let move_text: Vec<&str> = lines.collect();

    let grid = parse_grid(&board_lines.join("\n"))?;
    let moves = parse_moves(&move_text.join("\n"))?;
    Ok(PuzzleInput { grid, moves })
}

/// Reads move glyphs, ignoring line breaks and other whitespace.
pub fn parse_moves(text: &str) -> Result<Vec<Direction>, EngineError> {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .map(Direction::from_symbol)
        .collect::<Result<Vec<_>, _>>()
        .inspect_err(|err| warn!(%err, "rejecting move list"))
}

/// Doubles every column: walls and floor double up, a box becomes `[]` and
/// the agent keeps the left half.
pub fn widen(grid: &Grid) -> Result<Grid, EngineError> {
    let rows = grid
        .rows()
        .map(|row| {
            let mut wide = Vec::with_capacity(row.len() * 2);
            for &cell in row {
                let pair = match cell {
                    Cell::Wall => [Cell::Wall, Cell::Wall],
                    Cell::Empty => [Cell::Empty, Cell::Empty],
                    Cell::Box => [Cell::BoxLeft, Cell::BoxRight],
                    Cell::Agent => [Cell::Agent, Cell::Empty],
                    Cell::BoxLeft | Cell::BoxRight => {
                        warn!("refusing to widen a board that already holds wide boxes");
                        return Err(EngineError::invalid("board is already wide"));
                    }
                };
                wide.extend(pair);
            }
            Ok(wide)
        })
        .collect::<Result<Vec<_>, EngineError>>()?;
    BoundedGrid::from_rows(rows)
}

/// Sums `100 * y + x` over every narrow box and the left half of every wide box.
pub fn gps_sum(grid: &Grid) -> i64 {
    grid.iter()
        .filter(|(_, c)| matches!(c, Cell::Box | Cell::BoxLeft))
        .map(|(pos, _)| GPS_ROW_WEIGHT * pos.y as i64 + pos.x as i64)
        .sum()
}

pub fn run_variant(input: &PuzzleInput, variant: Variant, moves: &[Direction]) -> Result<RunReport, EngineError> {
    let grid = match variant {
        Variant::Narrow => input.grid.clone(),
        Variant::Wide => widen(&input.grid)?,
    };
    let mut warehouse = Warehouse::new(grid)?;
    let stats = warehouse.run_moves(moves)?;
    let checksum = gps_sum(warehouse.grid());

    info!(
        ?variant,
        applied = stats.applied,
        blocked = stats.blocked,
        checksum,
        "simulation finished"
    );
    Ok(RunReport {
        variant,
        warehouse,
        stats,
        checksum,
    })
}

/// Runs the puzzle's own move list on the narrow board and on its widened copy.
pub fn solve(input: &PuzzleInput) -> Result<PuzzleAnswers, EngineError> {
    Ok(PuzzleAnswers {
        narrow: run_variant(input, Variant::Narrow, &input.moves)?,
        wide: run_variant(input, Variant::Wide, &input.moves)?,
    })
}
