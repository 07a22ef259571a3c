use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::core::bounded_grid::BoundedGrid;
use crate::core::EngineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Wall,
    Empty,
    Agent,
    Box,
    BoxLeft,
    BoxRight,
}

impl Cell {
    pub fn from_symbol(symbol: char) -> Option<Cell> {
        match symbol {
            '#' => Some(Cell::Wall),
            '.' => Some(Cell::Empty),
            '@' => Some(Cell::Agent),
            'O' => Some(Cell::Box),
            '[' => Some(Cell::BoxLeft),
            ']' => Some(Cell::BoxRight),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Empty => '.',
            Cell::Agent => '@',
            Cell::Box => 'O',
            Cell::BoxLeft => '[',
            Cell::BoxRight => ']',
        }
    }

    pub fn is_box(&self) -> bool {
        matches!(self, Cell::Box | Cell::BoxLeft | Cell::BoxRight)
    }

    /// Offset from a wide box half to its partner, if this is one.
    pub fn partner_offset(&self) -> Option<IVec2> {
        match self {
            Cell::BoxLeft => Some(IVec2::X),
            Cell::BoxRight => Some(IVec2::NEG_X),
            _ => None,
        }
    }
}

pub type Grid = BoundedGrid<Cell>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn delta(&self) -> IVec2 {
        match self {
            Direction::Up => IVec2::NEG_Y,
            Direction::Down => IVec2::Y,
            Direction::Left => IVec2::NEG_X,
            Direction::Right => IVec2::X,
        }
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    pub fn from_symbol(symbol: char) -> Result<Direction, EngineError> {
        match symbol {
            '^' => Ok(Direction::Up),
            'v' => Ok(Direction::Down),
            '<' => Ok(Direction::Left),
            '>' => Ok(Direction::Right),
            other => Err(EngineError::invalid(format!(
                "unrecognized move symbol {:?}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserAction {
    Move(Direction),
}

/// A grid together with the cached position of its single agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warehouse {
    pub(crate) grid: Grid,
    pub(crate) agent: IVec2,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushPlan {
    /// Every cell that shifts, agent first, each listed once.
    Resolved(Vec<IVec2>),
    Blocked,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameUpdate {
    Moved(GameChangeType),
    Blocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameChangeType {
    PlayerMove,
    PlayerAndBoxMove { cells: usize },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveStats {
    pub applied: usize,
    pub blocked: usize,
    pub box_cells_moved: usize,
}

impl MoveStats {
    pub fn record(&mut self, update: &GameUpdate) {
        match update {
            GameUpdate::Moved(GameChangeType::PlayerMove) => self.applied += 1,
            GameUpdate::Moved(GameChangeType::PlayerAndBoxMove { cells }) => {
                self.applied += 1;
                self.box_cells_moved += cells;
            }
            GameUpdate::Blocked => self.blocked += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.applied + self.blocked
    }
}
