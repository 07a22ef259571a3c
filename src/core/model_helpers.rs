use std::collections::HashMap;

use glam::IVec2;
use tracing::warn;

use crate::core::{step, Cell, Direction, EngineError, GameUpdate, Grid, MoveStats, UserAction, Warehouse};

impl Warehouse {
    /// Takes ownership of `grid`, locating its agent and checking that every
    /// wide box half has its partner.
    pub fn new(grid: Grid) -> Result<Warehouse, EngineError> {
        let agents = find_agents(&grid);
        let agent = match agents.as_slice() {
            [agent] => *agent,
            _ => {
                warn!(count = agents.len(), "grid must hold exactly one agent");
                return Err(EngineError::invalid(format!(
                    "expected exactly one agent, found {}",
                    agents.len()
                )));
            }
        };
        if let Some(pos) = find_broken_pair(&grid) {
            warn!(x = pos.x, y = pos.y, "wide box half without a partner");
            return Err(EngineError::invalid(format!(
                "wide box at ({}, {}) is missing its other half",
                pos.x, pos.y
            )));
        }

        Ok(Warehouse { grid, agent })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn agent(&self) -> IVec2 {
        self.agent
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    pub fn is_wide(&self) -> bool {
        self.grid.iter().any(|(_, c)| matches!(c, Cell::BoxLeft | Cell::BoxRight))
    }

    /// Attempts one move and returns where the agent ends up.
    pub fn apply_move(&mut self, direction: Direction) -> Result<IVec2, EngineError> {
        step(self, UserAction::Move(direction))?;
        Ok(self.agent)
    }

    /// Attempts every move in order, stopping at the first contract violation.
    pub fn run_moves(&mut self, moves: &[Direction]) -> Result<MoveStats, EngineError> {
        let mut stats = MoveStats::default();
        for &direction in moves {
            let update = step(self, UserAction::Move(direction))?;
            stats.record(&update);
        }
        Ok(stats)
    }

    pub fn census(&self) -> HashMap<Cell, usize> {
        census(&self.grid)
    }

    /// Re-derives the invariants the engine maintains between moves.
    pub fn check_invariants(&self) -> Result<(), EngineError> {
        let agents = find_agents(&self.grid);
        if agents != [self.agent] {
            return Err(EngineError::invalid(format!(
                "agent tracked at ({}, {}) but grid holds {:?}",
                self.agent.x, self.agent.y, agents
            )));
        }
        if let Some(pos) = find_broken_pair(&self.grid) {
            return Err(EngineError::invalid(format!(
                "wide box at ({}, {}) has been split",
                pos.x, pos.y
            )));
        }
        Ok(())
    }
}

impl GameUpdate {
    pub fn is_blocked(&self) -> bool {
        matches!(self, GameUpdate::Blocked)
    }
}

pub fn find_agents(grid: &Grid) -> Vec<IVec2> {
    grid.iter()
        .filter(|(_, c)| **c == Cell::Agent)
        .map(|(pos, _)| pos)
        .collect()
}

pub fn census(grid: &Grid) -> HashMap<Cell, usize> {
    let mut counts = HashMap::new();
    for (_, &c) in grid.iter() {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}

fn find_broken_pair(grid: &Grid) -> Option<IVec2> {
    grid.iter().find_map(|(pos, c)| {
        let (offset, partner) = match c {
            Cell::BoxLeft => (IVec2::X, Cell::BoxRight),
            Cell::BoxRight => (IVec2::NEG_X, Cell::BoxLeft),
            _ => return None,
        };
        match grid.get(&(pos + offset)) {
            Ok(&found) if found == partner => None,
            _ => Some(pos),
        }
    })
}
