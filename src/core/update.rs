use glam::IVec2;
use tracing::debug;

use crate::core::push_resolver::resolve_push;
use crate::core::{Direction, EngineError, GameChangeType, GameUpdate, PushPlan, UserAction, Warehouse};

/// Applies one action to the warehouse in place.
///
/// A blocked push leaves the warehouse untouched and is reported as
/// [`GameUpdate::Blocked`]; errors are reserved for contract violations.
pub fn step(warehouse: &mut Warehouse, action: UserAction) -> Result<GameUpdate, EngineError> {
    let direction = match action {
        UserAction::Move(d) => d,
    };

    let cells = match resolve_push(&warehouse.grid, warehouse.agent, direction)? {
        PushPlan::Resolved(cells) => cells,
        PushPlan::Blocked => return Ok(GameUpdate::Blocked),
    };

    commit(warehouse, &cells, direction)?;

    let box_cells = cells.len() - 1;
    debug!(x = warehouse.agent.x, y = warehouse.agent.y, box_cells, "push committed");
    Ok(GameUpdate::Moved(if box_cells == 0 {
        GameChangeType::PlayerMove
    } else {
        GameChangeType::PlayerAndBoxMove { cells: box_cells }
    }))
}

fn commit(warehouse: &mut Warehouse, cells: &[IVec2], direction: Direction) -> Result<(), EngineError> {
    let delta = direction.delta();
    warehouse.grid.apply_shift(cells, delta)?;
    warehouse.agent += delta;
    Ok(())
}
