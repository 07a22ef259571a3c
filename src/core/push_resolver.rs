use std::collections::HashSet;

use glam::IVec2;
use tracing::debug;

use crate::core::{Cell, Direction, EngineError, Grid, PushPlan};

/// Works out which cells have to move for the agent at `agent` to step in
/// `direction`, without touching the grid.
///
/// Exploration starts at the agent and follows the push direction. Every
/// occupied cell reached joins the push set and queues the cell beyond it;
/// on vertical pushes a wide box half also queues its partner, which is how
/// a single push fans out over a whole cluster of stacked wide boxes. Any
/// wall reached blocks the entire move.
pub fn resolve_push(grid: &Grid, agent: IVec2, direction: Direction) -> Result<PushPlan, EngineError> {
    match grid.get(&agent) {
        Ok(Cell::Agent) => {}
        Ok(other) => {
            return Err(EngineError::invalid(format!(
                "push must start from the agent, found {:?} at ({}, {})",
                other, agent.x, agent.y
            )));
        }
        Err(_) => {
            return Err(EngineError::invalid(format!(
                "push start ({}, {}) is outside the grid",
                agent.x, agent.y
            )));
        }
    }

    let delta = direction.delta();
    let mut to_visit = vec![agent];
    let mut to_push = Vec::new();
    let mut pushed = HashSet::new();

    while let Some(pos) = to_visit.pop() {
        let cell = *grid.get(&pos)?;
        match cell {
            Cell::Wall => {
                debug!(x = pos.x, y = pos.y, ?direction, "push blocked by wall");
                return Ok(PushPlan::Blocked);
            }
            Cell::Empty => continue,
            Cell::Agent | Cell::Box | Cell::BoxLeft | Cell::BoxRight => {}
        }

        // Stacked wide boxes reach the same half along two paths.
        if !pushed.insert(pos) {
            continue;
        }
        to_push.push(pos);
        to_visit.push(pos + delta);

        if direction.is_vertical() {
            if let Some(offset) = cell.partner_offset() {
                let partner = pos + offset;
                if !pushed.contains(&partner) {
                    to_visit.push(partner);
                }
            }
        }
    }

    Ok(PushPlan::Resolved(to_push))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::console_interface::parse_level;

    fn plan_for(level: &str, direction: Direction) -> PushPlan {
        let warehouse = parse_level(level).unwrap();
        resolve_push(warehouse.grid(), warehouse.agent(), direction).unwrap()
    }

    #[test]
    fn open_floor_moves_only_the_agent() {
        let plan = plan_for("#@.#", Direction::Right);
        assert_eq!(plan, PushPlan::Resolved(vec![IVec2::new(1, 0)]));
    }

    #[test]
    fn chain_is_listed_agent_first() {
        let plan = plan_for("#@OO.#", Direction::Right);
        assert_eq!(
            plan,
            PushPlan::Resolved(vec![IVec2::new(1, 0), IVec2::new(2, 0), IVec2::new(3, 0)])
        );
    }

    #[test]
    fn wall_behind_chain_blocks() {
        assert_eq!(plan_for("#@OO#", Direction::Right), PushPlan::Blocked);
        assert_eq!(plan_for("#@#", Direction::Right), PushPlan::Blocked);
    }

    #[test]
    fn stacked_wide_boxes_are_listed_once() {
        let level = r#"
######
#.@..#
#.[].#
#.[].#
#....#
######
"#;
        let PushPlan::Resolved(cells) = plan_for(level, Direction::Down) else {
            panic!("expected the stack to move");
        };
        let unique: HashSet<IVec2> = cells.iter().copied().collect();

        assert_eq!(cells.len(), 5);
        assert_eq!(unique.len(), cells.len());
        assert_eq!(cells[0], IVec2::new(2, 1));
    }

    #[test]
    fn start_must_be_the_agent() {
        let warehouse = parse_level("#@.#").unwrap();
        let grid = warehouse.grid();

        assert!(matches!(
            resolve_push(grid, IVec2::new(2, 0), Direction::Left),
            Err(EngineError::InvalidInput(_))
        ));
        assert!(matches!(
            resolve_push(grid, IVec2::new(9, 0), Direction::Left),
            Err(EngineError::InvalidInput(_))
        ));
    }

    #[test]
    fn unwalled_edge_is_out_of_bounds() {
        let warehouse = parse_level("@O").unwrap();
        let result = resolve_push(warehouse.grid(), warehouse.agent(), Direction::Right);
        assert!(matches!(result, Err(EngineError::OutOfBounds { .. })));
    }
}
