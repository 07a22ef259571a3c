mod bounded_grid;
mod bounds;
mod consts;
mod error;
mod model_helpers;
mod models;
mod push_resolver;
mod random;
mod update;

pub use bounded_grid::BoundedGrid;
pub use bounds::BoundsOriginRoot;
pub use consts::*;
pub use error::EngineError;
pub use model_helpers::{census, find_agents};
pub use models::{Cell, Direction, GameChangeType, GameUpdate, Grid, MoveStats, PushPlan, UserAction, Warehouse};
pub use push_resolver::resolve_push;
pub use random::random_moves;
pub use update::step;
