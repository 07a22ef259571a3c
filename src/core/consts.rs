/// Weight applied to the row index when summing box coordinates.
pub const GPS_ROW_WEIGHT: i64 = 100;

/// How long the interactive console waits for a key before redrawing.
pub const INPUT_POLL_MILLIS: u64 = 50;

pub const DEFAULT_WANDER_MOVES: usize = 1_000;
pub const DEFAULT_WANDER_SEED: u64 = 15;
