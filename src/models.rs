use crate::core::{GameUpdate, MoveStats, Warehouse};

pub struct GameRenderState<'a> {
    pub warehouse: &'a Warehouse,
    pub title: String,
    pub stats: MoveStats,
    pub checksum: i64,
    pub scripted_remaining: usize,
    pub error: Option<String>,
    pub last_change: Option<GameUpdate>,
}
