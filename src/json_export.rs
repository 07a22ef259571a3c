use serde::{Deserialize, Serialize};

use crate::console_interface::render_grid_to_string;
use crate::core::MoveStats;
use crate::puzzle::{RunReport, Variant};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GridSnapshot {
    pub variant: Variant,
    pub width: i32,
    pub height: i32,
    pub agent: [i32; 2],
    pub rows: Vec<String>,
    pub checksum: i64,
    pub stats: MoveStats,
}

impl GridSnapshot {
    pub fn from_report(report: &RunReport) -> GridSnapshot {
        let grid = report.warehouse.grid();
        let agent = report.warehouse.agent();
        GridSnapshot {
            variant: report.variant,
            width: grid.width(),
            height: grid.height(),
            agent: [agent.x, agent.y],
            rows: render_grid_to_string(grid).lines().map(String::from).collect(),
            checksum: report.checksum,
            stats: report.stats,
        }
    }
}

pub fn get_json_data(reports: &[&RunReport]) -> Result<String, serde_json::Error> {
    let snapshots: Vec<GridSnapshot> = reports.iter().map(|report| GridSnapshot::from_report(report)).collect();
    serde_json::to_string_pretty(&snapshots)
}
