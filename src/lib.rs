//! Warehouse robot push simulation.
//!
//! A single agent walks a grid of walls, floor and boxes, shoving whole
//! chains of boxes ahead of it. Boxes are either one cell (`O`) or two cells
//! wide (`[]`); a vertical push on a wide box can drag an entire cluster.

pub mod console_interface;
pub mod core;
pub mod json_export;
pub mod models;
pub mod puzzle;

#[cfg(test)]
mod test;
