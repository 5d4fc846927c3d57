//! 12306 left-ticket query.
//!
//! Looks up trains between two stations on a given day, keeps the
//! categories asked for, and lays them out as a terminal table.

pub mod cli;
pub mod domain;
pub mod query;
pub mod render;
pub mod runner;
pub mod stations;
pub mod trains;
