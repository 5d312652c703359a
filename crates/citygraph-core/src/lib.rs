//! Citygraph Core Library
//!
//! Graph store, JSON loader and traversal engine (BFS, DFS, Dijkstra)
//! for weighted city distance tables.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod loader;
pub mod logging;
