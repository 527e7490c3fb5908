//! Graf Library
//!
//! Small graph analysis library: a weighted graph container plus textbook
//! traversal, shortest-path, cycle, and connectivity queries. The library
//! produces plain data (visitation sequences, distance maps, serializable
//! result structs) for a presentation layer to render.

pub mod error;
pub mod graph;
pub mod logging;
