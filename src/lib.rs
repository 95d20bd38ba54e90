//! cqview - client-side bridge between a cquery-style code-intelligence
//! server and an interactive editing surface.
//!
//! Module structure:
//! - ports: data contracts + the traits the hosting UI implements
//! - adapters: wire conversion and the request/response hub
//! - store: mutable UI state (decorations, hierarchy trees, progress)

pub mod adapters;
pub mod logging;
pub mod ports;
pub mod store;
