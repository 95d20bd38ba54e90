//! Mutable UI state owned by the bridge: decoration styling, hierarchy
//! forests, click disambiguation and progress rendering.

pub mod hierarchy;
pub mod highlight;
pub mod lens;
pub mod navigate;
pub mod progress;

pub use hierarchy::{HierarchyProvider, TreeNode};
pub use highlight::{classify, DecorationRegistry};
pub use navigate::{ClickAction, DoubleClickGate};
