//! State Management
//!
//! Global application state and the browser session cache.

pub mod global;
pub mod storage;

pub use global::GlobalState;
