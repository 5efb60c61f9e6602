//! adminui
//!
//! Terminal table for browsing and curating a list of user records fetched
//! once from an HTTP endpoint (or a local JSON file).
//!
//! The crate follows a pure core / impure shell split: `model` and `state`
//! hold data and transitions with no I/O, while `source`, `logging` and
//! `view` talk to the network, disk and terminal.

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;
