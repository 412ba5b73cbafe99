pub mod compose;
pub mod config;
pub mod consts;
pub mod error;
pub mod io;
pub mod layout;
pub mod progress;
