mod compose;
mod dispatch;
mod io;

pub use dispatch::spawn_worker;
pub(crate) use dispatch::{send, send_compose_failed, send_log};
