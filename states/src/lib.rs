mod command;
mod ctx;
mod runtime;
mod state;
mod time;
mod updater;

pub use command::{Command, CommandSnapshot};
pub use ctx::StateCtx;
pub use runtime::spawn;
pub use state::State;
pub use time::Time;
pub use updater::Updater;
