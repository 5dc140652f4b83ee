pub mod command;
pub mod hardware;
pub mod params;
pub mod state;

pub use command::*;
pub use hardware::*;
pub use params::*;
pub use state::*;
