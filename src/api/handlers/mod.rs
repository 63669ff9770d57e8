//! HTTP handlers module

mod devices;
mod services;
mod state;
mod status;

pub use self::devices::*;
pub use self::services::*;
pub use self::state::*;
pub use self::status::*;
