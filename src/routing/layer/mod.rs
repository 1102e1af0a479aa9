mod log;
mod error;

pub use self::log::{LogLayer, LogService};
pub use self::error::{ErrorLayer, ErrorService};
