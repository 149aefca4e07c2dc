pub mod cs;

pub use cs::{error, sort};
pub use error::{Error, Result};
