mod bounded;
mod error;
#[cfg(feature = "http")]
mod http;
mod interface;
mod queue;

pub use bounded::*;
pub use error::*;
pub use interface::*;
pub use queue::*;
