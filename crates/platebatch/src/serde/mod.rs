#[cfg(feature = "plate")]
mod plate;

#[cfg(feature = "plate")]
pub use plate::*;
