mod block;
mod code;
mod error;
mod sequence;

pub use block::*;
pub use code::*;
pub use error::*;
pub use sequence::*;
