#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
#[cfg(feature = "fetch")]
mod fetch;
#[cfg(feature = "plate")]
mod plate;
#[cfg(feature = "serde")]
mod serde;
mod to_u64;

pub use crate::error::*;
#[cfg_attr(docsrs, doc(cfg(feature = "fetch")))]
#[cfg(feature = "fetch")]
pub use crate::fetch::*;
#[cfg_attr(docsrs, doc(cfg(feature = "plate")))]
#[cfg(feature = "plate")]
pub use crate::plate::*;
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
#[cfg(feature = "serde")]
pub use crate::serde::*;
pub use crate::to_u64::*;
