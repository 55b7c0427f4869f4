#[cfg(feature = "parking-lot")]
pub(super) use parking_lot::{Mutex, MutexGuard};
#[cfg(not(feature = "parking-lot"))]
pub(super) use std::sync::{Mutex, MutexGuard, PoisonError};
