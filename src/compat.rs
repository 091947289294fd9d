/// `std`/`no_std` re-exports shared by every module
#[cfg(feature = "std")]
pub use std::{
    borrow::Cow,
    string::{String, ToString},
};

#[cfg(not(feature = "std"))]
pub use alloc::{
    borrow::Cow,
    string::{String, ToString},
};
