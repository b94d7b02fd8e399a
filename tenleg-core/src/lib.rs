//! Core crate of tenleg.

#![warn(missing_docs)]
#![no_std]
extern crate alloc;
#[cfg(test)]
extern crate std;

// core concepts

pub mod leg;

pub mod repr;

pub mod mapper;

pub mod tensor;

// functionalities built on core concepts

pub mod utils;

// common

pub mod args;

pub mod error;

pub mod prelude {
    //! A prelude module re-exporting commonly used items.

    pub use crate::args::*;
    pub use crate::error::*;
    pub use crate::leg::*;
    pub use crate::mapper::*;
    pub use crate::repr::*;
    pub use crate::tensor::*;

    pub use crate::lm;
}
