//! Functionalities built on `Tensor`: element access and elementwise operators.

pub mod elem_get;

pub mod ewise;
