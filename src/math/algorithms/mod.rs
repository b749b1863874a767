// src/math/algorithms/mod.rs

pub mod filters;
pub mod kernel;

pub use self::filters::{convolve, maximum_filter, nonzero_mask};
pub use self::kernel::{KernelFalloff, WeightKernel};
