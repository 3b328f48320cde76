#![cfg_attr(not(any(test, doctest, feature = "std")), no_std)]
#![doc = include_str!("../README.md")]

mod boxcar;
pub use boxcar::*;
mod bus;
pub use bus::*;
mod command;
pub use command::*;
mod delay;
pub use delay::*;
mod fir;
pub use fir::*;
mod taps;
pub use taps::*;

#[cfg(test)]
pub mod testing;
