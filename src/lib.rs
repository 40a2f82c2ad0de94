#![no_std]
#![deny(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(test)]
extern crate std;

mod driver;
mod errors;
mod pixel;
mod registry;
mod timing;

/// Platform capability traits and their stock implementations
pub mod platform;

pub use driver::Ws2812Driver;
pub use errors::Error;
pub use pixel::Pixel;
pub use registry::PinRegistry;
pub use timing::Timing;
