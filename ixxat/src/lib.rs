//! **`ixxat`**, decoding of the values returned by the IXXAT Virtual CAN Interface (VCI) driver.
//!
//! Nothing here talks to the driver. The native binding hands over raw return
//! words, controller status bytes and message records, and this crate turns
//! them into typed values:
//!
//! * [`StatusCode`] from a 32-bit return word,
//! * [`BusState`] from a controller status byte,
//! * [`Classification`] from a [`FrameRecord`].

mod bitrate;
pub use bitrate::*;
mod bus;
pub use bus::*;
mod config;
pub use config::*;
mod error;
pub use error::*;
mod filter;
pub use filter::*;
mod frame;
pub use frame::*;
mod status;
pub use status::*;

pub mod constant;
