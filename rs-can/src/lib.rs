//! **`rs-can`**, shared primitives of the unified CAN drivers, just like [python-can](https://github.com/hardbyte/python-can)

mod constant;
pub use constant::*;

pub mod error;
pub use error::CanError;
