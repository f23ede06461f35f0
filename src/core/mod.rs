//! Core billing types, the cart total calculator, validation and numbering.
//!
//! This module holds everything a booking or tax bill needs; the optional
//! feature modules build on it.

mod builder;
mod calc;
mod config;
mod error;
pub mod lenient;
mod numbering;
mod session;
pub mod states;
pub mod text;
mod types;
mod validation;
mod words;

pub use builder::*;
pub use calc::*;
pub use config::*;
pub use error::*;
pub use lenient::LenientNumber;
pub use numbering::*;
pub use session::*;
pub use text::{capitalize, godown_short_code, to_slug};
pub use types::*;
pub use validation::*;
pub use words::*;
