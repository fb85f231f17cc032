//! Request and response models for the composite service.
//!
//! Response models stay lenient: fields the services may omit are `Option`
//! or defaulted, so a schema addition upstream does not break decoding.

mod auth;
mod brief;
mod classification;
mod common;
mod connection;
mod health;
mod message;
mod sync;
mod task;

pub use auth::*;
pub use brief::*;
pub use classification::*;
pub use common::*;
pub use connection::*;
pub use health::*;
pub use message::*;
pub use sync::*;
pub use task::*;
