//! # chatcast core
//!
//! Message and channel types for chatcast. Messages render themselves to a
//! single descriptive line; channels "send" them by writing a short transcript
//! to an injected sink. Nothing leaves the process.

pub mod channel;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod message;
pub mod timestamp;

pub use channel::{Channel, Platform};
pub use dispatch::{Dispatch, Dispatcher, Scenario};
pub use error::{ChatcastError, Result};
pub use message::{Message, MessageKind};
