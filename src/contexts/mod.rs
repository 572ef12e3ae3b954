// Context modules for application state management
pub mod client;
pub mod error;
pub mod interaction;

pub use client::*;
pub use error::*;
pub use interaction::*;
