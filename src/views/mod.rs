//! The views module contains the page-level components of the app.

mod playground;
pub use playground::Playground;
