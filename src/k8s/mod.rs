pub mod namespaces;

pub use namespaces::*;
