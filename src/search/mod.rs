//! Pure state logic behind the searchable input: the option filter and the popover state machine.
//! Nothing in here touches Dioxus, so it can be exercised directly from tests.

pub mod filter;
pub mod popover;

pub use filter::filter_options;
pub use popover::{edit_value, on_interaction, select_option, Popover, PopoverEvent};
