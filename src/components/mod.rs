//! The components module contains all shared components for our app. Components are the building blocks of dioxus apps.
//! `SearchableInput` is the reusable autocomplete field, `NamespacePicker` feeds it with namespaces from the cluster.

mod searchable_input;
pub use searchable_input::{SearchableInput, Theme};

mod namespace_picker;
pub use namespace_picker::NamespacePicker;
