use dioxus::prelude::*;
use std::rc::Rc;

use crate::contexts::InteractionHub;
use crate::search::{edit_value, filter_options, on_interaction, select_option, Popover, PopoverEvent};

const SEARCHABLE_INPUT_CSS: Asset = asset!("/assets/styling/searchable_input.css");

/// Visual variant of the field. Cosmetic only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark_mode(is_dark_mode: bool) -> Self {
        if is_dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Theme::Light => "theme-light",
            Theme::Dark => "theme-dark",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct SearchableInputProps {
    value: ReadOnlySignal<String>,
    on_change: EventHandler<String>,
    options: ReadOnlySignal<Vec<String>>,
    placeholder: String,
    label: String,
    is_dark_mode: bool,
    icon: Option<Element>,
}

fn update(mut popover: Signal<Popover>, transition: impl FnOnce(Popover) -> Popover) {
    let current = *popover.peek();
    let next = transition(current);
    if next != current {
        popover.set(next);
    }
}

/// Controlled text field with a filtered dropdown of `options`.
///
/// The field never edits `value` itself, every edit and selection goes through `on_change`.
/// Requires an [`InteractionHub`] in context so pointer-downs elsewhere close the list.
#[component]
pub fn SearchableInput(props: SearchableInputProps) -> Element {
    let hub = use_context::<InteractionHub>();
    let popover = use_signal(Popover::default);

    let value = props.value;
    let options = props.options;
    let filtered = use_memo(move || filter_options(&value.read(), &options.read()));

    // Dropped with the scope on unmount, which deregisters the listener
    let subscription = use_hook(|| {
        Rc::new(hub.subscribe(move |inside| {
            update(popover, |current| on_interaction(inside, current))
        }))
    });
    let listener_id = subscription.id();

    let on_change = props.on_change;
    let theme = Theme::from_dark_mode(props.is_dark_mode);

    rsx! {
        document::Link { rel: "stylesheet", href: SEARCHABLE_INPUT_CSS }

        div {
            class: "searchable-input {theme.class()}",
            onmousedown: move |_| hub.claim(listener_id),
            label { class: "searchable-input-label", "{props.label}" }
            div { class: "searchable-input-field",
                input {
                    class: "searchable-input-control",
                    r#type: "text",
                    placeholder: "{props.placeholder}",
                    value: "{value}",
                    onfocus: move |_| update(popover, |current| current.next(PopoverEvent::Focus)),
                    oninput: move |evt| {
                        update(popover, |current| edit_value(evt.value(), |v| on_change.call(v), current))
                    }
                }
                {props.icon.clone().map(|icon| rsx! {
                    span { class: "searchable-input-icon", {icon} }
                })}
            }

            if popover().shows_list(&filtered.read()) {
                ul { class: "searchable-input-options",
                    {filtered().into_iter().enumerate().map(|(index, option)| {
                        let selected = option.clone();
                        rsx! {
                            li {
                                key: "{index}-{option}",
                                class: "searchable-input-option",
                                onclick: move |_| {
                                    update(popover, |current| {
                                        select_option(selected.clone(), |v| on_change.call(v), current)
                                    })
                                },
                                "{option}"
                            }
                        }
                    })}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_follows_dark_mode_flag() {
        assert_eq!(Theme::from_dark_mode(true), Theme::Dark);
        assert_eq!(Theme::from_dark_mode(false), Theme::Light);
        assert_eq!(Theme::Dark.class(), "theme-dark");
        assert_eq!(Theme::Light.class(), "theme-light");
    }
}
