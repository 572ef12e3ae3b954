/// Open/closed state of the options popover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Popover {
    #[default]
    Closed,
    Open,
}

/// Interactions that move the popover between states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopoverEvent {
    /// The text field received focus
    Focus,
    /// The user edited the text
    Input,
    /// The user picked an option from the list
    Select,
    /// A pointer-down landed outside the component
    OutsideInteraction,
}

impl Popover {
    pub fn next(self, event: PopoverEvent) -> Popover {
        match event {
            PopoverEvent::Focus | PopoverEvent::Input => Popover::Open,
            PopoverEvent::Select | PopoverEvent::OutsideInteraction => Popover::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == Popover::Open
    }

    /// The list is only rendered while open and when there is something to show.
    pub fn shows_list(self, filtered: &[String]) -> bool {
        self.is_open() && !filtered.is_empty()
    }
}

/// Report an edit to the owner and open the list.
pub fn edit_value(text: String, on_change: impl FnOnce(String), popover: Popover) -> Popover {
    on_change(text);
    popover.next(PopoverEvent::Input)
}

/// Hand the chosen option to the owner verbatim and close the list.
pub fn select_option(option: String, on_change: impl FnOnce(String), popover: Popover) -> Popover {
    on_change(option);
    popover.next(PopoverEvent::Select)
}

/// Pointer-downs inside the component leave the popover alone.
pub fn on_interaction(inside: bool, popover: Popover) -> Popover {
    if inside {
        popover
    } else {
        popover.next(PopoverEvent::OutsideInteraction)
    }
}
