use dioxus::prelude::*;

use crate::components::dismissible::{DismissLayer, Dismissible, PointerTarget};
use crate::components::dropdown_menu::{
    DropdownMenu, DropdownMenuContent, DropdownMenuItem, DropdownMenuTrigger,
};

#[derive(Props, Clone, PartialEq)]
pub struct ActionMenuProps<T: Clone + PartialEq + 'static> {
    /// Open state, shared with the caller so it can close the menu itself.
    pub state: Signal<Dismissible>,
    /// Menu entries as `(value, label)`, in display order.
    pub items: Vec<(T, String)>,
    pub on_select: EventHandler<T>,
    /// Accessible name of the trigger button.
    pub label: String,
    /// Work is in flight: the menu will not open and the trigger is marked busy.
    #[props(default = false)]
    pub busy: bool,
    /// Trigger content, usually an icon.
    pub children: Element,
}

/// Dropdown of row actions that closes on a pointer-down anywhere outside it.
///
/// While open, a `DismissLayer` sits under the menu; the menu itself is
/// raised above it.
#[component]
pub fn ActionMenu<T: Clone + PartialEq + 'static>(props: ActionMenuProps<T>) -> Element {
    let mut state = props.state;
    let open = state.read().is_open();
    let busy = props.busy;
    let on_select = props.on_select;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }

        if open {
            DismissLayer {
                on_dismiss: move |target: PointerTarget| {
                    state.write().pointer_down(target);
                },
            }
        }

        div { class: "action-menu", "data-open": "{open}",
            DropdownMenu {
                open: open && !busy,
                on_open_change: move |next: bool| {
                    if next && busy {
                        return;
                    }
                    state.write().set_open(next);
                },
                DropdownMenuTrigger {
                    aria_label: props.label.clone(),
                    aria_disabled: busy,
                    aria_busy: busy,
                    {props.children}
                }
                DropdownMenuContent {
                    for (index, (value, label)) in props.items.iter().cloned().enumerate() {
                        DropdownMenuItem::<T> {
                            key: "{index}",
                            value: value,
                            index: index,
                            on_select: move |picked: T| on_select.call(picked),
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
