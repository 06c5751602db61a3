use dioxus::prelude::*;

use crate::domain::FilterStatus;
use crate::ui::theme;

#[component]
pub fn StatusBadge(status: FilterStatus) -> Element {
    let color = theme::status_color(status);
    rsx! {
        span {
            class: "badge",
            style: "background-color: {color}",
            "{status.label()}"
        }
    }
}
