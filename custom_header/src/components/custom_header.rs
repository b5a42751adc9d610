use crate::style::use_header_style;
use dioxus::prelude::*;

/// Icon shown on the left of every page header.
pub const HEADER_ICON: Asset = asset!("/assets/images/fancy_square.svg");
pub const HEADER_ICON_ALT: &str = "desktop icon";

#[derive(Props, PartialEq, Clone, Debug)]
pub struct HeaderProps {
    #[props(into)]
    pub title: String,
    #[props(into)]
    pub description: String,
}

/// Page header with the icon on the left and the title and description stacked on the right
#[component]
pub fn CustomHeader(props: HeaderProps) -> Element {
    let style = use_header_style();
    tracing::trace!(title = %props.title, "Rendering page header");

    rsx! {
        div { class: "{style.container}",
            div { class: "{style.icon_wrapper}",
                img { src: HEADER_ICON, alt: HEADER_ICON_ALT }
            }
            div {
                p { class: "{style.title}", "{props.title}" }
                p { class: "{style.description}", "{props.description}" }
            }
        }
    }
}
