use crate::components::CustomHeader;
use dioxus::prelude::*;

pub const HOME_TITLE: &str = "Welcome";
pub const HOME_DESCRIPTION: &str = "Get started today";

#[component]
pub fn Home() -> Element {
    rsx! {
        main { class: "min-h-screen bg-white py-12",
            div { class: "max-w-6xl mx-auto px-6",
                CustomHeader { title: HOME_TITLE, description: HOME_DESCRIPTION }
            }
        }
    }
}
