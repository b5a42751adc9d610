use crate::components::CustomHeader;
use dioxus::prelude::*;

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let description = format!("Nothing lives at /{}.", route.join("/"));

    rsx! {
        main { class: "min-h-screen bg-gray-100 py-12",
            div { class: "max-w-6xl mx-auto px-6 space-y-8",
                CustomHeader { title: "Page Not Found", description }
                Link {
                    to: "/",
                    class: "inline-block bg-primary text-white font-bold py-3 px-6 rounded-lg transition-colors duration-200",
                    "Return to Home"
                }
            }
        }
    }
}
