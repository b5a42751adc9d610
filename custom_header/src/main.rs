use custom_header::views::{Home, NotFound};
use custom_header::HeaderStyle;
use dioxus::prelude::*;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.ico");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

/// `rel` and target of every link placed in the document head.
const HEAD_LINKS: [(&str, Asset); 2] = [("icon", FAVICON), ("stylesheet", TAILWIND_CSS)];

fn main() {
    dioxus::launch(App);
}

/// Root component: loads the header style once, shares it through context and renders the router.
#[component]
fn App() -> Element {
    use_context_provider(|| {
        tracing::info!("Starting custom header app");
        HeaderStyle::load().unwrap_or_else(|e| {
            tracing::warn!("{e}, falling back to the default header style");
            HeaderStyle::default()
        })
    });

    rsx! {
        for (rel, href) in HEAD_LINKS {
            document::Link { rel: "{rel}", href }
        }
        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn head_links_favicon_then_stylesheet() {
        let rels: Vec<&str> = HEAD_LINKS.iter().map(|(rel, _)| *rel).collect();

        assert_eq!(rels, vec!["icon", "stylesheet"]);
    }
}
