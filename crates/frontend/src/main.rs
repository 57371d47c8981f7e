mod components;
mod coords;
mod listener;
mod pages;

use ark_map_shared::catalog::Catalog;
use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use pages::explorer::Explorer;

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[route("/")]
    Explorer {},
}

const CSS: Asset = asset!("/assets/main.css");
const FAVICON: Asset = asset!("/assets/favicon.svg");

/// Load the built-in catalog. A broken catalog leaves the app usable with an
/// empty map instead of failing to start.
fn load_catalog() -> Catalog {
    Catalog::builtin().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to load built-in catalog, starting empty");
        Catalog::default()
    })
}

#[allow(non_snake_case)]
fn App() -> Element {
    use_context_provider(load_catalog);

    rsx! {
        document::Link { rel: "icon", r#type: "image/svg+xml", href: FAVICON }
        document::Stylesheet { href: CSS }
        Router::<Route> {}
    }
}

fn main() {
    let _ = dioxus::logger::init(Level::INFO);
    launch(App);
}
