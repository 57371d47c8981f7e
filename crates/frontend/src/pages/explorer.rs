use ark_map_shared::catalog::Catalog;
use ark_map_shared::filter::VisibilitySet;
use ark_map_shared::models::{GameMode, MapType};
use dioxus::prelude::*;

use crate::components::filter_sidebar::FilterSidebar;
use crate::components::map_view::MapView;
use crate::components::mode_selector::{GameModeSelector, MapTypeSelector};

#[component]
pub fn Explorer() -> Element {
    let catalog = use_context::<Catalog>();

    // Single source of truth for theme, dataset and visible categories
    let mut game_mode = use_signal(GameMode::default);
    let mut map_type = use_signal(MapType::default);
    let mut visible = use_signal(VisibilitySet::new);
    let mut sidebar_open = use_signal(|| false);

    let current_mode = *game_mode.read();
    let current_type = *map_type.read();
    let theme_class = current_mode.theme_class();
    let categories = catalog.categories(current_type).to_vec();
    let markers = catalog.markers(current_type).to_vec();
    let visible_keys = visible.read().clone();

    rsx! {
        div { class: "app {theme_class}",
            div { class: "header",
                div { class: "header-title",
                    div {
                        h1 { "ARK Interactive Map" }
                        p { class: "subtitle",
                            "Explore resources and creature spawns across the ARK universe"
                        }
                    }
                    button {
                        class: "menu-toggle",
                        title: "Show filters",
                        onclick: move |_| {
                            let next = !*sidebar_open.read();
                            sidebar_open.set(next);
                        },
                        "\u{2630}"
                    }
                }
                div { class: "selectors",
                    GameModeSelector {
                        selected: current_mode,
                        on_change: move |mode: GameMode| game_mode.set(mode),
                    }
                    MapTypeSelector {
                        selected: current_type,
                        on_change: move |kind: MapType| map_type.set(kind),
                    }
                }
            }

            div { class: "main",
                div { class: "map-area",
                    // Not keyed by dataset: a switch must keep zoom and pan.
                    MapView {
                        markers: markers,
                        categories: categories.clone(),
                        visible: visible_keys.clone(),
                        map_type: current_type,
                        config: catalog.viewport,
                    }
                }

                FilterSidebar {
                    map_type: current_type,
                    categories: categories,
                    visible: visible_keys,
                    open: *sidebar_open.read(),
                    on_toggle: move |key: String| visible.write().toggle(&key),
                    on_close: move |_| sidebar_open.set(false),
                }
            }
        }
    }
}
