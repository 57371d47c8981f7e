use ark_map_shared::models::{GameMode, MapType};
use dioxus::prelude::*;

#[component]
pub fn GameModeSelector(selected: GameMode, on_change: EventHandler<GameMode>) -> Element {
    rsx! {
        div { class: "mode-selector",
            for mode in GameMode::ALL {
                button {
                    key: "{mode}",
                    class: if mode == selected { "mode-button active" } else { "mode-button" },
                    "data-theme": mode.theme_class(),
                    onclick: move |_| on_change.call(mode),
                    {mode.label()}
                }
            }
        }
    }
}

fn map_type_icon(map_type: MapType) -> &'static str {
    match map_type {
        MapType::Resource => "\u{1f4e6}",
        MapType::Spawn => "\u{1f5fa}\u{fe0f}",
    }
}

#[component]
pub fn MapTypeSelector(selected: MapType, on_change: EventHandler<MapType>) -> Element {
    rsx! {
        div { class: "map-type-selector",
            for map_type in MapType::ALL {
                button {
                    key: "{map_type}",
                    class: if map_type == selected { "map-type-button active" } else { "map-type-button" },
                    onclick: move |_| on_change.call(map_type),
                    span { class: "map-type-icon", {map_type_icon(map_type)} }
                    span { {map_type.label()} }
                }
            }
        }
    }
}
