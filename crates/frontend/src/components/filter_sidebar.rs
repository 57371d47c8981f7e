use ark_map_shared::filter::{clear_all_toggles, search_categories, select_all_toggles, VisibilitySet};
use ark_map_shared::models::{Category, MapType};
use dioxus::prelude::*;

use crate::coords;

#[component]
fn FilterItem(category: Category, visible: bool, on_toggle: EventHandler<String>) -> Element {
    let key = category.key.clone();
    let style = if visible {
        format!(
            "border-color: {}; box-shadow: 0 0 20px {};",
            category.color,
            coords::tint(&category.color, 0x40)
        )
    } else {
        String::new()
    };
    let icon_style = format!("background-color: {};", coords::tint(&category.color, 0x20));
    let check_style = format!("background-color: {0}; border-color: {0};", category.color);

    rsx! {
        button {
            class: if visible { "filter-item selected" } else { "filter-item" },
            style: "{style}",
            onclick: move |_| on_toggle.call(key.clone()),

            div { class: "filter-icon", style: "{icon_style}", "{category.glyph}" }
            div { class: "filter-text",
                div { class: "filter-name", "{category.display_name}" }
                div { class: "filter-status", if visible { "Visible" } else { "Hidden" } }
            }
            div {
                class: if visible { "filter-check shown" } else { "filter-check" },
                style: "{check_style}",
                "\u{2713}"
            }
        }
    }
}

/// Searchable category checklist. Visibility is owned by the parent; every
/// change is reported as one `on_toggle` call per key.
#[component]
pub fn FilterSidebar(
    map_type: MapType,
    categories: Vec<Category>,
    visible: VisibilitySet,
    open: bool,
    on_toggle: EventHandler<String>,
    on_close: EventHandler<()>,
) -> Element {
    let mut search = use_signal(String::new);
    let mut expanded = use_signal(|| true);

    let query = search.read().clone();
    let entries: Vec<(Category, bool)> = search_categories(&categories, &query, &visible)
        .into_iter()
        .map(|e| (e.category.clone(), e.visible))
        .collect();
    let no_results = entries.is_empty();
    let visible_count = visible.count_visible(&categories);
    let total = categories.len();
    let is_expanded = *expanded.read();

    // Bulk actions operate on the full list, not the search results.
    let to_select = select_all_toggles(&categories, &visible);
    let to_clear = clear_all_toggles(&categories, &visible);

    rsx! {
        div {
            class: if open { "sidebar-backdrop visible" } else { "sidebar-backdrop" },
            onclick: move |_| on_close.call(()),
        }

        div { class: if open { "filter-sidebar open" } else { "filter-sidebar" },
            div { class: "sidebar-header",
                h2 { "Filters" }
                button {
                    class: "sidebar-close",
                    title: "Close filters",
                    onclick: move |_| on_close.call(()),
                    "\u{2715}"
                }
            }

            div { class: "sidebar-body",
                input {
                    class: "filter-search",
                    r#type: "search",
                    placeholder: "Search...",
                    value: "{query}",
                    oninput: move |evt: Event<FormData>| {
                        search.set(evt.value().to_string());
                    },
                }

                button {
                    class: "section-toggle",
                    onclick: move |_| {
                        let next = !*expanded.read();
                        expanded.set(next);
                    },
                    span { {map_type.section_title()} }
                    span { class: "filter-count", "{visible_count} / {total} visible" }
                    span { class: if is_expanded { "chevron open" } else { "chevron" }, "\u{25be}" }
                }

                if is_expanded {
                    div { class: "filter-list",
                        if no_results {
                            div { class: "filter-empty", "No categories match \"{query}\"" }
                        }
                        for (category, is_visible) in entries {
                            FilterItem {
                                key: "{category.key}",
                                category: category.clone(),
                                visible: is_visible,
                                on_toggle: on_toggle,
                            }
                        }
                    }
                }

                div { class: "bulk-actions",
                    button {
                        class: "select-all",
                        onclick: move |_| {
                            for key in &to_select {
                                on_toggle.call(key.clone());
                            }
                        },
                        "Select All"
                    }
                    button {
                        class: "clear-all secondary",
                        onclick: move |_| {
                            for key in &to_clear {
                                on_toggle.call(key.clone());
                            }
                        },
                        "Clear All"
                    }
                }
            }
        }
    }
}
