use std::cell::RefCell;
use std::rc::Rc;

use ark_map_shared::filter::VisibilitySet;
use ark_map_shared::models::{Category, MapType, Marker};
use ark_map_shared::viewport::{MarkerPinView, ViewportConfig, ViewportState};
use dioxus::html::input_data::MouseButton;
use dioxus::prelude::*;

use crate::coords;
use crate::listener::WindowListener;

// ---------------------------------------------------------------------------
// Marker pin
// ---------------------------------------------------------------------------

#[component]
fn MarkerPin(pin: MarkerPinView, view: Signal<ViewportState>) -> Element {
    let mut view = view;
    let MarkerPinView {
        marker,
        color,
        glyph,
        hovered,
    } = pin;
    let style = coords::marker_style(marker.position, &color, hovered);
    let enter_id = marker.id.clone();
    let leave_id = marker.id.clone();

    rsx! {
        div {
            class: if hovered { "map-marker hovered" } else { "map-marker" },
            style: "{style}",
            onmouseenter: move |_| view.write().hover_enter(&enter_id),
            onmouseleave: move |_| view.write().hover_leave(&leave_id),

            div { class: "marker-body",
                div { class: "marker-glow" }
                div { class: "marker-icon", "{glyph}" }
                if hovered {
                    div { class: "marker-tooltip", "{marker.label}" }
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Component
// ---------------------------------------------------------------------------

/// Pan/zoom surface showing the markers whose category is visible.
///
/// Zoom, pan, drag and hover live in a local `ViewportState` and survive prop
/// changes, so switching dataset or filters keeps the current view.
#[component]
pub fn MapView(
    markers: Vec<Marker>,
    categories: Vec<Category>,
    visible: VisibilitySet,
    map_type: MapType,
    config: ViewportConfig,
) -> Element {
    let mut view = use_signal(|| ViewportState::new(config));

    // A drag that starts here but is released outside the surface must still
    // end. The listener lives exactly as long as this component.
    let mouseup_listener = use_hook(move || {
        Rc::new(RefCell::new(WindowListener::new("mouseup", move |_| {
            if view.peek().is_dragging() {
                view.write().end_drag();
            }
        })))
    });
    use_drop(move || {
        mouseup_listener.borrow_mut().take();
    });

    // Recomputed every render; datasets are tens of markers.
    let frame = view.read().frame(&markers, &categories, &visible);
    let is_empty = frame.is_empty();
    let noun = map_type.noun();
    let transform_style = frame.transform_css;
    let zoom_percent = frame.zoom_percent;
    let at_max = frame.at_max_zoom;
    let at_min = frame.at_min_zoom;
    let surface_class = if frame.dragging {
        "map-surface dragging"
    } else {
        "map-surface"
    };

    rsx! {
        div { class: "map-frame",

            div { class: "zoom-controls",
                button {
                    title: "Zoom in",
                    disabled: at_max,
                    onclick: move |_| view.write().zoom_in(),
                    "+"
                }
                button {
                    title: "Zoom out",
                    disabled: at_min,
                    onclick: move |_| view.write().zoom_out(),
                    "\u{2212}"
                }
                button {
                    title: "Reset view",
                    onclick: move |_| view.write().reset(),
                    "\u{26f6}"
                }
            }

            div { class: "zoom-readout", "Zoom: {zoom_percent}%" }

            div {
                class: "{surface_class}",

                onwheel: move |evt: Event<WheelData>| {
                    evt.prevent_default();
                    let delta_y = coords::wheel_delta_y(evt.data().delta());
                    view.write().wheel(delta_y);
                },

                onmousedown: move |evt: Event<MouseData>| {
                    if evt.trigger_button() != Some(MouseButton::Primary) {
                        return;
                    }
                    let client = evt.client_coordinates();
                    view.write().pointer_down((client.x, client.y));
                },

                onmousemove: move |evt: Event<MouseData>| {
                    if !view.peek().is_dragging() {
                        return;
                    }
                    let client = evt.client_coordinates();
                    view.write().pointer_move((client.x, client.y));
                },

                onmouseup: move |_| view.write().end_drag(),
                onmouseleave: move |_| view.write().end_drag(),
                ondoubleclick: move |_| view.write().reset(),

                // Background and markers share one transform
                div {
                    class: "map-content",
                    style: "{transform_style}",

                    div { class: "map-background",
                        div { class: "map-grid" }
                    }

                    for pin in frame.pins {
                        MarkerPin {
                            key: "{pin.marker.id}",
                            pin: pin.clone(),
                            view: view,
                        }
                    }
                }
            }

            if is_empty {
                div { class: "map-empty",
                    div { class: "map-empty-icon", "\u{1f5fa}\u{fe0f}" }
                    div { class: "map-empty-title", "No markers to display" }
                    div { class: "map-empty-hint", "Select filters to see {noun} on the map" }
                }
            }
        }
    }
}
