//! Pan / zoom / hover state of the map viewport.
//!
//! Everything here is pure state and math so the gesture handling can be unit
//! tested without a browser. The frontend owns one `ViewportState` per map
//! view and feeds it pointer and wheel events.

use serde::{Deserialize, Serialize};

use crate::filter::{category_style, visible_markers, VisibilitySet};
use crate::models::{Category, Marker};

pub const DEFAULT_MIN_ZOOM: f64 = 0.5;
pub const DEFAULT_MAX_ZOOM: f64 = 3.0;
/// Zoom change per pixel of vertical wheel delta.
pub const DEFAULT_WHEEL_SENSITIVITY: f64 = 0.001;
/// Zoom change per zoom-in / zoom-out button press.
pub const DEFAULT_ZOOM_STEP: f64 = 0.2;

/// How pointer movement during a drag maps to pan offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanScaling {
    /// Pan follows the pointer 1:1 in screen pixels, whatever the zoom.
    #[default]
    Screen,
    /// Pointer delta is divided by zoom, so content moves slower when zoomed in.
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewportConfig {
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub wheel_sensitivity: f64,
    pub zoom_step: f64,
    pub pan_scaling: PanScaling,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            wheel_sensitivity: DEFAULT_WHEEL_SENSITIVITY,
            zoom_step: DEFAULT_ZOOM_STEP,
            pan_scaling: PanScaling::Screen,
        }
    }
}

impl ViewportConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.min_zoom <= 0.0 {
            return Err(format!("minZoom must be positive, got {}", self.min_zoom));
        }
        if self.min_zoom > self.max_zoom {
            return Err(format!(
                "minZoom ({}) is greater than maxZoom ({})",
                self.min_zoom, self.max_zoom
            ));
        }
        if self.min_zoom > 1.0 || self.max_zoom < 1.0 {
            return Err(format!(
                "zoom range [{}, {}] must contain the reset zoom 1.0",
                self.min_zoom, self.max_zoom
            ));
        }
        if self.wheel_sensitivity <= 0.0 {
            return Err(format!(
                "wheelSensitivity must be positive, got {}",
                self.wheel_sensitivity
            ));
        }
        if self.zoom_step <= 0.0 {
            return Err(format!("zoomStep must be positive, got {}", self.zoom_step));
        }
        Ok(())
    }

    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min_zoom, self.max_zoom)
    }
}

/// Drag gesture state. The anchor only exists while a drag is in progress.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        /// Pointer position minus pan offset at gesture start.
        anchor: (f64, f64),
        /// Pointer position at the previous move (or gesture start).
        last: (f64, f64),
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewportState {
    zoom: f64,
    pan: (f64, f64),
    drag: DragState,
    hovered: Option<String>,
    config: ViewportConfig,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::new(ViewportConfig::default())
    }
}

impl ViewportState {
    pub fn new(config: ViewportConfig) -> Self {
        Self {
            zoom: config.clamp_zoom(1.0),
            pan: (0.0, 0.0),
            drag: DragState::Idle,
            hovered: None,
            config,
        }
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn pan(&self) -> (f64, f64) {
        self.pan
    }

    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// Anchor of the active drag, `None` when idle.
    pub fn drag_anchor(&self) -> Option<(f64, f64)> {
        match self.drag {
            DragState::Dragging { anchor, .. } => Some(anchor),
            DragState::Idle => None,
        }
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    pub fn is_hovered(&self, marker_id: &str) -> bool {
        self.hovered.as_deref() == Some(marker_id)
    }

    // --- zoom -------------------------------------------------------------

    fn set_zoom(&mut self, zoom: f64) {
        let new_zoom = self.config.clamp_zoom(zoom);
        if (new_zoom - self.zoom).abs() > 1e-12 {
            tracing::debug!(from = self.zoom, to = new_zoom, "zoom changed");
        }
        self.zoom = new_zoom;
    }

    /// Apply a vertical wheel delta in pixels. Negative delta (scroll up) zooms in.
    pub fn wheel(&mut self, delta_y: f64) {
        self.set_zoom(self.zoom - delta_y * self.config.wheel_sensitivity);
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + self.config.zoom_step);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - self.config.zoom_step);
    }

    /// Back to zoom 1 and no pan. Drag and hover state are left alone.
    pub fn reset(&mut self) {
        self.set_zoom(1.0);
        self.pan = (0.0, 0.0);
    }

    /// Zoom as a whole percentage for the readout overlay.
    pub fn zoom_percent(&self) -> i64 {
        (self.zoom * 100.0).round() as i64
    }

    // --- drag -------------------------------------------------------------

    /// Primary button pressed inside the viewport surface.
    pub fn pointer_down(&mut self, pointer: (f64, f64)) {
        let anchor = (pointer.0 - self.pan.0, pointer.1 - self.pan.1);
        tracing::debug!(x = pointer.0, y = pointer.1, "drag started");
        self.drag = DragState::Dragging {
            anchor,
            last: pointer,
        };
    }

    /// Pointer moved. Returns `true` if the pan offset changed.
    pub fn pointer_move(&mut self, pointer: (f64, f64)) -> bool {
        let DragState::Dragging { anchor, last } = self.drag else {
            return false;
        };
        self.pan = match self.config.pan_scaling {
            PanScaling::Screen => (pointer.0 - anchor.0, pointer.1 - anchor.1),
            // Incremental, so a zoom change mid-drag only affects later movement.
            PanScaling::Content => (
                self.pan.0 + (pointer.0 - last.0) / self.zoom,
                self.pan.1 + (pointer.1 - last.1) / self.zoom,
            ),
        };
        self.drag = DragState::Dragging {
            anchor,
            last: pointer,
        };
        true
    }

    /// Ends any drag in progress. Used for button release, pointer leaving
    /// the surface, and pointer-up anywhere in the document.
    pub fn end_drag(&mut self) {
        if self.is_dragging() {
            tracing::debug!(pan_x = self.pan.0, pan_y = self.pan.1, "drag ended");
        }
        self.drag = DragState::Idle;
    }

    // --- hover ------------------------------------------------------------

    pub fn hover_enter(&mut self, marker_id: &str) {
        self.hovered = Some(marker_id.to_string());
    }

    /// Clears hover only if it still belongs to `marker_id`, so a late leave
    /// from the previous marker can't clear the current one.
    pub fn hover_leave(&mut self, marker_id: &str) {
        if self.is_hovered(marker_id) {
            self.hovered = None;
        }
    }

    // --- rendering --------------------------------------------------------

    /// Inline style for the transformed content layer.
    pub fn transform_css(&self) -> String {
        format!(
            "transform: translate({}px, {}px) scale({}); transform-origin: center center;",
            self.pan.0, self.pan.1, self.zoom
        )
    }

    /// Everything the map view needs for one render. Takes the current
    /// dataset by reference, so replacing markers, categories or the visible
    /// set between renders never touches zoom, pan, drag or hover.
    pub fn frame(
        &self,
        markers: &[Marker],
        categories: &[Category],
        visible: &VisibilitySet,
    ) -> ViewportFrame {
        let pins: Vec<MarkerPinView> = visible_markers(markers, visible)
            .into_iter()
            .map(|m| {
                let style = category_style(categories, &m.category_key);
                MarkerPinView {
                    marker: m.clone(),
                    color: style.color.to_string(),
                    glyph: style.glyph.to_string(),
                    hovered: self.is_hovered(&m.id),
                }
            })
            .collect();

        ViewportFrame {
            pins,
            transform_css: self.transform_css(),
            zoom_percent: self.zoom_percent(),
            dragging: self.is_dragging(),
            at_min_zoom: self.zoom <= self.config.min_zoom,
            at_max_zoom: self.zoom >= self.config.max_zoom,
        }
    }
}

/// A visible marker with its resolved style.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerPinView {
    pub marker: Marker,
    pub color: String,
    pub glyph: String,
    pub hovered: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewportFrame {
    pub pins: Vec<MarkerPinView>,
    pub transform_css: String,
    pub zoom_percent: i64,
    pub dragging: bool,
    pub at_min_zoom: bool,
    pub at_max_zoom: bool,
}

impl ViewportFrame {
    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }
}
