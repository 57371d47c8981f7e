use ark_map_shared::models::Position;
use dioxus::html::geometry::WheelDelta;

const LINE_HEIGHT_PX: f64 = 40.0;
const PAGE_HEIGHT_PX: f64 = 400.0;

/// Convert a wheel delta (pixels / lines / pages) to a uniform pixel-like value.
pub fn wheel_delta_y(delta: WheelDelta) -> f64 {
    match delta {
        WheelDelta::Pixels(d) => d.y,
        WheelDelta::Lines(d) => d.y * LINE_HEIGHT_PX,
        WheelDelta::Pages(d) => d.y * PAGE_HEIGHT_PX,
    }
}

/// Append a two-digit alpha to a `#rrggbb` color. Other color syntaxes are
/// returned unchanged.
pub fn tint(color: &str, alpha: u8) -> String {
    let is_rrggbb = color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit());
    if is_rrggbb {
        format!("{color}{alpha:02x}")
    } else {
        color.to_string()
    }
}

/// Inline style placing a marker at its percentage position inside the
/// untransformed content layer. Hovered markers stack above the rest.
pub fn marker_style(position: Position, color: &str, hovered: bool) -> String {
    let z = if hovered { 100 } else { 10 };
    format!(
        "left: {}%; top: {}%; z-index: {z}; --marker-color: {color}; --marker-fill: {}; --marker-glow: {};",
        position.x,
        position.y,
        tint(color, 0x30),
        tint(color, 0x60),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tint_appends_alpha() {
        assert_eq!(tint("#94a3b8", 0x30), "#94a3b830");
        assert_eq!(tint("#06B6D4", 0x0a), "#06B6D40a");
    }

    #[test]
    fn test_tint_leaves_other_formats() {
        assert_eq!(tint("#fff", 0x30), "#fff");
        assert_eq!(tint("rebeccapurple", 0x30), "rebeccapurple");
        assert_eq!(tint("#zzzzzz", 0x30), "#zzzzzz");
    }

    #[test]
    fn test_marker_style_uses_percentages() {
        let style = marker_style(Position { x: 25.0, y: 30.0 }, "#94a3b8", false);
        assert!(style.starts_with("left: 25%; top: 30%; z-index: 10;"));
        assert!(style.contains("--marker-fill: #94a3b830;"));
    }

    #[test]
    fn test_marker_style_raises_hovered() {
        let style = marker_style(Position { x: 12.5, y: 0.0 }, "#ef4444", true);
        assert!(style.contains("left: 12.5%"));
        assert!(style.contains("z-index: 100;"));
    }
}
