//! Bounds of the artwork and the two delay labels inside the visualizer.

use nih_plug_egui::egui::{pos2, vec2, Rect, Vec2};

/// Width / height of the artwork's design space.
pub const ARTWORK_ASPECT: f32 = 400.0 / 160.0;

pub const LABEL_SIZE: Vec2 = Vec2::new(70.0, 24.0);

/// Vertical position of the label centres, as a fraction of the artwork
/// height from the top (and from the bottom for the second label).
const LABEL_CENTRE_RATIO: f32 = 0.18;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualizerLayout {
    /// The widget bounds this layout was computed for.
    pub bounds: Rect,
    /// Where the artwork is stretched to.
    pub artwork: Rect,
    /// Left delay label.
    pub top_label: Rect,
    /// Right delay label.
    pub bottom_label: Rect,
}

impl VisualizerLayout {
    pub fn new(bounds: Rect) -> Self {
        let artwork = fit_to_aspect(bounds, ARTWORK_ASPECT);
        let (top_label, bottom_label) = label_bounds(artwork);

        Self {
            bounds,
            artwork,
            top_label,
            bottom_label,
        }
    }
}

/// The largest rectangle with `aspect` (width / height) centred inside
/// `bounds`. Empty or inverted bounds collapse to a zero-sized rectangle at
/// their centre.
pub fn fit_to_aspect(bounds: Rect, aspect: f32) -> Rect {
    let (width, height) = (bounds.width(), bounds.height());
    if width <= 0.0 || height <= 0.0 || aspect <= 0.0 {
        return Rect::from_center_size(bounds.center(), Vec2::ZERO);
    }

    if width / height > aspect {
        // Too wide: letterbox left and right.
        let excess = width - height * aspect;
        bounds.shrink2(vec2(excess / 2.0, 0.0))
    } else {
        // Too tall: letterbox top and bottom.
        let excess = height - width / aspect;
        bounds.shrink2(vec2(0.0, excess / 2.0))
    }
}

/// Top and bottom label rectangles for the given artwork bounds.
///
/// The label band is centred horizontally with the label width, and spans
/// vertically from the top label centre (18% down) to the bottom label
/// centre (18% up), plus half a label either side.
fn label_bounds(artwork: Rect) -> (Rect, Rect) {
    let reduce_x = ((artwork.width() - LABEL_SIZE.x) / 2.0).max(0.0);
    let reduce_y = (artwork.height() * LABEL_CENTRE_RATIO - LABEL_SIZE.y / 2.0).max(0.0);
    let band = artwork.shrink2(vec2(reduce_x, reduce_y));

    let label_height = LABEL_SIZE.y.min(band.height());
    let top = Rect::from_min_max(band.min, pos2(band.max.x, band.min.y + label_height));
    let bottom = Rect::from_min_max(pos2(band.min.x, band.max.y - label_height), band.max);

    (top, bottom)
}
