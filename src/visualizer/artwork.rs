//! # Visualizer Artwork
//!
//! The four vector layers of the visualizer, drawn in a 400 x 160 design
//! space and stretched to fit the artwork bounds:
//!
//! ```text
//!   ●──────────▶ [ left ] ──────────▶      left (top line)
//!   ▲                                  │   direct feedback (loop back
//!   └──────────────────────────────────┘   into the same channel)
//!          ◀──────╲      ╱──────
//!                  ╲    ╱                  cross feedback (into the
//!                  ╱    ╲                  opposite channel)
//!          ◀──────╱      ╲──────
//!   ┌──────────────────────────────────┐
//!   ▼                                  │
//!   ●──────────▶ [ right ] ─────────▶      right (bottom line)
//! ```
//!
//! Every layer is drawn in a single colour so the visualizer can fade it
//! by alpha alone.

use nih_plug_egui::egui::{
    emath::RectTransform, pos2, vec2, Color32, Painter, Pos2, Rect, Shape, Stroke,
};

pub const DESIGN_SIZE: (f32, f32) = (400.0, 160.0);

const LINE_WIDTH: f32 = 3.0;
const ARROW_LENGTH: f32 = 10.0;
const ARROW_HALF_WIDTH: f32 = 5.0;
const NODE_RADIUS: f32 = 5.0;

/// Vertical position of the left channel's line. The right channel's line
/// mirrors it around the horizontal centre.
const CHANNEL_Y: f32 = 160.0 * 0.18;
/// Horizontal span the labels sit in; the channel lines break around it.
const LABEL_GAP: (f32, f32) = (160.0, 240.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    CrossFeedback,
    DirectFeedback,
    Left,
    Right,
}

impl Layer {
    pub const ALL: [Layer; 4] = [
        Layer::CrossFeedback,
        Layer::DirectFeedback,
        Layer::Left,
        Layer::Right,
    ];
}

/// One drawing instruction in design-space coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Path(Vec<Pos2>),
    /// A straight line ending in an arrowhead at `tip`.
    Arrow { from: Pos2, tip: Pos2 },
    Node(Pos2),
}

pub fn design_rect() -> Rect {
    Rect::from_min_size(Pos2::ZERO, vec2(DESIGN_SIZE.0, DESIGN_SIZE.1))
}

fn mirror(pos: Pos2) -> Pos2 {
    pos2(pos.x, DESIGN_SIZE.1 - pos.y)
}

fn mirrored(primitives: Vec<Primitive>) -> Vec<Primitive> {
    primitives
        .into_iter()
        .map(|primitive| match primitive {
            Primitive::Path(points) => Primitive::Path(points.into_iter().map(mirror).collect()),
            Primitive::Arrow { from, tip } => Primitive::Arrow {
                from: mirror(from),
                tip: mirror(tip),
            },
            Primitive::Node(pos) => Primitive::Node(mirror(pos)),
        })
        .collect()
}

fn channel_line() -> Vec<Primitive> {
    let y = CHANNEL_Y;
    vec![
        Primitive::Node(pos2(20.0, y)),
        Primitive::Arrow {
            from: pos2(20.0, y),
            tip: pos2(LABEL_GAP.0, y),
        },
        Primitive::Arrow {
            from: pos2(LABEL_GAP.1, y),
            tip: pos2(380.0, y),
        },
    ]
}

fn feedback_loop() -> Vec<Primitive> {
    let y = CHANNEL_Y;
    let bottom = 58.0;
    vec![
        Primitive::Path(vec![
            pos2(380.0, y),
            pos2(392.0, y),
            pos2(392.0, bottom),
            pos2(8.0, bottom),
            pos2(8.0, y + ARROW_LENGTH + 4.0),
        ]),
        Primitive::Arrow {
            from: pos2(8.0, y + ARROW_LENGTH + 4.0),
            tip: pos2(8.0, y + NODE_RADIUS),
        },
    ]
}

fn cross_feedback() -> Vec<Primitive> {
    let (top, bottom) = (68.0, DESIGN_SIZE.1 - 68.0);
    vec![
        Primitive::Path(vec![pos2(340.0, top), pos2(260.0, top), pos2(140.0, bottom)]),
        Primitive::Arrow {
            from: pos2(140.0, bottom),
            tip: pos2(60.0, bottom),
        },
        Primitive::Path(vec![pos2(340.0, bottom), pos2(260.0, bottom), pos2(140.0, top)]),
        Primitive::Arrow {
            from: pos2(140.0, top),
            tip: pos2(60.0, top),
        },
    ]
}

impl Layer {
    /// The layer's drawing instructions in design-space coordinates.
    pub fn primitives(self) -> Vec<Primitive> {
        match self {
            Layer::Left => channel_line(),
            Layer::Right => mirrored(channel_line()),
            Layer::DirectFeedback => {
                let mut primitives = feedback_loop();
                primitives.extend(mirrored(feedback_loop()));
                primitives
            }
            Layer::CrossFeedback => cross_feedback(),
        }
    }
}

/// Paint `layer` stretched to `target` in a single colour.
pub fn paint_layer(painter: &Painter, layer: Layer, target: Rect, colour: Color32) {
    if target.width() <= 0.0 || target.height() <= 0.0 || colour.a() == 0 {
        return;
    }

    let transform = RectTransform::from_to(design_rect(), target);
    let scale = target.width() / DESIGN_SIZE.0;
    let stroke = Stroke::new(LINE_WIDTH * scale, colour);

    let to_screen = |pos: Pos2| transform.transform_pos(pos);

    for primitive in layer.primitives() {
        match primitive {
            Primitive::Path(points) => {
                let points = points.into_iter().map(to_screen).collect();
                painter.add(Shape::line(points, stroke));
            }
            Primitive::Arrow { from, tip } => {
                let [left, right] = arrowhead_base(from, tip);
                let shaft_end = tip + (from - tip).normalized() * ARROW_LENGTH;
                painter.line_segment([to_screen(from), to_screen(shaft_end)], stroke);
                painter.add(Shape::convex_polygon(
                    vec![to_screen(tip), to_screen(left), to_screen(right)],
                    colour,
                    Stroke::NONE,
                ));
            }
            Primitive::Node(centre) => {
                painter.circle_filled(to_screen(centre), NODE_RADIUS * scale, colour);
            }
        }
    }
}

/// The two back corners of an arrowhead pointing from `from` to `tip`.
fn arrowhead_base(from: Pos2, tip: Pos2) -> [Pos2; 2] {
    let direction = (tip - from).normalized();
    let normal = vec2(-direction.y, direction.x);
    let base = tip - direction * ARROW_LENGTH;

    [
        base + normal * ARROW_HALF_WIDTH,
        base - normal * ARROW_HALF_WIDTH,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(primitive: &Primitive) -> Vec<Pos2> {
        match primitive {
            Primitive::Path(points) => points.clone(),
            Primitive::Arrow { from, tip } => vec![*from, *tip],
            Primitive::Node(pos) => vec![*pos],
        }
    }

    #[test]
    fn test_every_layer_stays_in_design_space() {
        let design = design_rect();
        for layer in Layer::ALL {
            for primitive in layer.primitives() {
                for point in points(&primitive) {
                    assert!(
                        design.contains(point),
                        "{layer:?} has a point outside the design space: {point:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_right_channel_mirrors_left() {
        let left = Layer::Left.primitives();
        let right = Layer::Right.primitives();

        assert_eq!(left.len(), right.len());
        for (l, r) in left.iter().zip(&right) {
            for (a, b) in points(l).into_iter().zip(points(r)) {
                assert!((a.x - b.x).abs() < 1e-6);
                assert!((a.y - (DESIGN_SIZE.1 - b.y)).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_channel_lines_skip_label_gap() {
        for primitive in Layer::Left.primitives() {
            if let Primitive::Arrow { from, tip } = primitive {
                let (lo, hi) = (from.x.min(tip.x), from.x.max(tip.x));
                assert!(
                    hi <= LABEL_GAP.0 || lo >= LABEL_GAP.1,
                    "Arrow {from:?} -> {tip:?} runs through the label"
                );
            }
        }
    }

    #[test]
    fn test_arrowhead_is_symmetric_behind_tip() {
        let [left, right] = arrowhead_base(pos2(0.0, 0.0), pos2(100.0, 0.0));

        assert!((left.x - 90.0).abs() < 1e-6 && (right.x - 90.0).abs() < 1e-6);
        assert!((left.y + right.y).abs() < 1e-6);
        assert!((left.y - right.y).abs() - 2.0 * ARROW_HALF_WIDTH < 1e-6);
    }

    #[test]
    fn test_design_space_stretches_to_target() {
        let target = Rect::from_min_size(pos2(10.0, 20.0), vec2(800.0, 320.0));
        let transform = RectTransform::from_to(design_rect(), target);

        assert_eq!(transform.transform_pos(Pos2::ZERO), target.min);
        assert_eq!(transform.transform_pos(pos2(400.0, 160.0)), target.max);
    }
}
