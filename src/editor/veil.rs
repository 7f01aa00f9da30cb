//! Translucent cover drawn over disabled parts of the editor.

use nih_plug::prelude::*;
use nih_plug_egui::egui::{Align2, FontId, Rect, Ui};

use super::style;

const CAPTION: &str = "BYPASSED";
const CAPTION_SIZE: f32 = 22.0;

/// Whether the visualizer and control panel are disabled and veiled. Only
/// the bypass parameter decides this; the bypass button itself is never
/// veiled.
pub fn is_veiled(bypass: &BoolParam) -> bool {
    bypass.value()
}

/// Paint the veil over `rect` when `visible`. Paint after the content it
/// covers; egui draws in call order.
pub fn paint(ui: &Ui, rect: Rect, visible: bool) {
    if !visible || !ui.is_rect_visible(rect) {
        return;
    }

    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, style::VEIL);
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        CAPTION,
        FontId::proportional(CAPTION_SIZE),
        style::MUTED_TEXT,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use nih_plug_egui::egui::{pos2, CentralPanel, Context, RawInput};

    /// Run one frame that optionally paints the veil and count the shapes
    /// it produced.
    fn shapes_painted(veil: Option<bool>) -> usize {
        let ctx = Context::default();
        let rect = Rect::from_min_max(pos2(10.0, 10.0), pos2(110.0, 60.0));

        let output = ctx.run(RawInput::default(), |ctx| {
            CentralPanel::default().show(ctx, |ui| {
                if let Some(visible) = veil {
                    paint(ui, rect, visible);
                }
            });
        });

        output.shapes.len()
    }

    #[test]
    fn test_veil_follows_bypass() {
        assert!(!is_veiled(&BoolParam::new("Matched Bypass", false).make_bypass()));
        assert!(is_veiled(&BoolParam::new("Matched Bypass", true).make_bypass()));
    }

    #[test]
    fn test_hidden_veil_paints_nothing() {
        assert_eq!(shapes_painted(Some(false)), shapes_painted(None));
    }

    #[test]
    fn test_visible_veil_paints_cover_and_caption() {
        assert_eq!(shapes_painted(Some(true)), shapes_painted(None) + 2);
    }
}
