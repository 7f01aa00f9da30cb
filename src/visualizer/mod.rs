//! # Delay Visualizer
//!
//! A picture of the delay's routing that follows the parameters: two
//! channel lines labelled with their delay times, feedback loops back into
//! each channel, and crossing paths into the opposite channel.
//!
//! - **`attachment`**: binds the visualizer to the five parameters it
//!   follows and reports changes.
//! - **`model`**: the listener. Stores the values and derives labels and
//!   opacities from them.
//! - **`layout`**: artwork and label bounds for a given widget size.
//! - **`artwork`**: the vector layers, drawn in a fixed design space.
//!
//! Each layer's opacity is driven by one parameter (cross feedback, direct
//! feedback, and the pan balance for the two channels), so automating
//! those parameters fades parts of the picture in and out.

pub mod artwork;
pub mod attachment;
pub mod layout;
pub mod model;

use nih_plug_egui::egui::{Align2, Color32, FontId, Id, Rect, Response, Sense, Ui};

use crate::editor::style;
use artwork::Layer;
use attachment::{ParamAttachment, ParamSource, VisualizerParam};
use layout::VisualizerLayout;
use model::VisualizerModel;

/// Opacity changes ease over this long, in seconds.
const FADE_SECONDS: f32 = 0.12;

const LABEL_CORNER_RADIUS: f32 = 5.0;
const LABEL_FONT_SIZE: f32 = 18.0;

pub struct DelayVisualizer {
    attachments: [ParamAttachment; 5],
    model: VisualizerModel,
    layout: VisualizerLayout,
}

impl DelayVisualizer {
    pub fn new() -> Self {
        Self {
            attachments: VisualizerParam::ALL.map(ParamAttachment::new),
            model: VisualizerModel::default(),
            layout: VisualizerLayout::new(Rect::NOTHING),
        }
    }

    pub fn model(&self) -> &VisualizerModel {
        &self.model
    }

    /// Poll every attachment against `source`. Returns whether any value
    /// changed, in which case the model has already been updated.
    pub fn sync(&mut self, source: &impl ParamSource) -> bool {
        let mut changed = false;
        for attachment in &mut self.attachments {
            changed |= attachment.poll(source, &mut self.model);
        }

        changed
    }

    /// Recompute the layout for new bounds. Cheap to call every frame; the
    /// layout only changes when the bounds do.
    pub fn resized(&mut self, bounds: Rect) {
        if self.layout.bounds != bounds {
            self.layout = VisualizerLayout::new(bounds);
        }
    }

    /// Make the next [`sync()`](Self::sync) deliver every value again, for
    /// example after the editor window was reopened.
    pub fn invalidate(&mut self) {
        for attachment in &mut self.attachments {
            attachment.invalidate();
        }
    }

    /// Sync with `source`, fill the available space and paint.
    pub fn show(&mut self, ui: &mut Ui, source: &impl ParamSource) -> Response {
        if self.sync(source) {
            ui.ctx().request_repaint();
        }

        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::hover());
        self.resized(rect);

        if ui.is_rect_visible(rect) {
            self.paint(ui, response.id);
        }

        response
    }

    fn paint(&self, ui: &Ui, id: Id) {
        let painter = ui.painter();
        let layout = &self.layout;

        for label in [layout.top_label, layout.bottom_label] {
            painter.rect_filled(label, LABEL_CORNER_RADIUS, style::ACCENT);
        }

        let opacity = self.model.opacity();
        for layer in Layer::ALL {
            let target = match layer {
                Layer::CrossFeedback => opacity.cross_feedback,
                Layer::DirectFeedback => opacity.direct_feedback,
                Layer::Left => opacity.left,
                Layer::Right => opacity.right,
            };
            let alpha = ui
                .ctx()
                .animate_value_with_time(id.with(layer), target, FADE_SECONDS);

            artwork::paint_layer(
                painter,
                layer,
                layout.artwork,
                Color32::WHITE.gamma_multiply(alpha),
            );
        }

        for (label, text) in [
            (layout.top_label, self.model.left_label()),
            (layout.bottom_label, self.model.right_label()),
        ] {
            painter.text(
                label.center(),
                Align2::CENTER_CENTER,
                text,
                FontId::proportional(LABEL_FONT_SIZE),
                style::LABEL_TEXT,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::attachment::tests::FakeSource;
    use super::*;
    use nih_plug_egui::egui::{pos2, vec2};

    fn source() -> FakeSource {
        // Cross, direct, delay, offset, pan.
        FakeSource([0.25, 0.4, 250.0, 0.5, 0.5])
    }

    #[test]
    fn test_first_sync_delivers_everything() {
        let mut visualizer = DelayVisualizer::new();

        assert!(visualizer.sync(&source()));
        assert_eq!(visualizer.model().left_label(), "250ms");
        assert!((visualizer.model().opacity().cross_feedback - 0.25).abs() < 1e-6);
        assert!(!visualizer.sync(&source()), "Nothing changed since last sync");
    }

    #[test]
    fn test_sync_follows_changes() {
        let mut visualizer = DelayVisualizer::new();
        let mut source = source();
        visualizer.sync(&source);

        source.set(VisualizerParam::Offset, 0.75);
        assert!(visualizer.sync(&source));
        assert_eq!(visualizer.model().right_label(), "380ms");
    }

    #[test]
    fn test_invalidate_redelivers() {
        let mut visualizer = DelayVisualizer::new();
        visualizer.sync(&source());
        visualizer.invalidate();

        assert!(visualizer.sync(&source()));
    }

    #[test]
    fn test_resized_updates_layout() {
        let mut visualizer = DelayVisualizer::new();
        let bounds = Rect::from_min_size(pos2(0.0, 0.0), vec2(500.0, 160.0));
        visualizer.resized(bounds);

        assert_eq!(visualizer.layout.bounds, bounds);
        assert!((visualizer.layout.artwork.width() - 400.0).abs() < 1e-3);
    }
}
