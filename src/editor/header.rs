//! The header panel: title and bypass button, then the delay visualizer.

use nih_plug::prelude::*;
use nih_plug_egui::egui::{Align, Layout, RichText, Ui};

use super::bypass::{self, ButtonAttachment};
use super::{style, veil};
use crate::params::LushDelayParams;
use crate::visualizer::DelayVisualizer;

const TITLE: &str = "LUSH DELAY";
const TITLE_SIZE: f32 = 24.0;

pub fn show(
    ui: &mut Ui,
    params: &LushDelayParams,
    setter: &ParamSetter,
    visualizer: &mut DelayVisualizer,
) {
    let bypassed = veil::is_veiled(&params.matched_bypass);

    ui.horizontal(|ui| {
        ui.label(
            RichText::new(TITLE)
                .size(TITLE_SIZE)
                .strong()
                .color(style::LABEL_TEXT),
        );
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            bypass::show(ui, &ButtonAttachment::new(&params.matched_bypass, setter));
        });
    });
    ui.separator();

    let response = ui
        .add_enabled_ui(!bypassed, |ui| visualizer.show(ui, params))
        .inner;
    veil::paint(ui, response.rect, bypassed);
}
