//! The control panel: one slider per parameter, grouped by what it shapes.

use nih_plug::prelude::*;
use nih_plug_egui::egui::{RichText, Ui};
use nih_plug_egui::widgets::ParamSlider;

use super::style;
use crate::params::LushDelayParams;

const GROUP_SPACING: f32 = 12.0;
const SLIDER_MARGIN: f32 = 24.0;

pub fn show(ui: &mut Ui, params: &LushDelayParams, setter: &ParamSetter) {
    let slider_width = (ui.available_width() - SLIDER_MARGIN).max(0.0);

    let groups: [(&str, [&FloatParam; 2]); 3] = [
        ("FEEDBACK", [&params.feedback_cross, &params.feedback_direct]),
        ("TIME", [&params.delay, &params.offset_lr]),
        ("OUTPUT", [&params.pan, &params.mix]),
    ];

    ui.vertical(|ui| {
        for (title, sliders) in groups {
            ui.add_space(GROUP_SPACING);
            ui.label(RichText::new(title).strong().color(style::MUTED_TEXT));
            for param in sliders {
                ui.label(param.name());
                ui.add(ParamSlider::for_param(param, setter).with_width(slider_width));
            }
        }
    });
}
