//! Debug column: engine statistics, raw parameter values and what the
//! visualizer derived from them.

use nih_plug_egui::egui::{RichText, Ui};

use super::style;
use crate::params::LushDelayParams;
use crate::stats::StatsSnapshot;
use crate::visualizer::model::VisualizerModel;

/// Text rows shown by the debug column, as `(label, value)` pairs.
pub fn rows(
    stats: &StatsSnapshot,
    params: &LushDelayParams,
    model: &VisualizerModel,
) -> Vec<(&'static str, String)> {
    let balance = model.balance();

    vec![
        ("sample rate", format!("{:.0} Hz", stats.sample_rate)),
        ("channels", stats.channels.to_string()),
        ("max buffer", stats.max_buffer_size.to_string()),
        ("blocks", stats.blocks_processed.to_string()),
        ("fb cross", format!("{:.3}", params.feedback_cross.value())),
        ("fb direct", format!("{:.3}", params.feedback_direct.value())),
        ("delay", format!("{:.1} ms", params.delay.value())),
        ("offset", format!("{:.3}", params.offset_lr.value())),
        ("pan", format!("{:.3}", params.pan.value())),
        ("mix", format!("{:.3}", params.mix.value())),
        ("bypass", params.matched_bypass.value().to_string()),
        ("left delay", format!("{:.2} ms", model.left_delay_ms())),
        ("right delay", format!("{:.2} ms", model.right_delay_ms())),
        ("balance", format!("{:.2} / {:.2}", balance.left, balance.right)),
    ]
}

pub fn show(
    ui: &mut Ui,
    stats: &StatsSnapshot,
    params: &LushDelayParams,
    model: &VisualizerModel,
) {
    ui.heading(RichText::new("debug").color(style::MUTED_TEXT));
    ui.separator();

    for (label, value) in rows(stats, params, model) {
        ui.horizontal(|ui| {
            ui.label(RichText::new(label).color(style::MUTED_TEXT).monospace());
            ui.label(RichText::new(value).monospace());
        });
    }
}
