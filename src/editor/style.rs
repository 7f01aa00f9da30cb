//! Colours and egui style for the editor.

use nih_plug_egui::egui::{Color32, Context};

pub const BACKGROUND: Color32 = Color32::from_rgb(28, 24, 44);
pub const HEADER_BACKGROUND: Color32 = Color32::from_rgb(44, 36, 70);
/// Label plates in the visualizer, slider fill, active bypass button.
pub const ACCENT: Color32 = Color32::from_rgb(126, 87, 194);
pub const LABEL_TEXT: Color32 = Color32::from_rgb(245, 240, 255);
pub const MUTED_TEXT: Color32 = Color32::from_rgb(170, 160, 195);
pub const VEIL: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 170);

/// Apply the editor's colours to the whole egui context. Called once when
/// the editor window is built.
pub fn apply(ctx: &Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.panel_fill = BACKGROUND;
    style.visuals.window_fill = BACKGROUND;
    style.visuals.override_text_color = Some(LABEL_TEXT);

    // ParamSlider bar and its unfilled track.
    style.visuals.selection.bg_fill = ACCENT;
    style.visuals.selection.stroke.color = LABEL_TEXT;
    style.visuals.widgets.inactive.bg_fill = HEADER_BACKGROUND;
    style.visuals.widgets.inactive.weak_bg_fill = HEADER_BACKGROUND;
    style.visuals.widgets.hovered.weak_bg_fill = ACCENT.gamma_multiply(0.6);
    style.visuals.widgets.active.weak_bg_fill = ACCENT;

    ctx.set_style(style);
}
