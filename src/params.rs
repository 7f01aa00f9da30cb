//! # Plugin Parameters
//!
//! The seven parameters the host automates and saves with the session.
//! Each one has a unique string ID (`#[id = "..."]`) that the host uses to
//! recall presets, so once published these IDs never change.
//!
//! Five of them drive the delay visualizer: the two feedback paths, the
//! delay time, the left/right offset and the pan. The remaining two are the
//! dry/wet mix and the matched-bypass switch the header button controls.
//!
//! ## Normalised controls
//!
//! Feedback, offset, pan and mix all live in `0.0..=1.0`. The visualizer
//! reads them directly as opacities and ratios, so keeping them normalised
//! avoids a second mapping in the editor.

use std::sync::Arc;

use nih_plug::prelude::*;
use nih_plug_egui::EguiState;

use crate::editor::EditorLayout;
use crate::format;

#[derive(Params)]
pub struct LushDelayParams {
    /// The editor window state, persisted with the parameters so a
    /// reopened editor comes back at the same size.
    #[persist = "editor-state"]
    pub editor_state: Arc<EguiState>,

    /// **Cross Feedback**: how much of each channel's echo is fed into the
    /// opposite channel's delay line. Drives the opacity of the crossing
    /// paths in the visualizer.
    #[id = "fbcross"]
    pub feedback_cross: FloatParam,

    /// **Direct Feedback**: how much of each channel's echo is fed back
    /// into its own delay line. Drives the opacity of the loop paths.
    #[id = "fbdirect"]
    pub feedback_direct: FloatParam,

    /// **Delay**: the base delay time in milliseconds. The offset stretches
    /// one side up to twice this value.
    #[id = "delay"]
    pub delay: FloatParam,

    /// **L/R Offset**: `0.5` is centred. Below it the left delay grows,
    /// above it the right delay grows.
    #[id = "offset"]
    pub offset_lr: FloatParam,

    /// **Pan**: `0.5` is centred; linear centred balance between the
    /// channels.
    #[id = "pan"]
    pub pan: FloatParam,

    /// **Mix**: dry/wet balance.
    #[id = "mix"]
    pub mix: FloatParam,

    /// **Matched Bypass**: exposed to the host as the plugin's bypass
    /// parameter. The editor veils its controls while this is on.
    #[id = "bypass"]
    pub matched_bypass: BoolParam,
}

impl Default for LushDelayParams {
    fn default() -> Self {
        let (width, height) = EditorLayout::new(cfg!(feature = "debug-overlay")).window_size();

        Self {
            editor_state: EguiState::from_size(width, height),

            feedback_cross: FloatParam::new(
                "Cross Feedback",
                0.25,
                FloatRange::Linear { min: 0.0, max: 1.0 },
            )
            .with_unit("%")
            .with_smoother(SmoothingStyle::Linear(20.0))
            .with_value_to_string(formatters::v2s_f32_percentage(0))
            .with_string_to_value(formatters::s2v_f32_percentage()),

            feedback_direct: FloatParam::new(
                "Direct Feedback",
                0.40,
                FloatRange::Linear { min: 0.0, max: 1.0 },
            )
            .with_unit("%")
            .with_smoother(SmoothingStyle::Linear(20.0))
            .with_value_to_string(formatters::v2s_f32_percentage(0))
            .with_string_to_value(formatters::s2v_f32_percentage()),

            delay: FloatParam::new(
                "Delay",
                250.0,
                FloatRange::Skewed {
                    min: 1.0,
                    max: 1000.0,
                    // More knob travel for short delays, where a few
                    // milliseconds are audible.
                    factor: FloatRange::skew_factor(-1.5),
                },
            )
            .with_unit(" ms")
            .with_smoother(SmoothingStyle::Linear(50.0))
            .with_step_size(0.1)
            .with_value_to_string(Arc::new(|value| format::significant_figures(value, 2))),

            offset_lr: FloatParam::new(
                "L/R Offset",
                0.5,
                FloatRange::Linear { min: 0.0, max: 1.0 },
            )
            .with_smoother(SmoothingStyle::Linear(50.0))
            .with_value_to_string(format::v2s_offset())
            .with_string_to_value(format::s2v_offset()),

            pan: FloatParam::new("Pan", 0.5, FloatRange::Linear { min: 0.0, max: 1.0 })
                .with_smoother(SmoothingStyle::Linear(20.0))
                .with_value_to_string(format::v2s_pan())
                .with_string_to_value(format::s2v_pan()),

            mix: FloatParam::new("Mix", 0.5, FloatRange::Linear { min: 0.0, max: 1.0 })
                .with_unit("%")
                .with_smoother(SmoothingStyle::Linear(20.0))
                .with_value_to_string(formatters::v2s_f32_percentage(0))
                .with_string_to_value(formatters::s2v_f32_percentage()),

            matched_bypass: BoolParam::new("Matched Bypass", false).make_bypass(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_centred() {
        let params = LushDelayParams::default();

        assert!((params.offset_lr.value() - 0.5).abs() < 1e-6);
        assert!((params.pan.value() - 0.5).abs() < 1e-6);
        assert!((params.delay.value() - 250.0).abs() < 1e-3);
        assert!(!params.matched_bypass.value());
    }

    #[test]
    fn test_offset_display_goes_through_formatter() {
        let params = LushDelayParams::default();

        assert_eq!(params.offset_lr.normalized_value_to_string(0.5, false), "C");
        assert_eq!(params.pan.normalized_value_to_string(0.0, false), "L 50");
    }

    #[test]
    fn test_editor_state_matches_layout() {
        let params = LushDelayParams::default();
        let expected = EditorLayout::new(cfg!(feature = "debug-overlay")).window_size();

        assert_eq!(params.editor_state.size(), expected);
    }

    #[test]
    fn test_delay_display_uses_two_significant_figures() {
        let params = LushDelayParams::default();
        let delay = &params.delay;

        assert_eq!(
            delay.normalized_value_to_string(delay.preview_normalized(12.34), true),
            "12 ms"
        );
        assert_eq!(
            delay.normalized_value_to_string(delay.preview_normalized(250.0), true),
            "250 ms"
        );
        assert_eq!(
            delay.normalized_value_to_string(delay.preview_normalized(1.5), false),
            "1.5"
        );
    }
}
