//! # Visualizer Model
//!
//! The state behind the delay visualizer: the five parameter values it
//! listens to, and everything derived from them. Deriving happens in
//! [`VisualizerModel::update_components()`] each time an attachment
//! delivers a new value, so painting only ever reads finished numbers.
//!
//! ## Delay split
//!
//! The L/R offset stretches one side's delay and leaves the other alone:
//!
//! ```text
//! offset   0.0   0.25   0.5   0.75   1.0
//! left     2x    1.5x   1x    1x     1x
//! right    1x    1x     1x    1.5x   2x
//! ```
//!
//! ## Balance
//!
//! Pan uses a linear centred balance: both sides stay at full level until
//! the pan crosses the centre, then the far side fades linearly to zero.

use super::attachment::{AttachmentListener, VisualizerParam};
use crate::format;

/// Per-channel gain of a linear centred balance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Balance {
    pub left: f32,
    pub right: f32,
}

impl Balance {
    /// `pan` in `0.0..=1.0`, `0.5` is centred.
    pub fn linear_centred(pan: f32) -> Self {
        let pan = pan.clamp(0.0, 1.0);
        Self {
            left: (2.0 * (1.0 - pan)).min(1.0),
            right: (2.0 * pan).min(1.0),
        }
    }
}

/// Left and right delay times in milliseconds after applying the offset.
pub fn split_delay(delay_ms: f32, offset: f32) -> (f32, f32) {
    let mut left = delay_ms;
    let mut right = delay_ms;

    if offset < 0.5 {
        let left_ratio = 1.0 - offset * 2.0;
        left *= 1.0 + left_ratio;
    } else {
        let right_ratio = (offset - 0.5) * 2.0;
        right *= 1.0 + right_ratio;
    }

    (left, right)
}

/// Opacity of each artwork layer, `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerOpacity {
    pub cross_feedback: f32,
    pub direct_feedback: f32,
    pub left: f32,
    pub right: f32,
}

impl Default for LayerOpacity {
    /// Every layer starts fully opaque until the first update arrives.
    fn default() -> Self {
        Self {
            cross_feedback: 1.0,
            direct_feedback: 1.0,
            left: 1.0,
            right: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VisualizerModel {
    cross_feedback: f32,
    direct_feedback: f32,
    delay_ms: f32,
    offset: f32,
    pan: f32,

    left_delay_ms: f32,
    right_delay_ms: f32,
    left_label: String,
    right_label: String,
    opacity: LayerOpacity,
}

impl Default for VisualizerModel {
    fn default() -> Self {
        Self {
            cross_feedback: 0.0,
            direct_feedback: 0.0,
            delay_ms: 0.0,
            offset: 0.5,
            pan: 0.5,
            left_delay_ms: 0.0,
            right_delay_ms: 0.0,
            left_label: String::new(),
            right_label: String::new(),
            opacity: LayerOpacity::default(),
        }
    }
}

impl AttachmentListener for VisualizerModel {
    fn value_updated(&mut self, param: VisualizerParam, new_value: f32) {
        match param {
            VisualizerParam::CrossFeedback => self.cross_feedback = new_value,
            VisualizerParam::DirectFeedback => self.direct_feedback = new_value,
            VisualizerParam::Delay => self.delay_ms = new_value,
            VisualizerParam::Offset => self.offset = new_value,
            VisualizerParam::Pan => self.pan = new_value,
        }

        self.update_components();
    }
}

impl VisualizerModel {
    /// Recompute labels and layer opacities from the stored values.
    pub fn update_components(&mut self) {
        let (left, right) = split_delay(self.delay_ms, self.offset);
        self.left_delay_ms = left;
        self.right_delay_ms = right;
        self.left_label = format::delay_label(left);
        self.right_label = format::delay_label(right);

        let balance = Balance::linear_centred(self.pan);
        self.opacity = LayerOpacity {
            cross_feedback: self.cross_feedback.clamp(0.0, 1.0),
            direct_feedback: self.direct_feedback.clamp(0.0, 1.0),
            left: balance.left,
            right: balance.right,
        };
    }

    pub fn left_label(&self) -> &str {
        &self.left_label
    }

    pub fn right_label(&self) -> &str {
        &self.right_label
    }

    pub fn left_delay_ms(&self) -> f32 {
        self.left_delay_ms
    }

    pub fn right_delay_ms(&self) -> f32 {
        self.right_delay_ms
    }

    pub fn opacity(&self) -> LayerOpacity {
        self.opacity
    }

    pub fn balance(&self) -> Balance {
        Balance::linear_centred(self.pan)
    }
}
