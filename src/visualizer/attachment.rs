//! # Parameter Attachments
//!
//! An attachment binds a view to one named plugin parameter and tells a
//! listener whenever that parameter's value changes.
//!
//! nih-plug does not push parameter changes to the editor; the editor is
//! redrawn every frame and reads the current values itself. An attachment
//! turns that polling into change notifications: it remembers the last
//! value it delivered and calls [`AttachmentListener::value_updated()`] only
//! when the source reports something different. The first poll always
//! delivers, so a freshly opened editor starts from the host's values.

use crate::params::LushDelayParams;

/// The parameters the delay visualizer listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisualizerParam {
    CrossFeedback,
    DirectFeedback,
    Delay,
    Offset,
    Pan,
}

impl VisualizerParam {
    pub const ALL: [VisualizerParam; 5] = [
        VisualizerParam::CrossFeedback,
        VisualizerParam::DirectFeedback,
        VisualizerParam::Delay,
        VisualizerParam::Offset,
        VisualizerParam::Pan,
    ];
}

/// Anything that can report the current plain value of a
/// [`VisualizerParam`].
pub trait ParamSource {
    fn value_of(&self, param: VisualizerParam) -> f32;
}

impl ParamSource for LushDelayParams {
    fn value_of(&self, param: VisualizerParam) -> f32 {
        match param {
            VisualizerParam::CrossFeedback => self.feedback_cross.value(),
            VisualizerParam::DirectFeedback => self.feedback_direct.value(),
            VisualizerParam::Delay => self.delay.value(),
            VisualizerParam::Offset => self.offset_lr.value(),
            VisualizerParam::Pan => self.pan.value(),
        }
    }
}

/// Receives the values delivered by a [`ParamAttachment`].
pub trait AttachmentListener {
    fn value_updated(&mut self, param: VisualizerParam, new_value: f32);
}

#[derive(Debug, Clone)]
pub struct ParamAttachment {
    param: VisualizerParam,
    last_value: Option<f32>,
}

impl ParamAttachment {
    pub fn new(param: VisualizerParam) -> Self {
        Self {
            param,
            last_value: None,
        }
    }

    /// Read the bound parameter from `source` and forward it to `listener`
    /// if it changed. Returns whether the listener was called.
    pub fn poll(
        &mut self,
        source: &impl ParamSource,
        listener: &mut impl AttachmentListener,
    ) -> bool {
        let value = source.value_of(self.param);
        if self.last_value == Some(value) {
            return false;
        }

        self.last_value = Some(value);
        listener.value_updated(self.param, value);
        true
    }

    /// Forget the last delivered value so the next poll delivers again.
    pub fn invalidate(&mut self) {
        self.last_value = None;
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// A [`ParamSource`] backed by a plain array, indexed in
    /// [`VisualizerParam::ALL`] order.
    #[derive(Debug, Clone, Copy)]
    pub(crate) struct FakeSource(pub [f32; 5]);

    impl FakeSource {
        pub(crate) fn set(&mut self, param: VisualizerParam, value: f32) {
            let index = VisualizerParam::ALL
                .iter()
                .position(|p| *p == param)
                .unwrap();
            self.0[index] = value;
        }
    }

    impl ParamSource for FakeSource {
        fn value_of(&self, param: VisualizerParam) -> f32 {
            let index = VisualizerParam::ALL
                .iter()
                .position(|p| *p == param)
                .unwrap();
            self.0[index]
        }
    }

    #[derive(Default)]
    struct Recorder(Vec<(VisualizerParam, f32)>);

    impl AttachmentListener for Recorder {
        fn value_updated(&mut self, param: VisualizerParam, new_value: f32) {
            self.0.push((param, new_value));
        }
    }

    #[test]
    fn test_first_poll_always_delivers() {
        let source = FakeSource([0.0; 5]);
        let mut recorder = Recorder::default();
        let mut attachment = ParamAttachment::new(VisualizerParam::Pan);

        assert!(attachment.poll(&source, &mut recorder));
        assert_eq!(recorder.0, vec![(VisualizerParam::Pan, 0.0)]);
    }

    #[test]
    fn test_unchanged_value_is_not_redelivered() {
        let mut source = FakeSource([0.5; 5]);
        let mut recorder = Recorder::default();
        let mut attachment = ParamAttachment::new(VisualizerParam::Delay);

        attachment.poll(&source, &mut recorder);
        assert!(!attachment.poll(&source, &mut recorder));

        source.set(VisualizerParam::Delay, 300.0);
        assert!(attachment.poll(&source, &mut recorder));
        assert_eq!(
            recorder.0,
            vec![(VisualizerParam::Delay, 0.5), (VisualizerParam::Delay, 300.0)]
        );
    }

    #[test]
    fn test_other_params_do_not_trigger() {
        let mut source = FakeSource([0.5; 5]);
        let mut recorder = Recorder::default();
        let mut attachment = ParamAttachment::new(VisualizerParam::Offset);

        attachment.poll(&source, &mut recorder);
        source.set(VisualizerParam::Pan, 0.9);
        assert!(!attachment.poll(&source, &mut recorder));
        assert_eq!(recorder.0.len(), 1);
    }

    #[test]
    fn test_invalidate_forces_delivery() {
        let source = FakeSource([0.5; 5]);
        let mut recorder = Recorder::default();
        let mut attachment = ParamAttachment::new(VisualizerParam::CrossFeedback);

        attachment.poll(&source, &mut recorder);
        attachment.invalidate();
        assert!(attachment.poll(&source, &mut recorder));
        assert_eq!(recorder.0.len(), 2);
    }

    #[test]
    fn test_params_source_reads_plugin_defaults() {
        let params = LushDelayParams::default();

        assert!((params.value_of(VisualizerParam::Delay) - 250.0).abs() < 1e-3);
        assert!((params.value_of(VisualizerParam::Pan) - 0.5).abs() < 1e-6);
        assert!((params.value_of(VisualizerParam::CrossFeedback) - 0.25).abs() < 1e-6);
    }
}
