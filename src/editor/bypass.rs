//! The matched-bypass toggle button and its parameter attachment.

use nih_plug::prelude::*;
use nih_plug_egui::egui::{Button, Response, RichText, Ui};

use super::style;

/// Binds a button to a [`BoolParam`]: a click flips the parameter as one
/// complete host gesture.
pub struct ButtonAttachment<'a> {
    param: &'a BoolParam,
    setter: &'a ParamSetter<'a>,
}

impl<'a> ButtonAttachment<'a> {
    pub fn new(param: &'a BoolParam, setter: &'a ParamSetter<'a>) -> Self {
        Self { param, setter }
    }

    pub fn is_on(&self) -> bool {
        self.param.value()
    }

    pub fn clicked(&self) {
        let new_value = toggled(self.is_on());
        nih_log!("{} -> {new_value}", self.param.name());

        self.setter.begin_set_parameter(self.param);
        self.setter.set_parameter(self.param, new_value);
        self.setter.end_set_parameter(self.param);
    }
}

fn toggled(current: bool) -> bool {
    !current
}

fn button_text(is_on: bool) -> RichText {
    let text = RichText::new("Matched Bypass").strong();
    if is_on {
        text.color(style::LABEL_TEXT)
    } else {
        text.color(style::MUTED_TEXT)
    }
}

/// Draw the bypass button and forward a click to `attachment`.
pub fn show(ui: &mut Ui, attachment: &ButtonAttachment) -> Response {
    let is_on = attachment.is_on();
    let button = Button::new(button_text(is_on))
        .fill(if is_on { style::ACCENT } else { style::HEADER_BACKGROUND })
        .selected(is_on);

    let response = ui.add(button);
    if response.clicked() {
        attachment.clicked();
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Call {
        Begin,
        Set(f32),
        End,
    }

    /// A [`GuiContext`] that records the gestures it receives instead of
    /// forwarding them to a host.
    #[derive(Default)]
    struct RecordingContext {
        calls: Mutex<Vec<Call>>,
    }

    impl RecordingContext {
        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl GuiContext for RecordingContext {
        fn plugin_api(&self) -> PluginApi {
            PluginApi::Clap
        }

        fn request_resize(&self) -> bool {
            false
        }

        unsafe fn raw_begin_set_parameter(&self, _param: ParamPtr) {
            self.calls.lock().unwrap().push(Call::Begin);
        }

        unsafe fn raw_set_parameter_normalized(&self, _param: ParamPtr, normalized: f32) {
            self.calls.lock().unwrap().push(Call::Set(normalized));
        }

        unsafe fn raw_end_set_parameter(&self, _param: ParamPtr) {
            self.calls.lock().unwrap().push(Call::End);
        }

        fn get_state(&self) -> PluginState {
            unimplemented!("state is not used by the bypass button")
        }

        fn set_state(&self, _state: PluginState) {}
    }

    #[test]
    fn test_click_flips_value() {
        assert!(toggled(false));
        assert!(!toggled(true));
    }

    #[test]
    fn test_click_is_one_complete_gesture() {
        let context = RecordingContext::default();
        let setter = ParamSetter::new(&context);
        let param = BoolParam::new("Matched Bypass", false).make_bypass();

        ButtonAttachment::new(&param, &setter).clicked();

        assert_eq!(context.calls(), vec![Call::Begin, Call::Set(1.0), Call::End]);
    }

    #[test]
    fn test_click_while_on_switches_off() {
        let context = RecordingContext::default();
        let setter = ParamSetter::new(&context);
        let param = BoolParam::new("Matched Bypass", true).make_bypass();

        let attachment = ButtonAttachment::new(&param, &setter);
        assert!(attachment.is_on());
        attachment.clicked();

        assert_eq!(context.calls(), vec![Call::Begin, Call::Set(0.0), Call::End]);
    }
}
