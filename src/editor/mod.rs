//! # Editor
//!
//! The plugin's window, built with `nih_plug_egui`:
//!
//! ```text
//! ┌───────────────────────────────┬──────────┐
//! │ LUSH DELAY    [Matched Bypass]│          │
//! │ ───────────────────────────── │  debug   │
//! │        delay visualizer       │ (feature │
//! ├───────────────────────────────┤  gated)  │
//! │ FEEDBACK / TIME / OUTPUT      │          │
//! │ sliders                       │          │
//! └───────────────────────────────┴──────────┘
//! ```
//!
//! While matched bypass is on, the visualizer and control panel are
//! disabled and covered by a veil. The bypass button itself stays live so
//! the user can switch it back.

pub mod bypass;
pub mod controls;
pub mod debug_display;
pub mod header;
pub mod style;
pub mod veil;

use std::sync::Arc;

use nih_plug::prelude::*;
use nih_plug_egui::egui::{CentralPanel, Frame, SidePanel, TopBottomPanel};
use nih_plug_egui::create_egui_editor;

use crate::params::LushDelayParams;
use crate::stats::EngineStats;
use crate::visualizer::DelayVisualizer;

/// Fixed proportions of the editor window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorLayout {
    debug: bool,
}

impl EditorLayout {
    /// Width of the main column in logical pixels.
    pub const WIDTH: u32 = 450;
    /// Width / height of the main column.
    pub const WH_RATIO: f32 = 0.59;
    /// Share of the window height taken by the header.
    pub const HEADER_RATIO: f32 = 0.43;
    pub const DEBUG_WIDTH: u32 = 200;

    pub fn new(debug: bool) -> Self {
        Self { debug }
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Window size in logical pixels, debug column included.
    pub fn window_size(&self) -> (u32, u32) {
        let width = Self::WIDTH + if self.debug { Self::DEBUG_WIDTH } else { 0 };
        let height = (Self::WIDTH as f32 / Self::WH_RATIO).round() as u32;

        (width, height)
    }

    pub fn header_height(&self) -> f32 {
        let (_, height) = self.window_size();
        height as f32 * Self::HEADER_RATIO
    }
}

/// Per-window state handed to every frame.
struct EditorState {
    visualizer: DelayVisualizer,
}

pub fn create(
    params: Arc<LushDelayParams>,
    stats: Arc<EngineStats>,
    layout: EditorLayout,
) -> Option<Box<dyn Editor>> {
    nih_log!(
        "Creating editor at {:?} (debug column: {})",
        layout.window_size(),
        layout.debug()
    );

    create_egui_editor(
        params.editor_state.clone(),
        EditorState {
            visualizer: DelayVisualizer::new(),
        },
        |egui_ctx, state| {
            style::apply(egui_ctx);
            // A reopened window starts from whatever the host holds now.
            state.visualizer.invalidate();
        },
        move |egui_ctx, setter, state| {
            if layout.debug() {
                SidePanel::right("debug")
                    .exact_width(EditorLayout::DEBUG_WIDTH as f32)
                    .resizable(false)
                    .show(egui_ctx, |ui| {
                        debug_display::show(
                            ui,
                            &stats.snapshot(),
                            &params,
                            state.visualizer.model(),
                        );
                    });
            }

            TopBottomPanel::top("header")
                .exact_height(layout.header_height())
                .resizable(false)
                .frame(Frame::side_top_panel(&egui_ctx.style()).fill(style::HEADER_BACKGROUND))
                .show(egui_ctx, |ui| {
                    header::show(ui, &params, setter, &mut state.visualizer);
                });

            CentralPanel::default().show(egui_ctx, |ui| {
                let bypassed = veil::is_veiled(&params.matched_bypass);
                ui.add_enabled_ui(!bypassed, |ui| {
                    controls::show(ui, &params, setter);
                });
                veil::paint(ui, ui.max_rect(), bypassed);
            });
        },
    )
}
