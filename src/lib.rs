//! # Lush Delay: Editor and Plugin Shell
//!
//! The user-facing side of a stereo delay with cross and direct feedback,
//! built with [nih-plug](https://github.com/robbert-vdh/nih-plug) and its
//! egui integration. Outputs Audio Unit (AUv2), VST3 and CLAP formats from
//! one codebase.
//!
//! ## What lives here
//!
//! ```text
//!                ┌────────────── host ──────────────┐
//!                │ automation, presets, bypass       │
//!                └──────┬─────────────────┬──────────┘
//!                       │ params          │ process()
//!                       ▼                 ▼
//!   editor ◀──── LushDelayParams    LushDelay (pass-through)
//!     │                                   │
//!     │  visualizer ◀─ attachments        │ EngineStats
//!     │  control panel, bypass, veil      │ (atomics)
//!     └── debug column ◀──────────────────┘
//! ```
//!
//! The delay's signal processing is not part of this crate: `process()`
//! leaves the audio untouched and only publishes statistics for the
//! editor's debug column.

mod editor;
mod format;
mod params;
mod stats;
mod visualizer;

use std::num::NonZeroU32;
use std::sync::Arc;

use editor::EditorLayout;
use nih_plug::prelude::*;
use params::LushDelayParams;
use stats::EngineStats;

/// The main plugin struct.
///
/// Parameters are shared with the host and the editor through `Arc`;
/// statistics flow from the audio thread to the editor through the atomics
/// in [`EngineStats`]. Neither side ever takes a lock.
struct LushDelay {
    params: Arc<LushDelayParams>,
    stats: Arc<EngineStats>,
}

impl Default for LushDelay {
    fn default() -> Self {
        Self {
            params: Arc::new(LushDelayParams::default()),
            stats: Arc::new(EngineStats::default()),
        }
    }
}

impl Plugin for LushDelay {
    const NAME: &'static str = "Lush Delay";
    const VENDOR: &'static str = "Lush Audio";
    const URL: &'static str = "";
    const EMAIL: &'static str = "";
    const VERSION: &'static str = env!("CARGO_PKG_VERSION");

    // Stereo first: the visualizer's left/right picture assumes two
    // channels, mono is accepted as a fallback.
    const AUDIO_IO_LAYOUTS: &'static [AudioIOLayout] = &[
        AudioIOLayout {
            main_input_channels: NonZeroU32::new(2),
            main_output_channels: NonZeroU32::new(2),
            aux_input_ports: &[],
            aux_output_ports: &[],
            names: PortNames::const_default(),
        },
        AudioIOLayout {
            main_input_channels: NonZeroU32::new(1),
            main_output_channels: NonZeroU32::new(1),
            aux_input_ports: &[],
            aux_output_ports: &[],
            names: PortNames::const_default(),
        },
    ];

    const MIDI_INPUT: MidiConfig = MidiConfig::None;
    const SAMPLE_ACCURATE_AUTOMATION: bool = true;

    type SysExMessage = ();
    type BackgroundTask = ();

    fn params(&self) -> Arc<dyn Params> {
        self.params.clone()
    }

    fn editor(&mut self, _async_executor: AsyncExecutor<Self>) -> Option<Box<dyn Editor>> {
        editor::create(
            self.params.clone(),
            self.stats.clone(),
            EditorLayout::new(cfg!(feature = "debug-overlay")),
        )
    }

    /// Record the host's audio configuration for the debug column.
    fn initialize(
        &mut self,
        audio_io_layout: &AudioIOLayout,
        buffer_config: &BufferConfig,
        _context: &mut impl InitContext<Self>,
    ) -> bool {
        let num_channels = audio_io_layout
            .main_input_channels
            .map(NonZeroU32::get)
            .unwrap_or(2);

        self.stats.configure(
            buffer_config.sample_rate,
            buffer_config.max_buffer_size,
            num_channels,
        );
        nih_log!(
            "Initialized at {} Hz, {} channel(s), up to {} samples per block",
            buffer_config.sample_rate,
            num_channels,
            buffer_config.max_buffer_size
        );

        true
    }

    fn reset(&mut self) {
        self.stats.reset_blocks();
    }

    /// Audio passes through unchanged. The block counter is the only state
    /// touched here, and it is a single relaxed atomic add.
    fn process(
        &mut self,
        _buffer: &mut Buffer,
        _aux: &mut AuxiliaryBuffers,
        _context: &mut impl ProcessContext<Self>,
    ) -> ProcessStatus {
        self.stats.count_block();

        ProcessStatus::Normal
    }
}

impl ClapPlugin for LushDelay {
    const CLAP_ID: &'static str = "com.lush-audio.lush-delay";
    const CLAP_DESCRIPTION: Option<&'static str> =
        Some("Stereo delay with cross and direct feedback");
    const CLAP_MANUAL_URL: Option<&'static str> = None;
    const CLAP_SUPPORT_URL: Option<&'static str> = None;
    const CLAP_FEATURES: &'static [ClapFeature] = &[
        ClapFeature::AudioEffect,
        ClapFeature::Stereo,
        ClapFeature::Delay,
    ];
}

impl Vst3Plugin for LushDelay {
    const VST3_CLASS_ID: [u8; 16] = *b"LushDelayEditor1";
    const VST3_SUBCATEGORIES: &'static [Vst3SubCategory] =
        &[Vst3SubCategory::Fx, Vst3SubCategory::Delay];
}

nih_export_clap!(LushDelay);
nih_export_vst3!(LushDelay);

// AUv2 entry point for Logic Pro, generated from the CLAP export.
clap_wrapper::export_auv2!();
