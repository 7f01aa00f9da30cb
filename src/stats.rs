//! Audio-thread statistics read by the editor's debug overlay.
//!
//! The audio thread writes, the GUI thread reads. Everything is a relaxed
//! atomic: the overlay only needs eventually-consistent numbers and the
//! audio thread must never block on a lock.

use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};

use atomic_float::AtomicF32;

#[derive(Debug)]
pub struct EngineStats {
    sample_rate: AtomicF32,
    max_buffer_size: AtomicU32,
    channels: AtomicU32,
    blocks_processed: AtomicU64,
}

/// A plain copy of [`EngineStats`] taken at one point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsSnapshot {
    pub sample_rate: f32,
    pub max_buffer_size: u32,
    pub channels: u32,
    pub blocks_processed: u64,
}

impl Default for EngineStats {
    fn default() -> Self {
        Self {
            sample_rate: AtomicF32::new(0.0),
            max_buffer_size: AtomicU32::new(0),
            channels: AtomicU32::new(0),
            blocks_processed: AtomicU64::new(0),
        }
    }
}

impl EngineStats {
    /// Record the configuration the host handed to `initialize()`.
    pub fn configure(&self, sample_rate: f32, max_buffer_size: u32, channels: u32) {
        self.sample_rate.store(sample_rate, Ordering::Relaxed);
        self.max_buffer_size.store(max_buffer_size, Ordering::Relaxed);
        self.channels.store(channels, Ordering::Relaxed);
    }

    /// Called once per `process()` call.
    pub fn count_block(&self) {
        self.blocks_processed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn reset_blocks(&self) {
        self.blocks_processed.store(0, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            sample_rate: self.sample_rate.load(Ordering::Relaxed),
            max_buffer_size: self.max_buffer_size.load(Ordering::Relaxed),
            channels: self.channels.load(Ordering::Relaxed),
            blocks_processed: self.blocks_processed.load(Ordering::Relaxed),
        }
    }
}
