//! Per-tick compositing engine
//!
//! Owns both pixel stores and the blink wave, drains the inbound update
//! queue, and renders one frame per tick. Mode selection is global and
//! re-evaluated fresh every tick: the streamed overlay wins whenever any
//! of its pixels is still decaying; otherwise the shadow state renders,
//! with blink-flagged pixels scaled by the shared wave.

use log::{debug, warn};

use crate::animation::BlinkWave;
use crate::color::Rgb;
use crate::math8::scale8;
use crate::store::{ShadowStore, StreamStore};
use crate::update::{StripUpdate, UpdateReceiver, UpdateSource};

/// Configuration for the compositing engine
#[derive(Debug, Clone)]
pub struct ComposerConfig {
    /// Strip length N; capped at the `MAX_LEDS` capacity.
    pub strip_len: usize,
    /// Per-tick streamed fade rate, 0-255. 0 never fades, 255 expires
    /// streamed data after one tick.
    pub decay_rate: u8,
    /// Per-tick blink wave slope, 0-255.
    pub blink_step: u8,
}

/// The compositing engine - merges both buffers into one frame per tick.
pub struct Composer<'a, const MAX_LEDS: usize, const UPDATE_QUEUE_SIZE: usize> {
    // External dependencies and configuration
    updates: UpdateReceiver<'a, UPDATE_QUEUE_SIZE>,
    decay_rate: u8,

    // Internal state
    shadow: ShadowStore<MAX_LEDS>,
    stream: StreamStore<MAX_LEDS>,
    blink: BlinkWave,
    frame_buffer: [Rgb; MAX_LEDS],
}

impl<'a, const MAX_LEDS: usize, const UPDATE_QUEUE_SIZE: usize>
    Composer<'a, MAX_LEDS, UPDATE_QUEUE_SIZE>
{
    /// Create a new engine fed by the given update queue.
    ///
    /// Both stores come up zeroed: the strip is dark and nothing streams.
    pub fn new(updates: UpdateReceiver<'a, UPDATE_QUEUE_SIZE>, config: &ComposerConfig) -> Self {
        let len = config.strip_len.min(MAX_LEDS);
        Self {
            updates,
            decay_rate: config.decay_rate,
            shadow: ShadowStore::new(len),
            stream: StreamStore::new(len),
            blink: BlinkWave::new(config.blink_step),
            frame_buffer: [Rgb::default(); MAX_LEDS],
        }
    }

    /// Process one tick.
    ///
    /// Applies all pending updates, renders the active buffer into the
    /// frame, then advances that buffer's animation clock. The returned
    /// slice is the full strip frame, to be flushed as one show.
    pub fn render(&mut self) -> &[Rgb] {
        self.process_updates();

        let len = self.shadow.len();
        if self.stream.any_fresh() {
            for (i, pixel) in self.stream.pixels().iter().enumerate() {
                self.frame_buffer[i] = Rgb {
                    r: scale8(pixel.color.r, pixel.decay),
                    g: scale8(pixel.color.g, pixel.decay),
                    b: scale8(pixel.color.b, pixel.decay),
                };
            }
            self.stream.decay_step(self.decay_rate);
        } else {
            let factor = self.blink.phase();
            for (i, pixel) in self.shadow.pixels().iter().enumerate() {
                self.frame_buffer[i] = if pixel.blink {
                    Rgb {
                        r: scale8(pixel.color.r, factor),
                        g: scale8(pixel.color.g, factor),
                        b: scale8(pixel.color.b, factor),
                    }
                } else {
                    pixel.color
                };
            }
            self.blink.advance();
        }

        &self.frame_buffer[..len]
    }

    /// Drain pending updates from the queue (non-blocking).
    ///
    /// Ingestion runs to completion before mode selection, so a tick never
    /// sees a pixel with some channels written and some not.
    fn process_updates(&mut self) {
        while let Some(update) = self.updates.receive() {
            self.apply(update);
        }
    }

    /// Apply one inbound update to the store its source addresses.
    ///
    /// The marking convention lives here, not in the stores: streamed
    /// writes always reset decay to fresh, shadow writes never touch the
    /// blink flag beyond what the `x` channel says. A write past the strip
    /// end is dropped with a warning.
    pub fn apply(&mut self, update: StripUpdate) {
        let result = match update.source {
            UpdateSource::Stream => {
                debug!(
                    "streamed led {} {:?} <- {}",
                    update.index, update.channel, update.value
                );
                self.stream
                    .set_channel(update.index, update.channel, update.value, true)
            }
            UpdateSource::Shadow => {
                debug!(
                    "shadow led {} {:?} <- {}",
                    update.index, update.channel, update.value
                );
                self.shadow
                    .set_channel(update.index, update.channel, update.value, false)
            }
        };
        if let Err(err) = result {
            warn!("dropping update: {err}");
        }
    }

    /// Persistent shadow state.
    pub fn shadow(&self) -> &ShadowStore<MAX_LEDS> {
        &self.shadow
    }

    /// Mutable shadow state, for seeding effects.
    pub fn shadow_mut(&mut self) -> &mut ShadowStore<MAX_LEDS> {
        &mut self.shadow
    }

    /// Transient streamed overlay.
    pub fn stream(&self) -> &StreamStore<MAX_LEDS> {
        &self.stream
    }

    /// Current blink phase, for external observation.
    pub fn blink_phase(&self) -> u8 {
        self.blink.phase()
    }
}
