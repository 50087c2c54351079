#![no_std]

pub mod animation;
pub mod channel;
pub mod color;
pub mod composer;
pub mod frame_scheduler;
pub mod intro;
pub mod math8;
pub mod store;
pub mod update;

pub use animation::BlinkWave;
pub use composer::{Composer, ComposerConfig};
pub use frame_scheduler::FrameScheduler;
pub use intro::RainbowIntro;
pub use store::{ShadowPixel, ShadowStore, StreamStore, StreamedPixel};
pub use update::{
    ChannelId, StripUpdate, UpdateChannel, UpdateReceiver, UpdateSender, UpdateSource,
};

pub use color::{Rgb, hsv_degrees_to_rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The compositing engine is generic over this trait; one `write` call
/// carries the full frame and doubles as the strip's atomic "show".
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
