//! Typed pixel update commands and path parsing
//!
//! The transport layer walks arbitrary JSON documents and finds numeric
//! leaves at paths shaped like `leds.<index>.<channel>`. This module turns
//! those paths into typed commands; anything malformed comes back as a
//! typed error for the caller to log and drop, never a crash.

use core::fmt;

use crate::channel::{Channel, Receiver, Sender};

/// A single addressable channel of one pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelId {
    Red,
    Green,
    Blue,
    /// Auxiliary channel: the blink flag on the shadow buffer. The streamed
    /// buffer has no auxiliary state, so writes there are discarded.
    Aux,
}

impl ChannelId {
    /// Map a wire channel key (`r`/`g`/`b`/`x`) to a channel.
    pub const fn from_key(key: char) -> Option<Self> {
        Some(match key {
            'r' => Self::Red,
            'g' => Self::Green,
            'b' => Self::Blue,
            'x' => Self::Aux,
            _ => return None,
        })
    }
}

/// Which buffer an update targets.
///
/// Live messages feed the streamed overlay; device-shadow deltas feed the
/// persistent shadow state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateSource {
    Stream,
    Shadow,
}

/// One inbound `(index, channel, value)` write, tagged with its source.
#[derive(Debug, Clone, Copy)]
pub struct StripUpdate {
    pub source: UpdateSource,
    pub index: usize,
    pub channel: ChannelId,
    /// Raw wire value. Not range-checked here; the store saturates it
    /// into 0-255 on write.
    pub value: i32,
}

/// Why a path failed to parse into a pixel address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// The path does not start with the `leds` segment.
    MissingPrefix,
    /// The index segment is absent or not a decimal number.
    BadIndex,
    /// The channel segment is absent or not one of `r`/`g`/`b`/`x`.
    UnknownChannel,
    /// Extra segments follow the channel.
    TrailingSegments,
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPrefix => write!(f, "path does not address the led strip"),
            Self::BadIndex => write!(f, "pixel index is not a decimal number"),
            Self::UnknownChannel => write!(f, "channel is not one of r/g/b/x"),
            Self::TrailingSegments => write!(f, "unexpected segments after the channel"),
        }
    }
}

/// Parse a `leds.<index>.<channel>` path into a pixel address.
///
/// A leading dot is accepted; JSON walkers commonly emit root-relative
/// paths like `.leds.3.r`.
pub fn parse_led_path(path: &str) -> Result<(usize, ChannelId), PathError> {
    let path = path.strip_prefix('.').unwrap_or(path);
    let mut segments = path.split('.');

    if segments.next() != Some("leds") {
        return Err(PathError::MissingPrefix);
    }

    let index = segments
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .ok_or(PathError::BadIndex)?;

    let channel = segments
        .next()
        .and_then(|s| {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(key), None) => ChannelId::from_key(key),
                _ => None,
            }
        })
        .ok_or(PathError::UnknownChannel)?;

    if segments.next().is_some() {
        return Err(PathError::TrailingSegments);
    }

    Ok((index, channel))
}

/// Type alias for the update sender
pub type UpdateSender<'a, const SIZE: usize> = Sender<'a, StripUpdate, SIZE>;

/// Type alias for the update receiver
pub type UpdateReceiver<'a, const SIZE: usize> = Receiver<'a, StripUpdate, SIZE>;

/// Type alias for the update queue
pub type UpdateChannel<const SIZE: usize> = Channel<StripUpdate, SIZE>;
