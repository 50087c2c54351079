//! Tick scheduling and output flushing.
//!
//! Provides portable tick pacing without async/await or platform-specific
//! timers. The caller is responsible for sleeping/waiting between ticks.

use embassy_time::{Duration, Instant};

use crate::{Composer, OutputDriver};

/// Default update interval between ticks.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Result of a tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next tick.
    pub next_deadline: Instant,
    /// How long to wait until the next tick (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable tick scheduler that manages timing without async.
///
/// This scheduler:
/// - Tracks tick timing with drift correction
/// - Calls the composer and flushes the frame to the output driver
/// - Returns timing info so the caller can sleep appropriately
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(composer, driver);
///
/// loop {
///     let now = get_current_time_ms();
///     let result = scheduler.tick(Instant::from_millis(now));
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis() as u64);
/// }
/// ```
pub struct FrameScheduler<'a, O: OutputDriver, const MAX_LEDS: usize, const UPDATE_QUEUE_SIZE: usize>
{
    output: O,
    composer: Composer<'a, MAX_LEDS, UPDATE_QUEUE_SIZE>,
    next_tick: Instant,
    tick_interval: Duration,
}

impl<'a, O: OutputDriver, const MAX_LEDS: usize, const UPDATE_QUEUE_SIZE: usize>
    FrameScheduler<'a, O, MAX_LEDS, UPDATE_QUEUE_SIZE>
{
    /// Create a new scheduler with the default update interval.
    pub fn new(composer: Composer<'a, MAX_LEDS, UPDATE_QUEUE_SIZE>, driver: O) -> Self {
        Self::with_tick_interval(composer, driver, DEFAULT_TICK_INTERVAL)
    }

    /// Create a new scheduler with a custom update interval.
    pub fn with_tick_interval(
        composer: Composer<'a, MAX_LEDS, UPDATE_QUEUE_SIZE>,
        driver: O,
        tick_interval: Duration,
    ) -> Self {
        Self {
            output: driver,
            composer,
            next_tick: Instant::from_millis(0),
            tick_interval,
        }
    }

    /// Process one tick and return timing information.
    ///
    /// This method:
    /// 1. Applies drift correction if we've fallen too far behind
    /// 2. Renders the composite frame for this tick
    /// 3. Flushes it to the output driver as one show
    /// 4. Returns the deadline for the next tick
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        // Drift correction: if we've fallen more than two intervals behind,
        // reset to now. This prevents catch-up bursts after long stalls.
        let max_drift_ms = self.tick_interval.as_millis() * 2;
        if now.as_millis() > self.next_tick.as_millis() + max_drift_ms {
            self.next_tick = now;
        }

        // Render and flush
        let frame = self.composer.render();
        self.output.write(frame);

        // Calculate next tick deadline
        self.next_tick += self.tick_interval;

        // Calculate sleep duration (may be zero if we're behind)
        let sleep_duration = if self.next_tick.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_tick.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: self.next_tick,
            sleep_duration,
        }
    }

    /// Get a reference to the composer.
    pub fn composer(&self) -> &Composer<'a, MAX_LEDS, UPDATE_QUEUE_SIZE> {
        &self.composer
    }

    /// Get a mutable reference to the composer.
    pub fn composer_mut(&mut self) -> &mut Composer<'a, MAX_LEDS, UPDATE_QUEUE_SIZE> {
        &mut self.composer
    }
}
