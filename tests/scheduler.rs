mod tests {
    use shadow_stream_composer::frame_scheduler::FrameScheduler;
    use shadow_stream_composer::{
        Composer, ComposerConfig, Duration, Instant, OutputDriver, Rgb, UpdateChannel,
    };

    /// Checks that every flush carries the full configured strip.
    struct AssertLenDriver {
        expect: usize,
    }

    impl OutputDriver for AssertLenDriver {
        fn write(&mut self, colors: &[Rgb]) {
            assert_eq!(colors.len(), self.expect);
        }
    }

    fn composer(updates: &'static UpdateChannel<4>) -> Composer<'static, 8, 4> {
        Composer::new(
            updates.receiver(),
            &ComposerConfig {
                strip_len: 8,
                decay_rate: 128,
                blink_step: 16,
            },
        )
    }

    #[test]
    fn test_tick_flushes_full_frame_and_paces() {
        static UPDATES: UpdateChannel<4> = UpdateChannel::new();
        let mut scheduler = FrameScheduler::with_tick_interval(
            composer(&UPDATES),
            AssertLenDriver { expect: 8 },
            Duration::from_millis(50),
        );

        let result = scheduler.tick(Instant::from_millis(0));
        assert_eq!(result.next_deadline, Instant::from_millis(50));
        assert_eq!(result.sleep_duration, Duration::from_millis(50));

        let result = scheduler.tick(Instant::from_millis(50));
        assert_eq!(result.next_deadline, Instant::from_millis(100));
        assert_eq!(result.sleep_duration, Duration::from_millis(50));
    }

    #[test]
    fn test_drift_correction_skips_backlog() {
        static UPDATES: UpdateChannel<4> = UpdateChannel::new();
        let mut scheduler = FrameScheduler::with_tick_interval(
            composer(&UPDATES),
            AssertLenDriver { expect: 8 },
            Duration::from_millis(50),
        );

        scheduler.tick(Instant::from_millis(0));

        // More than two intervals late: no catch-up burst, the schedule
        // restarts from now.
        let result = scheduler.tick(Instant::from_millis(300));
        assert_eq!(result.next_deadline, Instant::from_millis(350));
        assert_eq!(result.sleep_duration, Duration::from_millis(50));
    }
}
