mod tests {
    use shadow_stream_composer::{RainbowIntro, Rgb, ShadowStore};

    #[test]
    fn test_paint_sweep_seeds_rainbow() {
        let mut shadow: ShadowStore<4> = ShadowStore::new(4);
        let mut intro = RainbowIntro::new();

        // Four pixels, 90 degrees of hue apart.
        let expected = [
            Rgb { r: 255, g: 0, b: 0 },
            Rgb {
                r: 127,
                g: 255,
                b: 0,
            },
            Rgb {
                r: 0,
                g: 255,
                b: 255,
            },
            Rgb {
                r: 127,
                g: 0,
                b: 255,
            },
        ];

        for (i, want) in expected.iter().enumerate() {
            assert!(intro.step(&mut shadow));
            let pixel = shadow.pixel(i).unwrap();
            assert_eq!(pixel.color, *want);
            // Seeding reuses the marking write path, so painted pixels
            // come out blink-flagged.
            assert!(pixel.blink);
        }
        assert!(!intro.is_finished());
    }

    #[test]
    fn test_clear_sweep_fades_to_black() {
        let mut shadow: ShadowStore<4> = ShadowStore::new(4);
        let mut intro = RainbowIntro::new();

        for _ in 0..4 {
            assert!(intro.step(&mut shadow));
        }
        for _ in 0..4 {
            assert!(intro.step(&mut shadow));
        }

        assert!(intro.is_finished());
        assert!(!intro.step(&mut shadow));
        for pixel in shadow.pixels() {
            assert_eq!(pixel.color, Rgb { r: 0, g: 0, b: 0 });
            assert!(pixel.blink);
        }
    }

    #[test]
    fn test_empty_strip_finishes_immediately() {
        let mut shadow: ShadowStore<4> = ShadowStore::new(0);
        let mut intro = RainbowIntro::new();
        assert!(!intro.step(&mut shadow));
        assert!(intro.is_finished());
    }
}
