mod tests {
    use snowflake_lights::color::{
        BLACK, Palette, Rgb, clear, fill_indices, fill_palette, fill_rainbow, fill_range, halve,
        intermediate_weights, rgb_from_u32, rotate_right, rotate_right_by,
    };

    const RED: Rgb = Rgb { r: 128, g: 0, b: 0 };
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    fn numbered<const N: usize>() -> [Rgb; N] {
        let mut leds = [BLACK; N];
        for (i, led) in leds.iter_mut().enumerate() {
            *led = Rgb::new(i as u8, 0, 0);
        }
        leds
    }

    fn count_nonzero(leds: &[Rgb]) -> usize {
        leds.iter()
            .map(|led| [led.r, led.g, led.b].iter().filter(|c| **c != 0).count())
            .sum()
    }

    #[test]
    fn test_rgb_from_u32() {
        assert_eq!(rgb_from_u32(0x80_30_00), Rgb::new(0x80, 0x30, 0));
        assert_eq!(rgb_from_u32(0xFF_00_00_01), Rgb::new(0, 0, 1));
    }

    #[test]
    fn test_rotate_right() {
        let mut leds = numbered::<5>();
        rotate_right(&mut leds);
        assert_eq!(leds[0], Rgb::new(4, 0, 0));
        assert_eq!(leds[1], Rgb::new(0, 0, 0));
        assert_eq!(leds[4], Rgb::new(3, 0, 0));

        let mut empty: [Rgb; 0] = [];
        rotate_right(&mut empty);
    }

    #[test]
    fn test_rotate_full_circle_is_identity() {
        fn check<const N: usize>() {
            let original = numbered::<N>();
            let mut leds = original;
            for _ in 0..N {
                rotate_right(&mut leds);
            }
            assert_eq!(leds, original, "N = {N}");
        }

        check::<1>();
        check::<2>();
        check::<7>();
        check::<18>();
        check::<24>();
    }

    #[test]
    fn test_rotate_right_by() {
        let mut stepped = numbered::<18>();
        let mut jumped = numbered::<18>();
        for _ in 0..3 {
            rotate_right(&mut stepped);
        }
        rotate_right_by(&mut jumped, 3);
        assert_eq!(stepped, jumped);
        assert_eq!(jumped[3], Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_halve_counts_remaining_channels() {
        let mut leds = [Rgb::new(255, 1, 2), Rgb::new(0, 0, 3)];
        assert_eq!(halve(&mut leds), 3);
        assert_eq!(leds, [Rgb::new(127, 0, 1), Rgb::new(0, 0, 1)]);

        let mut dark = [BLACK; 4];
        assert_eq!(halve(&mut dark), 0);
    }

    #[test]
    fn test_eight_halvings_reach_black() {
        let mut leds = [WHITE, Rgb::new(0x80, 0x30, 0x01), Rgb::new(7, 200, 64)];
        for step in 1..=8 {
            let remaining = halve(&mut leds);
            assert_eq!(remaining, count_nonzero(&leds), "step {step}");
            if step < 8 {
                assert!(remaining > 0, "white must survive {step} halvings");
            }
        }
        assert_eq!(leds, [BLACK; 3]);
    }

    #[test]
    fn test_fill_range_and_indices() {
        let mut leds = [BLACK; 8];
        fill_range(&mut leds, 2, 4, RED);
        assert_eq!(leds, [BLACK, BLACK, RED, RED, RED, BLACK, BLACK, BLACK]);

        clear(&mut leds);
        fill_indices(&mut leds, &[0, 3, 7], WHITE);
        assert_eq!(leds, [WHITE, BLACK, BLACK, WHITE, BLACK, BLACK, BLACK, WHITE]);
    }

    #[test]
    #[should_panic]
    fn test_fill_range_out_of_bounds_panics() {
        let mut leds = [BLACK; 4];
        fill_range(&mut leds, 2, 4, RED);
    }

    #[test]
    fn test_rainbow_primaries() {
        let mut leds = [BLACK; 18];
        fill_rainbow(&mut leds);

        assert_eq!(leds[0], Rgb::new(127, 0, 0));
        assert_eq!(leds[6], Rgb::new(0, 127, 0));
        assert_eq!(leds[12], Rgb::new(0, 0, 127));

        assert_eq!(leds[1], Rgb::new(127, 26, 0));
        assert_eq!(leds[3], Rgb::new(76, 76, 0));
        assert_eq!(leds[5], Rgb::new(26, 127, 0));
        assert_eq!(leds[17], Rgb::new(127, 0, 26));
    }

    #[test]
    fn test_rainbow_weights_strictly_decrease() {
        for sector in 2..=6 {
            let weights = intermediate_weights(sector);
            assert_eq!(weights.len(), sector - 1);
            assert_eq!(weights[0], 127);
            assert!(weights.windows(2).all(|pair| pair[0] > pair[1]), "sector {sector}");
        }
        assert!(intermediate_weights(1).is_empty());
        assert_eq!(intermediate_weights(9), intermediate_weights(6));
    }

    #[test]
    fn test_rainbow_other_lengths() {
        let mut short = [BLACK; 2];
        fill_rainbow(&mut short);
        assert_eq!(short, [Rgb::new(127, 0, 0), Rgb::new(0, 127, 0)]);

        let mut long = [BLACK; 24];
        fill_rainbow(&mut long);
        assert_eq!(long[18], Rgb::new(127, 0, 0));
        assert_eq!(long[..6], long[18..]);
    }

    #[test]
    fn test_palette_layout() {
        let mut leds = [BLACK; 5];
        fill_palette(&mut leds, Palette::Warm);
        assert_eq!(
            leds,
            [
                Rgb::new(76, 76, 0),
                Rgb::new(128, 0, 0),
                Rgb::new(102, 51, 0),
                Rgb::new(128, 0, 0),
                Rgb::new(76, 76, 0),
            ]
        );

        fill_palette(&mut leds, Palette::Cool);
        assert_eq!(leds[1], Rgb::new(0, 0, 128));
        assert_eq!(leds[2], Rgb::new(0, 51, 102));
    }
}
