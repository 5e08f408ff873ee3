mod tests {
    use snowflake_lights::{
        SNOWFLAKE_LEDS, XorShift32,
        color::{BLACK, Palette, Rgb, fill_palette, fill_rainbow},
        pattern::{
            BLUE, Cadence, ColorSelector, CrazyFlash, FLASH_INTERVAL, GREEN, PaletteFlash,
            Pattern, PatternSlot, PatternStatus, RED, RainbowPattern, RainbowWheel,
            SNOWFLAKE_PATTERN_COUNT, Segment, SolidFill, WALK_INTERVAL, WalkingSegment,
            snowflake_patterns,
        },
    };

    type Leds = [Rgb; SNOWFLAKE_LEDS];

    /// Run `ticks` steps after `New`, returning the statuses
    fn run<P: Pattern>(pattern: &mut P, leds: &mut [Rgb], ticks: usize) -> Vec<PatternStatus> {
        let mut rng = XorShift32::default();
        let mut status = pattern.step(leds, PatternStatus::New, &mut rng);
        let mut statuses = vec![status];
        for _ in 0..ticks {
            status = pattern.step(leds, status, &mut rng);
            statuses.push(status);
        }
        statuses
    }

    fn lit_positions(leds: &[Rgb]) -> Vec<usize> {
        leds.iter()
            .enumerate()
            .filter(|(_, led)| **led != BLACK)
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_cadence_fires_every_interval() {
        let mut cadence = Cadence::new(3);
        let fired: Vec<bool> = (0..7).map(|_| cadence.advance()).collect();
        assert_eq!(fired, [false, false, true, false, false, true, false]);

        cadence.reset();
        assert!(!cadence.advance());
        assert_eq!(cadence.interval(), 3);
    }

    #[test]
    fn test_needs_transmit() {
        assert!(PatternStatus::Refresh.needs_transmit());
        assert!(!PatternStatus::NoChange.needs_transmit());
        assert!(!PatternStatus::New.needs_transmit());
        assert!(!PatternStatus::FadeDone.needs_transmit());
    }

    #[test]
    fn test_solid_fill() {
        let mut leds: Leds = [BLACK; SNOWFLAKE_LEDS];
        let statuses = run(&mut SolidFill::new(ColorSelector::Red), &mut leds, 20);

        assert_eq!(statuses[0], PatternStatus::Refresh);
        assert!(statuses[1..].iter().all(|s| *s == PatternStatus::NoChange));
        assert!(leds.iter().all(|led| *led == RED));

        run(&mut SolidFill::new(ColorSelector::Green), &mut leds, 0);
        assert!(leds.iter().all(|led| *led == GREEN));
        run(&mut SolidFill::new(ColorSelector::Blue), &mut leds, 0);
        assert!(leds.iter().all(|led| *led == BLUE));
    }

    #[test]
    fn test_solid_random_per_led() {
        let mut leds: Leds = [BLACK; SNOWFLAKE_LEDS];
        let statuses = run(&mut SolidFill::new(ColorSelector::Random), &mut leds, 10);
        assert!(statuses[1..].iter().all(|s| *s == PatternStatus::NoChange));

        assert!(leds.iter().all(|led| led.r <= 63 && led.g <= 63 && led.b <= 63));
        assert!(leds.iter().any(|led| *led != leds[0]));
    }

    #[test]
    fn test_still_rainbow_holds() {
        let mut expected: Leds = [BLACK; SNOWFLAKE_LEDS];
        fill_rainbow(&mut expected);

        let mut leds: Leds = [BLACK; SNOWFLAKE_LEDS];
        let statuses = run(&mut RainbowPattern::still(), &mut leds, 50);
        assert_eq!(statuses[0], PatternStatus::Refresh);
        assert!(statuses[1..].iter().all(|s| *s == PatternStatus::NoChange));
        assert_eq!(leds, expected);
    }

    #[test]
    fn test_breathing_rainbow() {
        let mut fresh: Leds = [BLACK; SNOWFLAKE_LEDS];
        fill_rainbow(&mut fresh);

        let interval = usize::from(FLASH_INTERVAL);
        let mut leds: Leds = [BLACK; SNOWFLAKE_LEDS];
        let statuses = run(&mut RainbowPattern::breathing(), &mut leds, interval);

        assert!(statuses[1..interval].iter().all(|s| *s == PatternStatus::NoChange));
        assert_eq!(statuses[interval], PatternStatus::Refresh);
        assert_eq!(leds[0], Rgb::new(63, 0, 0));

        // 127 survives six halvings; the seventh empties the strip and
        // the gradient is drawn again
        let mut leds: Leds = [BLACK; SNOWFLAKE_LEDS];
        run(&mut RainbowPattern::breathing(), &mut leds, interval * 6);
        assert_eq!(leds[0], Rgb::new(1, 0, 0));
        let mut leds: Leds = [BLACK; SNOWFLAKE_LEDS];
        run(&mut RainbowPattern::breathing(), &mut leds, interval * 7);
        assert_eq!(leds, fresh);
    }

    #[test]
    fn test_rainbow_wheel_rotates_by_three() {
        let interval = usize::from(WALK_INTERVAL);
        let mut leds: Leds = [BLACK; SNOWFLAKE_LEDS];
        let statuses = run(&mut RainbowWheel::new(), &mut leds, interval);

        assert_eq!(statuses[interval], PatternStatus::Refresh);
        assert_eq!(statuses.iter().filter(|s| **s == PatternStatus::Refresh).count(), 2);
        assert_eq!(leds[3], Rgb::new(127, 0, 0));
        assert_eq!(leds[9], Rgb::new(0, 127, 0));
        assert_eq!(leds[15], Rgb::new(0, 0, 127));
    }

    #[test]
    fn test_palette_flash_refills_at_darkness() {
        let mut fresh: Leds = [BLACK; SNOWFLAKE_LEDS];
        fill_palette(&mut fresh, Palette::Cool);

        let interval = usize::from(FLASH_INTERVAL);
        let mut leds: Leds = [BLACK; SNOWFLAKE_LEDS];
        let mut pattern = PaletteFlash::new(Palette::Cool);
        run(&mut pattern, &mut leds, interval * 7);
        assert_ne!(leds, fresh);
        assert!(leds.iter().any(|led| *led != BLACK));

        // eighth halving takes 128 to zero
        let mut leds: Leds = [BLACK; SNOWFLAKE_LEDS];
        run(&mut pattern, &mut leds, interval * 8);
        assert_eq!(leds, fresh);
    }

    #[test]
    fn test_crazy_flash() {
        let interval = usize::from(FLASH_INTERVAL);
        let mut leds: Leds = [BLACK; SNOWFLAKE_LEDS];
        let statuses = run(&mut CrazyFlash::new(), &mut leds, interval * 6);

        assert_eq!(statuses[0], PatternStatus::Refresh);
        let refreshes = statuses.iter().filter(|s| **s == PatternStatus::Refresh).count();
        assert_eq!(refreshes, 7);
        // channels start at most 63, so the sixth halving redraws
        assert!(leds.iter().any(|led| *led != BLACK));
        assert!(leds.iter().all(|led| led.r <= 63 && led.g <= 63 && led.b <= 63));
    }

    #[test]
    fn test_walking_pair() {
        let interval = usize::from(FLASH_INTERVAL);
        let mut leds: Leds = [Rgb::new(9, 9, 9); SNOWFLAKE_LEDS];
        let mut pattern = WalkingSegment::new(Segment::Pair, ColorSelector::Red);

        run(&mut pattern, &mut leds, 0);
        assert_eq!(lit_positions(&leds), [0, 9]);
        assert_eq!(leds[0], RED);

        run(&mut pattern, &mut leds, interval);
        assert_eq!(lit_positions(&leds), [1, 10]);
    }

    #[test]
    fn test_walking_bar() {
        let interval = usize::from(FLASH_INTERVAL);
        let mut leds: Leds = [BLACK; SNOWFLAKE_LEDS];
        let mut pattern = WalkingSegment::new(Segment::Bar, ColorSelector::Blue);

        run(&mut pattern, &mut leds, 0);
        assert_eq!(lit_positions(&leds), [0, 1, 9, 10]);

        run(&mut pattern, &mut leds, interval * 2);
        assert_eq!(lit_positions(&leds), [6, 7, 15, 16]);
        assert_eq!(leds[6], BLUE);
    }

    #[test]
    fn test_walking_random_uses_one_color() {
        let mut leds: Leds = [BLACK; SNOWFLAKE_LEDS];
        run(
            &mut WalkingSegment::new(Segment::Bar, ColorSelector::Random),
            &mut leds,
            0,
        );
        assert!(leds[0] == leds[1] && leds[1] == leds[9] && leds[9] == leds[10]);
    }

    #[test]
    fn test_snowflake_table() {
        let mut table = snowflake_patterns();
        assert_eq!(table.len(), SNOWFLAKE_PATTERN_COUNT);
        assert!(!table.is_empty());
        assert_eq!(table.current_index(), 0);
        assert_eq!(table.current().name(), "solid_red");
        assert_eq!(table.slots()[SNOWFLAKE_PATTERN_COUNT - 1].name(), "reveal_rings_random");

        for expected in 1..SNOWFLAKE_PATTERN_COUNT {
            assert_eq!(table.advance(), expected);
        }
        assert_eq!(table.advance(), 0);
    }

    #[test]
    fn test_pattern_names_are_unique() {
        let table = snowflake_patterns();
        let names: Vec<&str> = table.slots().iter().map(PatternSlot::name).collect();
        for (i, name) in names.iter().enumerate() {
            assert!(!names[i + 1..].contains(name), "duplicate name {name}");
        }
    }

    #[test]
    fn test_every_slot_initializes_on_new() {
        let mut table = snowflake_patterns();
        let mut rng = XorShift32::default();
        for _ in 0..table.len() {
            let mut leds: Leds = [BLACK; SNOWFLAKE_LEDS];
            let name = table.current().name();
            let status = table
                .current_mut()
                .step(&mut leds, PatternStatus::New, &mut rng);
            assert_eq!(status, PatternStatus::Refresh, "{name}");
            assert!(leds.iter().any(|led| *led != BLACK), "{name}");
            table.advance();
        }
    }
}
