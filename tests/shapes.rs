mod tests {
    use dotstrip_composer::shape::DEFAULT_THRESHOLD;
    use dotstrip_composer::{
        Calibration, Color, Dot, Error, Gaussian, Layout, LightShape, Line, PixelArray, Span,
        Tukey, Unit,
    };

    const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);
    const BLUE: Color = Color::new(0.0, 0.0, 1.0, 1.0);
    const GRAY: Color = Color::new(0.5, 0.5, 0.5, 0.5);

    fn layout(led_count: usize) -> Layout {
        Layout::new(led_count, Calibration::default())
    }

    fn render<const N: usize>(shape: impl Into<LightShape<'static>>) -> [Color; N] {
        let mut leds = [Color::BLACK; N];
        shape.into().render_into(&mut leds).unwrap();
        leds
    }

    #[test]
    fn test_dot() {
        let dot = Dot::new(&layout(10), RED, 5.0, Unit::Index).unwrap();
        let leds: [Color; 10] = render(dot);
        for (i, led) in leds.iter().enumerate() {
            if i == 5 {
                assert_eq!(*led, RED);
            } else {
                assert_eq!(*led, Color::BLACK);
            }
        }
    }

    #[test]
    fn test_dot_validation() {
        let layout = layout(10);
        assert!(matches!(
            Dot::new(&layout, RED, 2.5, Unit::Index),
            Err(Error::Validation(_))
        ));
        assert_eq!(
            Dot::new(&layout, RED, 10.0, Unit::Index),
            Err(Error::Range {
                start: 10,
                end: 11,
                led_count: 10
            })
        );
        assert!(matches!(
            Dot::new(&layout, RED, -1.0, Unit::Index),
            Err(Error::Range { .. })
        ));
        assert!(matches!(
            Dot::new(&layout, Color::new(f32::NAN, 0.0, 0.0, 1.0), 1.0, Unit::Index),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn test_far_off_positions_are_range_errors() {
        let layout = layout(10);
        assert!(matches!(
            Dot::new(&layout, RED, 1e19, Unit::Index),
            Err(Error::Range { .. })
        ));
        assert!(matches!(
            Dot::new(&layout, RED, -1e19, Unit::Index),
            Err(Error::Range { .. })
        ));
        assert!(matches!(
            Dot::new(&layout, RED, -1e30, Unit::Degrees),
            Err(Error::Range { .. })
        ));
        assert!(matches!(
            Tukey::new(&layout, RED, 1e19, 4.0, 0.5, Unit::Index),
            Err(Error::Range { .. })
        ));
        assert!(matches!(
            Tukey::new(&layout, RED, 5.0, 1e19, 0.5, Unit::Index),
            Err(Error::Range { .. })
        ));
        assert!(matches!(
            Line::new(&layout, RED, [0.0, 1e19], Unit::Index),
            Err(Error::Range { .. })
        ));
    }

    #[test]
    fn test_dot_degrees() {
        let layout = layout(1110);
        let degrees = layout.calibration.index_to_degrees(600);
        let dot = Dot::new(&layout, RED, degrees, Unit::Degrees).unwrap();
        assert_eq!(dot.index(), 600);
    }

    #[test]
    fn test_line_is_half_open() {
        let line = Line::new(&layout(10), GRAY, [2.0, 4.0], Unit::Index).unwrap();
        assert_eq!(line.span(), Span { start: 2, end: 4 });
        let leds: [Color; 10] = render(line);
        assert_eq!(leds[1], Color::BLACK);
        assert_eq!(leds[2], GRAY);
        assert_eq!(leds[3], GRAY);
        assert_eq!(leds[4], Color::BLACK);
    }

    #[test]
    fn test_line_rejects_bad_ranges() {
        let layout = layout(10);
        assert!(matches!(
            Line::new(&layout, GRAY, [4.0, 2.0], Unit::Index),
            Err(Error::Range { .. })
        ));
        assert!(matches!(
            Line::new(&layout, GRAY, [2.0, 11.0], Unit::Index),
            Err(Error::Range { .. })
        ));
        assert!(matches!(
            Line::new(&layout, GRAY, [2.0, 3.5], Unit::Index),
            Err(Error::Validation(_))
        ));

        let empty = Line::new(&layout, GRAY, [3.0, 3.0], Unit::Index).unwrap();
        assert!(empty.span().is_empty());
    }

    #[test]
    fn test_line_degrees_are_reordered() {
        let layout = layout(1110);
        let calibration = layout.calibration;
        // Degrees decrease along the strip.
        let from = calibration.index_to_degrees(700);
        let to = calibration.index_to_degrees(600);
        let line = Line::new(&layout, GRAY, [from, to], Unit::Degrees).unwrap();
        assert_eq!(line.span(), Span { start: 600, end: 700 });
    }

    #[test]
    fn test_gaussian_envelope_and_cutoff() {
        let gaussian = Gaussian::new(&layout(21), RED, 10.0, 2.0, Unit::Index).unwrap();
        assert_eq!(gaussian.threshold(), DEFAULT_THRESHOLD);
        let leds: [Color; 21] = render(gaussian);

        assert_eq!(leds[10], RED);
        let expected = (-0.5f32).exp();
        assert!((leds[12].a - expected).abs() < 1e-5);
        assert_eq!(leds[12].r, 1.0);
        assert!(leds[13].a > 0.0);
        assert_eq!(leds[14], Color::BLACK);
        assert_eq!(leds[6], Color::BLACK);
        assert_eq!(leds[0], Color::BLACK);
    }

    #[test]
    fn test_gaussian_threshold() {
        let layout = layout(21);
        let wide = Gaussian::new(&layout, RED, 10.0, 2.0, Unit::Index)
            .unwrap()
            .with_threshold(0.0)
            .unwrap();
        let leds: [Color; 21] = render(wide);
        assert!(leds[0].a > 0.0);

        let gaussian = Gaussian::new(&layout, RED, 10.0, 2.0, Unit::Index).unwrap();
        assert!(gaussian.with_threshold(1.5).is_err());
        assert!(Gaussian::new(&layout, RED, 10.0, 0.0, Unit::Index).is_err());
    }

    #[test]
    fn test_gaussian_degrees() {
        let layout = layout(1110);
        let calibration = layout.calibration;
        let center = calibration.index_to_degrees(500);
        let gaussian = Gaussian::new(&layout, RED, center, 4.0, Unit::Degrees).unwrap();
        assert!((gaussian.center() - 500.0).abs() < 1e-2);
        assert!((gaussian.width() - calibration.degrees_to_span(4.0)).abs() < 1e-4);
    }

    #[test]
    fn test_tukey_rectangular() {
        let tukey = Tukey::new(&layout(20), RED, 10.0, 6.0, 0.0, Unit::Index).unwrap();
        assert_eq!(tukey.span(), Span { start: 7, end: 13 });
        let leds: [Color; 20] = render(tukey);
        assert_eq!(leds[6], Color::BLACK);
        for led in &leds[7..13] {
            assert_eq!(*led, RED);
        }
        assert_eq!(leds[13], Color::BLACK);
    }

    #[test]
    fn test_tukey_hann() {
        let tukey = Tukey::new(&layout(20), RED, 10.0, 5.0, 1.0, Unit::Index).unwrap();
        assert_eq!(tukey.span(), Span { start: 7, end: 12 });
        let leds: [Color; 20] = render(tukey);
        assert!(leds[7].a.abs() < 1e-6);
        assert!((leds[8].a - 0.5).abs() < 1e-5);
        assert!((leds[9].a - 1.0).abs() < 1e-5);
        assert!((leds[10].a - 0.5).abs() < 1e-5);
        assert!(leds[11].a.abs() < 1e-6);
    }

    #[test]
    fn test_tukey_validation() {
        let layout = layout(20);
        assert!(matches!(
            Tukey::new(&layout, RED, 1.0, 6.0, 0.5, Unit::Index),
            Err(Error::Range { .. })
        ));
        assert!(matches!(
            Tukey::new(&layout, RED, 10.0, 2.5, 0.5, Unit::Index),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            Tukey::new(&layout, RED, 10.0, 0.0, 0.5, Unit::Index),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn test_pixel_array_direct() {
        static COLORS: [Color; 4] = [RED, BLUE, GRAY, RED];
        let array = PixelArray::new(&layout(10), &COLORS, [2.0, 6.0], Unit::Index).unwrap();
        let leds: [Color; 10] = render(array);
        assert_eq!(&leds[2..6], &COLORS);
        assert_eq!(leds[1], Color::BLACK);
        assert_eq!(leds[6], Color::BLACK);
    }

    #[test]
    fn test_pixel_array_resampled() {
        static COLORS: [Color; 2] = [RED, BLUE];
        let array = PixelArray::new(&layout(10), &COLORS, [0.0, 5.0], Unit::Index).unwrap();
        let leds: [Color; 10] = render(array);
        assert_eq!(leds[0], RED);
        assert_eq!(leds[4], BLUE);
        assert_eq!(leds[2], Color::new(0.5, 0.0, 0.5, 1.0));
        assert_eq!(leds[5], Color::BLACK);
    }

    #[test]
    fn test_pixel_array_validation() {
        let layout = layout(10);
        assert!(matches!(
            PixelArray::new(&layout, &[], [0.0, 5.0], Unit::Index),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            PixelArray::new(&layout, &[RED], [0.0, 12.0], Unit::Index),
            Err(Error::Range { .. })
        ));
    }

    #[test]
    fn test_render_into_checks_length() {
        let dot: LightShape<'_> = Dot::new(&layout(10), RED, 5.0, Unit::Index).unwrap().into();
        let mut leds = [Color::BLACK; 8];
        assert_eq!(
            dot.render_into(&mut leds),
            Err(Error::Size {
                expected: 10,
                actual: 8
            })
        );
        assert_eq!(dot.fill_color(), Some(RED));
        assert_eq!(dot.led_count(), 10);
    }

    #[test]
    fn test_color_from_slice() {
        assert_eq!(Color::from_slice(&[0.1, 0.2, 0.3]), Ok(Color::new(0.1, 0.2, 0.3, 1.0)));
        assert_eq!(
            Color::from_slice(&[0.1, 0.2, 0.3, 0.4]),
            Ok(Color::new(0.1, 0.2, 0.3, 0.4))
        );
        assert!(matches!(Color::from_slice(&[0.1, 0.2]), Err(Error::Validation(_))));
    }
}
