mod tests {
    use std::vec::Vec;

    use fire_strips::{OutputDriver, Rgb, SmartLedsOutput};
    use smart_leds::SmartLedsWrite;

    #[derive(Default)]
    struct MockWriter {
        frames: Vec<Vec<Rgb>>,
        fail: bool,
    }

    impl SmartLedsWrite for MockWriter {
        type Error = ();
        type Color = Rgb;

        fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
        where
            T: IntoIterator<Item = I>,
            I: Into<Self::Color>,
        {
            if self.fail {
                return Err(());
            }
            self.frames.push(iterator.into_iter().map(Into::into).collect());
            Ok(())
        }
    }

    #[test]
    fn test_writes_both_strips_at_full_brightness() {
        let mut output =
            SmartLedsOutput::new(MockWriter::default(), MockWriter::default()).with_gamma(false);
        let first = [Rgb::new(10, 20, 30)];
        let second = [Rgb::new(1, 2, 3), Rgb::new(4, 5, 6)];
        output.show([first.as_slice(), second.as_slice()], 255);

        let (a, b) = output.release();
        assert_eq!(a.frames, [first.to_vec()]);
        assert_eq!(b.frames, [second.to_vec()]);
    }

    #[test]
    fn test_zero_brightness_is_black() {
        let mut output = SmartLedsOutput::new(MockWriter::default(), MockWriter::default());
        let strip = [Rgb::new(255, 128, 64); 3];
        output.show([strip.as_slice(), strip.as_slice()], 0);

        let (a, b) = output.release();
        assert_eq!(a.frames, [[Rgb::default(); 3].to_vec()]);
        assert_eq!(b.frames, [[Rgb::default(); 3].to_vec()]);
    }

    #[test]
    fn test_gamma_darkens_midtones() {
        let mut output = SmartLedsOutput::new(MockWriter::default(), MockWriter::default());
        let strip = [Rgb::new(128, 128, 128)];
        output.show([strip.as_slice(), strip.as_slice()], 255);

        let (a, _) = output.release();
        let pixel = a.frames[0][0];
        assert!(pixel.r < 128);
        assert_eq!(pixel.r, pixel.g);
        assert_eq!(pixel.g, pixel.b);
    }

    #[test]
    fn test_failed_strip_does_not_block_the_other() {
        let broken = MockWriter {
            fail: true,
            ..MockWriter::default()
        };
        let mut output = SmartLedsOutput::new(broken, MockWriter::default()).with_gamma(false);
        let strip = [Rgb::new(9, 9, 9)];
        output.show([strip.as_slice(), strip.as_slice()], 255);

        let (a, b) = output.release();
        assert!(a.frames.is_empty());
        assert_eq!(b.frames, [strip.to_vec()]);
    }
}
