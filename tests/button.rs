mod tests {
    use std::cell::Cell;
    use std::convert::Infallible;
    use std::rc::Rc;

    use embedded_hal::digital::{ErrorKind, ErrorType, InputPin};
    use fire_strips::{Button, ButtonConfig};

    const CONFIG: ButtonConfig = ButtonConfig {
        frames_to_confirm_press: 3,
        frames_to_confirm_release: 4,
        frames_to_confirm_hold: 10,
    };

    /// Active-low pin whose level is shared with the test
    #[derive(Clone, Default)]
    struct MockPin {
        down: Rc<Cell<bool>>,
    }

    impl ErrorType for MockPin {
        type Error = Infallible;
    }

    impl InputPin for MockPin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.down.get())
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Ok(self.down.get())
        }
    }

    struct BrokenPin;

    impl ErrorType for BrokenPin {
        type Error = ErrorKind;
    }

    impl InputPin for BrokenPin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Err(ErrorKind::Other)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Err(ErrorKind::Other)
        }
    }

    fn button() -> Button<()> {
        Button::new((), CONFIG)
    }

    /// Feed a level for `ticks` frames, returning how many ticks clicked
    fn feed(button: &mut Button<()>, is_down: bool, ticks: usize) -> usize {
        (0..ticks)
            .filter(|_| {
                button.update(is_down);
                button.clicked()
            })
            .count()
    }

    #[test]
    fn test_press_confirmed_after_threshold() {
        let mut button = button();

        button.update(true);
        assert!(!button.is_pressed());
        assert!(button.is_pending());
        button.update(true);
        assert!(!button.is_pressed());
        assert!(!button.clicked());

        button.update(true);
        assert!(button.is_pressed());
        assert!(button.clicked());
        assert!(!button.is_pending());
    }

    #[test]
    fn test_short_press_is_ignored() {
        let mut button = button();
        let clicks = feed(&mut button, true, 2) + feed(&mut button, false, 5);
        assert_eq!(clicks, 0);
        assert!(!button.is_pressed());
    }

    #[test]
    fn test_bounce_restarts_press_countdown() {
        let mut button = button();
        let mut clicks = 0;
        for _ in 0..20 {
            clicks += feed(&mut button, true, 2);
            clicks += feed(&mut button, false, 1);
        }
        assert_eq!(clicks, 0);
        assert!(!button.is_pressed());
    }

    #[test]
    fn test_click_fires_once_per_press() {
        let mut button = button();
        assert_eq!(feed(&mut button, true, 100), 1);
        assert!(button.is_pressed());
        assert!(!button.clicked());
    }

    #[test]
    fn test_release_confirmed_after_threshold() {
        let mut button = button();
        feed(&mut button, true, 3);

        feed(&mut button, false, 3);
        assert!(button.is_pressed());
        feed(&mut button, false, 1);
        assert!(!button.is_pressed());
    }

    #[test]
    fn test_release_bounce_keeps_press() {
        let mut button = button();
        assert_eq!(feed(&mut button, true, 3), 1);

        // Release glitches shorter than the threshold never release the button
        let mut clicks = 0;
        for _ in 0..10 {
            clicks += feed(&mut button, false, 3);
            clicks += feed(&mut button, true, 1);
        }
        assert_eq!(clicks, 0);
        assert!(button.is_pressed());
    }

    #[test]
    fn test_second_press_clicks_again() {
        let mut button = button();
        assert_eq!(feed(&mut button, true, 5), 1);
        feed(&mut button, false, 4);
        assert!(!button.is_pressed());
        assert_eq!(feed(&mut button, true, 5), 1);
    }

    #[test]
    fn test_held_after_hold_threshold() {
        let mut button = button();
        feed(&mut button, true, 3);
        assert!(!button.held());
        assert_eq!(button.held_frames(), 1);

        feed(&mut button, true, 8);
        assert!(!button.held());
        feed(&mut button, true, 1);
        assert!(button.held());

        feed(&mut button, false, 4);
        assert!(!button.held());
        assert_eq!(button.held_frames(), 0);
    }

    #[test]
    fn test_zero_threshold_confirms_immediately() {
        let config = ButtonConfig {
            frames_to_confirm_press: 0,
            frames_to_confirm_release: 0,
            frames_to_confirm_hold: 0,
        };
        let mut button = Button::new((), config);
        button.update(true);
        assert!(button.is_pressed());
        assert!(button.clicked());
        assert!(button.held());
        button.update(false);
        assert!(!button.is_pressed());
    }

    #[test]
    fn test_reset() {
        let mut button = button();
        feed(&mut button, true, 3);
        button.reset();
        assert!(!button.is_pressed());
        assert!(!button.clicked());
        assert!(!button.is_pending());
    }

    #[test]
    fn test_tick_reads_active_low_pin() {
        let pin = MockPin::default();
        let mut button = Button::new(pin.clone(), CONFIG);

        pin.down.set(true);
        for _ in 0..3 {
            button.tick().unwrap();
        }
        assert!(button.is_pressed());
        assert!(button.clicked());

        pin.down.set(false);
        for _ in 0..4 {
            button.tick().unwrap();
        }
        assert!(!button.is_pressed());
    }

    #[test]
    fn test_tick_propagates_pin_error() {
        let mut button = Button::new(BrokenPin, CONFIG);
        assert!(matches!(button.tick(), Err(ErrorKind::Other)));
        assert!(!button.is_pressed());
    }

    #[test]
    fn test_thresholds_scale_with_rate() {
        assert_eq!(
            ButtonConfig::for_rate(60),
            ButtonConfig {
                frames_to_confirm_press: 3,
                frames_to_confirm_release: 3,
                frames_to_confirm_hold: 24,
            }
        );
        assert_eq!(ButtonConfig::for_rate(200).frames_to_confirm_hold, 80);
        assert_eq!(ButtonConfig::default(), ButtonConfig::for_rate(60));
    }
}
