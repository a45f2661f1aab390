use core::fmt;

/// Which of the three buttons a fault came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonId {
    Increase,
    Decrease,
    Palette,
}

/// Error returned by the control loop
///
/// The only runtime fault is a failed pin read; everything else is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// Reading a button pin failed
    Pin(ButtonId, E),
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pin(button, err) => write!(f, "failed to read {:?} button pin: {:?}", button, err),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for Error<E> {}
