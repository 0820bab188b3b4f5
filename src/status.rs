//! Sticky error reporting for multi-step draws
//!
//! A string draw touches hundreds of pixels; a bad coordinate in the middle
//! must not abort the rest of the pass. Failures are latched here instead and
//! the caller inspects the latch once the whole operation is done.

use core::fmt::{self, Write};

use heapless::String;

use crate::error::Error;

pub const MESSAGE_CAPACITY: usize = 96;

#[derive(Debug, Default)]
pub struct ErrorLatch {
    first: Option<Error>,
    count: u32,
    message: String<MESSAGE_CAPACITY>,
}

impl ErrorLatch {
    pub const fn new() -> Self {
        Self {
            first: None,
            count: 0,
            message: String::new(),
        }
    }

    /// Record a failure. The first one since the last `clear` keeps the
    /// message; later ones only bump the count.
    pub fn raise(&mut self, err: Error) {
        self.count = self.count.saturating_add(1);
        if self.first.is_some() {
            return;
        }
        self.first = Some(err);
        self.message.clear();
        let _ = write!(Truncate(&mut self.message), "{}", err);
    }

    pub fn clear(&mut self) {
        self.first = None;
        self.count = 0;
        self.message.clear();
    }

    pub fn is_raised(&self) -> bool {
        self.first.is_some()
    }

    pub fn first(&self) -> Option<Error> {
        self.first
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

impl fmt::Display for ErrorLatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.first {
            None => write!(f, "ok"),
            Some(_) if self.count > 1 => {
                write!(f, "{} (+{} more)", self.message, self.count - 1)
            }
            Some(_) => write!(f, "{}", self.message),
        }
    }
}

/// Writes as many characters as still fit and drops the rest.
struct Truncate<'a, const N: usize>(&'a mut String<N>);

impl<const N: usize> Write for Truncate<'_, N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for ch in s.chars() {
            if self.0.push(ch).is_err() {
                break;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{BoundsError, BoundsReason, TransportError};

    #[test]
    fn keeps_first_failure_and_counts_the_rest() {
        let mut latch = ErrorLatch::new();
        assert!(!latch.is_raised());

        let bounds = BoundsError::new(330, 10, 1, 1, BoundsReason::Overshoot);
        latch.raise(bounds.into());
        latch.raise(TransportError::Bus.into());

        assert!(latch.is_raised());
        assert_eq!(latch.count(), 2);
        assert_eq!(latch.first(), Some(Error::Bounds(bounds)));
        assert_eq!(latch.message(), "bad region (overshoot) x=330 y=10 w=1 h=1");

        latch.clear();
        assert!(!latch.is_raised());
        assert_eq!(latch.message(), "");
    }

    #[test]
    fn long_messages_keep_the_part_that_fits() {
        let mut message: String<8> = String::new();
        write!(Truncate(&mut message), "{}-{}", "bad region", 12345).unwrap();
        assert_eq!(message.as_str(), "bad regi");

        let mut message: String<8> = String::new();
        write!(Truncate(&mut message), "{} {}", "ok", "overlong segment").unwrap();
        assert_eq!(message.as_str(), "ok overl");
    }
}
