/*!
    Rational numbers as used for frame rates and time bases.
*/

use std::fmt;
use std::time::Duration;

/**
    An exact ratio of two integers.

    Containers express frame rates and time bases as rationals (e.g. NTSC
    film is 24000/1001); converting to floating point too early loses the
    distinction, so the exact form is carried through the pipeline.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rational {
    pub num: i32,
    pub den: i32,
}

impl Rational {
    pub const fn new(num: i32, den: i32) -> Self {
        Self { num, den }
    }

    /**
        The ratio as a float. Zero when the denominator is zero.
    */
    pub fn to_f64(self) -> f64 {
        if self.den == 0 {
            0.0
        } else {
            self.num as f64 / self.den as f64
        }
    }

    /**
        Interpreted as a rate (events per second), the duration of one event.

        Returns `None` for rates that are zero or negative, where no
        meaningful interval exists.
    */
    pub fn interval(self) -> Option<Duration> {
        let rate = self.to_f64();
        if rate > 0.0 {
            Some(Duration::from_secs_f64(1.0 / rate))
        } else {
            None
        }
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_f64_exact_and_ntsc() {
        assert_eq!(Rational::new(25, 1).to_f64(), 25.0);

        let ntsc = Rational::new(24000, 1001).to_f64();
        assert!((ntsc - 23.976).abs() < 0.001);
    }

    #[test]
    fn zero_denominator_is_zero() {
        assert_eq!(Rational::new(30, 0).to_f64(), 0.0);
    }

    #[test]
    fn interval_of_25fps_is_40ms() {
        let interval = Rational::new(25, 1).interval().unwrap();
        assert_eq!(interval, Duration::from_millis(40));
    }

    #[test]
    fn interval_of_invalid_rate_is_none() {
        assert_eq!(Rational::new(0, 1).interval(), None);
        assert_eq!(Rational::new(30, 0).interval(), None);
        assert_eq!(Rational::new(-25, 1).interval(), None);
    }

    #[test]
    fn display() {
        assert_eq!(Rational::new(24000, 1001).to_string(), "24000/1001");
    }
}
