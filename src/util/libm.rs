/*!
A no-std module for the handful of floating point operations we need.

`core` doesn't expose `f64::floor`, `f64::ceil` and friends, since on most
platforms they lower to calls into the system `libm`. These were vendored
from the [`libm`] crate. Our requirements are small: the redistribution of
durations divides and truncates, pluralization needs floor/ceil and the
number formatters need to split values into whole and fractional parts.

[`libm`]: https://github.com/rust-lang/libm
*/

pub(crate) trait Float {
    fn trunc(self) -> Self;
    fn fract(self) -> Self;
    fn floor(self) -> Self;
    fn ceil(self) -> Self;
    fn round(self) -> Self;
    fn round_ties_even(self) -> Self;
    fn abs(self) -> Self;
}

impl Float for f64 {
    fn trunc(self) -> f64 {
        let x = self;
        // 0x1p120f === 2 ^ 120
        let x1p120 = f64::from_bits(0x4770000000000000);

        let mut i: u64 = x.to_bits();
        let mut e: i64 = (i >> 52 & 0x7ff) as i64 - 0x3ff + 12;
        let m: u64;

        if e >= 52 + 12 {
            return x;
        }
        if e < 12 {
            e = 1;
        }
        m = -1i64 as u64 >> e;
        if (i & m) == 0 {
            return x;
        }
        core::hint::black_box(x + x1p120);
        i &= !m;
        f64::from_bits(i)
    }

    fn fract(self) -> f64 {
        self - self.trunc()
    }

    fn floor(self) -> f64 {
        let t = self.trunc();
        if self < t {
            t - 1.0
        } else {
            t
        }
    }

    fn ceil(self) -> f64 {
        let t = self.trunc();
        if self > t {
            t + 1.0
        } else {
            t
        }
    }

    fn round(self) -> f64 {
        (self + copysign64(0.5 - 0.25 * f64::EPSILON, self)).trunc()
    }

    fn round_ties_even(self) -> f64 {
        let rounded = self.round();
        if (self - self.trunc()).abs() != 0.5 {
            return rounded;
        }
        // On a tie, `round` went away from zero. Step back if that landed
        // on an odd number.
        if rounded % 2.0 != 0.0 {
            rounded - copysign64(1.0, self)
        } else {
            rounded
        }
    }

    fn abs(self) -> f64 {
        f64::from_bits(self.to_bits() & ((!0) >> 1))
    }
}

fn copysign64(x: f64, y: f64) -> f64 {
    let mut ux = x.to_bits();
    let uy = y.to_bits();
    ux &= (!0) >> 1;
    ux |= uy & (1 << 63);
    f64::from_bits(ux)
}

#[cfg(test)]
mod tests {
    use super::Float;

    #[test]
    fn floor_ceil() {
        assert_eq!(Float::floor(1.5f64), 1.0);
        assert_eq!(Float::ceil(1.5f64), 2.0);
        assert_eq!(Float::floor(-1.5f64), -2.0);
        assert_eq!(Float::ceil(-1.5f64), -1.0);
        assert_eq!(Float::floor(3.0f64), 3.0);
        assert_eq!(Float::ceil(3.0f64), 3.0);
        assert_eq!(Float::ceil(0.0001f64), 1.0);
    }

    #[test]
    fn round_ties_even() {
        assert_eq!(Float::round_ties_even(0.5f64), 0.0);
        assert_eq!(Float::round_ties_even(1.5f64), 2.0);
        assert_eq!(Float::round_ties_even(2.5f64), 2.0);
        assert_eq!(Float::round_ties_even(2.4f64), 2.0);
        assert_eq!(Float::round_ties_even(2.6f64), 3.0);
        assert_eq!(Float::round_ties_even(-2.5f64), -2.0);
    }
}
