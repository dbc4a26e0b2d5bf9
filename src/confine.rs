//! # Value Confinement
//!
//! Every coordinate, size and alignment that enters a field passes through
//! [`confine`]. Out-of-range numbers are silently pulled back into range;
//! nothing here can fail.
//!
//! ```
//! use zebrakit::confine::{confine, confine_coordinate};
//!
//! assert_eq!(confine(15, 1, 10), 10);
//! assert_eq!(confine_coordinate(-40), 0);
//! assert_eq!(confine_coordinate(120), 120);
//! ```

/// Largest coordinate or size ZPL accepts, in dots.
pub const COORD_MAX: i32 = 32000;

/// Largest field alignment (justification) value: 0 left, 1 right, 2 auto.
pub const ALIGNMENT_MAX: i32 = 2;

/// Restrict `value` to `[lower, upper]`, both inclusive.
///
/// Returns `upper` when `value >= upper`, `lower` when `value <= lower`,
/// otherwise `value` unchanged. The upper bound is checked first, so an
/// inverted range (`lower > upper`) yields `upper`.
#[inline]
pub fn confine<T: PartialOrd>(value: T, lower: T, upper: T) -> T {
    if value >= upper {
        upper
    } else if value <= lower {
        lower
    } else {
        value
    }
}

/// Confine a coordinate or size into `[0, 32000]`.
#[inline]
pub fn confine_coordinate(value: i32) -> i32 {
    confine(value, 0, COORD_MAX)
}

/// Confine an alignment code into `[0, 2]`.
#[inline]
pub fn confine_alignment(value: i32) -> i32 {
    confine(value, 0, ALIGNMENT_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confine_inside_range_is_identity() {
        for v in -5..=15 {
            assert_eq!(confine(v, -5, 15), v);
        }
    }

    #[test]
    fn test_confine_always_in_range() {
        let samples = [i32::MIN, -32001, -1, 0, 1, 31999, 32000, 32001, i32::MAX];
        for v in samples {
            let c = confine_coordinate(v);
            assert!((0..=COORD_MAX).contains(&c), "{} confined to {}", v, c);
        }
    }

    #[test]
    fn test_confine_edges() {
        assert_eq!(confine(10, 0, 10), 10);
        assert_eq!(confine(0, 0, 10), 0);
        assert_eq!(confine(11, 0, 10), 10);
        assert_eq!(confine(-1, 0, 10), 0);
    }

    #[test]
    fn test_confine_alignment() {
        assert_eq!(confine_alignment(-3), 0);
        assert_eq!(confine_alignment(1), 1);
        assert_eq!(confine_alignment(7), 2);
    }

    #[test]
    fn test_confine_floats() {
        assert_eq!(confine(2.5_f64, 1.0, 100.0), 2.5);
        assert_eq!(confine(0.2_f64, 1.0, 100.0), 1.0);
    }
}
