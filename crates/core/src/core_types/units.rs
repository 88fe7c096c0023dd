//! Semantic quantity types for ride-telemetry kinematics
//!
//! This module provides newtype wrappers for the kinematic quantities of an
//! activity recording (distance, speed, acceleration) so unit mix-ups are
//! caught by the type system rather than discovered in analysis output.
//!
//! # Design Philosophy
//! - Magnitudes are stored in canonical SI units (metres, metres per second,
//!   metres per second squared) as `f64`
//! - "No measurement available" is a data value, not an error: a NaN
//!   magnitude is the unknown sentinel, it flows through arithmetic under
//!   IEEE-754 contagion rules and is read back with `is_unknown`
//! - Every operation is total: degenerate inputs (zero divisors, sentinel
//!   operands) produce well-defined outputs instead of panics or `Result`
//!   wrapping
//! - Implements common traits (Add, Sub, Div, Ord, Display, etc.)
//! - Serde support for serialization
//! - Total ordering via Ord trait (NaN handled as greater than all values)
//! - Values are construct-only: derive a new value instead of mutating
//!
//! # Usage
//! ```
//! use ride_telemetry_core::core_types::units::{Distance, Speed};
//! use std::time::Duration;
//!
//! let speed = Distance::new(100.0) / Duration::from_secs(10);
//! assert!((speed.kilometres_per_hour() - 36.0).abs() < 1e-9);
//!
//! // A dropped sample flows through as the unknown sentinel.
//! let delta = Speed::UNKNOWN - speed;
//! assert!(delta.is_unknown());
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Deref, Div, Sub};
use std::time::Duration;

// ============================================================================
// HELPER FUNCTIONS FOR TOTAL ORDERING
// ============================================================================

/// Compare f64 values with total ordering using Rust's built-in `total_cmp`
/// This sorts the NaN unknown sentinel after every finite magnitude
#[inline]
fn f64_total_cmp(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

// ============================================================================
// DISTANCE
// ============================================================================

/// Distance in metres
///
/// Cumulative or interval distance along a recorded track. Carries the same
/// NaN unknown-sentinel convention as `Speed`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Distance(f64);

impl Eq for Distance {}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Distance {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Distance {
    /// The distance of zero
    pub const ZERO: Distance = Distance(0.0);

    /// Metres per kilometre conversion factor
    const METRES_PER_KILOMETRE: f64 = 1000.0;

    /// The unknown distance, recorded when no measurement is available
    pub const UNKNOWN: Distance = Distance(f64::NAN);

    /// Create a new distance from a raw metres magnitude.
    /// Any float is accepted verbatim, including NaN and the infinities.
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Distance(value)
    }

    /// Get the distance in metres
    #[inline]
    #[must_use]
    pub fn metres(self) -> f64 {
        self.0
    }

    /// Get the distance in kilometres
    #[inline]
    #[must_use]
    pub fn kilometres(self) -> f64 {
        self.0 / Self::METRES_PER_KILOMETRE
    }

    /// Whether this distance is the unknown sentinel (a NaN magnitude)
    #[inline]
    #[must_use]
    pub fn is_unknown(self) -> bool {
        self.0.is_nan()
    }
}

impl From<f64> for Distance {
    fn from(v: f64) -> Self {
        Distance(v)
    }
}

impl From<Distance> for f64 {
    fn from(d: Distance) -> f64 {
        d.0
    }
}

impl Add for Distance {
    type Output = Distance;
    fn add(self, rhs: Distance) -> Distance {
        Distance(self.0 + rhs.0)
    }
}

impl Sub for Distance {
    type Output = Distance;
    fn sub(self, rhs: Distance) -> Distance {
        Distance(self.0 - rhs.0)
    }
}

impl Div<f64> for Distance {
    type Output = Distance;
    fn div(self, rhs: f64) -> Distance {
        Distance(self.0 / rhs)
    }
}

// Cross-type operation: distance / duration = speed
impl Div<Duration> for Distance {
    type Output = Speed;
    fn div(self, rhs: Duration) -> Speed {
        Speed(self.0 / rhs.as_secs_f64())
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} m", self.0)
    }
}

// ============================================================================
// SPEED
// ============================================================================

/// Speed in metres per second
///
/// The magnitude may be any `f64`, including NaN: a NaN magnitude is the
/// unknown sentinel meaning no measurement was available, which is distinct
/// from a true zero. The sentinel flows through the arithmetic operators
/// under normal IEEE-754 contagion rules, so a gap in recorded data degrades
/// derived values without branching at call sites; read the result back
/// through `is_unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Speed(f64);

impl Eq for Speed {}

impl PartialOrd for Speed {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Speed {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Speed {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Speed {
    /// The speed of zero
    pub const ZERO: Speed = Speed(0.0);

    /// Metres-per-second to kilometres-per-hour conversion factor
    const MPS_TO_KMH: f64 = 3.6;

    /// The unknown speed, recorded when no measurement is available
    pub const UNKNOWN: Speed = Speed(f64::NAN);

    /// Create a new speed from a raw metres-per-second magnitude.
    ///
    /// Accepts any float verbatim, including NaN and the infinities; the
    /// type performs no range or plausibility checks.
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Speed(value)
    }

    /// Get the speed in metres per second
    #[inline]
    #[must_use]
    pub fn metres_per_second(self) -> f64 {
        self.0
    }

    /// Whether this speed is the unknown sentinel (a NaN magnitude).
    /// This is the sole way to tell a known zero from a missing measurement.
    #[inline]
    #[must_use]
    pub fn is_unknown(self) -> bool {
        self.0.is_nan()
    }

    /// Get the speed in kilometres per hour
    ///
    /// An unknown speed converts to NaN; the sentinel propagates through the
    /// multiplication with no special-casing.
    #[inline]
    #[must_use]
    pub fn kilometres_per_hour(self) -> f64 {
        self.0 * Self::MPS_TO_KMH
    }
}

impl From<f64> for Speed {
    fn from(v: f64) -> Self {
        Speed(v)
    }
}

impl From<Speed> for f64 {
    fn from(s: Speed) -> f64 {
        s.0
    }
}

impl Add for Speed {
    type Output = Speed;
    fn add(self, rhs: Speed) -> Speed {
        Speed(self.0 + rhs.0)
    }
}

impl Sub for Speed {
    type Output = Speed;
    fn sub(self, rhs: Speed) -> Speed {
        Speed(self.0 - rhs.0)
    }
}

impl Div<f64> for Speed {
    type Output = Speed;
    fn div(self, rhs: f64) -> Speed {
        Speed(self.0 / rhs)
    }
}

// Cross-type operation: speed / duration = acceleration
impl Div<Duration> for Speed {
    type Output = Acceleration;
    fn div(self, rhs: Duration) -> Acceleration {
        Acceleration(self.0 / rhs.as_secs_f64())
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} m/s", self.0)
    }
}

// ============================================================================
// ACCELERATION
// ============================================================================

/// Acceleration in metres per second squared
///
/// Produced by dividing a `Speed` by a duration. Carries the same NaN
/// unknown-sentinel convention as `Speed`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Acceleration(f64);

impl Eq for Acceleration {}

impl PartialOrd for Acceleration {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Acceleration {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Acceleration {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Acceleration {
    /// The acceleration of zero
    pub const ZERO: Acceleration = Acceleration(0.0);

    /// The unknown acceleration, recorded when no measurement is available
    pub const UNKNOWN: Acceleration = Acceleration(f64::NAN);

    /// Create a new acceleration from a raw metres-per-second-squared
    /// magnitude. Any float is accepted verbatim, including NaN and the
    /// infinities.
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Acceleration(value)
    }

    /// Get the acceleration in metres per second squared
    #[inline]
    #[must_use]
    pub fn metres_per_second_per_second(self) -> f64 {
        self.0
    }

    /// Whether this acceleration is the unknown sentinel (a NaN magnitude)
    #[inline]
    #[must_use]
    pub fn is_unknown(self) -> bool {
        self.0.is_nan()
    }
}

impl From<f64> for Acceleration {
    fn from(v: f64) -> Self {
        Acceleration(v)
    }
}

impl From<Acceleration> for f64 {
    fn from(a: Acceleration) -> f64 {
        a.0
    }
}

impl Add for Acceleration {
    type Output = Acceleration;
    fn add(self, rhs: Acceleration) -> Acceleration {
        Acceleration(self.0 + rhs.0)
    }
}

impl Sub for Acceleration {
    type Output = Acceleration;
    fn sub(self, rhs: Acceleration) -> Acceleration {
        Acceleration(self.0 - rhs.0)
    }
}

impl Div<f64> for Acceleration {
    type Output = Acceleration;
    fn div(self, rhs: f64) -> Acceleration {
        Acceleration(self.0 / rhs)
    }
}

impl fmt::Display for Acceleration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} m/s²", self.0)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stores_raw_metres_per_second() {
        let s = Speed::new(7.5);
        assert_eq!(s.metres_per_second(), 7.5);
        // Negative and non-finite magnitudes pass through unchanged.
        assert_eq!(Speed::new(-3.25).metres_per_second(), -3.25);
        assert!(Speed::new(f64::INFINITY).metres_per_second().is_infinite());
    }

    #[test]
    fn test_zero_is_a_known_measurement() {
        assert!(!Speed::ZERO.is_unknown());
        assert_eq!(Speed::ZERO.metres_per_second(), 0.0);
    }

    #[test]
    fn test_unknown_is_detected() {
        assert!(Speed::UNKNOWN.is_unknown());
        assert!(Speed::new(f64::NAN).is_unknown());
        assert!(!Speed::new(0.0).is_unknown());
    }

    #[test]
    fn test_kilometres_per_hour_conversion() {
        let s = Speed::new(10.0);
        assert!((s.kilometres_per_hour() - 36.0).abs() < 1e-9);
        let slow = Speed::new(1.25);
        assert_eq!(slow.kilometres_per_hour(), 1.25 * 3.6);
    }

    #[test]
    fn test_unknown_kilometres_per_hour_is_nan() {
        assert!(Speed::UNKNOWN.kilometres_per_hour().is_nan());
    }

    #[test]
    fn test_speed_addition() {
        let sum = Speed::new(2.5) + Speed::new(3.0);
        assert_eq!(sum.metres_per_second(), 5.5);
    }

    #[test]
    fn test_speed_subtraction() {
        let diff = Speed::new(2.5) - Speed::new(3.0);
        assert_eq!(diff.metres_per_second(), -0.5);
    }

    #[test]
    fn test_unknown_propagates_through_addition() {
        assert!((Speed::UNKNOWN + Speed::ZERO).is_unknown());
        assert!((Speed::ZERO + Speed::UNKNOWN).is_unknown());
    }

    #[test]
    fn test_unknown_propagates_through_subtraction() {
        assert!((Speed::UNKNOWN - Speed::new(4.0)).is_unknown());
        assert!((Speed::new(4.0) - Speed::UNKNOWN).is_unknown());
    }

    #[test]
    fn test_scalar_division() {
        assert_eq!(Speed::new(10.0) / 2.0, Speed::new(5.0));
    }

    #[test]
    fn test_division_by_zero_follows_ieee_semantics() {
        // Finite nonzero dividend: signed infinity, still a known value.
        let inf = Speed::new(10.0) / 0.0;
        assert!(inf.metres_per_second().is_infinite());
        assert!(!inf.is_unknown());

        // Zero or unknown dividend: the result degrades to the sentinel.
        assert!((Speed::ZERO / 0.0).is_unknown());
        assert!((Speed::UNKNOWN / 0.0).is_unknown());
    }

    #[test]
    fn test_speed_over_duration_gives_acceleration() {
        let accel = Speed::new(10.0) / Duration::from_secs(2);
        assert_eq!(accel.metres_per_second_per_second(), 5.0);
    }

    #[test]
    fn test_speed_over_zero_duration_is_not_an_error() {
        let accel = Speed::new(10.0) / Duration::ZERO;
        assert!(accel.metres_per_second_per_second().is_infinite());
    }

    #[test]
    fn test_conversion_to_raw_float() {
        assert_eq!(f64::from(Speed::new(7.5)), 7.5);
        assert_eq!(*Speed::new(7.5), 7.5);
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Speed::default(), Speed::ZERO);
        assert_eq!(Distance::default(), Distance::ZERO);
        assert_eq!(Acceleration::default(), Acceleration::ZERO);
    }

    #[test]
    fn test_total_order_sorts_unknown_last() {
        let mut speeds = [Speed::new(3.0), Speed::UNKNOWN, Speed::new(-1.0)];
        speeds.sort_unstable();
        assert_eq!(speeds[0], Speed::new(-1.0));
        assert_eq!(speeds[1], Speed::new(3.0));
        assert!(speeds[2].is_unknown());
    }

    #[test]
    fn test_distance_over_duration_gives_speed() {
        let speed = Distance::new(100.0) / Duration::from_secs(10);
        assert_eq!(speed.metres_per_second(), 10.0);
    }

    #[test]
    fn test_distance_kilometres() {
        assert_eq!(Distance::new(2500.0).kilometres(), 2.5);
    }

    #[test]
    fn test_distance_sentinel_propagation() {
        assert!((Distance::UNKNOWN + Distance::new(5.0)).is_unknown());
        assert!((Distance::UNKNOWN / Duration::from_secs(1)).is_unknown());
    }

    #[test]
    fn test_acceleration_algebra_mirrors_speed() {
        let a = Acceleration::new(1.5) + Acceleration::new(0.5);
        assert_eq!(a.metres_per_second_per_second(), 2.0);
        assert!((Acceleration::UNKNOWN - Acceleration::ZERO).is_unknown());
        assert_eq!(Acceleration::new(5.0) / 2.0, Acceleration::new(2.5));
    }

    #[test]
    fn test_display_formatting() {
        assert_eq!(Speed::new(10.0).to_string(), "10.00 m/s");
        assert_eq!(Distance::new(1234.5).to_string(), "1234.50 m");
        assert_eq!(Acceleration::new(-0.25).to_string(), "-0.25 m/s²");
    }
}
