use crate::error::{Field, OutOfRange};

/// Wall-clock time of day as read from the RTC.
///
/// Fields are always in range: hour `0..=23`, minute and second `0..=59`.
/// There is no date and no arithmetic here; this is only the value passed from
/// the clock driver to whoever timestamps data with it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeOfDay {
    // Field order drives the derived lexicographic ordering.
    hour: u8,
    minute: u8,
    second: u8,
}

impl TimeOfDay {
    pub const MAX_HOUR: u8 = Field::Hour.max();
    pub const MAX_MINUTE: u8 = Field::Minute.max();
    pub const MAX_SECOND: u8 = Field::Second.max();

    /// 00:00:00
    pub const MIDNIGHT: Self = Self {
        hour: 0,
        minute: 0,
        second: 0,
    };

    /// 23:59:59, the last second of a calendar day.
    pub const LAST_SECOND: Self = Self {
        hour: Self::MAX_HOUR,
        minute: Self::MAX_MINUTE,
        second: Self::MAX_SECOND,
    };

    /// Builds a time, rejecting any field above its bound.
    ///
    /// Fields are checked hour first, so the error names the first bad one.
    pub const fn new(hour: u8, minute: u8, second: u8) -> Result<Self, OutOfRange> {
        if let Err(e) = OutOfRange::check(Field::Hour, hour) {
            return Err(e);
        }
        if let Err(e) = OutOfRange::check(Field::Minute, minute) {
            return Err(e);
        }
        if let Err(e) = OutOfRange::check(Field::Second, second) {
            return Err(e);
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    pub const fn hour(&self) -> u8 {
        self.hour
    }

    pub const fn minute(&self) -> u8 {
        self.minute
    }

    pub const fn second(&self) -> u8 {
        self.second
    }

    /// Replaces the hour. On error `self` is left untouched.
    pub fn set_hour(&mut self, hour: u8) -> Result<(), OutOfRange> {
        self.hour = OutOfRange::check(Field::Hour, hour)?;
        Ok(())
    }

    /// Replaces the minute. On error `self` is left untouched.
    pub fn set_minute(&mut self, minute: u8) -> Result<(), OutOfRange> {
        self.minute = OutOfRange::check(Field::Minute, minute)?;
        Ok(())
    }

    /// Replaces the second. On error `self` is left untouched.
    pub fn set_second(&mut self, second: u8) -> Result<(), OutOfRange> {
        self.second = OutOfRange::check(Field::Second, second)?;
        Ok(())
    }
}

impl TryFrom<(u8, u8, u8)> for TimeOfDay {
    type Error = OutOfRange;

    fn try_from((hour, minute, second): (u8, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(hour, minute, second)
    }
}

impl From<TimeOfDay> for (u8, u8, u8) {
    fn from(t: TimeOfDay) -> Self {
        (t.hour, t.minute, t.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u8, m: u8, s: u8) -> TimeOfDay {
        TimeOfDay::new(h, m, s).unwrap()
    }

    #[test]
    fn every_valid_time_reads_back() {
        for h in 0..=23 {
            for m in 0..=59 {
                for s in 0..=59 {
                    let time = TimeOfDay::new(h, m, s).unwrap();
                    assert_eq!((time.hour(), time.minute(), time.second()), (h, m, s));
                }
            }
        }
    }

    #[test]
    fn any_field_over_bound_is_rejected() {
        assert_eq!(
            TimeOfDay::new(24, 0, 0),
            Err(OutOfRange {
                field: Field::Hour,
                value: 24
            })
        );
        assert_eq!(
            TimeOfDay::new(0, 60, 0),
            Err(OutOfRange {
                field: Field::Minute,
                value: 60
            })
        );
        assert_eq!(
            TimeOfDay::new(0, 0, 61),
            Err(OutOfRange {
                field: Field::Second,
                value: 61
            })
        );
        for v in 60..=u8::MAX {
            assert!(TimeOfDay::new(0, v, 0).is_err());
            assert!(TimeOfDay::new(0, 0, v).is_err());
            assert!(TimeOfDay::new(v, 0, 0).is_err());
        }
    }

    #[test]
    fn first_bad_field_is_reported() {
        let err = TimeOfDay::new(24, 60, 61).unwrap_err();
        assert_eq!(err.field, Field::Hour);
        let err = TimeOfDay::new(23, 60, 61).unwrap_err();
        assert_eq!(err.field, Field::Minute);
    }

    #[test]
    fn day_boundaries() {
        assert_eq!(t(0, 0, 0), TimeOfDay::MIDNIGHT);
        assert_eq!(t(23, 59, 59), TimeOfDay::LAST_SECOND);
        assert_eq!(TimeOfDay::default(), TimeOfDay::MIDNIGHT);
    }

    #[test]
    fn equality() {
        let a = t(7, 30, 0);
        let b = t(7, 30, 0);
        let c = t(7, 30, 0);
        assert_eq!(a, a);
        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_eq!(b, c);
        assert_eq!(a, c);
        assert_ne!(a, t(7, 30, 1));
    }

    #[test]
    fn copy_is_independent() {
        let original = t(7, 30, 0);
        let mut copy = original;
        assert_eq!(copy, original);
        copy.set_second(1).unwrap();
        copy.set_hour(8).unwrap();
        assert_eq!(original, t(7, 30, 0));
        assert_eq!(copy, t(8, 30, 1));
    }

    #[test]
    fn failed_set_leaves_value_untouched() {
        let mut time = t(12, 34, 56);
        assert!(time.set_hour(24).is_err());
        assert!(time.set_minute(60).is_err());
        assert!(time.set_second(60).is_err());
        assert_eq!(time, t(12, 34, 56));
    }

    #[test]
    fn ordering_is_hour_then_minute_then_second() {
        assert!(t(1, 0, 0) > t(0, 59, 59));
        assert!(t(0, 1, 0) > t(0, 0, 59));
        assert!(t(0, 0, 1) > TimeOfDay::MIDNIGHT);
        assert!(TimeOfDay::LAST_SECOND > t(23, 59, 58));
        assert_eq!(t(5, 5, 5).cmp(&t(5, 5, 5)), core::cmp::Ordering::Equal);
    }

    #[test]
    fn tuple_conversions() {
        assert_eq!(TimeOfDay::try_from((13, 14, 15)), Ok(t(13, 14, 15)));
        assert!(TimeOfDay::try_from((13, 60, 15)).is_err());
        let raw: (u8, u8, u8) = t(13, 14, 15).into();
        assert_eq!(raw, (13, 14, 15));
    }

    #[test]
    fn usable_in_const_context() {
        const NOON: TimeOfDay = match TimeOfDay::new(12, 0, 0) {
            Ok(t) => t,
            Err(_) => panic!(),
        };
        assert_eq!(NOON.hour(), 12);
    }
}
