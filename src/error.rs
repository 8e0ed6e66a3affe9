use core::fmt::{Display, Formatter};

/// One of the three fields of a [`TimeOfDay`](crate::TimeOfDay).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Field {
    Hour,
    Minute,
    Second,
}

impl Field {
    /// Largest value the field may hold.
    pub const fn max(self) -> u8 {
        match self {
            Field::Hour => 23,
            Field::Minute | Field::Second => 59,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Field::Hour => "hour",
            Field::Minute => "minute",
            Field::Second => "second",
        }
    }
}

/// A field value was above its bound when building a [`TimeOfDay`](crate::TimeOfDay).
///
/// Usually means the RTC driver handed over a corrupt reading. The sample
/// should be dropped by the caller; the time type never clamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutOfRange {
    pub field: Field,
    pub value: u8,
}

impl OutOfRange {
    /// Checks `value` against the bound of `field`.
    pub(crate) const fn check(field: Field, value: u8) -> Result<u8, OutOfRange> {
        if value > field.max() {
            Err(OutOfRange { field, value })
        } else {
            Ok(value)
        }
    }
}

impl Display for OutOfRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} {} out of range (max {})",
            self.field.name(),
            self.value,
            self.field.max()
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for OutOfRange {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds() {
        assert_eq!(Field::Hour.max(), 23);
        assert_eq!(Field::Minute.max(), 59);
        assert_eq!(Field::Second.max(), 59);
    }

    #[test]
    fn check_accepts_bound_and_rejects_above() {
        assert_eq!(OutOfRange::check(Field::Minute, 59), Ok(59));
        assert_eq!(
            OutOfRange::check(Field::Minute, 60),
            Err(OutOfRange {
                field: Field::Minute,
                value: 60
            })
        );
    }

    #[test]
    fn display() {
        let err = OutOfRange {
            field: Field::Hour,
            value: 24,
        };
        assert_eq!(err.to_string(), "hour 24 out of range (max 23)");
        let err = OutOfRange {
            field: Field::Second,
            value: 255,
        };
        assert_eq!(err.to_string(), "second 255 out of range (max 59)");
    }
}
