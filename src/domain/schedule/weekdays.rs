//! Set of weekdays on which a classroom meets.

use chrono::Weekday;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Weekdays in wire order: index 0 is Sunday.
const SUNDAY_FIRST: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// A subset of {Sunday..Saturday}, stored as a 7-bit mask.
///
/// On the wire this is the boolean array `[Sun, Mon, Tue, Wed, Thu, Fri, Sat]`.
/// Shorter arrays are padded with `false` and extra elements are ignored.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    pub const EMPTY: WeekdaySet = WeekdaySet(0);
    pub const EVERY_DAY: WeekdaySet = WeekdaySet(0b111_1111);
    /// Monday through Friday.
    pub const WORKWEEK: WeekdaySet = WeekdaySet(0b011_1110);

    /// Builds a set from Sunday-first flags.
    pub fn from_flags(flags: &[bool]) -> Self {
        let mask = flags
            .iter()
            .take(7)
            .enumerate()
            .filter(|(_, selected)| **selected)
            .fold(0u8, |mask, (idx, _)| mask | (1 << idx));
        Self(mask)
    }

    /// Builds a set from Sunday-first indices (0 = Sunday .. 6 = Saturday).
    pub fn from_indices<I>(indices: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = i32>,
    {
        let mut mask = 0u8;
        for idx in indices {
            if !(0..7).contains(&idx) {
                return Err(ValidationError::out_of_range("days", 0, 6, idx));
            }
            mask |= 1 << idx;
        }
        Ok(Self(mask))
    }

    /// Returns a copy of the set with `day` added.
    pub fn with(self, day: Weekday) -> Self {
        Self(self.0 | bit(day))
    }

    pub fn contains(&self, day: Weekday) -> bool {
        self.0 & bit(day) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Sunday-first flags, the wire representation.
    pub fn to_flags(&self) -> [bool; 7] {
        let mut flags = [false; 7];
        for (idx, flag) in flags.iter_mut().enumerate() {
            *flag = self.0 & (1 << idx) != 0;
        }
        flags
    }

    /// Sunday-first indices of the selected days, the storage representation.
    pub fn indices(&self) -> Vec<i32> {
        (0..7).filter(|idx| self.0 & (1 << idx) != 0).collect()
    }

    /// Iterates the selected days from Sunday to Saturday.
    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        SUNDAY_FIRST.into_iter().filter(|day| self.contains(*day))
    }
}

fn bit(day: Weekday) -> u8 {
    1 << day.num_days_from_sunday()
}

impl FromIterator<Weekday> for WeekdaySet {
    fn from_iter<T: IntoIterator<Item = Weekday>>(iter: T) -> Self {
        iter.into_iter().fold(WeekdaySet::EMPTY, WeekdaySet::with)
    }
}

impl fmt::Debug for WeekdaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl Serialize for WeekdaySet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_flags().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for WeekdaySet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let flags = Vec::<bool>::deserialize(deserializer)?;
        Ok(Self::from_flags(&flags))
    }
}
