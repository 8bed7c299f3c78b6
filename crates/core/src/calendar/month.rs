//! Bikram Sambat month names.

use serde::{Deserialize, Serialize};

use super::error::CalendarError;

/// A month of the Bikram Sambat year, Baisakh (1) through Chaitra (12).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum NepaliMonth {
    /// Month 1, mid-April to mid-May.
    Baisakh = 1,
    /// Month 2.
    Jestha,
    /// Month 3, last month of the fiscal year.
    Ashadh,
    /// Month 4, first month of the fiscal year.
    Shrawan,
    /// Month 5.
    Bhadra,
    /// Month 6.
    Ashwin,
    /// Month 7.
    Kartik,
    /// Month 8.
    Mangsir,
    /// Month 9.
    Poush,
    /// Month 10.
    Magh,
    /// Month 11.
    Falgun,
    /// Month 12.
    Chaitra,
}

impl NepaliMonth {
    /// All months in calendar order.
    pub const ALL: [Self; 12] = [
        Self::Baisakh,
        Self::Jestha,
        Self::Ashadh,
        Self::Shrawan,
        Self::Bhadra,
        Self::Ashwin,
        Self::Kartik,
        Self::Mangsir,
        Self::Poush,
        Self::Magh,
        Self::Falgun,
        Self::Chaitra,
    ];

    /// The month the Nepal fiscal year starts in.
    pub const FISCAL_START: Self = Self::Shrawan;

    /// Looks up a month by its 1-based number.
    pub fn from_number(number: u32) -> Result<Self, CalendarError> {
        number
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index as usize))
            .copied()
            .ok_or(CalendarError::InvalidMonth(number))
    }

    /// 1-based month number.
    #[must_use]
    pub const fn number(self) -> u32 {
        self as u32
    }

    /// Zero-based position, for table lookups.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize - 1
    }

    /// Full English transliteration.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Baisakh => "Baisakh",
            Self::Jestha => "Jestha",
            Self::Ashadh => "Ashadh",
            Self::Shrawan => "Shrawan",
            Self::Bhadra => "Bhadra",
            Self::Ashwin => "Ashwin",
            Self::Kartik => "Kartik",
            Self::Mangsir => "Mangsir",
            Self::Poush => "Poush",
            Self::Magh => "Magh",
            Self::Falgun => "Falgun",
            Self::Chaitra => "Chaitra",
        }
    }

    /// Three-letter abbreviation.
    #[must_use]
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Baisakh => "Bai",
            Self::Jestha => "Jes",
            Self::Ashadh => "Ash",
            Self::Shrawan => "Shr",
            Self::Bhadra => "Bha",
            Self::Ashwin => "Asw",
            Self::Kartik => "Kar",
            Self::Mangsir => "Man",
            Self::Poush => "Pou",
            Self::Magh => "Mag",
            Self::Falgun => "Fal",
            Self::Chaitra => "Cha",
        }
    }

    /// The following month, and whether the year rolled over.
    #[must_use]
    pub const fn succ(self) -> (Self, bool) {
        match self {
            Self::Chaitra => (Self::Baisakh, true),
            _ => (Self::ALL[self.index() + 1], false),
        }
    }

    /// The preceding month, and whether the year rolled back.
    #[must_use]
    pub const fn pred(self) -> (Self, bool) {
        match self {
            Self::Baisakh => (Self::Chaitra, true),
            _ => (Self::ALL[self.index() - 1], false),
        }
    }

    /// True for Shrawan through Chaitra, the months that open a fiscal year.
    #[must_use]
    pub const fn in_fiscal_first_half(self) -> bool {
        self.number() >= Self::FISCAL_START.number()
    }
}

impl From<NepaliMonth> for u32 {
    fn from(month: NepaliMonth) -> Self {
        month.number()
    }
}

impl TryFrom<u32> for NepaliMonth {
    type Error = CalendarError;

    fn try_from(number: u32) -> Result<Self, Self::Error> {
        Self::from_number(number)
    }
}

impl std::fmt::Display for NepaliMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_number_bounds() {
        assert_eq!(NepaliMonth::from_number(1), Ok(NepaliMonth::Baisakh));
        assert_eq!(NepaliMonth::from_number(12), Ok(NepaliMonth::Chaitra));
        assert_eq!(
            NepaliMonth::from_number(0),
            Err(CalendarError::InvalidMonth(0))
        );
        assert_eq!(
            NepaliMonth::from_number(13),
            Err(CalendarError::InvalidMonth(13))
        );
    }

    #[test]
    fn test_numbers_follow_calendar_order() {
        for (i, month) in NepaliMonth::ALL.iter().enumerate() {
            assert_eq!(month.index(), i);
            assert_eq!(month.number() as usize, i + 1);
        }
    }

    #[test]
    fn test_succ_and_pred_roll_the_year() {
        assert_eq!(NepaliMonth::Chaitra.succ(), (NepaliMonth::Baisakh, true));
        assert_eq!(NepaliMonth::Ashadh.succ(), (NepaliMonth::Shrawan, false));
        assert_eq!(NepaliMonth::Baisakh.pred(), (NepaliMonth::Chaitra, true));
        assert_eq!(NepaliMonth::Shrawan.pred(), (NepaliMonth::Ashadh, false));
    }

    #[test]
    fn test_names() {
        assert_eq!(NepaliMonth::Shrawan.to_string(), "Shrawan");
        assert_eq!(NepaliMonth::Ashwin.short_name(), "Asw");
    }

    #[test]
    fn test_serde_as_number() {
        assert_eq!(serde_json::to_string(&NepaliMonth::Shrawan).unwrap(), "4");
        let month: NepaliMonth = serde_json::from_str("12").unwrap();
        assert_eq!(month, NepaliMonth::Chaitra);
        assert!(serde_json::from_str::<NepaliMonth>("13").is_err());
    }
}
