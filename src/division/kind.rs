//! Administrative-unit kinds.
//!
//! The set is closed and used only for display. Labels are the Korean
//! suffixes that appear in the dataset's `type` field.

/// The number of administrative-unit kinds.
pub const DIVISION_TYPE_COUNT: usize = 8;

/// An administrative-unit kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum DivisionType {
    SpecialCity = 0,                  // 특별시
    MetropolitanCity = 1,             // 광역시
    City = 2,                         // 시
    County = 3,                       // 군
    District = 4,                     // 구
    SpecialSelfGoverningProvince = 5, // 특별자치도
    SpecialSelfGoverningCity = 6,     // 특별자치시
    Village = 7,                      // 리
}

/// All kinds in index order.
pub const ALL_DIVISION_TYPES: [DivisionType; DIVISION_TYPE_COUNT] = [
    DivisionType::SpecialCity,
    DivisionType::MetropolitanCity,
    DivisionType::City,
    DivisionType::County,
    DivisionType::District,
    DivisionType::SpecialSelfGoverningProvince,
    DivisionType::SpecialSelfGoverningCity,
    DivisionType::Village,
];

const LABELS: [&str; DIVISION_TYPE_COUNT] = [
    "특별시",
    "광역시",
    "시",
    "군",
    "구",
    "특별자치도",
    "특별자치시",
    "리",
];

impl DivisionType {
    /// Returns the Korean label used in the dataset and on cards.
    pub const fn label(self) -> &'static str {
        LABELS[self as usize]
    }

    /// Parses a kind from its Korean label.
    pub fn from_label(label: &str) -> Option<DivisionType> {
        ALL_DIVISION_TYPES
            .iter()
            .copied()
            .find(|t| t.label() == label)
    }

    /// Returns true for the kinds the legacy district dataset allows (구, 시).
    pub const fn is_legacy(self) -> bool {
        matches!(self, DivisionType::District | DivisionType::City)
    }
}

impl std::fmt::Display for DivisionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_indices_are_sequential() {
        for (i, t) in ALL_DIVISION_TYPES.iter().enumerate() {
            assert_eq!(*t as usize, i, "DivisionType {:?} has wrong index", t);
        }
    }

    #[test]
    fn label_roundtrip() {
        for t in ALL_DIVISION_TYPES.iter() {
            let label = t.label();
            let roundtrip = DivisionType::from_label(label)
                .unwrap_or_else(|| panic!("Failed to look up label '{}'", label));
            assert_eq!(*t, roundtrip);
        }
    }

    #[test]
    fn unknown_label_returns_none() {
        assert_eq!(DivisionType::from_label("도"), None);
        assert_eq!(DivisionType::from_label(""), None);
        assert_eq!(DivisionType::from_label("city"), None);
    }

    #[test]
    fn legacy_kinds_are_gu_and_si() {
        let legacy: Vec<&str> = ALL_DIVISION_TYPES
            .iter()
            .filter(|t| t.is_legacy())
            .map(|t| t.label())
            .collect();
        assert_eq!(legacy, vec!["시", "구"]);
    }
}
