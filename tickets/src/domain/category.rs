//! Train categories and the category filter.

use std::collections::BTreeSet;

use super::train_code::category_of;

/// The service classes that can be selected from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrainCategory {
    /// 高铁, codes starting with `G`
    HighSpeed,
    /// 动车, codes starting with `D`
    Emu,
    /// 直达, codes starting with `Z`
    DirectExpress,
    /// 特快, codes starting with `T`
    Express,
    /// 快速, codes starting with `K`
    Fast,
}

impl TrainCategory {
    /// All categories, in the order the command line lists them.
    pub const ALL: [TrainCategory; 5] = [
        TrainCategory::Emu,
        TrainCategory::HighSpeed,
        TrainCategory::Fast,
        TrainCategory::Express,
        TrainCategory::DirectExpress,
    ];

    /// The filter code: the lower-cased leading letter of matching trains.
    pub fn code(self) -> char {
        match self {
            TrainCategory::HighSpeed => 'g',
            TrainCategory::Emu => 'd',
            TrainCategory::DirectExpress => 'z',
            TrainCategory::Express => 't',
            TrainCategory::Fast => 'k',
        }
    }
}

/// A set of category codes, matched case-insensitively against the first
/// character of a train code.
///
/// An empty filter accepts every train.
///
/// # Examples
///
/// ```
/// use tickets::domain::CategoryFilter;
///
/// let filter = CategoryFilter::from_codes(['G']);
/// assert!(filter.matches("G103"));
/// assert!(!filter.matches("K205"));
/// assert!(CategoryFilter::default().matches("K205"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryFilter {
    codes: BTreeSet<char>,
}

impl CategoryFilter {
    /// Build a filter from raw codes. Codes are lower-cased on insert.
    pub fn from_codes(codes: impl IntoIterator<Item = char>) -> Self {
        let mut filter = Self::default();
        for code in codes {
            filter.insert(code);
        }
        filter
    }

    /// Build a filter from selected categories.
    pub fn from_categories(categories: impl IntoIterator<Item = TrainCategory>) -> Self {
        Self::from_codes(categories.into_iter().map(TrainCategory::code))
    }

    /// Add a code to the filter.
    pub fn insert(&mut self, code: char) {
        self.codes.extend(code.to_lowercase());
    }

    /// True when no codes are selected.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Whether a train with this code should be listed.
    ///
    /// Only the first character of `train_code` is inspected. An empty
    /// code matches only the empty filter.
    pub fn matches(&self, train_code: &str) -> bool {
        if self.codes.is_empty() {
            return true;
        }
        category_of(train_code).is_some_and(|c| self.codes.contains(&c))
    }
}
