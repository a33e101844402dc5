//! Sort and row-selection reducers for the data table.
//!
//! The table never owns its rows. Sorting produces a permutation of indices into the caller's
//! slice, and selection is a set of row keys, so a selection survives any reordering.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::hash::Hash;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Placeholder rows rendered while loading, unless overridden.
pub const DEFAULT_SKELETON_ROWS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Direction of an active sort.
pub enum SortDirection {
    /// Smallest first.
    #[serde(rename = "asc")]
    Ascending,
    /// Largest first.
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    /// Short token (`asc` / `desc`).
    pub fn token(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }

    /// Value for the `aria-sort` attribute.
    pub fn aria_sort(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Active sort column and direction. A direction never exists without a key.
pub struct SortState {
    active: Option<(String, SortDirection)>,
}

impl SortState {
    /// No sort applied; rows keep their input order.
    pub fn unsorted() -> Self {
        Self::default()
    }

    /// Sort by `key` in `direction`.
    pub fn by(key: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            active: Some((key.into(), direction)),
        }
    }

    /// Active column key.
    pub fn key(&self) -> Option<&str> {
        self.active.as_ref().map(|(key, _)| key.as_str())
    }

    /// Active direction.
    pub fn direction(&self) -> Option<SortDirection> {
        self.active.as_ref().map(|(_, direction)| *direction)
    }

    /// Direction applied to `key`, if it is the active column.
    pub fn direction_for(&self, key: &str) -> Option<SortDirection> {
        match &self.active {
            Some((active, direction)) if active == key => Some(*direction),
            _ => None,
        }
    }

    /// Next state after activating `key`.
    ///
    /// Repeated activation of the same key cycles ascending → descending → unsorted →
    /// ascending. Activating a different key starts over at ascending.
    pub fn activate(&self, key: &str) -> Self {
        match self.direction_for(key) {
            None => Self::by(key, SortDirection::Ascending),
            Some(SortDirection::Ascending) => Self::by(key, SortDirection::Descending),
            Some(SortDirection::Descending) => Self::unsorted(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Where sorting happens.
pub enum SortStrategy {
    /// Rows are reordered locally.
    #[default]
    Local,
    /// Rows are left untouched; the sort request is reported to the caller (server-side).
    Delegated,
}

#[derive(Debug, Clone, PartialEq, Default)]
/// Comparable cell value extracted from a row for sorting.
pub enum SortValue {
    /// Null/absent value. Always ordered after present values.
    #[default]
    Missing,
    /// Boolean.
    Bool(bool),
    /// Integer.
    Integer(i64),
    /// Floating point.
    Number(f64),
    /// Text, compared case-insensitively first.
    Text(String),
    /// Calendar date.
    Date(NaiveDate),
}

impl SortValue {
    /// Whether the value is absent.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Missing => 5,
            Self::Bool(_) => 0,
            Self::Integer(_) | Self::Number(_) => 1,
            Self::Date(_) => 2,
            Self::Text(_) => 3,
        }
    }

    fn natural_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Integer(a), Self::Integer(b)) => a.cmp(b),
            (Self::Integer(a), Self::Number(b)) => (*a as f64).total_cmp(b),
            (Self::Number(a), Self::Integer(b)) => a.total_cmp(&(*b as f64)),
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Date(a), Self::Date(b)) => a.cmp(b),
            (Self::Text(a), Self::Text(b)) => a
                .to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b)),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

macro_rules! sort_value_from {
    ($($ty:ty => $variant:ident as $cast:ty),* $(,)?) => {
        $(impl From<$ty> for SortValue {
            fn from(value: $ty) -> Self {
                Self::$variant(value as $cast)
            }
        })*
    };
}

sort_value_from!(
    i64 => Integer as i64,
    i32 => Integer as i64,
    u32 => Integer as i64,
    f64 => Number as f64,
    f32 => Number as f64,
);

impl From<bool> for SortValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for SortValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for SortValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<NaiveDate> for SortValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl<T: Into<SortValue>> From<Option<T>> for SortValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

/// Compares two values for `direction`; missing values sort last in both directions.
pub fn compare_sort_values(a: &SortValue, b: &SortValue, direction: SortDirection) -> Ordering {
    match (a.is_missing(), b.is_missing()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => direction.apply(a.natural_cmp(b)),
    }
}

/// Display order for `rows` as indices into the slice.
///
/// The sort is stable: rows with equal values keep their input order. With no active sort, or
/// with [`SortStrategy::Delegated`], the identity order is returned.
pub fn sorted_indices<R>(
    rows: &[R],
    sort: &SortState,
    strategy: SortStrategy,
    value: impl Fn(&R, &str) -> SortValue,
) -> Vec<usize> {
    let mut order: Vec<usize> = (0..rows.len()).collect();
    let (Some(key), Some(direction)) = (sort.key(), sort.direction()) else {
        return order;
    };
    if strategy == SortStrategy::Delegated {
        return order;
    }
    let values: Vec<SortValue> = rows.iter().map(|row| value(row, key)).collect();
    order.sort_by(|&a, &b| compare_sort_values(&values[a], &values[b], direction));
    order
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// How much of the visible rows are selected; drives the header checkbox.
pub enum SelectAllState {
    /// No visible row is selected.
    None,
    /// Some but not all visible rows are selected.
    Partial,
    /// Every visible row is selected.
    All,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Keyed row selection.
pub struct SelectionSet<K: Eq + Hash> {
    keys: HashSet<K>,
}

impl<K: Eq + Hash> Default for SelectionSet<K> {
    fn default() -> Self {
        Self {
            keys: HashSet::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> SelectionSet<K> {
    /// Empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `key` is selected.
    pub fn contains(&self, key: &K) -> bool {
        self.keys.contains(key)
    }

    /// Number of selected keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Selected keys in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.keys.iter()
    }

    /// Flips membership of `key`, returning whether it is now selected.
    pub fn toggle(&mut self, key: K) -> bool {
        if self.keys.remove(&key) {
            false
        } else {
            self.keys.insert(key);
            true
        }
    }

    /// Header checkbox action: clears the set when every visible row is selected, otherwise
    /// replaces it with exactly the visible keys.
    pub fn toggle_all(&mut self, visible: &[K]) {
        if !visible.is_empty() && self.coverage(visible) == SelectAllState::All {
            self.keys.clear();
        } else {
            self.keys = visible.iter().cloned().collect();
        }
    }

    /// How many of `visible` are selected.
    pub fn coverage(&self, visible: &[K]) -> SelectAllState {
        let selected = visible.iter().filter(|key| self.keys.contains(*key)).count();
        match selected {
            0 => SelectAllState::None,
            n if n == visible.len() => SelectAllState::All,
            _ => SelectAllState::Partial,
        }
    }
}

impl<K: Eq + Hash> FromIterator<K> for SelectionSet<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}

/// Keys that appear more than once, in order of their second occurrence.
///
/// The table does not deduplicate: rows sharing a key share selection state.
pub fn duplicate_keys<K: Eq + Hash + Clone>(keys: impl IntoIterator<Item = K>) -> Vec<K> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();
    for key in keys {
        if !seen.insert(key.clone()) && reported.insert(key.clone()) {
            duplicates.push(key);
        }
    }
    duplicates
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Which body the table renders.
pub enum TableBody {
    /// Skeleton placeholder; real data suppressed.
    Loading {
        /// Placeholder row count.
        rows: usize,
    },
    /// Empty message; no table body.
    Empty,
    /// Data rows.
    Rows,
}

/// Picks the body to render. Loading wins over an empty data set.
pub fn resolve_body(loading: bool, row_count: usize, skeleton_rows: usize) -> TableBody {
    if loading {
        TableBody::Loading {
            rows: skeleton_rows,
        }
    } else if row_count == 0 {
        TableBody::Empty
    } else {
        TableBody::Rows
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Horizontal alignment of a column.
pub enum ColumnAlign {
    /// Start-aligned.
    #[default]
    Left,
    /// Centered.
    Center,
    /// End-aligned (numbers, prices).
    Right,
}

impl ColumnAlign {
    /// Stable `data-ui-align` token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
/// Responsive hiding for a column.
pub struct ColumnVisibility {
    /// Hide on viewports narrower than the small breakpoint.
    pub hide_below_sm: bool,
    /// Hide on viewports narrower than the medium breakpoint.
    pub hide_below_md: bool,
}

impl ColumnVisibility {
    /// Stable `data-ui-hide` token.
    pub fn token(self) -> &'static str {
        if self.hide_below_md {
            "below-md"
        } else if self.hide_below_sm {
            "below-sm"
        } else {
            "never"
        }
    }
}
