//! Selection vocabularies for the presentation layer.
//!
//! The UI's select boxes are populated from the canonical historical table:
//! the user always picks from the historical vocabulary, and the prediction
//! path translates through the alias map.

use std::collections::BTreeSet;

use crate::models::YieldDataset;

/// First selectable year.
pub const YEAR_MIN: i32 = 2000;
/// Last selectable year.
pub const YEAR_MAX: i32 = 2025;

fn sorted_unique<'a>(names: impl Iterator<Item = &'a str>) -> Vec<String> {
    names
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Sorted unique crop names from the canonical historical table.
pub fn crop_options(dataset: &YieldDataset) -> Vec<String> {
    sorted_unique(dataset.historical.iter().map(|r| r.crop.as_str()))
}

/// Sorted unique state names from the canonical historical table.
pub fn state_options(dataset: &YieldDataset) -> Vec<String> {
    sorted_unique(dataset.historical.iter().map(|r| r.state_name.as_str()))
}

/// The selectable year range.
pub fn year_options() -> Vec<i32> {
    (YEAR_MIN..=YEAR_MAX).collect()
}
