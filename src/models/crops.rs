//! Crop name reconciliation between the two dataset vocabularies.
//!
//! The historical and prediction datasets name some crops differently. The
//! alias table below translates historical names into the prediction
//! dataset's vocabulary and is the single source of truth for that mapping:
//! normalization (the `mapped_crop` field), the point lookup's prediction
//! path, and the prediction trend path all resolve through it.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Historical crop name -> prediction dataset crop name.
///
/// The mapping is one-directional; crops absent from the table pass through
/// unchanged.
static CROP_NAME_MAP: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Rabi Rice", "Rice"),
        ("Mustard", "Rapeseed &Mustard"),
    ])
});

/// Resolve a crop name from the historical vocabulary into the prediction
/// dataset's vocabulary.
pub fn prediction_crop_name(crop: &str) -> &str {
    CROP_NAME_MAP.get(crop).copied().unwrap_or(crop)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliased_crops_are_translated() {
        assert_eq!(prediction_crop_name("Rabi Rice"), "Rice");
        assert_eq!(prediction_crop_name("Mustard"), "Rapeseed &Mustard");
    }

    #[test]
    fn test_unmapped_crops_pass_through() {
        assert_eq!(prediction_crop_name("Wheat"), "Wheat");
        assert_eq!(prediction_crop_name("Sugarcane"), "Sugarcane");
    }

    #[test]
    fn test_mapping_is_one_directional() {
        // "Rice" is a prediction-vocabulary name; it must not map anywhere.
        assert_eq!(prediction_crop_name("Rice"), "Rice");
        assert_eq!(prediction_crop_name("Rapeseed &Mustard"), "Rapeseed &Mustard");
    }
}
