//! Trend query: year-ordered average-yield series for a (crop, state) pair.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::crops::prediction_crop_name;
use crate::models::records::DataSource;
use crate::models::YieldDataset;

/// One point of a yield trend series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub year: i32,
    pub avg_yield: f64,
}

/// Average yield per year for a (crop, state) pair, ascending by year.
///
/// The historical source filters on the crop name as selected and skips rows
/// without a parseable date or a yield value; the prediction source resolves
/// the crop through the alias map first. An empty series simply means no
/// rows matched.
pub fn yield_trend(
    dataset: &YieldDataset,
    crop: &str,
    state: &str,
    source: DataSource,
) -> Vec<TrendPoint> {
    // BTreeMap keeps the grouping keyed and ordered by year.
    let mut groups: BTreeMap<i32, (f64, usize)> = BTreeMap::new();

    match source {
        DataSource::Historical => {
            for record in &dataset.historical {
                if record.crop != crop || record.state_name != state {
                    continue;
                }
                let (Some(year), Some(yield_val)) = (record.year, record.yield_val) else {
                    continue;
                };
                let entry = groups.entry(year).or_insert((0.0, 0));
                entry.0 += yield_val;
                entry.1 += 1;
            }
        }
        DataSource::Prediction => {
            let mapped_crop = prediction_crop_name(crop);
            for record in &dataset.predictions {
                if record.crop != mapped_crop || record.state != state {
                    continue;
                }
                let Some(predicted) = record.predicted_yield else {
                    continue;
                };
                let entry = groups.entry(record.year).or_insert((0.0, 0));
                entry.0 += predicted;
                entry.1 += 1;
            }
        }
    }

    groups
        .into_iter()
        .map(|(year, (sum, count))| TrendPoint {
            year,
            avg_yield: sum / count as f64,
        })
        .collect()
}
