//! Parsers for the raw agricultural data files.
//!
//! The two input CSVs arrive with inconsistent column casing/spacing, string
//! dates, and crop/state names in mixed case. This module reads them into
//! Polars DataFrames and converts them to the canonical record types,
//! applying every normalization rule along the way.

pub mod csv_parser;


pub use csv_parser::{
    dataframe_to_historical_records, dataframe_to_prediction_records, normalize_column_names,
    read_table,
};
