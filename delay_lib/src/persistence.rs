/** ------------------------------------------------------------
 * Persistence (saving delay series to parquet files)
 * ------------------------------------------------------------- */
use crate::delay_data::DelaySeries;
use std::fs::File;
use std::path::PathBuf;

use polars::prelude::*;
use polars::{error::PolarsError, frame::DataFrame, series::Series};

/**
 * Parquet conversion of an accumulated delay series
 */
impl DelaySeries {
    pub fn to_parquet(&self, file_path: PathBuf) -> Result<(), PolarsError> {
        // Convert numbers and delays to Polars Series
        let numbers_series = Series::new("numbers", &self.numbers);
        let delays_series = Series::new("delays", &self.delays);

        // Construct DataFrame from the series
        let mut df = DataFrame::new(vec![numbers_series, delays_series])?;

        // Write DataFrame to a Parquet file
        let file = File::create(file_path)?;
        ParquetWriter::new(file).finish(&mut df)?;

        Ok(())
    }
}
