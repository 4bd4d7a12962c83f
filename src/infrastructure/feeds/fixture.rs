//! Deterministic stand-in market data source, used when no live gateway is
//! configured. Reference data comes from a fixed ticker table; historical
//! data is a pseudo-random business-day walk.

use crate::domain::error::DomainError;
use crate::domain::ports::market_feed::{
    FieldValues, HistoricalPoint, MarketFeed, ReferenceData,
};
use async_trait::async_trait;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::info;

pub struct FixtureFeed {
    connected: AtomicBool,
    /// Seed for the historical walk. None reproduces the source behavior:
    /// a fresh entropy-seeded generator per call, not reproducible across
    /// runs.
    seed: Option<u64>,
    table: BTreeMap<String, FieldValues>,
}

impl FixtureFeed {
    pub fn new() -> Self {
        Self::build(None)
    }

    /// Seeded variant for reproducible historical series in tests.
    pub fn with_seed(seed: u64) -> Self {
        Self::build(Some(seed))
    }

    fn build(seed: Option<u64>) -> Self {
        Self {
            connected: AtomicBool::new(false),
            seed,
            table: reference_table(),
        }
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl Default for FixtureFeed {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MarketFeed for FixtureFeed {
    fn name(&self) -> &str {
        "fixture"
    }

    async fn connect(&self) -> bool {
        info!("using fixture market data (no live gateway configured)");
        self.connected.store(true, Ordering::SeqCst);
        true
    }

    async fn disconnect(&self) {
        self.connected.store(false, Ordering::SeqCst);
    }

    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    async fn reference_data(
        &self,
        securities: &[String],
        fields: &[String],
    ) -> Result<ReferenceData, DomainError> {
        if !self.is_connected() {
            return Err(DomainError::NotConnected);
        }

        let mut results = ReferenceData::new();
        for security in securities {
            // Unknown tickers are silently omitted, not an error.
            if let Some(row) = self.table.get(security) {
                let values: FieldValues = fields
                    .iter()
                    .map(|f| {
                        let value = row.get(f).cloned().unwrap_or_else(|| "N/A".to_string());
                        (f.clone(), value)
                    })
                    .collect();
                results.insert(security.clone(), values);
            }
        }
        Ok(results)
    }

    async fn historical_data(
        &self,
        _security: &str,
        fields: &[String],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<HistoricalPoint>, DomainError> {
        if !self.is_connected() {
            return Err(DomainError::NotConnected);
        }

        let mut rng = self.rng();
        let mut results = Vec::new();
        let mut price = 100.0_f64;
        let mut current = start;

        while current <= end {
            if !is_weekend(current) {
                price *= 1.0 + rng.gen_range(-0.03..0.035);

                let mut values = BTreeMap::new();
                for field in fields {
                    match field.as_str() {
                        "PX_LAST" => {
                            values.insert(field.clone(), (price * 100.0).round() / 100.0);
                        }
                        "PX_VOLUME" => {
                            values.insert(
                                field.clone(),
                                rng.gen_range(1_000_000..50_000_000) as f64,
                            );
                        }
                        // Fields the fixture generator does not recognize
                        // are omitted per point.
                        _ => {}
                    }
                }
                results.push(HistoricalPoint {
                    date: current,
                    fields: values,
                });
            }
            current += Duration::days(1);
        }

        Ok(results)
    }
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

fn row(pairs: &[(&str, &str)]) -> FieldValues {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn reference_table() -> BTreeMap<String, FieldValues> {
    let mut table = BTreeMap::new();
    table.insert(
        "NVDA US Equity".to_string(),
        row(&[
            ("PX_LAST", "875.28"),
            ("CHG_PCT_1D", "2.34"),
            ("CUR_MKT_CAP", "2150000000000"),
            ("PE_RATIO", "65.2"),
            ("BEST_EPS_1YR", "13.42"),
            ("NAME", "NVIDIA Corp"),
        ]),
    );
    table.insert(
        "AMD US Equity".to_string(),
        row(&[
            ("PX_LAST", "178.45"),
            ("CHG_PCT_1D", "1.82"),
            ("CUR_MKT_CAP", "288000000000"),
            ("PE_RATIO", "48.7"),
            ("BEST_EPS_1YR", "3.66"),
            ("NAME", "Advanced Micro Devices Inc"),
        ]),
    );
    table.insert(
        "INTC US Equity".to_string(),
        row(&[
            ("PX_LAST", "31.24"),
            ("CHG_PCT_1D", "-0.45"),
            ("CUR_MKT_CAP", "132000000000"),
            ("PE_RATIO", "32.1"),
            ("BEST_EPS_1YR", "0.97"),
            ("NAME", "Intel Corp"),
        ]),
    );
    table.insert(
        "TSM US Equity".to_string(),
        row(&[
            ("PX_LAST", "142.67"),
            ("CHG_PCT_1D", "1.12"),
            ("CUR_MKT_CAP", "740000000000"),
            ("PE_RATIO", "24.8"),
            ("BEST_EPS_1YR", "5.75"),
            ("NAME", "Taiwan Semiconductor Manufacturing Co Ltd"),
        ]),
    );
    table.insert(
        "AVGO US Equity".to_string(),
        row(&[
            ("PX_LAST", "1324.56"),
            ("CHG_PCT_1D", "0.89"),
            ("CUR_MKT_CAP", "615000000000"),
            ("PE_RATIO", "35.6"),
            ("BEST_EPS_1YR", "37.21"),
            ("NAME", "Broadcom Inc"),
        ]),
    );
    table.insert(
        "EQIX US Equity".to_string(),
        row(&[
            ("PX_LAST", "812.34"),
            ("DVD_YLD", "2.1"),
            ("FUNDS_FROM_OPS", "32.45"),
            ("CUR_MKT_CAP", "76000000000"),
            ("NAME", "Equinix Inc"),
        ]),
    );
    table.insert(
        "DLR US Equity".to_string(),
        row(&[
            ("PX_LAST", "142.89"),
            ("DVD_YLD", "3.4"),
            ("FUNDS_FROM_OPS", "6.78"),
            ("CUR_MKT_CAP", "44000000000"),
            ("NAME", "Digital Realty Trust Inc"),
        ]),
    );
    table
}
