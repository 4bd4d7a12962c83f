//! Market data orchestration over the feed port: input validation, date
//! parsing, and the fixed-parameter convenience lookups.

use crate::domain::error::DomainError;
use crate::domain::ports::market_feed::{HistoricalPoint, MarketFeed, ReferenceData};
use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;

pub struct MarketUseCase {
    feed: Arc<dyn MarketFeed>,
}

#[derive(Debug, Serialize)]
pub struct FeedStatus {
    pub connected: bool,
    pub feed: String,
}

const GPU_SECURITIES: &[&str] = &[
    "NVDA US Equity",
    "AMD US Equity",
    "INTC US Equity",
    "TSM US Equity",
    "AVGO US Equity",
];

const GPU_FIELDS: &[&str] = &[
    "PX_LAST",
    "CHG_PCT_1D",
    "CUR_MKT_CAP",
    "PE_RATIO",
    "BEST_EPS_1YR",
];

const REIT_SECURITIES: &[&str] = &[
    "EQIX US Equity",
    "DLR US Equity",
    "AMT US Equity",
    "CCI US Equity",
];

const REIT_FIELDS: &[&str] = &["PX_LAST", "DVD_YLD", "FUNDS_FROM_OPS", "CUR_MKT_CAP"];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl MarketUseCase {
    pub fn new(feed: Arc<dyn MarketFeed>) -> Self {
        Self { feed }
    }

    pub async fn connect(&self) -> bool {
        self.feed.connect().await
    }

    pub async fn disconnect(&self) {
        self.feed.disconnect().await
    }

    pub fn status(&self) -> FeedStatus {
        FeedStatus {
            connected: self.feed.is_connected(),
            feed: self.feed.name().to_string(),
        }
    }

    pub async fn reference_data(
        &self,
        securities: &[String],
        fields: &[String],
    ) -> Result<ReferenceData, DomainError> {
        if securities.is_empty() {
            return Err(DomainError::InvalidInput("no securities provided".into()));
        }
        self.feed.reference_data(securities, fields).await
    }

    /// Dates are `YYYYMMDD` strings, matching the gateway's request format.
    pub async fn historical_data(
        &self,
        security: &str,
        fields: &[String],
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<HistoricalPoint>, DomainError> {
        if security.is_empty() {
            return Err(DomainError::InvalidInput("no security provided".into()));
        }
        let start = parse_date(start_date)?;
        let end = parse_date(end_date)?;
        self.feed.historical_data(security, fields, start, end).await
    }

    /// GPU/AI chip complex snapshot. Connects first if needed.
    pub async fn gpu_market_data(&self) -> Result<ReferenceData, DomainError> {
        self.ensure_connected().await;
        self.feed
            .reference_data(&owned(GPU_SECURITIES), &owned(GPU_FIELDS))
            .await
    }

    /// Datacenter REIT snapshot. Connects first if needed.
    pub async fn datacenter_reit_data(&self) -> Result<ReferenceData, DomainError> {
        self.ensure_connected().await;
        self.feed
            .reference_data(&owned(REIT_SECURITIES), &owned(REIT_FIELDS))
            .await
    }

    async fn ensure_connected(&self) {
        if !self.feed.is_connected() {
            self.feed.connect().await;
        }
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(s, "%Y%m%d")
        .map_err(|_| DomainError::InvalidInput(format!("invalid date: {s} (expected YYYYMMDD)")))
}
