use crate::domain::error::DomainError;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Field values for one security, keyed by field mnemonic (e.g. PX_LAST).
pub type FieldValues = BTreeMap<String, String>;

/// Reference-data result: security identifier → field values. Securities the
/// feed does not know are omitted rather than reported as errors.
pub type ReferenceData = BTreeMap<String, FieldValues>;

/// One point in a daily time series. Only fields the feed recognizes are
/// present.
#[derive(Debug, Clone, Serialize)]
pub struct HistoricalPoint {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub fields: BTreeMap<String, f64>,
}

/// A market data source. Connection state is a plain boolean: `connect`
/// reports handshake failure through its return value, never through an
/// error. Data calls fail with `DomainError::NotConnected` while
/// disconnected.
///
/// Implementations are not designed for concurrent use by multiple callers;
/// hold one instance behind a single owner.
#[async_trait]
pub trait MarketFeed: Send + Sync {
    /// Human-readable name of this feed.
    fn name(&self) -> &str;

    /// Establish the session. Returns false on any handshake step failure.
    async fn connect(&self) -> bool;

    /// Tear down the session. Safe to call while disconnected.
    async fn disconnect(&self);

    fn is_connected(&self) -> bool;

    /// Current field values for a list of securities.
    async fn reference_data(
        &self,
        securities: &[String],
        fields: &[String],
    ) -> Result<ReferenceData, DomainError>;

    /// Daily series for one security over an inclusive date range.
    async fn historical_data(
        &self,
        security: &str,
        fields: &[String],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<HistoricalPoint>, DomainError>;
}
