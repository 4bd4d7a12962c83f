//! Live market data over a session-based terminal gateway.
//!
//! The gateway speaks JSON over HTTP: a session is started, the refdata
//! service is opened on it, and data requests reference the session id.
//! Handshake failures are reported as `false` from `connect`, never as
//! errors; the caller inspects the boolean.

use crate::domain::error::DomainError;
use crate::domain::ports::market_feed::{HistoricalPoint, MarketFeed, ReferenceData};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{error, info};

pub struct LiveFeed {
    host: String,
    port: u16,
    client: reqwest::Client,
    session: RwLock<Option<String>>,
}

#[derive(Debug, Deserialize)]
struct SessionResponse {
    session_id: String,
}

#[derive(Debug, Deserialize)]
struct HistoryResponse {
    points: Vec<HistoryRow>,
}

#[derive(Debug, Deserialize)]
struct HistoryRow {
    date: NaiveDate,
    #[serde(flatten)]
    fields: BTreeMap<String, f64>,
}

impl LiveFeed {
    pub fn new(host: String, port: u16, timeout_ms: u64) -> Self {
        Self {
            host,
            port,
            client: reqwest::Client::builder()
                .timeout(Duration::from_millis(timeout_ms))
                .build()
                .unwrap_or_default(),
            session: RwLock::new(None),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}:{}{}", self.host, self.port, path)
    }

    async fn start_session(&self) -> Result<String, String> {
        let resp = self
            .client
            .post(self.url("/session"))
            .send()
            .await
            .map_err(|e| format!("session start failed: {e}"))?;

        if !resp.status().is_success() {
            return Err(format!("session start returned {}", resp.status()));
        }

        let session: SessionResponse = resp
            .json()
            .await
            .map_err(|e| format!("bad session response: {e}"))?;
        Ok(session.session_id)
    }

    async fn open_service(&self, session_id: &str) -> Result<(), String> {
        let resp = self
            .client
            .post(self.url(&format!("/session/{session_id}/services/refdata")))
            .send()
            .await
            .map_err(|e| format!("failed to open refdata service: {e}"))?;

        if !resp.status().is_success() {
            return Err(format!("refdata service returned {}", resp.status()));
        }
        Ok(())
    }

    async fn session_id(&self) -> Result<String, DomainError> {
        self.session
            .read()
            .await
            .clone()
            .ok_or(DomainError::NotConnected)
    }
}

#[async_trait]
impl MarketFeed for LiveFeed {
    fn name(&self) -> &str {
        "live"
    }

    async fn connect(&self) -> bool {
        let session_id = match self.start_session().await {
            Ok(id) => id,
            Err(e) => {
                error!("gateway handshake failed at {}:{}: {e}", self.host, self.port);
                return false;
            }
        };

        if let Err(e) = self.open_service(&session_id).await {
            error!("gateway handshake failed at {}:{}: {e}", self.host, self.port);
            return false;
        }

        *self.session.write().await = Some(session_id);
        info!("connected to market data gateway at {}:{}", self.host, self.port);
        true
    }

    async fn disconnect(&self) {
        let session = self.session.write().await.take();
        if let Some(id) = session {
            // Best effort; the gateway reaps stale sessions on its own.
            let _ = self
                .client
                .delete(self.url(&format!("/session/{id}")))
                .send()
                .await;
        }
        info!("disconnected from market data gateway");
    }

    fn is_connected(&self) -> bool {
        self.session
            .try_read()
            .map(|s| s.is_some())
            .unwrap_or(false)
    }

    async fn reference_data(
        &self,
        securities: &[String],
        fields: &[String],
    ) -> Result<ReferenceData, DomainError> {
        let session_id = self.session_id().await?;

        let resp = self
            .client
            .post(self.url(&format!("/session/{session_id}/refdata")))
            .json(&serde_json::json!({
                "securities": securities,
                "fields": fields,
            }))
            .send()
            .await
            .map_err(|e| DomainError::Feed(format!("reference data request failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(DomainError::Feed(format!(
                "reference data request returned {}",
                resp.status()
            )));
        }

        resp.json::<ReferenceData>()
            .await
            .map_err(|e| DomainError::Feed(format!("bad reference data response: {e}")))
    }

    async fn historical_data(
        &self,
        security: &str,
        fields: &[String],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<HistoricalPoint>, DomainError> {
        let session_id = self.session_id().await?;

        let resp = self
            .client
            .post(self.url(&format!("/session/{session_id}/history")))
            .json(&serde_json::json!({
                "security": security,
                "fields": fields,
                "start_date": start.format("%Y%m%d").to_string(),
                "end_date": end.format("%Y%m%d").to_string(),
                "periodicity": "DAILY",
            }))
            .send()
            .await
            .map_err(|e| DomainError::Feed(format!("historical data request failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(DomainError::Feed(format!(
                "historical data request returned {}",
                resp.status()
            )));
        }

        let history: HistoryResponse = resp
            .json()
            .await
            .map_err(|e| DomainError::Feed(format!("bad historical data response: {e}")))?;

        Ok(history
            .points
            .into_iter()
            .map(|row| HistoricalPoint {
                date: row.date,
                fields: row.fields,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_disconnected() {
        let feed = LiveFeed::new("localhost".into(), 8194, 30000);
        assert!(!feed.is_connected());
    }

    #[tokio::test]
    async fn test_data_before_connect_is_not_connected() {
        let feed = LiveFeed::new("localhost".into(), 8194, 100);
        let err = feed
            .reference_data(&["NVDA US Equity".to_string()], &["PX_LAST".to_string()])
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotConnected));
    }
}
