//! HTTP venue store adapter
//!
//! The external store exposes one HTTP service per venue, addressed by the
//! venue's numeric store address as the port: `GET http://{host}:{addr}/{key}`
//! returns the structured record, `POST` with the raw output text persists
//! it. The adapter does not retry; idempotent re-access is driven by the
//! engine's retry bound.

use agora_application::{RecordKey, StoreError, VenueStore};
use agora_domain::StoreAddress;
use async_trait::async_trait;
use serde_json::Value;

/// Store adapter over per-venue HTTP services.
pub struct HttpVenueStore {
    host: String,
    http: reqwest::Client,
}

impl HttpVenueStore {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            http: reqwest::Client::new(),
        }
    }

    fn endpoint(&self, key: RecordKey, addr: StoreAddress) -> String {
        format!("http://{}:{}/{}", self.host, addr, key.as_str())
    }

    fn request_error(key: RecordKey, addr: StoreAddress, reason: impl ToString) -> StoreError {
        StoreError::Request {
            key,
            addr,
            reason: reason.to_string(),
        }
    }
}

#[async_trait]
impl VenueStore for HttpVenueStore {
    async fn fetch(&self, key: RecordKey, addr: StoreAddress) -> Result<Value, StoreError> {
        let response = self
            .http
            .get(self.endpoint(key, addr))
            .send()
            .await
            .map_err(|e| Self::request_error(key, addr, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::request_error(
                key,
                addr,
                format!("HTTP {}", status.as_u16()),
            ));
        }

        response.json().await.map_err(|e| StoreError::Malformed {
            key,
            reason: e.to_string(),
        })
    }

    async fn store(
        &self,
        payload: &str,
        key: RecordKey,
        addr: StoreAddress,
    ) -> Result<(), StoreError> {
        let response = self
            .http
            .post(self.endpoint(key, addr))
            .body(payload.to_string())
            .send()
            .await
            .map_err(|e| Self::request_error(key, addr, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::request_error(
                key,
                addr,
                format!("HTTP {}", status.as_u16()),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_uses_address_as_port() {
        let store = HttpVenueStore::new("127.0.0.1");
        assert_eq!(
            store.endpoint(RecordKey::Daybook, StoreAddress(9001)),
            "http://127.0.0.1:9001/daybook"
        );
        assert_eq!(
            store.endpoint(RecordKey::LastComment, StoreAddress(9000)),
            "http://127.0.0.1:9000/last_comment"
        );
    }
}
