//! # Report Repository
//!
//! Customer day-reports: one row per customer per day with the rate,
//! today's sale, the payment, and the running due.
//!
//! The reports route is the one backend route that returns a bare JSON
//! array instead of the usual `{ statusCode, message, data }` envelope.
//! That quirk is preserved here rather than papered over, so the DTO
//! matches what is actually on the wire.

use std::sync::Arc;

use tracing::debug;

use khata_core::types::CustomerReport;

use crate::client::ApiClient;
use crate::endpoints;
use crate::error::ApiResult;

/// Repository for report operations.
#[derive(Clone)]
pub struct ReportRepository {
    client: Arc<ApiClient>,
}

impl ReportRepository {
    /// Creates a new ReportRepository.
    pub fn new(client: Arc<ApiClient>) -> Self {
        ReportRepository { client }
    }

    /// Fetches all customer day-reports.
    pub async fn list(&self) -> ApiResult<Vec<CustomerReport>> {
        // Bare array on this route, no envelope
        let reports: Vec<CustomerReport> = self.client.get(endpoints::REPORTS).await?;
        debug!(count = reports.len(), "fetched reports");
        Ok(reports)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use khata_core::format::format_taka_bn;
    use khata_core::types::{Role, User};
    use khata_session::{MemoryStore, Session, SessionStore};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn repo(server: &MockServer) -> ReportRepository {
        let store = Arc::new(MemoryStore::new());
        store
            .save(&Session::new(
                User {
                    id: "u1".into(),
                    user_name: "kabir".into(),
                    email: "kabir@example.com".into(),
                    full_name: "Kabir Hossain".into(),
                    phone: "01712345678".into(),
                    role: Role::Admin,
                    employee_code: "EMP-001".into(),
                },
                "access".into(),
                "refresh".into(),
            ))
            .unwrap();
        let client = Arc::new(ApiClient::new(ApiConfig::new(server.uri()), store).unwrap());
        ReportRepository::new(client)
    }

    #[tokio::test]
    async fn test_list_parses_bare_array() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(endpoints::REPORTS))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
                "_id": "r1",
                "name": "Rahim Traders",
                "date": "2025-11-02",
                "address": "Kawran Bazar",
                "phone": "01712345678",
                "ratePoysha": 1400,
                "todaySellPoysha": 420_700,
                "paymentPoysha": 400_000,
                "duePoysha": 20_700,
                "birdCount": 180,
                "weightMilli": 300_500
            }])))
            .mount(&server)
            .await;

        let reports = repo(&server).list().await.unwrap();
        assert_eq!(reports.len(), 1);

        let report = &reports[0];
        assert_eq!(report.weight().to_string(), "300.5");
        // The row renders with Bengali digits on screen
        assert_eq!(format_taka_bn(report.due()), "৳২০৭.০০");
    }

    #[tokio::test]
    async fn test_empty_report_list() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(endpoints::REPORTS))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;

        assert!(repo(&server).list().await.unwrap().is_empty());
    }
}
