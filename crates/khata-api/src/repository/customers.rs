//! # Customer Repository
//!
//! Backend operations for the customer book.
//!
//! Customers carry the two balances the ledger calculator feeds on:
//! `previous_due` (what they still owe) and `due_limit` (how much they
//! are allowed to owe). Deleting a customer is a soft delete; the
//! backend flips `is_active` and keeps the history.

use std::sync::Arc;

use tracing::debug;

use khata_core::types::Customer;
use khata_core::validation::{validate_customer_name, validate_phone};

use crate::client::ApiClient;
use crate::endpoints;
use crate::error::ApiResult;
use crate::types::{ApiResponse, CustomerListParams, CustomerPayload, CustomerUpdate, Page};

/// Repository for customer operations.
#[derive(Clone)]
pub struct CustomerRepository {
    client: Arc<ApiClient>,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository.
    pub fn new(client: Arc<ApiClient>) -> Self {
        CustomerRepository { client }
    }

    /// Creates a customer.
    ///
    /// Field rules run locally first; a bad name or phone never leaves
    /// the device.
    pub async fn create(&self, payload: &CustomerPayload) -> ApiResult<Customer> {
        validate_customer_name(&payload.name)?;
        validate_phone(&payload.phone)?;

        debug!(name = %payload.name, "creating customer");
        let response: ApiResponse<Customer> =
            self.client.post(endpoints::CUSTOMERS, payload).await?;
        Ok(response.data)
    }

    /// Lists customers with optional search and due filters.
    pub async fn list(&self, params: &CustomerListParams) -> ApiResult<Page<Customer>> {
        let response: ApiResponse<Page<Customer>> =
            self.client.get_query(endpoints::CUSTOMERS, params).await?;
        Ok(response.data)
    }

    /// Fetches one customer by id.
    pub async fn get(&self, id: &str) -> ApiResult<Customer> {
        let response: ApiResponse<Customer> = self
            .client
            .get(&format!("{}/{}", endpoints::CUSTOMERS, id))
            .await?;
        Ok(response.data)
    }

    /// Applies a partial update to a customer.
    pub async fn update(&self, id: &str, changes: &CustomerUpdate) -> ApiResult<Customer> {
        if let Some(name) = &changes.name {
            validate_customer_name(name)?;
        }
        if let Some(phone) = &changes.phone {
            validate_phone(phone)?;
        }

        debug!(id, "updating customer");
        let response: ApiResponse<Customer> = self
            .client
            .put(&format!("{}/{}", endpoints::CUSTOMERS, id), changes)
            .await?;
        Ok(response.data)
    }

    /// Soft-deletes a customer.
    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        debug!(id, "deleting customer");
        let _: ApiResponse<Option<Customer>> = self
            .client
            .delete(&format!("{}/{}", endpoints::CUSTOMERS, id))
            .await?;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::error::ApiError;
    use khata_session::{MemoryStore, Session, SessionStore};
    use khata_core::types::{Role, User};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn repo(server: &MockServer) -> CustomerRepository {
        let store = Arc::new(MemoryStore::new());
        store
            .save(&Session::new(
                User {
                    id: "u1".into(),
                    user_name: "kabir".into(),
                    email: "kabir@example.com".into(),
                    full_name: "Kabir Hossain".into(),
                    phone: "01712345678".into(),
                    role: Role::Employee,
                    employee_code: "EMP-007".into(),
                },
                "access".into(),
                "refresh".into(),
            ))
            .unwrap();
        let client = Arc::new(ApiClient::new(ApiConfig::new(server.uri()), store).unwrap());
        CustomerRepository::new(client)
    }

    fn customer_json(id: &str, name: &str) -> serde_json::Value {
        serde_json::json!({
            "_id": id,
            "name": name,
            "email": null,
            "phone": "01712345678",
            "address": "Kawran Bazar",
            "customerType": "hotel",
            "defaultProductName": "broiler",
            "defaultUom": "kg",
            "defaultPricePoysha": 1400,
            "previousDuePoysha": 20700,
            "dueLimitPoysha": 0,
            "isActive": true,
            "createdAt": "2025-11-02T09:30:00Z",
            "updatedAt": "2025-11-02T09:30:00Z"
        })
    }

    fn payload() -> CustomerPayload {
        CustomerPayload {
            name: "Rahim Traders".into(),
            email: None,
            phone: "01712345678".into(),
            address: Some("Kawran Bazar".into()),
            customer_type: "hotel".into(),
            default_product_name: Some("broiler".into()),
            default_uom: Some("kg".into()),
            default_price_poysha: Some(1400),
            previous_due_poysha: None,
            due_limit_poysha: 0,
            is_active: None,
        }
    }

    #[tokio::test]
    async fn test_create_posts_and_unwraps() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(endpoints::CUSTOMERS))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "statusCode": 201,
                "message": "created",
                "data": customer_json("c1", "Rahim Traders")
            })))
            .mount(&server)
            .await;

        let customer = repo(&server).create(&payload()).await.unwrap();
        assert_eq!(customer.id, "c1");
        assert_eq!(customer.previous_due_poysha, 20700);
    }

    #[tokio::test]
    async fn test_create_rejects_bad_phone_locally() {
        // No mock mounted: a request would fail loudly
        let server = MockServer::start().await;

        let mut bad = payload();
        bad.phone = "017-12345".into();
        let err = repo(&server).create(&bad).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn test_list_sends_filters_as_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(endpoints::CUSTOMERS))
            .and(query_param("search", "rahim"))
            .and(query_param("minDuePoysha", "100"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "statusCode": 200,
                "message": "ok",
                "data": {
                    "items": [customer_json("c1", "Rahim Traders")],
                    "page": 1,
                    "limit": 20,
                    "total": 1
                }
            })))
            .mount(&server)
            .await;

        let page = repo(&server)
            .list(&CustomerListParams {
                search: Some("rahim".into()),
                min_due_poysha: Some(100),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].name, "Rahim Traders");
    }

    #[tokio::test]
    async fn test_update_and_delete_address_by_id() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/v1/customers/c1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "statusCode": 200,
                "message": "ok",
                "data": customer_json("c1", "Rahim & Sons")
            })))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/api/v1/customers/c1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "statusCode": 200,
                "message": "deleted",
                "data": null
            })))
            .mount(&server)
            .await;

        let repository = repo(&server);
        let updated = repository
            .update(
                "c1",
                &CustomerUpdate {
                    name: Some("Rahim & Sons".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Rahim & Sons");

        repository.delete("c1").await.unwrap();
    }
}
