//! # Sale Repository
//!
//! Sale submission and listing.
//!
//! ## Submission Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Sale Submission                                    │
//! │                                                                         │
//! │  1. NORMALIZE                                                          │
//! │     └── SaleForm::normalize() → SaleQuote  (garbage → zero)            │
//! │                                                                         │
//! │  2. VALIDATE                                                           │
//! │     └── field rules, then quote.validate_payment()                     │
//! │         rejected sales never reach the wire                            │
//! │                                                                         │
//! │  3. COMPUTE                                                            │
//! │     └── quote.outcome() → total / due / status                         │
//! │                                                                         │
//! │  4. SUBMIT                                                             │
//! │     └── POST the payload with the outcome frozen into it               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Listing screens read the frozen amounts back as-is; nothing is
//! recomputed after submission.

use std::sync::Arc;

use tracing::{debug, info, warn};

use khata_core::sale::SaleForm;
use khata_core::types::{SaleRecord, SalesSummary};
use khata_core::validation::{validate_product_name, validate_quantity, validate_rate};

use crate::client::ApiClient;
use crate::endpoints;
use crate::error::ApiResult;
use crate::types::{ApiResponse, Page, SaleListParams, SalePayload, SummaryParams};

// =============================================================================
// New Sale
// =============================================================================

/// A sale as it leaves the entry form, before normalization.
#[derive(Debug, Clone)]
pub struct NewSale {
    pub customer_id: String,
    pub employee_id: String,
    pub product_name: String,
    /// Unit of measure, normally "kg".
    pub uom: String,
    /// The raw numeric fields as typed.
    pub form: SaleForm,
    pub notes: Option<String>,
}

// =============================================================================
// Sale Repository
// =============================================================================

/// Repository for sale operations.
#[derive(Clone)]
pub struct SaleRepository {
    client: Arc<ApiClient>,
}

impl SaleRepository {
    /// Creates a new SaleRepository.
    pub fn new(client: Arc<ApiClient>) -> Self {
        SaleRepository { client }
    }

    /// Submits a sale.
    ///
    /// Runs the whole pipeline above: a sale that fails field rules or
    /// offers an inadmissible payment is rejected locally with a
    /// validation error for the host to pin on the field.
    pub async fn create(&self, sale: &NewSale) -> ApiResult<SaleRecord> {
        let payload = self.prepare(sale)?;

        info!(
            customer = %payload.customer_id,
            total_poysha = payload.total_poysha,
            status = payload.status.as_str(),
            "submitting sale"
        );
        let response: ApiResponse<SaleRecord> =
            self.client.post(endpoints::SALES, &payload).await?;
        Ok(response.data)
    }

    /// Lists sales with optional date/status/party filters.
    pub async fn list(&self, params: &SaleListParams) -> ApiResult<Page<SaleRecord>> {
        let response: ApiResponse<Page<SaleRecord>> =
            self.client.get_query(endpoints::SALES, params).await?;
        Ok(response.data)
    }

    /// Fetches one sale by id.
    pub async fn get(&self, id: &str) -> ApiResult<SaleRecord> {
        let response: ApiResponse<SaleRecord> = self
            .client
            .get(&format!("{}/{}", endpoints::SALES, id))
            .await?;
        Ok(response.data)
    }

    /// Replaces a sale.
    ///
    /// Runs the same pipeline as [`Self::create`]: the frozen amounts
    /// are recomputed from the corrected form, never patched by hand.
    pub async fn update(&self, id: &str, sale: &NewSale) -> ApiResult<SaleRecord> {
        let payload = self.prepare(sale)?;

        debug!(id, "updating sale");
        let response: ApiResponse<SaleRecord> = self
            .client
            .put(&format!("{}/{}", endpoints::SALES, id), &payload)
            .await?;
        Ok(response.data)
    }

    /// Deletes a sale.
    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        debug!(id, "deleting sale");
        let _: ApiResponse<Option<SaleRecord>> = self
            .client
            .delete(&format!("{}/{}", endpoints::SALES, id))
            .await?;
        Ok(())
    }

    /// Fetches aggregated totals over a date range.
    pub async fn summary(&self, params: &SummaryParams) -> ApiResult<SalesSummary> {
        let response: ApiResponse<SalesSummary> = self
            .client
            .get_query(endpoints::SALES_SUMMARY, params)
            .await?;
        Ok(response.data)
    }

    /// Normalize → validate → compute → payload.
    fn prepare(&self, sale: &NewSale) -> ApiResult<SalePayload> {
        validate_product_name(&sale.product_name)?;

        let quote = sale.form.normalize();
        validate_rate(quote.unit_price)?;
        validate_quantity(quote.quantity)?;
        quote.validate_payment()?;

        if quote.exceeds_due_limit() {
            // Advisory only; the sale still goes through
            warn!(customer = %sale.customer_id, "sale pushes customer past their due limit");
        }

        let outcome = quote.outcome();
        Ok(SalePayload {
            customer_id: sale.customer_id.clone(),
            employee_id: sale.employee_id.clone(),
            product_name: sale.product_name.clone(),
            uom: sale.uom.clone(),
            quantity_milli: quote.quantity.milli(),
            unit_price_poysha: quote.unit_price.poysha(),
            paid_poysha: quote.paid_amount.poysha(),
            total_poysha: outcome.total_price.poysha(),
            due_poysha: outcome.due_amount.poysha(),
            status: outcome.status,
            notes: sale.notes.clone(),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
