//! # Endpoint Repositories
//!
//! One repository per backend collection, each a thin typed layer over
//! [`crate::client::ApiClient`]:
//!
//! - [`CustomerRepository`] - the customer book
//! - [`SaleRepository`] - sale submission (through the core calculator)
//!   and listing
//! - [`ReportRepository`] - customer day-reports

pub mod customers;
pub mod reports;
pub mod sales;

pub use customers::CustomerRepository;
pub use reports::ReportRepository;
pub use sales::{NewSale, SaleRepository};
