use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::FinancialReportsQuery;

// Remote collaborators.
// ---

/// Access to the reporting API, implemented by the caller (HTTP client,
/// in-process service, test fake, ...). Implementations return the raw JSON
/// response bodies; parsing happens inside this crate.
#[async_trait]
pub trait FinancialReportsApi: Send + Sync {
    /// Body of the project listing: a JSON array of project records.
    async fn list_projects(&self) -> Result<String, ServerError>;

    /// Body of the report listing: `{ "reports": [...] }`.
    async fn list_financial_reports(
        &self,
        query: &FinancialReportsQuery,
    ) -> Result<String, ServerError>;
}
