use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use fractic_server_error::ServerError;

use crate::{
    domain::{
        logic::regeneration_guard::authorize_regeneration,
        usecases::report_status_usecase::ReportStatusUsecase,
    },
    entities::{RegenerateStatementRequest, RegenerationDecision, RegenerationGuardConfig},
};

#[async_trait]
pub trait RegenerateUsecase: Send + Sync {
    /// Checks a previously fetched decision against the request.
    fn authorize(
        &self,
        request: &RegenerateStatementRequest,
        decision: &RegenerationDecision,
        now: DateTime<Utc>,
    ) -> Result<(), ServerError>;

    /// Fetches a fresh decision and authorizes against it. Returns the
    /// decision so callers can surface it.
    async fn recheck(
        &self,
        request: &RegenerateStatementRequest,
    ) -> Result<RegenerationDecision, ServerError>;
}

pub(crate) struct RegenerateUsecaseImpl<S: ReportStatusUsecase> {
    report_status_usecase: Arc<S>,
    staleness_window: Duration,
}

#[async_trait]
impl<S: ReportStatusUsecase> RegenerateUsecase for RegenerateUsecaseImpl<S> {
    fn authorize(
        &self,
        request: &RegenerateStatementRequest,
        decision: &RegenerationDecision,
        now: DateTime<Utc>,
    ) -> Result<(), ServerError> {
        authorize_regeneration(request, decision, now, self.staleness_window)
    }

    async fn recheck(
        &self,
        request: &RegenerateStatementRequest,
    ) -> Result<RegenerationDecision, ServerError> {
        let decision = self
            .report_status_usecase
            .report_status(
                request.reporting_period_id,
                request.project_type,
                request.statement,
            )
            .await;
        self.authorize(request, &decision, Utc::now())?;
        Ok(decision)
    }
}

impl<S: ReportStatusUsecase> RegenerateUsecaseImpl<S> {
    pub(crate) fn new(report_status_usecase: Arc<S>, config: &RegenerationGuardConfig) -> Self {
        RegenerateUsecaseImpl {
            report_status_usecase,
            staleness_window: config.staleness_window(),
        }
    }
}
