use std::str::FromStr as _;

use serde_json::Value;
use tracing::debug;

use crate::{
    data::models::report_status_model::ReportStatusModel,
    entities::{FinancialReport, ProjectType},
};

#[derive(Debug, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProjectModel {
    pub(crate) id: i64,
    #[serde(default)]
    pub(crate) project_type: Option<String>,
}

impl ProjectModel {
    /// Unknown or missing project types never match.
    pub(crate) fn is_type(&self, project: ProjectType) -> bool {
        self.project_type
            .as_deref()
            .and_then(|t| t.parse::<ProjectType>().ok())
            == Some(project)
    }
}

/// The projects endpoint returns a bare array. Anything else is read as "no
/// projects".
pub(crate) fn projects_from_value(value: Value) -> Vec<ProjectModel> {
    let Value::Array(items) = value else {
        return Vec::new();
    };
    items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect()
}

#[derive(Debug, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FinancialReportModel {
    id: i64,
    #[serde(default)]
    reporting_period_id: Option<i64>,
    #[serde(default)]
    status: Option<Value>,
}

impl FinancialReportModel {
    /// `None` for reports not attached to a period. A status that is not one
    /// of the known strings is kept as an unrecognized (`None`) status.
    fn into_report(self) -> Option<FinancialReport> {
        let reporting_period_id = self.reporting_period_id?;
        let status = match &self.status {
            Some(Value::String(s)) => ReportStatusModel::from_str(s).ok().map(Into::into),
            _ => None,
        };
        Some(FinancialReport {
            id: self.id,
            reporting_period_id,
            status,
        })
    }
}

#[derive(Debug, Default, serde_derive::Deserialize)]
#[serde(default)]
pub(crate) struct FinancialReportsPageModel {
    reports: Option<Vec<Value>>,
}

impl FinancialReportsPageModel {
    /// Records are read one by one, so a malformed record only drops itself.
    pub(crate) fn into_reports(self) -> Vec<FinancialReport> {
        self.reports
            .unwrap_or_default()
            .into_iter()
            .filter_map(|report| {
                match serde_json::from_value::<FinancialReportModel>(report) {
                    Ok(model) => model.into_report(),
                    Err(e) => {
                        debug!(error = %e, "skipping malformed financial report");
                        None
                    }
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::ReportStatus;

    fn reports(json: &str) -> Vec<FinancialReport> {
        serde_json::from_str::<FinancialReportsPageModel>(json)
            .unwrap()
            .into_reports()
    }

    #[test]
    fn reads_reports_page() {
        let reports = reports(
            r#"{ "reports": [ { "id": 4, "reportingPeriodId": 2, "status": "draft", "title": "x" } ] }"#,
        );
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].status, Some(ReportStatus::Draft));
    }

    #[test]
    fn missing_reports_key_is_empty_page() {
        assert!(reports("{}").is_empty());
        assert!(reports(r#"{ "reports": null }"#).is_empty());
    }

    #[test]
    fn malformed_records_are_skipped_individually() {
        let reports = reports(
            r#"{ "reports": [
                { "id": 12, "reportingPeriodId": 5, "status": "approved" },
                { "id": 21, "reportingPeriodId": null, "status": "draft" },
                { "reportingPeriodId": 5, "status": "draft" },
                { "id": "x", "reportingPeriodId": 5 }
            ] }"#,
        );
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].id, 12);
        assert_eq!(reports[0].status, Some(ReportStatus::Approved));
    }

    #[test]
    fn unknown_status_is_kept_as_unrecognized() {
        let reports = reports(
            r#"{ "reports": [
                { "id": 1, "reportingPeriodId": 5, "status": "archived" },
                { "id": 2, "reportingPeriodId": 5, "status": 3 },
                { "id": 3, "reportingPeriodId": 5 }
            ] }"#,
        );
        assert_eq!(reports.len(), 3);
        assert!(reports.iter().all(|r| r.status.is_none()));
    }

    #[test]
    fn non_array_projects_body_is_empty() {
        assert!(projects_from_value(serde_json::json!({ "error": "nope" })).is_empty());
        let projects = projects_from_value(serde_json::json!([
            { "id": 1, "projectType": "HIV" },
            { "id": 2, "projectType": "Malaria" },
            { "id": 3 },
        ]));
        assert_eq!(projects.len(), 3);
        assert!(projects[1].is_type(ProjectType::Malaria));
        assert!(!projects[2].is_type(ProjectType::Hiv));
    }
}
