use std::str::FromStr;

use fractic_server_error::ServerError;

use crate::{entities::ReportStatus, errors::InvalidReportStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ReportStatusModel(ReportStatus);

impl FromStr for ReportStatusModel {
    type Err = ServerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let status = match s.trim().to_lowercase().as_str() {
            "draft" => ReportStatus::Draft,
            "submitted" => ReportStatus::Submitted,
            "pending_daf_approval" => ReportStatus::PendingDafApproval,
            "approved_by_daf" => ReportStatus::ApprovedByDaf,
            "approved" => ReportStatus::Approved,
            "fully_approved" => ReportStatus::FullyApproved,
            "rejected_by_daf" => ReportStatus::RejectedByDaf,
            "rejected_by_dg" => ReportStatus::RejectedByDg,
            "rejected" => ReportStatus::Rejected,
            _ => return Err(InvalidReportStatus::new(s)),
        };
        Ok(ReportStatusModel(status))
    }
}

impl Into<ReportStatus> for ReportStatusModel {
    fn into(self) -> ReportStatus {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_status() {
        for status in [
            ReportStatus::Draft,
            ReportStatus::Submitted,
            ReportStatus::PendingDafApproval,
            ReportStatus::ApprovedByDaf,
            ReportStatus::Approved,
            ReportStatus::FullyApproved,
            ReportStatus::RejectedByDaf,
            ReportStatus::RejectedByDg,
            ReportStatus::Rejected,
        ] {
            let model = ReportStatusModel::from_str(status.as_str()).unwrap();
            let parsed: ReportStatus = model.into();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn tolerates_case_and_whitespace() {
        let model = ReportStatusModel::from_str(" Approved_By_DAF ").unwrap();
        let parsed: ReportStatus = model.into();
        assert_eq!(parsed, ReportStatus::ApprovedByDaf);
    }

    #[test]
    fn rejects_unknown_status() {
        assert!(ReportStatusModel::from_str("archived").is_err());
        assert!(ReportStatusModel::from_str("").is_err());
    }
}
