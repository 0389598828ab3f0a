use crate::entities::{RegenerationDecision, ReportStatus};

impl RegenerationDecision {
    /// Short explanation for the regenerate control.
    pub fn reason(&self) -> &'static str {
        if self.can_regenerate {
            return "Regenerate statement from execution data";
        }
        match self.status {
            Some(ReportStatus::PendingDafApproval) => "Report is pending DAF approval",
            Some(ReportStatus::ApprovedByDaf) => "Report is approved by DAF",
            Some(ReportStatus::Submitted) => "Report is submitted for approval",
            Some(ReportStatus::Approved) => "Report is approved",
            Some(ReportStatus::FullyApproved) => "Report is fully approved",
            _ => "Report cannot be regenerated in current state",
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::entities::FinancialReport;

    fn decision(status: ReportStatus) -> RegenerationDecision {
        let report = FinancialReport {
            id: 1,
            reporting_period_id: 1,
            status: Some(status),
        };
        RegenerationDecision::for_report(Some(&report), Utc::now())
    }

    #[test]
    fn explains_blocked_statuses() {
        assert_eq!(
            decision(ReportStatus::PendingDafApproval).reason(),
            "Report is pending DAF approval"
        );
        assert_eq!(
            decision(ReportStatus::FullyApproved).reason(),
            "Report is fully approved"
        );
        let unrecognized = FinancialReport {
            id: 2,
            reporting_period_id: 1,
            status: None,
        };
        assert_eq!(
            RegenerationDecision::for_report(Some(&unrecognized), Utc::now()).reason(),
            "Report cannot be regenerated in current state"
        );
    }

    #[test]
    fn regenerable_reports_share_one_reason() {
        assert_eq!(
            decision(ReportStatus::RejectedByDg).reason(),
            "Regenerate statement from execution data"
        );
        assert_eq!(
            RegenerationDecision::permissive(Utc::now()).reason(),
            decision(ReportStatus::Draft).reason()
        );
    }
}
