use tracing::{info, warn};

use crate::entities::Activity;

/// Explicit expense → payable link derived from a `payable_name` hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayableLink {
    pub expense_code: String,
    pub payable_activity_id: Option<i64>,
    pub payable_activity_code: String,
    pub payable_activity_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayableLinkReport {
    pub links: Vec<PayableLink>,
    pub errors: Vec<String>,
}

/// Turns the `payable_name` hints of seeded expenses into explicit links, so
/// the mapper can resolve them by id instead of by name.
///
/// Names must match exactly. Expenses without a hint (bank charges,
/// transfers) or with a blank one are skipped; hints naming no known payable
/// are reported.
pub fn link_payables(expenses: &[Activity], payables: &[Activity]) -> PayableLinkReport {
    let mut report = PayableLinkReport::default();
    for expense in expenses.iter().filter(|e| !e.is_total_row) {
        let Some(payable_name) = expense
            .metadata
            .payable_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
        else {
            continue;
        };
        match payables
            .iter()
            .filter(|p| !p.is_total_row)
            .find(|p| p.name == payable_name)
        {
            Some(payable) => report.links.push(PayableLink {
                expense_code: expense.code.clone(),
                payable_activity_id: payable.id,
                payable_activity_code: payable.code.clone(),
                payable_activity_name: payable.name.clone(),
            }),
            None => {
                warn!(expense = %expense.name, payable_name, "no matching payable");
                report.errors.push(format!(
                    "No matching payable found for expense: {} → {}",
                    expense.name, payable_name
                ));
            }
        }
    }
    info!(
        linked = report.links.len(),
        errors = report.errors.len(),
        "linked expenses to payables"
    );
    report
}

/// Writes the links into the expenses' metadata, leaving other expenses and
/// metadata fields untouched.
pub fn apply_links(expenses: &[Activity], links: &[PayableLink]) -> Vec<Activity> {
    expenses
        .iter()
        .map(|expense| {
            let mut expense = expense.clone();
            if let Some(link) = links.iter().find(|l| l.expense_code == expense.code) {
                expense.metadata.payable_activity_id = link.payable_activity_id;
                expense.metadata.payable_activity_code = Some(link.payable_activity_code.clone());
                expense.metadata.payable_activity_name = Some(link.payable_activity_name.clone());
            }
            expense
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::logic::payable_mapper::generate_traced,
        entities::{
            ActivityTree, Resolution, Section, EXPENDITURE_SECTION, LIABILITIES_SECTION,
        },
    };

    fn payables() -> Vec<Activity> {
        vec![
            Activity::new("E_1", "Payable 1: Salaries").with_id(11),
            Activity::new("E_14", "Payable 14: Fuel").with_id(24),
            Activity::new("E_TOTAL", "Payable 14: Fuel").with_id(99).total_row(),
        ]
    }

    #[test]
    fn links_exact_names_and_reports_misses() {
        let expenses = vec![
            Activity::new("B_1", "Nurse").with_payable_name("Payable 1: Salaries"),
            Activity::new("B_2", "Fuel").with_payable_name("Payable 14: Fuel"),
            Activity::new("B_3", "Maintenance").with_payable_name("Payable 13: Maintenance"),
            Activity::new("B_4", "Bank charges"),
        ];
        let report = link_payables(&expenses, &payables());
        assert_eq!(report.links.len(), 2);
        assert_eq!(report.links[1].payable_activity_id, Some(24));
        assert_eq!(report.links[1].payable_activity_code, "E_14");
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("Maintenance"));
    }

    #[test]
    fn blank_hints_are_skipped() {
        let expenses = vec![
            Activity::new("B_1", "Nurse").with_payable_name(""),
            Activity::new("B_2", "Fuel").with_payable_name("   "),
        ];
        let report = link_payables(&expenses, &payables());
        assert!(report.links.is_empty());
        assert!(report.errors.is_empty());
    }

    #[test]
    fn matching_is_case_sensitive() {
        let expenses = vec![Activity::new("B_1", "Nurse").with_payable_name("payable 1: salaries")];
        let report = link_payables(&expenses, &payables());
        assert!(report.links.is_empty());
        assert_eq!(report.errors.len(), 1);
    }

    #[test]
    fn applied_links_resolve_as_explicit() {
        let expenses = vec![
            Activity::new("B_1", "Nurse").with_payable_name("Payable 1: Salaries"),
            Activity::new("B_2", "Transfer to RBC"),
        ];
        let report = link_payables(&expenses, &payables());
        let linked = apply_links(&expenses, &report.links);
        assert_eq!(linked[0].metadata.payable_activity_id, Some(11));
        assert_eq!(linked[0].metadata.payable_activity_code.as_deref(), Some("E_1"));
        assert_eq!(linked[1], expenses[1]);

        let tree = ActivityTree::new()
            .with_section(
                EXPENDITURE_SECTION,
                Section::default().with_sub_category("B-01", vec![linked[0].clone()]),
            )
            .with_section(LIABILITIES_SECTION, Section::default().with_items(payables()));
        let outcome = generate_traced(&tree);
        assert_eq!(outcome.traces[0].resolution, Resolution::ExplicitLink);
        assert_eq!(outcome.mapping.payable_for("B_1"), Some("E_1"));
    }
}
