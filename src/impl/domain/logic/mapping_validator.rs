use tracing::info;

use crate::entities::{ActivityTree, ExpenseToPayableMapping, MappingValidation};

use super::payable_patterns::TRANSFERS_SUB_CATEGORY;

/// Checks a mapping against the expenditure lines of the tree it was built
/// from.
///
/// Every expense outside B-05 must have a payable; misses are listed in
/// `unmapped_expenses` and make the mapping invalid. Transfers (B-05) must be
/// present and mapped to `None`; anything else is only a warning.
pub fn validate_mapping(
    mapping: &ExpenseToPayableMapping,
    tree: &ActivityTree,
) -> MappingValidation {
    if tree.expense_sub_categories().is_none() {
        return MappingValidation {
            is_valid: false,
            unmapped_expenses: Vec::new(),
            warnings: vec!["Section B data not available".to_string()],
        };
    }

    let mut unmapped_expenses = Vec::new();
    let mut warnings = Vec::new();
    for (sub_category, expense) in tree.expense_line_items() {
        let payable = mapping.payable_for(&expense.code);
        if sub_category == TRANSFERS_SUB_CATEGORY {
            // Transfers must be mapped explicitly to `None`; an absent entry
            // counts as a mapping too.
            if payable.is_some() || !mapping.contains(&expense.code) {
                warnings.push(format!(
                    "{} (Transfer) should not have a payable mapping",
                    expense.code
                ));
            }
        } else if payable.is_none() {
            unmapped_expenses.push(expense.code.clone());
        }
    }

    info!(
        unmapped = unmapped_expenses.len(),
        warnings = warnings.len(),
        "validated expense-to-payable mapping"
    );
    MappingValidation {
        is_valid: unmapped_expenses.is_empty(),
        unmapped_expenses,
        warnings,
    }
}
