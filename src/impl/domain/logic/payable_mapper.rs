use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::entities::{
    Activity, ActivityTree, ExemptionReason, ExpenseToPayableMapping, MappingDescription,
    MappingOutcome, MappingTrace, Resolution,
};

use super::payable_patterns::{target_for, PayableTarget, TRANSFERS_SUB_CATEGORY};

/// Lookups over the payable (Section E) lines of one tree.
pub(crate) struct PayableIndex {
    /// Lowercased name → code, in tree order. A repeated name keeps its first
    /// position but takes the later code.
    by_name: Vec<(String, String)>,
    by_id: HashMap<i64, String>,
}

impl PayableIndex {
    pub(crate) fn build(payables: &[Activity]) -> Self {
        let mut by_name: Vec<(String, String)> = Vec::new();
        let mut by_id = HashMap::new();
        for payable in payables.iter().filter(|p| p.is_line_item()) {
            let name = payable.name.to_lowercase();
            match by_name.iter_mut().find(|(n, _)| *n == name) {
                Some(entry) => entry.1 = payable.code.clone(),
                None => by_name.push((name, payable.code.clone())),
            }
            if let Some(id) = payable.id {
                by_id.insert(id, payable.code.clone());
            }
        }
        Self { by_name, by_id }
    }

    fn by_id(&self, id: i64) -> Option<&str> {
        self.by_id.get(&id).map(String::as_str)
    }

    fn by_exact_name(&self, name: &str) -> Option<&str> {
        self.first_where(|n| n == name)
    }

    fn first_where(&self, predicate: impl Fn(&str) -> bool) -> Option<&str> {
        self.by_name
            .iter()
            .find(|(name, _)| predicate(name))
            .map(|(_, code)| code.as_str())
    }

    /// Tries each keyword in turn, exact name first, then any payable name
    /// containing it.
    fn by_keywords(&self, keywords: &[&str]) -> Option<&str> {
        let found = keywords.iter().find_map(|keyword| {
            self.by_exact_name(keyword)
                .or_else(|| self.first_where(|name| name.contains(keyword)))
        });
        if found.is_none() {
            debug!(?keywords, "no payable name matches keywords");
        }
        found
    }
}

struct ExpenseLine<'a> {
    sub_category: &'a str,
    activity: &'a Activity,
    /// Lowercased `activity.name`.
    name: String,
}

struct Resolved {
    payable_code: Option<String>,
    resolution: Resolution,
}

impl Resolved {
    fn to(payable_code: &str, resolution: Resolution) -> Self {
        Self {
            payable_code: Some(payable_code.to_string()),
            resolution,
        }
    }

    fn exempt(reason: ExemptionReason) -> Self {
        Self {
            payable_code: None,
            resolution: Resolution::Exempt(reason),
        }
    }
}

type Strategy = fn(&ExpenseLine, &PayableIndex) -> Option<Resolved>;

/// Resolution tiers in priority order. The first tier returning `Some` decides
/// the expense; later tiers are skipped.
const STRATEGIES: [(&str, Strategy); 3] = [
    ("explicit link", explicit_link),
    ("name hint", name_hint),
    ("pattern", keyword_pattern),
];

/// Tier 1: the expense's metadata links a payable by database id.
fn explicit_link(line: &ExpenseLine, payables: &PayableIndex) -> Option<Resolved> {
    // Zero is never a valid activity id.
    let id = line
        .activity
        .metadata
        .payable_activity_id
        .filter(|id| *id != 0)?;
    payables
        .by_id(id)
        .map(|code| Resolved::to(code, Resolution::ExplicitLink))
}

/// Tier 2: the expense's metadata names its payable. Exact (case-insensitive)
/// name first, then containment in either direction.
fn name_hint(line: &ExpenseLine, payables: &PayableIndex) -> Option<Resolved> {
    let hint = line
        .activity
        .metadata
        .payable_name
        .as_deref()
        .filter(|hint| !hint.trim().is_empty())?
        .to_lowercase();
    if let Some(code) = payables.by_exact_name(&hint) {
        return Some(Resolved::to(code, Resolution::NameHint { partial: false }));
    }
    payables
        .first_where(|name| name.contains(hint.as_str()) || hint.contains(name))
        .map(|code| Resolved::to(code, Resolution::NameHint { partial: true }))
}

/// Tier 3: keyword tables per subcategory.
fn keyword_pattern(line: &ExpenseLine, payables: &PayableIndex) -> Option<Resolved> {
    match target_for(line.sub_category, &line.name)? {
        PayableTarget::PaidImmediately if line.sub_category == TRANSFERS_SUB_CATEGORY => {
            Some(Resolved::exempt(ExemptionReason::Transfer))
        }
        PayableTarget::PaidImmediately => Some(Resolved::exempt(ExemptionReason::BankCharge)),
        PayableTarget::Keywords(keywords) => payables
            .by_keywords(keywords)
            .map(|code| Resolved::to(code, Resolution::Pattern)),
    }
}

fn resolve(line: &ExpenseLine, payables: &PayableIndex) -> Resolved {
    let resolved = STRATEGIES.iter().find_map(|(tier, strategy)| {
        let resolved = strategy(line, payables)?;
        debug!(
            tier,
            expense = %line.activity.name,
            payable = ?resolved.payable_code,
            "expense resolved"
        );
        Some(resolved)
    });
    match resolved {
        Some(resolved) => resolved,
        None if line.name.contains("bank") => Resolved::exempt(ExemptionReason::BankCharge),
        None => {
            warn!(
                expense = %line.activity.name,
                code = %line.activity.code,
                sub_category = line.sub_category,
                "no payable found for expense"
            );
            Resolved {
                payable_code: None,
                resolution: Resolution::Unresolved,
            }
        }
    }
}

/// Resolves every expenditure line of the tree to the payable it accrues
/// into, keeping an audit trace per line.
///
/// Returns an empty outcome when the tree has no expenditure subcategories
/// or no payable items.
pub fn generate_traced(tree: &ActivityTree) -> MappingOutcome {
    let mut outcome = MappingOutcome::default();
    let (Some(_), Some(payable_items)) = (tree.expense_sub_categories(), tree.liability_items())
    else {
        return outcome;
    };
    let payables = PayableIndex::build(payable_items);

    for (sub_category, activity) in tree.expense_line_items() {
        let line = ExpenseLine {
            sub_category,
            activity,
            name: activity.name.to_lowercase(),
        };
        let Resolved {
            payable_code,
            resolution,
        } = resolve(&line, &payables);
        outcome
            .mapping
            .insert(activity.code.clone(), payable_code.clone());
        outcome.traces.push(MappingTrace {
            expense_code: activity.code.clone(),
            expense_name: activity.name.clone(),
            sub_category: sub_category.to_string(),
            payable_code,
            resolution,
        });
    }

    info!(
        expenses = outcome.mapping.len(),
        unresolved = outcome.unresolved().count(),
        "generated expense-to-payable mapping"
    );
    outcome
}

/// Expense code → payable code for every expenditure line of the tree.
pub fn generate_expense_to_payable_mapping(tree: &ActivityTree) -> ExpenseToPayableMapping {
    generate_traced(tree).mapping
}

/// Pairs each mapped expense with the names on both sides. Payable codes not
/// present among the tree's liabilities are named "Unknown".
pub fn describe_mapping(
    mapping: &ExpenseToPayableMapping,
    tree: &ActivityTree,
) -> Vec<MappingDescription> {
    let (Some(_), Some(payable_items)) = (tree.expense_sub_categories(), tree.liability_items())
    else {
        return Vec::new();
    };
    let payable_names: HashMap<&str, &str> = payable_items
        .iter()
        .map(|p| (p.code.as_str(), p.name.as_str()))
        .collect();

    tree.expense_line_items()
        .map(|(_, expense)| {
            let payable_code = mapping.payable_for(&expense.code).map(str::to_string);
            let payable_name = payable_code.as_deref().map(|code| {
                payable_names
                    .get(code)
                    .copied()
                    .unwrap_or("Unknown")
                    .to_string()
            });
            MappingDescription {
                expense_code: expense.code.clone(),
                expense_name: expense.name.clone(),
                payable_code,
                payable_name,
            }
        })
        .collect()
}
