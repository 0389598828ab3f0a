use std::collections::BTreeMap;

/// Expense code → payable code, or `None` when the expense is paid
/// immediately (or could not be classified).
#[derive(
    Debug, Clone, Default, PartialEq, Eq, serde_derive::Serialize, serde_derive::Deserialize,
)]
#[serde(transparent)]
pub struct ExpenseToPayableMapping(BTreeMap<String, Option<String>>);

impl ExpenseToPayableMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, expense_code: impl Into<String>, payable_code: Option<String>) {
        self.0.insert(expense_code.into(), payable_code);
    }

    pub fn contains(&self, expense_code: &str) -> bool {
        self.0.contains_key(expense_code)
    }

    /// Payable code for the given expense. Missing expenses and expenses
    /// mapped to `None` are indistinguishable here.
    pub fn payable_for(&self, expense_code: &str) -> Option<&str> {
        self.0.get(expense_code).and_then(|p| p.as_deref())
    }

    /// All expense codes rolling into the given payable.
    pub fn expenses_for(&self, payable_code: &str) -> Vec<&str> {
        self.0
            .iter()
            .filter(|(_, payable)| payable.as_deref() == Some(payable_code))
            .map(|(expense, _)| expense.as_str())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.0.iter().map(|(e, p)| (e.as_str(), p.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExemptionReason {
    /// Subcategory B-05; transfers are always paid immediately.
    Transfer,
    /// Bank charges are deducted on payment.
    BankCharge,
}

/// How a single expense was resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    ExplicitLink,
    NameHint { partial: bool },
    Pattern,
    Exempt(ExemptionReason),
    Unresolved,
}

/// Audit entry emitted for every expense line the mapper visits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingTrace {
    pub expense_code: String,
    pub expense_name: String,
    pub sub_category: String,
    pub payable_code: Option<String>,
    pub resolution: Resolution,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingOutcome {
    pub mapping: ExpenseToPayableMapping,
    pub traces: Vec<MappingTrace>,
}

impl MappingOutcome {
    pub fn unresolved(&self) -> impl Iterator<Item = &MappingTrace> {
        self.traces
            .iter()
            .filter(|t| t.resolution == Resolution::Unresolved)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingValidation {
    pub is_valid: bool,
    pub unmapped_expenses: Vec<String>,
    pub warnings: Vec<String>,
}

/// Human-readable row of a mapping, for admin tooling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingDescription {
    pub expense_code: String,
    pub expense_name: String,
    pub payable_code: Option<String>,
    pub payable_name: Option<String>,
}

/// Everything derived from one activity tree's expense → payable pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingReport {
    pub outcome: MappingOutcome,
    pub validation: MappingValidation,
    pub descriptions: Vec<MappingDescription>,
}
