use std::collections::BTreeMap;

/// Section letter holding expenditure activities.
pub const EXPENDITURE_SECTION: &str = "B";
/// Section letter holding financial assets, including VAT receivables.
pub const ASSETS_SECTION: &str = "D";
/// Section letter holding financial liabilities (payables).
pub const LIABILITIES_SECTION: &str = "E";

/// Author-supplied hints attached to an activity when it was seeded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityMetadata {
    pub payable_activity_id: Option<i64>,
    pub payable_name: Option<String>,
    pub payable_activity_code: Option<String>,
    pub payable_activity_name: Option<String>,
}

/// A single line item of a facility's execution plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub id: Option<i64>,
    pub code: String,
    pub name: String,
    pub is_total_row: bool,
    pub is_computed: bool,
    pub metadata: ActivityMetadata,
}

impl Activity {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: None,
            code: code.into(),
            name: name.into(),
            is_total_row: false,
            is_computed: false,
            metadata: ActivityMetadata::default(),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_payable_activity_id(mut self, payable_activity_id: i64) -> Self {
        self.metadata.payable_activity_id = Some(payable_activity_id);
        self
    }

    pub fn with_payable_name(mut self, payable_name: impl Into<String>) -> Self {
        self.metadata.payable_name = Some(payable_name.into());
        self
    }

    pub fn total_row(mut self) -> Self {
        self.is_total_row = true;
        self
    }

    pub fn computed(mut self) -> Self {
        self.is_computed = true;
        self
    }

    /// Total and computed rows are derived from other lines and never take
    /// part in classification.
    pub fn is_line_item(&self) -> bool {
        !self.is_total_row && !self.is_computed
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubCategory {
    pub items: Vec<Activity>,
}

/// One lettered section of the tree. Expenditure is split into subcategories
/// (`B-01`..`B-05`), while liabilities and assets carry a flat item list.
/// `None` means the key was absent in the source data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    pub sub_categories: Option<BTreeMap<String, SubCategory>>,
    pub items: Option<Vec<Activity>>,
}

impl Section {
    pub fn with_sub_category(mut self, code: impl Into<String>, items: Vec<Activity>) -> Self {
        self.sub_categories
            .get_or_insert_with(BTreeMap::new)
            .insert(code.into(), SubCategory { items });
        self
    }

    pub fn with_items(mut self, items: Vec<Activity>) -> Self {
        self.items = Some(items);
        self
    }
}

/// Snapshot of all activities for one project/facility/period, keyed by
/// section letter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityTree {
    pub sections: BTreeMap<String, Section>,
}

impl ActivityTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_section(mut self, key: impl Into<String>, section: Section) -> Self {
        self.sections.insert(key.into(), section);
        self
    }

    pub fn section(&self, key: &str) -> Option<&Section> {
        self.sections.get(key)
    }

    pub(crate) fn expense_sub_categories(&self) -> Option<&BTreeMap<String, SubCategory>> {
        self.section(EXPENDITURE_SECTION)?.sub_categories.as_ref()
    }

    pub(crate) fn liability_items(&self) -> Option<&[Activity]> {
        self.section(LIABILITIES_SECTION)?.items.as_deref()
    }

    /// Expenditure line items with their subcategory code, in subcategory
    /// order. Total and computed rows are skipped.
    pub fn expense_line_items(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.expense_sub_categories()
            .into_iter()
            .flat_map(|sub_categories| sub_categories.iter())
            .flat_map(|(code, sub_category)| {
                sub_category
                    .items
                    .iter()
                    .filter(|item| item.is_line_item())
                    .map(move |item| (code.as_str(), item))
            })
    }
}
