use crate::entities::VatCategory;

struct VatRule {
    category: VatCategory,
    matches: fn(&str) -> bool,
}

/// Classification rules, tested in order; the first hit wins.
///
/// Order is load-bearing: category names overlap in seeded data. In
/// particular the Malaria line "Consumable (supplies, stationaries, & human
/// landing)" also contains "supplies", so consumables must be tested before
/// office supplies.
const VAT_RULES: [VatRule; 6] = [
    VatRule {
        category: VatCategory::CommunicationAll,
        matches: |n| n.contains("communication") && n.contains("all"),
    },
    VatRule {
        category: VatCategory::Maintenance,
        matches: |n| n.contains("maintenance"),
    },
    VatRule {
        category: VatCategory::Fuel,
        matches: |n| n == "fuel" || (n.contains("fuel") && !n.contains("refund")),
    },
    VatRule {
        category: VatCategory::Consumables,
        matches: |n| n.contains("consumable"),
    },
    VatRule {
        category: VatCategory::OfficeSupplies,
        matches: |n| n.contains("office supplies") || n.contains("office supply"),
    },
    VatRule {
        category: VatCategory::CarHiring,
        matches: |n| n.contains("car") && n.contains("hiring"),
    },
];

/// VAT category of an expense, derived from its display name alone.
pub fn vat_category(activity_name: &str) -> Option<VatCategory> {
    let name = activity_name.trim().to_lowercase();
    VAT_RULES
        .iter()
        .find(|rule| (rule.matches)(&name))
        .map(|rule| rule.category)
}

/// Whether the expense generates a recoverable VAT receivable.
pub fn is_vat_applicable(activity_name: &str) -> bool {
    vat_category(activity_name).is_some()
}
