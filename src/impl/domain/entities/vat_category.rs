/// Expense categories whose VAT is recoverable from the tax authority and is
/// therefore carried as a receivable in Section D.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    serde_derive::Serialize,
    serde_derive::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum VatCategory {
    CommunicationAll,
    Maintenance,
    Fuel,
    OfficeSupplies,
    // Malaria only.
    CarHiring,
    Consumables,
}

impl VatCategory {
    pub const ALL: [VatCategory; 6] = [
        VatCategory::CommunicationAll,
        VatCategory::Maintenance,
        VatCategory::Fuel,
        VatCategory::OfficeSupplies,
        VatCategory::CarHiring,
        VatCategory::Consumables,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VatCategory::CommunicationAll => "communication_all",
            VatCategory::Maintenance => "maintenance",
            VatCategory::Fuel => "fuel",
            VatCategory::OfficeSupplies => "office_supplies",
            VatCategory::CarHiring => "car_hiring",
            VatCategory::Consumables => "consumables",
        }
    }
}
