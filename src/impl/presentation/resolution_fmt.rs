use crate::entities::{ExemptionReason, Resolution};

impl Resolution {
    pub(crate) fn label(&self) -> &'static str {
        match self {
            Resolution::ExplicitLink => "explicit link",
            Resolution::NameHint { partial: false } => "name hint",
            Resolution::NameHint { partial: true } => "name hint (partial)",
            Resolution::Pattern => "pattern",
            Resolution::Exempt(ExemptionReason::Transfer) => "exempt: transfer",
            Resolution::Exempt(ExemptionReason::BankCharge) => "exempt: bank charge",
            Resolution::Unresolved => "UNRESOLVED",
        }
    }
}
