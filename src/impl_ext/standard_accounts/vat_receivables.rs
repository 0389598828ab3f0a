use crate::{
    domain::logic::vat_receivable_resolver::{project_vat_categories, vat_receivable_code},
    entities::{FacilityType, ProjectType, VatCategory},
};

/// Display name of the Section D line for the category.
pub fn vat_receivable_label(category: VatCategory) -> &'static str {
    match category {
        VatCategory::CommunicationAll => "VAT Receivable 1: Communication - All",
        VatCategory::Maintenance => "VAT Receivable 2: Maintenance",
        VatCategory::Fuel => "VAT Receivable 3: Fuel",
        VatCategory::OfficeSupplies => "VAT Receivable 4: Office supplies",
        VatCategory::CarHiring => "VAT Receivable 5: Car hiring",
        VatCategory::Consumables => "VAT Receivable 6: Consumables",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VatReceivableLine {
    pub category: VatCategory,
    pub code: String,
    pub label: &'static str,
}

/// The VAT receivable lines a project's Section D is expected to carry.
pub fn standard_vat_receivable_lines(
    project: ProjectType,
    facility: FacilityType,
) -> Vec<VatReceivableLine> {
    project_vat_categories(project)
        .iter()
        .map(|&category| VatReceivableLine {
            category,
            code: vat_receivable_code(project, facility, category),
            label: vat_receivable_label(category),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malaria_carries_all_six_lines() {
        let lines = standard_vat_receivable_lines(ProjectType::Malaria, FacilityType::Hospital);
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[4].code, "MAL_EXEC_HOSPITAL_D_VAT_CAR_HIRING");
        assert_eq!(lines[4].label, "VAT Receivable 5: Car hiring");
    }

    #[test]
    fn hiv_carries_common_lines() {
        let lines = standard_vat_receivable_lines(ProjectType::Hiv, FacilityType::HealthCenter);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[3].code, "HIV_EXEC_HEALTH_CENTER_D_VAT_SUPPLIES");
        assert_eq!(lines[3].label, "VAT Receivable 4: Office supplies");
    }
}
