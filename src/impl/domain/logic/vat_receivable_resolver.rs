use crate::entities::{Activity, FacilityType, ProjectType, VatCategory};

use super::{activity_code::ActivityCode, vat_classifier::vat_category};

/// Receivable line suffix per category. `OfficeSupplies` maps to `SUPPLIES`:
/// persisted Section D lines use that code, so it must not be "fixed".
const RECEIVABLE_SUFFIXES: [(VatCategory, &str); 6] = [
    (VatCategory::CommunicationAll, "COMMUNICATION_ALL"),
    (VatCategory::Maintenance, "MAINTENANCE"),
    (VatCategory::Fuel, "FUEL"),
    (VatCategory::OfficeSupplies, "SUPPLIES"),
    (VatCategory::CarHiring, "CAR_HIRING"),
    (VatCategory::Consumables, "CONSUMABLES"),
];

/// Suffixes of retired receivable lines. Recognized when reading codes, never
/// produced.
const LEGACY_SUFFIXES: [(&str, VatCategory); 3] = [
    ("AIRTIME", VatCategory::CommunicationAll),
    ("INTERNET", VatCategory::CommunicationAll),
    ("INFRASTRUCTURE", VatCategory::Maintenance),
];

/// Categories shared by every program.
const COMMON_CATEGORIES: [VatCategory; 4] = [
    VatCategory::CommunicationAll,
    VatCategory::Maintenance,
    VatCategory::Fuel,
    VatCategory::OfficeSupplies,
];

const CURRENT_INFIX: &str = "_D_VAT_";
// VAT receivables used to be filed under Section E.
const LEGACY_INFIX: &str = "_E_VAT_";

fn receivable_suffix(category: VatCategory) -> &'static str {
    RECEIVABLE_SUFFIXES
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, suffix)| *suffix)
        // The table covers every variant.
        .unwrap_or_default()
}

/// Section D code of the receivable line absorbing VAT of the given category,
/// ex. `MAL_EXEC_HEALTH_CENTER_D_VAT_CAR_HIRING`.
pub fn vat_receivable_code(
    project: ProjectType,
    facility: FacilityType,
    category: VatCategory,
) -> String {
    format!(
        "{}_EXEC_{}{}{}",
        project.code_prefix(),
        facility.code_segment(),
        CURRENT_INFIX,
        receivable_suffix(category)
    )
}

/// Codes for all six categories, whether or not the project uses them.
pub fn all_vat_receivable_codes(project: ProjectType, facility: FacilityType) -> Vec<String> {
    VatCategory::ALL
        .into_iter()
        .map(|category| vat_receivable_code(project, facility, category))
        .collect()
}

/// Categories for which the project carries a VAT receivable line. Malaria
/// adds car hiring and consumables to the common four.
pub fn project_vat_categories(project: ProjectType) -> &'static [VatCategory] {
    match project {
        ProjectType::Malaria => &VatCategory::ALL,
        ProjectType::Hiv | ProjectType::Tb => &COMMON_CATEGORIES,
    }
}

/// Codes of the receivable lines the project actually has.
pub fn project_vat_receivable_codes(project: ProjectType, facility: FacilityType) -> Vec<String> {
    project_vat_categories(project)
        .iter()
        .map(|category| vat_receivable_code(project, facility, *category))
        .collect()
}

/// Recognizes current (`_D_VAT_`) and legacy (`_E_VAT_`) receivable codes.
pub fn is_vat_receivable_code(code: &str) -> bool {
    code.contains(CURRENT_INFIX) || code.contains(LEGACY_INFIX)
}

/// Inverse of `vat_receivable_code`, also accepting legacy category suffixes.
pub fn vat_category_from_code(code: &str) -> Option<VatCategory> {
    if !is_vat_receivable_code(code) {
        return None;
    }
    let code = code.to_lowercase();
    let contains_suffix =
        |suffix: &str| code.contains(&format!("_vat_{}", suffix.to_lowercase()));

    RECEIVABLE_SUFFIXES
        .iter()
        .find(|(_, suffix)| contains_suffix(*suffix))
        .map(|(category, _)| *category)
        .or_else(|| {
            LEGACY_SUFFIXES
                .iter()
                .find(|(suffix, _)| contains_suffix(*suffix))
                .map(|(_, category)| *category)
        })
}

/// Receivable line that absorbs the VAT of an expense, using the project and
/// facility encoded in the expense's own code. `None` when the expense is not
/// VAT-applicable, or its code does not follow the execution layout.
pub fn vat_receivable_code_for_expense(expense: &Activity) -> Option<String> {
    let category = vat_category(&expense.name)?;
    let code = ActivityCode::parse(&expense.code)?;
    Some(vat_receivable_code(code.project, code.facility, category))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_codes_from_project_and_facility() {
        assert_eq!(
            vat_receivable_code(
                ProjectType::Hiv,
                FacilityType::Hospital,
                VatCategory::CommunicationAll
            ),
            "HIV_EXEC_HOSPITAL_D_VAT_COMMUNICATION_ALL"
        );
        assert_eq!(
            vat_receivable_code(
                ProjectType::Malaria,
                FacilityType::HealthCenter,
                VatCategory::CarHiring
            ),
            "MAL_EXEC_HEALTH_CENTER_D_VAT_CAR_HIRING"
        );
    }

    #[test]
    fn office_supplies_use_supplies_suffix() {
        assert_eq!(
            vat_receivable_code(
                ProjectType::Tb,
                FacilityType::Hospital,
                VatCategory::OfficeSupplies
            ),
            "TB_EXEC_HOSPITAL_D_VAT_SUPPLIES"
        );
    }

    #[test]
    fn all_codes_cover_every_category() {
        let codes = all_vat_receivable_codes(ProjectType::Hiv, FacilityType::Hospital);
        assert_eq!(codes.len(), 6);
        for code in &codes {
            assert!(is_vat_receivable_code(code));
        }
    }

    #[test]
    fn project_codes_follow_program_categories() {
        let hiv = project_vat_receivable_codes(ProjectType::Hiv, FacilityType::Hospital);
        let tb = project_vat_receivable_codes(ProjectType::Tb, FacilityType::Hospital);
        let mal = project_vat_receivable_codes(ProjectType::Malaria, FacilityType::Hospital);
        assert_eq!(hiv.len(), 4);
        assert_eq!(tb.len(), 4);
        assert_eq!(mal.len(), 6);

        let hiv_suffixes: Vec<_> = hiv.iter().map(|c| c.trim_start_matches("HIV")).collect();
        for suffix in hiv_suffixes {
            assert!(mal.iter().any(|c| c.trim_start_matches("MAL") == suffix));
        }
    }

    #[test]
    fn recognizes_legacy_infix() {
        assert!(is_vat_receivable_code("HIV_EXEC_HOSPITAL_E_VAT_FUEL"));
        assert!(!is_vat_receivable_code("HIV_EXEC_HOSPITAL_D_1"));
        assert_eq!(
            vat_category_from_code("HIV_EXEC_HOSPITAL_E_VAT_FUEL"),
            Some(VatCategory::Fuel)
        );
    }

    #[test]
    fn inverts_every_current_code() {
        for category in VatCategory::ALL {
            let code = vat_receivable_code(ProjectType::Malaria, FacilityType::Hospital, category);
            assert_eq!(vat_category_from_code(&code), Some(category));
        }
    }

    #[test]
    fn resolves_legacy_aliases() {
        assert_eq!(
            vat_category_from_code("HIV_EXEC_HOSPITAL_D_VAT_AIRTIME"),
            Some(VatCategory::CommunicationAll)
        );
        assert_eq!(
            vat_category_from_code("HIV_EXEC_HOSPITAL_E_VAT_INTERNET"),
            Some(VatCategory::CommunicationAll)
        );
        assert_eq!(
            vat_category_from_code("TB_EXEC_HEALTH_CENTER_D_VAT_INFRASTRUCTURE"),
            Some(VatCategory::Maintenance)
        );
    }

    #[test]
    fn resolves_receivable_from_expense() {
        let fuel = Activity::new("MAL_EXEC_HEALTH_CENTER_B_B-04_3", "Fuel");
        assert_eq!(
            vat_receivable_code_for_expense(&fuel).as_deref(),
            Some("MAL_EXEC_HEALTH_CENTER_D_VAT_FUEL")
        );
        let consumables = Activity::new(
            "MAL_EXEC_HOSPITAL_B_B-04_6",
            "Consumable (supplies, stationaries, & human landing)",
        );
        assert_eq!(
            vat_receivable_code_for_expense(&consumables).as_deref(),
            Some("MAL_EXEC_HOSPITAL_D_VAT_CONSUMABLES")
        );
        let salaries = Activity::new("HIV_EXEC_HOSPITAL_B_B-01_1", "Salaries");
        assert_eq!(vat_receivable_code_for_expense(&salaries), None);
        assert_eq!(vat_receivable_code_for_expense(&Activity::new("X", "Fuel")), None);
    }

    #[test]
    fn rejects_non_vat_codes() {
        assert_eq!(vat_category_from_code("HIV_EXEC_HOSPITAL_D_1"), None);
        assert_eq!(vat_category_from_code("HIV_EXEC_HOSPITAL_D_VAT_UNKNOWN"), None);
    }
}
