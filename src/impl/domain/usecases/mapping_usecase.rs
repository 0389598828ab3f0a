use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::repositories::activities_repository_impl::ActivitiesRepositoryImpl,
    domain::{
        logic::{
            mapping_validator::validate_mapping,
            payable_mapper::{describe_mapping, generate_traced},
        },
        repositories::activities_repository::ActivitiesRepository,
    },
    entities::{ActivityTree, MappingReport},
};

#[async_trait]
pub trait MappingUsecase: Send + Sync {
    fn map_tree(&self, tree: &ActivityTree) -> MappingReport;

    fn from_string(&self, activities_json: &str) -> Result<MappingReport, ServerError>;

    async fn from_file<P>(&self, activities_json: P) -> Result<MappingReport, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct MappingUsecaseImpl<
    R = ActivitiesRepositoryImpl, // Default.
> where
    R: ActivitiesRepository,
{
    activities_repository: R,
}

#[async_trait]
impl<R: ActivitiesRepository> MappingUsecase for MappingUsecaseImpl<R> {
    fn map_tree(&self, tree: &ActivityTree) -> MappingReport {
        let outcome = generate_traced(tree);
        let validation = validate_mapping(&outcome.mapping, tree);
        let descriptions = describe_mapping(&outcome.mapping, tree);
        MappingReport {
            outcome,
            validation,
            descriptions,
        }
    }

    fn from_string(&self, activities_json: &str) -> Result<MappingReport, ServerError> {
        let tree = self.activities_repository.from_string(activities_json)?;
        Ok(self.map_tree(&tree))
    }

    async fn from_file<P>(&self, activities_json: P) -> Result<MappingReport, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let tree = self.activities_repository.from_file(activities_json).await?;
        Ok(self.map_tree(&tree))
    }
}

impl MappingUsecaseImpl {
    pub(crate) fn new() -> Self {
        MappingUsecaseImpl {
            activities_repository: ActivitiesRepositoryImpl::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TREE: &str = r#"{
        "B": { "subCategories": {
            "B-04": { "items": [
                { "code": "TB_EXEC_HOSPITAL_B_B-04_1", "name": "Fuel" },
                { "code": "TB_EXEC_HOSPITAL_B_B-04_2", "name": "Bank charges" }
            ] },
            "B-05": { "items": [
                { "code": "TB_EXEC_HOSPITAL_B_B-05_1", "name": "Transfer to RBC" }
            ] }
        } },
        "E": { "items": [
            { "id": 7, "code": "TB_EXEC_HOSPITAL_E_14", "name": "Payable 14: Fuel" }
        ] }
    }"#;

    #[test]
    fn maps_validates_and_describes() {
        let report = MappingUsecaseImpl::new().from_string(TREE).unwrap();
        assert_eq!(
            report.outcome.mapping.payable_for("TB_EXEC_HOSPITAL_B_B-04_1"),
            Some("TB_EXEC_HOSPITAL_E_14")
        );
        assert_eq!(report.outcome.mapping.len(), 3);
        // Bank charges are structurally unmapped.
        assert!(!report.validation.is_valid);
        assert_eq!(
            report.validation.unmapped_expenses,
            vec!["TB_EXEC_HOSPITAL_B_B-04_2".to_string()]
        );
        assert!(report.validation.warnings.is_empty());
        assert_eq!(
            report.descriptions[0].payable_name.as_deref(),
            Some("Payable 14: Fuel")
        );
    }

    #[test]
    fn string_ids_still_link_payables() {
        let report = MappingUsecaseImpl::new()
            .from_string(
                r#"{
                    "B": { "subCategories": { "B-02": { "items": [
                        { "code": "B_1", "name": "Something unusual",
                          "metadata": { "payableActivityId": "15" } }
                    ] } } },
                    "E": { "items": [
                        { "id": "15", "code": "E_15", "name": "Payable 15: Office supplies" },
                        { "id": 16, "code": ["E_16"], "name": "Broken" }
                    ] }
                }"#,
            )
            .unwrap();
        assert_eq!(report.outcome.mapping.payable_for("B_1"), Some("E_15"));
        assert!(report.validation.is_valid);
    }

    #[test]
    fn null_tree_maps_to_nothing() {
        let report = MappingUsecaseImpl::new().from_string("null").unwrap();
        assert!(report.outcome.mapping.is_empty());
        assert!(!report.validation.is_valid);
        assert_eq!(
            report.validation.warnings,
            vec!["Section B data not available".to_string()]
        );
    }
}
