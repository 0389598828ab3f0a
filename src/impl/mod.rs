// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod activities_json_datasource;
        pub(crate) mod financial_reports_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod activity_tree_model;
        pub(crate) mod financial_report_model;
        pub(crate) mod report_status_model;
    }
    pub(crate) mod repositories {
        pub(crate) mod activities_repository_impl;
        pub(crate) mod report_status_repository_impl;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod activity;
        pub(crate) mod config;
        pub(crate) mod handlers;
        pub(crate) mod payable_mapping;
        pub(crate) mod project;
        pub(crate) mod report;
        pub(crate) mod vat_category;
    }
    pub(crate) mod logic {
        pub(crate) mod activity_code;
        pub(crate) mod mapping_validator;
        pub(crate) mod payable_linker;
        pub(crate) mod payable_mapper;
        pub(crate) mod regeneration_guard;
        pub(crate) mod vat_classifier;
        pub(crate) mod vat_receivable_resolver;
        mod payable_patterns;
    }
    pub(crate) mod repositories {
        pub(crate) mod activities_repository;
        pub(crate) mod report_status_repository;
    }
    pub(crate) mod usecases {
        pub(crate) mod mapping_usecase;
        pub(crate) mod regenerate_usecase;
        pub(crate) mod report_status_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod mapping_report_printer;
    pub(crate) mod regeneration_reason_fmt;
    pub(crate) mod resolution_fmt;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::activity::*;
        pub use crate::domain::entities::config::*;
        pub use crate::domain::entities::handlers::*;
        pub use crate::domain::entities::payable_mapping::*;
        pub use crate::domain::entities::project::*;
        pub use crate::domain::entities::report::*;
        pub use crate::domain::entities::vat_category::*;
    }

    pub mod rules {
        pub use crate::domain::logic::activity_code::*;
        pub use crate::domain::logic::mapping_validator::*;
        pub use crate::domain::logic::payable_linker::*;
        pub use crate::domain::logic::payable_mapper::*;
        pub use crate::domain::logic::regeneration_guard::*;
        pub use crate::domain::logic::vat_classifier::*;
        pub use crate::domain::logic::vat_receivable_resolver::*;
    }
}
