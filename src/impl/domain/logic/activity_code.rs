use std::sync::LazyLock;

use regex::Regex;

use crate::entities::{FacilityType, ProjectType};

static ACTIVITY_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<project>HIV|MAL|TB)_EXEC_(?P<facility>HOSPITAL|HEALTH_CENTER)_(?P<section>[A-Z])_(?P<rest>.+)$",
    )
    .expect("hardcoded regex should be valid")
});

static SUB_CATEGORY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<sub_category>[A-Z]-\d{2})_(?P<sequence>.+)$")
        .expect("hardcoded regex should be valid")
});

/// Structured view of a seeded execution activity code, ex.
/// `HIV_EXEC_HOSPITAL_B_B-01_1` or `MAL_EXEC_HEALTH_CENTER_D_VAT_FUEL`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCode {
    pub project: ProjectType,
    pub facility: FacilityType,
    pub section: char,
    pub sub_category: Option<String>,
    /// Whatever follows the section (or subcategory): a sequence number,
    /// `VAT_FUEL`, ...
    pub tail: String,
}

impl ActivityCode {
    /// `None` for codes not following the execution code layout.
    pub fn parse(code: &str) -> Option<Self> {
        let caps = ACTIVITY_CODE.captures(code)?;
        let project = caps["project"].parse().ok()?;
        let facility = caps["facility"].parse().ok()?;
        let section = caps["section"].chars().next()?;
        let rest = &caps["rest"];
        let (sub_category, tail) = match SUB_CATEGORY.captures(rest) {
            Some(sub) => (
                Some(sub["sub_category"].to_string()),
                sub["sequence"].to_string(),
            ),
            None => (None, rest.to_string()),
        };
        Some(Self {
            project,
            facility,
            section,
            sub_category,
            tail,
        })
    }
}
