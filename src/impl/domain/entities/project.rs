use std::str::FromStr;

use fractic_server_error::ServerError;

use crate::errors::{InvalidFacilityType, InvalidProjectType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectType {
    Hiv,
    Malaria,
    Tb,
}

impl ProjectType {
    /// Prefix used in seeded activity codes (ex. `MAL_EXEC_HOSPITAL_...`).
    pub fn code_prefix(&self) -> &'static str {
        match self {
            ProjectType::Hiv => "HIV",
            ProjectType::Malaria => "MAL",
            ProjectType::Tb => "TB",
        }
    }

    /// Name under which the reporting API lists the project.
    pub fn api_name(&self) -> &'static str {
        match self {
            ProjectType::Hiv => "HIV",
            ProjectType::Malaria => "Malaria",
            ProjectType::Tb => "TB",
        }
    }
}

impl FromStr for ProjectType {
    type Err = ServerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "HIV" => Ok(ProjectType::Hiv),
            "MAL" | "MALARIA" => Ok(ProjectType::Malaria),
            "TB" => Ok(ProjectType::Tb),
            _ => Err(InvalidProjectType::new(s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacilityType {
    Hospital,
    HealthCenter,
}

impl FacilityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FacilityType::Hospital => "hospital",
            FacilityType::HealthCenter => "health_center",
        }
    }

    /// Upper-cased segment used in seeded activity codes.
    pub fn code_segment(&self) -> String {
        self.as_str().to_ascii_uppercase()
    }
}

impl FromStr for FacilityType {
    type Err = ServerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hospital" => Ok(FacilityType::Hospital),
            "health_center" => Ok(FacilityType::HealthCenter),
            _ => Err(InvalidFacilityType::new(s)),
        }
    }
}
