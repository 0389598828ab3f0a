use fractic_server_error::{define_client_error, define_internal_error};

// IO-related.
define_client_error!(ReadError, "Error reading file.");

// Parsing-related.
define_client_error!(InvalidJson, "Invalid {json_type} (invalid JSON format).", { json_type: &str });
define_client_error!(InvalidReportStatus, "Invalid report status: '{status}'.", { status: &str });
define_client_error!(InvalidProjectType, "Invalid project type: '{value}'.", { value: &str });
define_client_error!(InvalidFacilityType, "Invalid facility type: '{value}'.", { value: &str });
define_client_error!(
    InvalidStatementType,
    "Invalid statement type: '{value}'.",
    { value: &str }
);

// Report status lookup.
define_internal_error!(
    ProjectLookupFailed,
    "Failed to look up project for project type '{project_type}'.",
    { project_type: &str }
);
define_internal_error!(
    ReportLookupFailed,
    "Failed to look up financial reports for project {project_id} ({report_type}).",
    { project_id: i64, report_type: &str }
);

// Regeneration.
define_client_error!(
    RegenerationBlocked,
    "Statement '{statement}' cannot be regenerated while the report is '{status}'. Regenerating would discard its approval trail.",
    { statement: &str, status: &str }
);
define_client_error!(
    StaleRegenerationDecision,
    "Regeneration decision for '{statement}' was checked {age_secs}s ago, which exceeds the {window_secs}s staleness window. Re-check the report status first.",
    { statement: &str, age_secs: i64, window_secs: i64 }
);
