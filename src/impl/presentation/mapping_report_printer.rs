use std::collections::HashMap;

use crate::entities::{MappingDescription, MappingReport};

const LINE_WIDTH: usize = 80;

fn section_header(title: &str) -> String {
    let head = format!("; --- {} ", title);
    format!("{:-<width$}\n\n", head, width = LINE_WIDTH)
}

pub(crate) struct MappingReportPrinter;

impl MappingReportPrinter {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn print_report(&self, report: &MappingReport) -> String {
        let mut output = String::new();

        output.push_str(&section_header("Expense to payable mapping"));
        self.print_mapping(&mut output, report);
        output.push_str("\n\n");

        output.push_str(&section_header("Unresolved"));
        self.print_unresolved(&mut output, report);
        output.push_str("\n\n");

        output.push_str(&section_header("Validation"));
        self.print_validation(&mut output, report);

        output
    }

    fn print_mapping(&self, output: &mut String, report: &MappingReport) {
        let descriptions: HashMap<&str, &MappingDescription> = report
            .descriptions
            .iter()
            .map(|d| (d.expense_code.as_str(), d))
            .collect();
        for trace in &report.outcome.traces {
            output.push_str(&format!("{:<6}{}\n", trace.sub_category, trace.expense_name));
            let target = match (
                trace.payable_code.as_deref(),
                descriptions
                    .get(trace.expense_code.as_str())
                    .and_then(|d| d.payable_name.as_deref()),
            ) {
                (Some(code), Some(name)) => format!("{} ({})", code, name),
                (Some(code), None) => code.to_string(),
                (None, _) => "(paid immediately)".to_string(),
            };
            output.push_str(&format!(
                "      {} -> {:50}  ; {}\n",
                trace.expense_code,
                target,
                trace.resolution.label()
            ));
        }
    }

    fn print_unresolved(&self, output: &mut String, report: &MappingReport) {
        let mut unresolved = report.outcome.unresolved().peekable();
        if unresolved.peek().is_none() {
            output.push_str("; none\n");
            return;
        }
        for trace in unresolved {
            output.push_str(&format!(
                "{:<6}{}  ; {}\n",
                trace.sub_category, trace.expense_code, trace.expense_name
            ));
        }
    }

    fn print_validation(&self, output: &mut String, report: &MappingReport) {
        let validation = &report.validation;
        output.push_str(&format!(
            "valid: {}\n",
            if validation.is_valid { "yes" } else { "no" }
        ));
        for code in &validation.unmapped_expenses {
            output.push_str(&format!("unmapped: {}\n", code));
        }
        for warning in &validation.warnings {
            let wrapped = textwrap::wrap(warning, 74);
            let prefix = ";";
            for line in wrapped {
                output.push_str(&format!("{} {}\n", prefix, line));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{
        ExpenseToPayableMapping, MappingOutcome, MappingTrace, MappingValidation, Resolution,
    };

    fn trace(code: &str, payable: Option<&str>, resolution: Resolution) -> MappingTrace {
        MappingTrace {
            expense_code: code.to_string(),
            expense_name: format!("Expense {}", code),
            sub_category: "B-04".to_string(),
            payable_code: payable.map(str::to_string),
            resolution,
        }
    }

    fn report() -> MappingReport {
        let traces = vec![
            trace("B_1", Some("E_14"), Resolution::Pattern),
            trace("B_2", None, Resolution::Unresolved),
        ];
        let mut mapping = ExpenseToPayableMapping::new();
        mapping.insert("B_1", Some("E_14".to_string()));
        mapping.insert("B_2", None);
        MappingReport {
            outcome: MappingOutcome { mapping, traces },
            validation: MappingValidation {
                is_valid: true,
                unmapped_expenses: vec!["B_2".to_string()],
                warnings: vec!["B_9 (Transfer) should not have a payable mapping".to_string()],
            },
            descriptions: vec![MappingDescription {
                expense_code: "B_1".to_string(),
                expense_name: "Expense B_1".to_string(),
                payable_code: Some("E_14".to_string()),
                payable_name: Some("Payable 14: Fuel".to_string()),
            }],
        }
    }

    #[test]
    fn headers_span_full_width() {
        let header = section_header("Validation");
        assert_eq!(header.trim_end().len(), LINE_WIDTH);
        assert!(header.starts_with("; --- Validation ---"));
    }

    #[test]
    fn prints_all_sections() {
        let output = MappingReportPrinter::new().print_report(&report());
        assert!(output.contains("B_1 -> E_14 (Payable 14: Fuel)"));
        assert!(output.contains("; pattern"));
        assert!(output.contains("B_2 -> (paid immediately)"));
        assert!(output.contains("B-04  B_2  ; Expense B_2"));
        assert!(output.contains("unmapped: B_2"));
        assert!(output.contains("; B_9 (Transfer) should not have a payable mapping"));
    }
}
