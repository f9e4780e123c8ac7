use crate::application::dto::{ProjectionKind, ProjectionResponse};
use crate::application::read_models::WsComponent;
use crate::component::domain::qualifier;
use crate::ports::outbound::ComponentFormatter;
use crate::shared::Result;

/// Markdown table header for component attributes
const TABLE_HEADER: &str = "| Attribute | Value |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str = "|-----------|-------|\n";

/// MarkdownFormatter adapter rendering a component as a Markdown table
///
/// Only attributes present on the component get a row.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn rows(component: &WsComponent) -> Vec<(&'static str, String)> {
        let mut rows = vec![
            ("Organization", component.organization.clone()),
            ("Key", component.key.clone()),
            ("Name", component.name.clone()),
            (
                "Qualifier",
                format!(
                    "{} ({})",
                    qualifier::display_name(&component.qualifier),
                    component.qualifier
                ),
            ),
        ];

        let optional = [
            ("Branch", component.branch.clone()),
            ("Pull Request", component.pull_request.clone()),
            ("Path", component.path.clone()),
            ("Description", component.description.clone()),
            ("Language", component.language.clone()),
            ("Visibility", component.visibility.map(|v| v.label().to_string())),
            ("Last Analysis", component.analysis_date.clone()),
            ("Leak Period Start", component.leak_period_date.clone()),
            ("Version", component.version.clone()),
        ];
        rows.extend(
            optional
                .into_iter()
                .filter_map(|(label, value)| value.map(|v| (label, v))),
        );

        if let Some(tags) = &component.tags {
            let value = if tags.is_empty() {
                "_none_".to_string()
            } else {
                tags.iter()
                    .map(|t| format!("`{}`", t))
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            rows.push(("Tags", value));
        }

        rows
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentFormatter for MarkdownFormatter {
    fn format(&self, response: &ProjectionResponse) -> Result<String> {
        let component = &response.component;
        let mut output = String::new();

        output.push_str(&format!(
            "# {}\n\n",
            Self::escape_markdown_table_cell(&component.name)
        ));
        if response.kind == ProjectionKind::ProjectOrApp {
            output.push_str("Projected from the project record.\n\n");
        }

        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);
        for (label, value) in Self::rows(component) {
            output.push_str(&format!(
                "| {} | {} |\n",
                label,
                Self::escape_markdown_table_cell(&value)
            ));
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::WsComponentBuilder;
    use crate::component::domain::Visibility;

    fn format(component: WsComponent, kind: ProjectionKind) -> String {
        MarkdownFormatter::new()
            .format(&ProjectionResponse::new(component, kind))
            .unwrap()
    }

    #[test]
    fn test_format_project() {
        let component = WsComponentBuilder::new("org-key", "proj:1", "Demo", "TRK")
            .visibility(Visibility::Private)
            .add_all_tags(["a", "b"])
            .build();
        let output = format(component, ProjectionKind::ProjectOrApp);

        assert!(output.starts_with("# Demo\n\n"));
        assert!(output.contains("Projected from the project record."));
        assert!(output.contains(TABLE_HEADER));
        assert!(output.contains("| Key | proj:1 |"));
        assert!(output.contains("| Qualifier | Project (TRK) |"));
        assert!(output.contains("| Visibility | private |"));
        assert!(output.contains("| Tags | `a`, `b` |"));
    }

    #[test]
    fn test_format_skips_absent_attributes() {
        let component = WsComponentBuilder::new("org-key", "proj:src", "src", "DIR")
            .path_if_present(Some("src"))
            .build();
        let output = format(component, ProjectionKind::Component);

        assert!(!output.contains("Projected from the project record."));
        assert!(output.contains("| Path | src |"));
        assert!(!output.contains("| Visibility"));
        assert!(!output.contains("| Tags"));
        assert!(!output.contains("| Description"));
    }

    #[test]
    fn test_format_empty_tags() {
        let component = WsComponentBuilder::new("o", "k", "n", "TRK")
            .add_all_tags(Vec::<String>::new())
            .build();
        let output = format(component, ProjectionKind::ProjectOrApp);
        assert!(output.contains("| Tags | _none_ |"));
    }

    #[test]
    fn test_format_escapes_table_cells() {
        let component = WsComponentBuilder::new("o", "k", "a|b", "FIL")
            .description_if_present(Some("line one\nline two"))
            .build();
        let output = format(component, ProjectionKind::Component);

        assert!(output.starts_with("# a\\|b"));
        assert!(output.contains("| Description | line one line two |"));
    }
}
