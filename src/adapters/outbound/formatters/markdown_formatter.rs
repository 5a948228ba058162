use crate::application::read_models::{
    ActionLogView, BundleView, CatalogReadModel, DependencyView, FacetValueView, FacetsView,
    ParentTreeView, SearchView, SnapshotView, WorkflowBoardView,
};
use crate::ports::outbound::CatalogFormatter;
use crate::shared::Result;

/// Markdown table header for bundle lists
const BUNDLE_TABLE_HEADER: &str = "| Bundle | Status | Target | Subject | Creator | Ticket |\n";

/// Markdown table separator line for bundle lists
const BUNDLE_TABLE_SEPARATOR: &str = "|--------|--------|--------|---------|---------|--------|\n";

const FACET_TABLE_HEADER: &str = "| Value | Count | Selected |\n";
const FACET_TABLE_SEPARATOR: &str = "|-------|-------|----------|\n";

const LANE_TABLE_HEADER: &str = "| Bundle | Distribution | Target | Subject | Creator |\n";
const LANE_TABLE_SEPARATOR: &str = "|--------|--------------|--------|---------|---------|\n";

const LOG_TABLE_HEADER: &str = "| Level | Logger | Message |\n";
const LOG_TABLE_SEPARATOR: &str = "|-------|--------|---------|\n";

/// MarkdownFormatter adapter rendering read models as Markdown tables
///
/// One section layout per view. Cell text is escaped so subjects containing
/// pipes or line breaks cannot break a table.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    /// Ticket number, linked when the bundle carries a ticket URL
    fn ticket_cell(ticket: &str, ticket_url: &str) -> String {
        let ticket = Self::escape_markdown_table_cell(ticket);
        if ticket.is_empty() || ticket_url.is_empty() {
            ticket
        } else {
            format!("[{}]({})", ticket, ticket_url.replace(' ', "%20"))
        }
    }

    fn yes_no(value: bool) -> &'static str {
        if value {
            "yes"
        } else {
            "no"
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_snapshot(&self, output: &mut String, snapshot: &SnapshotView) {
        output.push_str(&format!(
            "Snapshot of {} with {} bundle(s)",
            snapshot.fetched_at, snapshot.bundle_count
        ));
        if !snapshot.dependencies_available {
            output.push_str(", dependency data unavailable");
        }
        output.push_str(".\n\n");
    }

    fn render_bundle_table(&self, output: &mut String, bundles: &[BundleView]) {
        if bundles.is_empty() {
            output.push_str("*No bundles*\n\n");
            return;
        }

        output.push_str(BUNDLE_TABLE_HEADER);
        output.push_str(BUNDLE_TABLE_SEPARATOR);
        for bundle in bundles {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&bundle.id),
                Self::escape_markdown_table_cell(&bundle.status),
                Self::escape_markdown_table_cell(&bundle.target),
                Self::escape_markdown_table_cell(&bundle.subject),
                Self::escape_markdown_table_cell(&bundle.creator),
                Self::ticket_cell(&bundle.ticket, &bundle.ticket_url)
            ));
        }
        output.push('\n');
    }

    fn render_search(&self, output: &mut String, view: &SearchView) {
        output.push_str("# Bundle Search\n\n");
        self.render_snapshot(output, &view.snapshot);
        if !view.query.is_empty() {
            output.push_str(&format!(
                "Query: `{}`\n\n",
                view.query.replace('`', "'")
            ));
        }
        if !view.ignored_show_only.is_empty() {
            output.push_str(&format!(
                "> Ignored without dependency data: {}\n\n",
                view.ignored_show_only.join(", ")
            ));
        }
        output.push_str(&format!("## Bundles ({})\n\n", view.bundles.len()));
        self.render_bundle_table(output, &view.bundles);
    }

    fn render_facet(&self, output: &mut String, title: &str, values: &[FacetValueView]) {
        output.push_str(&format!("## {}\n\n", title));
        if values.is_empty() {
            output.push_str("*No values*\n\n");
            return;
        }
        output.push_str(FACET_TABLE_HEADER);
        output.push_str(FACET_TABLE_SEPARATOR);
        for value in values {
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&value.value),
                value.count,
                if value.selected { "x" } else { "" }
            ));
        }
        output.push('\n');
    }

    fn render_facets(&self, output: &mut String, view: &FacetsView) {
        output.push_str("# Bundle Facets\n\n");
        self.render_snapshot(output, &view.snapshot);
        self.render_facet(output, "Status", &view.status);
        self.render_facet(output, "Target", &view.target);
        self.render_facet(output, "Distribution", &view.distribution);
        match &view.dependency_types {
            Some(types) => self.render_facet(output, "Show Only", types),
            None => output.push_str("## Show Only\n\n*Dependency data unavailable*\n\n"),
        }
    }

    fn render_dependencies(&self, output: &mut String, view: &DependencyView) {
        output.push_str(&format!(
            "# Dependencies of {}\n\n",
            Self::escape_markdown_table_cell(&view.bundle.id)
        ));
        self.render_snapshot(output, &view.snapshot);

        if !view.available {
            output.push_str("*Dependency data unavailable*\n\n");
            return;
        }

        output.push_str(&format!(
            "- Independent: {}\n- Latest replacement: {}\n\n",
            Self::yes_no(view.independent.unwrap_or(false)),
            Self::yes_no(view.latest_replacement.unwrap_or(false))
        ));
        output.push_str("## Replaces\n\n");
        self.render_bundle_table(output, &view.replaces);
        output.push_str("## Replaced By\n\n");
        self.render_bundle_table(output, &view.replaced_by);
    }

    fn render_parents(&self, output: &mut String, view: &ParentTreeView) {
        output.push_str(&format!(
            "# Parent Tickets of {}\n\n",
            Self::escape_markdown_table_cell(&view.bundle.id)
        ));
        self.render_snapshot(output, &view.snapshot);

        if view.parents.is_empty() {
            output.push_str("*No parent tickets*\n\n");
            return;
        }

        for parent in &view.parents {
            let kind = if parent.direct { "direct" } else { "indirect" };
            output.push_str(&format!(
                "## Ticket {} ({})\n\n",
                Self::escape_markdown_table_cell(&parent.ticket),
                kind
            ));
            self.render_bundle_table(output, &parent.bundles);
        }
    }

    fn render_workflow(&self, output: &mut String, view: &WorkflowBoardView) {
        output.push_str("# Workflow\n\n");
        if !view.configured_stages.is_empty() {
            output.push_str(&format!(
                "Configured stages: {}\n\n",
                view.configured_stages.join(", ")
            ));
        }

        for lane in &view.lanes {
            output.push_str(&format!(
                "## {} ({})\n\n",
                Self::escape_markdown_table_cell(&lane.status),
                lane.bundle_count
            ));
            if let Some(comment) = lane.comment.as_deref().filter(|c| !c.is_empty()) {
                output.push_str(&format!("{}\n\n", comment));
            }
            if !lane.candidates.is_empty() {
                output.push_str(&format!("Promote to: {}\n\n", lane.candidates.join(", ")));
            }
            if lane.bundles.is_empty() {
                output.push_str("*No bundles*\n\n");
                continue;
            }

            output.push_str(LANE_TABLE_HEADER);
            output.push_str(LANE_TABLE_SEPARATOR);
            for bundle in &lane.bundles {
                let subject = if lane.shows_content {
                    bundle.subject_or_placeholder()
                } else {
                    ""
                };
                output.push_str(&format!(
                    "| {} | {} | {} | {} | {} |\n",
                    Self::escape_markdown_table_cell(&bundle.id),
                    Self::escape_markdown_table_cell(&bundle.distribution),
                    Self::escape_markdown_table_cell(&bundle.target),
                    Self::escape_markdown_table_cell(subject),
                    Self::escape_markdown_table_cell(bundle.creator.as_deref().unwrap_or(""))
                ));
            }
            output.push('\n');
        }
    }

    fn render_action_log(&self, output: &mut String, view: &ActionLogView) {
        output.push_str(&format!(
            "# Action: {}\n\n",
            Self::escape_markdown_table_cell(&view.action)
        ));
        if view.entries.is_empty() {
            output.push_str("*The backend logged nothing*\n\n");
            return;
        }
        output.push_str(LOG_TABLE_HEADER);
        output.push_str(LOG_TABLE_SEPARATOR);
        for entry in &view.entries {
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&entry.level),
                Self::escape_markdown_table_cell(entry.logger.as_deref().unwrap_or("")),
                Self::escape_markdown_table_cell(&entry.message)
            ));
        }
        output.push('\n');
    }
}

impl CatalogFormatter for MarkdownFormatter {
    fn format(&self, model: &CatalogReadModel) -> Result<String> {
        let mut output = String::new();
        match model {
            CatalogReadModel::Search(view) => self.render_search(&mut output, view),
            CatalogReadModel::Facets(view) => self.render_facets(&mut output, view),
            CatalogReadModel::Dependencies(view) => self.render_dependencies(&mut output, view),
            CatalogReadModel::Parents(view) => self.render_parents(&mut output, view),
            CatalogReadModel::Workflow(view) => self.render_workflow(&mut output, view),
            CatalogReadModel::ActionLog(view) => self.render_action_log(&mut output, view),
        }
        Ok(output)
    }
}
