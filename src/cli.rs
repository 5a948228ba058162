use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use crate::application::dto::{OutputFormat, SearchRequest, WorkflowBoardRequest};
use crate::catalog::domain::DependencyType;
use crate::catalog::services::LaneSelection;

/// Which workflow columns to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanesArg {
    All,
    Stages,
    Others,
}

impl std::str::FromStr for LanesArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(LanesArg::All),
            "stages" => Ok(LanesArg::Stages),
            "others" => Ok(LanesArg::Others),
            _ => Err(format!(
                "Invalid lanes: {}. Please specify 'all', 'stages' or 'others'",
                s
            )),
        }
    }
}

impl From<LanesArg> for LaneSelection {
    fn from(lanes: LanesArg) -> Self {
        match lanes {
            LanesArg::All => LaneSelection::all(),
            LanesArg::Stages => LaneSelection {
                stages_and_candidates: true,
                others: false,
            },
            LanesArg::Others => LaneSelection {
                stages_and_candidates: false,
                others: true,
            },
        }
    }
}

/// Query and manage bundles of a reprepro bundle backend
#[derive(Parser, Debug)]
#[command(name = "bundle-catalog")]
#[command(version)]
#[command(about = "Query and manage bundles of a reprepro bundle backend", long_about = None)]
pub struct Args {
    /// Base URL of the backend API (overrides the config file)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Read bundles.json and bundle-deps.json from this directory instead of the backend
    #[arg(long, global = true, value_name = "DIR")]
    pub source_dir: Option<PathBuf>,

    /// Path to a config file (defaults to ./bundle-catalog.config.yml if present)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format: json or markdown
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Exit with code 1 when the result is empty
    #[arg(long, global = true)]
    pub fail_on_empty: bool,

    /// Only print errors to stderr
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search bundles by free text, facets and dependency classes
    Search(SearchArgs),
    /// List status, target and distribution values with counts
    Facets(FilterArgs),
    /// Show which bundles a bundle replaces and is replaced by
    Deps {
        /// Bundle id, e.g. bundle:bionic/42
        id: String,
    },
    /// Show the direct and indirect parent tickets of a bundle
    Parents {
        /// Bundle id, e.g. bundle:bionic/42
        id: String,
    },
    /// Show managed bundles grouped by workflow status
    Workflow(WorkflowArgs),
    /// Move bundles to another workflow status
    Mark {
        /// Target workflow status, e.g. CANDIDATE_FOR_STAGING
        #[arg(long)]
        status: String,
        /// Bundle ids
        bundles: Vec<String>,
    },
    /// Assign bundles to another target
    SetTarget {
        #[arg(long)]
        target: String,
        /// Bundle ids
        bundles: Vec<String>,
    },
    /// Revert the last workflow change on the backend
    Undo,
    /// Publish pending workflow changes
    Publish,
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Only these statuses (repeatable or comma separated)
    #[arg(long = "status", value_name = "STATUS", value_delimiter = ',')]
    pub statuses: Vec<String>,

    /// Only these targets (repeatable or comma separated)
    #[arg(long = "target", value_name = "TARGET", value_delimiter = ',')]
    pub targets: Vec<String>,

    /// Only these distributions; `unknown` selects malformed ids
    #[arg(long = "distribution", value_name = "DIST", value_delimiter = ',')]
    pub distributions: Vec<String>,

    /// Dependency classes: independent, latest
    #[arg(long = "show-only", value_name = "KIND", value_delimiter = ',')]
    pub show_only: Vec<DependencyType>,

    /// Include statuses hidden by default (DROPPED)
    #[arg(long)]
    pub all_statuses: bool,
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct SearchArgs {
    /// Search terms; a bundle must match every term
    pub query: Vec<String>,

    /// Return only this bundle, if it exists
    #[arg(long, value_name = "ID")]
    pub select: Option<String>,

    #[command(flatten)]
    pub filter: FilterArgs,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct WorkflowArgs {
    /// Columns to show: all, stages or others
    #[arg(long, default_value = "all")]
    pub lanes: LanesArg,

    /// Only bundles of these distributions
    #[arg(long = "distribution", value_name = "DIST", value_delimiter = ',')]
    pub distributions: Vec<String>,

    /// Only bundles of these targets
    #[arg(long = "target", value_name = "TARGET", value_delimiter = ',')]
    pub targets: Vec<String>,

    /// Skip loading subject and creator of each bundle
    #[arg(long)]
    pub no_details: bool,
}

impl FilterArgs {
    /// Search request with these filters and the configured hidden statuses
    pub fn to_request(&self, query: String, excluded_statuses: Vec<String>) -> SearchRequest {
        SearchRequest::new(query)
            .with_statuses(self.statuses.clone())
            .with_targets(self.targets.clone())
            .with_distributions(self.distributions.clone())
            .with_show_only(self.show_only.clone())
            .with_excluded_statuses(excluded_statuses)
            .with_all_statuses(self.all_statuses)
    }
}

impl SearchArgs {
    pub fn to_request(&self, excluded_statuses: Vec<String>) -> SearchRequest {
        self.filter
            .to_request(self.query.join(" "), excluded_statuses)
            .with_selected_bundle(self.select.clone())
    }
}

impl WorkflowArgs {
    pub fn to_request(&self) -> WorkflowBoardRequest {
        let request = WorkflowBoardRequest::new(
            self.lanes.into(),
            self.distributions.clone(),
            self.targets.clone(),
        );
        if self.no_details {
            request.without_details()
        } else {
            request
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("bundle-catalog").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_search_with_filters() {
        let args = parse(&[
            "search",
            "42",
            "smith",
            "--status",
            "NEW,PRODUCTION",
            "--show-only",
            "latest",
            "--format",
            "md",
        ]);

        assert_eq!(args.format, OutputFormat::Markdown);
        let Command::Search(search) = args.command else {
            panic!("expected search");
        };
        let request = search.to_request(vec!["DROPPED".to_string()]);
        assert_eq!(request.query, "42 smith");
        assert_eq!(request.statuses, vec!["NEW", "PRODUCTION"]);
        assert_eq!(request.show_only, vec![DependencyType::LatestReplacements]);
        assert_eq!(request.excluded_statuses, vec!["DROPPED"]);
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let args = parse(&["deps", "bundle:bionic/1", "--source-dir", "fixtures", "-o", "out.json"]);
        assert_eq!(args.source_dir, Some(PathBuf::from("fixtures")));
        assert_eq!(args.output, Some(PathBuf::from("out.json")));
        assert!(matches!(args.command, Command::Deps { ref id } if id == "bundle:bionic/1"));
    }

    #[test]
    fn test_workflow_lanes() {
        let args = parse(&["workflow", "--lanes", "stages", "--no-details"]);
        let Command::Workflow(workflow) = args.command else {
            panic!("expected workflow");
        };
        let request = workflow.to_request();
        assert!(request.lanes.stages_and_candidates);
        assert!(!request.lanes.others);
        assert!(!request.load_details);
    }

    #[test]
    fn test_mark_arguments() {
        let args = parse(&["mark", "--status", "TEST", "bundle:bionic/1", "bundle:bionic/2"]);
        match args.command {
            Command::Mark { status, bundles } => {
                assert_eq!(status, "TEST");
                assert_eq!(bundles.len(), 2);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_values_rejected() {
        let base = ["bundle-catalog", "search", "--show-only", "newest"];
        assert!(Args::try_parse_from(base).is_err());
        assert!(Args::try_parse_from(["bundle-catalog", "facets", "--format", "xml"]).is_err());
        assert!(Args::try_parse_from(["bundle-catalog", "workflow", "--lanes", "some"]).is_err());
        assert!(Args::try_parse_from(["bundle-catalog"]).is_err());
    }

    #[test]
    fn test_lanes_arg_from_str() {
        assert_eq!("ALL".parse::<LanesArg>().unwrap(), LanesArg::All);
        assert!("x".parse::<LanesArg>().unwrap_err().contains("Invalid lanes"));
    }
}
