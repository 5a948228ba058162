use crate::application::dto::WorkflowBoardRequest;
use crate::application::read_models::{CatalogReadModel, CatalogReadModelBuilder};
use crate::application::services::{ManagedBundleDirectory, DEFAULT_INFO_CHUNK_SIZE};
use crate::catalog::services::{LaneFilter, WorkflowPlanner};
use crate::ports::outbound::{ManagedBundleRepository, ProgressReporter, WorkflowMetadataRepository};
use crate::shared::Result;

/// WorkflowBoardUseCase - builds the workflow board of managed bundles
///
/// # Type Parameters
/// * `MR` - ManagedBundleRepository implementation
/// * `WR` - WorkflowMetadataRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct WorkflowBoardUseCase<MR, WR, PR> {
    managed_bundles: MR,
    workflow_metadata: WR,
    progress_reporter: PR,
    info_chunk_size: usize,
}

impl<MR, WR, PR> WorkflowBoardUseCase<MR, WR, PR>
where
    MR: ManagedBundleRepository,
    WR: WorkflowMetadataRepository,
    PR: ProgressReporter,
{
    pub fn new(managed_bundles: MR, workflow_metadata: WR, progress_reporter: PR) -> Self {
        Self {
            managed_bundles,
            workflow_metadata,
            progress_reporter,
            info_chunk_size: DEFAULT_INFO_CHUNK_SIZE,
        }
    }

    pub fn with_info_chunk_size(mut self, chunk_size: usize) -> Self {
        self.info_chunk_size = chunk_size;
        self
    }

    pub async fn execute(&self, request: WorkflowBoardRequest) -> Result<CatalogReadModel> {
        self.progress_reporter.report("📖 Loading workflow...");

        let mut directory = ManagedBundleDirectory::new().with_chunk_size(self.info_chunk_size);
        let (workflow, stages, refreshed) = futures::join!(
            self.workflow_metadata.fetch_workflow_metadata(),
            self.workflow_metadata.fetch_configured_stages(),
            directory.refresh(&self.managed_bundles)
        );
        refreshed?;
        let planner = WorkflowPlanner::new(workflow?, stages?);

        let filter = self.lane_filter(&request, &directory);
        let lanes = planner.stage_lanes(directory.bundles(), &filter);
        self.progress_reporter.report(&format!(
            "✅ {} managed bundle(s) in {} column(s)",
            directory.bundles().len(),
            lanes.len()
        ));

        if request.load_details {
            let ids: Vec<String> = lanes
                .iter()
                .filter(|lane| lane.shows_content)
                .flat_map(|lane| lane.bundles.iter().map(|b| b.id.clone()))
                .collect();
            drop(lanes);

            let summary = directory
                .load_unknown_infos(&self.managed_bundles, &ids, &self.progress_reporter)
                .await;
            if summary.requested > 0 {
                self.progress_reporter.report_completion(&format!(
                    "✅ Loaded details of {}/{} bundle(s)",
                    summary.loaded, summary.requested
                ));
            }
        }

        let lanes = planner.stage_lanes(directory.bundles(), &filter);
        Ok(CatalogReadModelBuilder::workflow(
            planner.configured_stages(),
            &lanes,
            |id| directory.info(id),
        ))
    }

    fn lane_filter(
        &self,
        request: &WorkflowBoardRequest,
        directory: &ManagedBundleDirectory,
    ) -> LaneFilter {
        let mut filter = LaneFilter::all(directory.bundles());
        filter.lanes = request.lanes;
        if !request.distributions.is_empty() {
            filter.distributions = request.distributions.iter().cloned().collect();
        }
        if !request.targets.is_empty() {
            filter.targets = request.targets.iter().cloned().collect();
        }
        filter
    }
}
