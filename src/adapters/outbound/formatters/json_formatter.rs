use crate::application::read_models::CatalogReadModel;
use crate::ports::outbound::CatalogFormatter;
use crate::shared::Result;

/// JsonFormatter adapter rendering read models as pretty-printed JSON
///
/// Every document carries a `view` tag naming the read model variant.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogFormatter for JsonFormatter {
    fn format(&self, model: &CatalogReadModel) -> Result<String> {
        serde_json::to_string_pretty(model).map_err(Into::into)
    }
}
