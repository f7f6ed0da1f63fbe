use async_trait::async_trait;

use olm_metrics_core::error::Result;

use super::Collector;

/// Collector that does nothing. Stands in for disabled collection.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullCollector;

impl NullCollector {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Collector for NullCollector {
    fn name(&self) -> &'static str {
        "null"
    }

    async fn handle_metrics(&self) -> Result<()> {
        Ok(())
    }
}
