//! Ready-made autocomplete handlers.

use async_trait::async_trait;

use awsplug_core::autocomplete::AutocompleteItem;
use awsplug_core::autocomplete::listing::ListingSource;
use awsplug_core::autocomplete::regions::list_regions;

use crate::error::PluginError;
use crate::handler::{AutocompleteContext, AutocompleteHandler};

#[async_trait]
impl AutocompleteHandler for ListingSource {
    async fn complete(
        &self,
        ctx: AutocompleteContext<'_>,
    ) -> Result<Vec<AutocompleteItem>, PluginError> {
        Ok(self.search(ctx.client()?, ctx.query).await?)
    }
}

/// The static region table. Needs no credentials.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegionList;

#[async_trait]
impl AutocompleteHandler for RegionList {
    async fn complete(
        &self,
        ctx: AutocompleteContext<'_>,
    ) -> Result<Vec<AutocompleteItem>, PluginError> {
        Ok(list_regions(ctx.query))
    }

    fn requires_client(&self) -> bool {
        false
    }
}
