use tracing::debug;

use crate::error::{SiteError, SiteResult};
use crate::extensions::SitePlugin;
use crate::render::SiteHost;

use super::SiteEngine;

impl<H: SiteHost> SiteEngine<H> {
    /// Adds an observer. Ids must be non-empty and unique among registered plugins.
    ///
    /// Plugins receive events in registration order.
    pub fn register_plugin(&mut self, plugin: Box<dyn SitePlugin>) -> SiteResult<()> {
        match plugin.id() {
            "" => {
                return Err(SiteError::InvalidData(
                    "plugin id must not be empty".to_owned(),
                ));
            }
            id if self.has_plugin(id) => {
                return Err(SiteError::InvalidData(format!(
                    "plugin `{id}` is already registered"
                )));
            }
            id => debug!(plugin = id, "plugin registered"),
        }
        self.core.plugins.push(plugin);
        Ok(())
    }

    /// Returns `true` when a plugin with `plugin_id` was removed.
    pub fn unregister_plugin(&mut self, plugin_id: &str) -> bool {
        let before = self.core.plugins.len();
        self.core.plugins.retain(|plugin| plugin.id() != plugin_id);
        let removed = self.core.plugins.len() != before;
        if removed {
            debug!(plugin = plugin_id, "plugin unregistered");
        }
        removed
    }

    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.core.plugins.len()
    }

    #[must_use]
    pub fn has_plugin(&self, plugin_id: &str) -> bool {
        self.core.plugins.iter().any(|plugin| plugin.id() == plugin_id)
    }
}
