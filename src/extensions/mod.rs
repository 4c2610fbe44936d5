//! Optional feature modules live here.
//!
//! Extensions observe the engine through events and never reach into core paths.

mod plugins;

pub use plugins::{PluginContext, SiteEvent, SitePlugin};
