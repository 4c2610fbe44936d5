mod carousel_controller;
mod carousel_coordinator;
mod clock_controller;
mod engine;
mod engine_accessors;
mod engine_config;
mod engine_core;
mod engine_init;
mod engine_snapshot;
mod json_contract;
mod menu_controller;
mod navigation_controller;
mod navigation_coordinator;
mod navigation_intent;
mod plugin_dispatch;
mod plugin_registry;
mod render_coordinator;
mod render_frame_builder;
mod scroll_coordinator;
mod snapshot_controller;

pub use engine::SiteEngine;
pub use engine_config::{
    DEFAULT_CAROUSEL_MEMBER_IDS, DEFAULT_HEADER_CLEARANCE_PX, MAX_SECTION_MOUNT_DELAY_MS,
    SiteEngineConfig,
};
pub use engine_snapshot::{CarouselSnapshot, EngineSnapshot};
pub use json_contract::{ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshotJsonContractV1};
pub use navigation_intent::{NavigationIntent, NavigationOptions};

pub use crate::extensions::{PluginContext, SiteEvent, SitePlugin};
