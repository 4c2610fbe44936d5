//! knp-site: headless navigation and carousel engine for the firm's website.
//!
//! The crate owns routing, deferred in-page section scrolling, the mobile
//! menu, and the home-page staff carousel. A UI host implements
//! [`render::SiteHost`], forwards user input and clock ticks, and draws the
//! frames it receives.

pub mod api;
pub mod content;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{NavigationIntent, SiteEngine, SiteEngineConfig};
pub use error::{SiteError, SiteResult};
