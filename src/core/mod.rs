pub mod route;
pub mod timer;
pub mod types;

pub use route::{ResolvedRoute, Route, RouteRedirect, page_for_path, resolve_path};
pub use timer::{Deadline, IntervalTimer, TickBatch};
pub use types::{AnchorKey, MemberId, PageId, ServiceId};
