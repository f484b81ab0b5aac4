pub mod assessment;
pub mod builder;
pub mod cost;
pub mod gate;
pub mod manager;
pub mod selection;
pub mod tracker;
pub mod types;

pub use builder::RouterBuilder;
pub use gate::Availability;
pub use manager::TierRouter;
pub use tracker::{UsageRecord, UsageTracker};
pub use types::{Assessment, ProviderConfig, QuotaConfig, RouteEvent, RoutingDecision, Task};
