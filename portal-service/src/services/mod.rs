pub mod assistant;
pub mod metrics;
pub mod store;

pub use assistant::Assistant;
pub use metrics::{get_metrics, init_metrics};
pub use store::{MemoryStore, MongoStore, Store};
