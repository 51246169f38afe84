pub mod evaluator;
pub mod group_builder;
pub mod registry;
pub mod search_worker;
pub mod supervisor;

pub use evaluator::pairing_deviation;
pub use group_builder::{build_round, group_count, size_plan};
pub use registry::BestResultRegistry;
pub use search_worker::{SearchConfig, SearchWorker};
pub use supervisor::{Supervisor, WORKER_COUNT};
