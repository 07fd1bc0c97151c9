pub mod context;
pub mod finding;
pub mod metrics;

pub use context::*;
pub use finding::*;
pub use metrics::*;
