pub mod grafana;
pub mod prometheus;
pub mod summary;

pub use grafana::dashboard;
pub use prometheus::{render_prometheus, NAMESPACE};
pub use summary::render_summary;
