mod config;
pub use config::BulkConfig;

mod labels;
pub use labels::DialogLabels;
