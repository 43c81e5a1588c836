pub mod dataset;
pub mod kpi;
pub mod options;
pub mod range;
pub mod record;

pub use dataset::Dataset;
pub use kpi::{YoyCategory, percent_change};
pub use options::DashboardOptions;
pub use range::YearRange;
pub use record::{Record, Sector};
