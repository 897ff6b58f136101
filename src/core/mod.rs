pub mod config;
pub mod overview;
pub mod pager;
pub mod report;
pub mod toggle;

pub use overview::Overview;
pub use pager::Pager;
pub use report::ReportLogic;
pub use toggle::{OptimisticToggles, ToggleState};
