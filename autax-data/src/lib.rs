//! Built-in Australian tax constant tables, a year-keyed registry, and a
//! CSV loader for bracket schedules.

mod loader;
mod registry;
mod tables;

pub use loader::{ScheduleLoader, ScheduleLoaderError, ScheduleRecord};
pub use registry::ConstantsRegistry;
pub use tables::financial_year_2024_25;
