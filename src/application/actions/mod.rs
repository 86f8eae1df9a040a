//! Maintenance actions

mod options;
mod result;
mod use_case;

pub use options::ActionOptions;
pub use result::ActionReport;
pub use use_case::{ActionUseCase, MAINTENANCE_FLAG, SQLITE_DATABASE};
