pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{CliConfig, Settings};
pub use core::catalog::{DirectorySource, EventCatalog};
pub use core::navigator::Navigator;
pub use domain::model::{Event, Heat, Lane, LANES_PER_HEAT};
pub use utils::error::{Result, StartListError};
