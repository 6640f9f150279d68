pub mod board;
pub mod catalog;
pub mod navigator;
pub mod scb;

pub use crate::domain::model::{Event, Heat, Lane};
pub use crate::domain::ports::{Scoreboard, StartListSource};
pub use crate::utils::error::Result;
