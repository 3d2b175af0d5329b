//! Domain entities

mod ban;
mod report;

pub use ban::{Ban, NewBan};
pub use report::{NewReport, Report};
