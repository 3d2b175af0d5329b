//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod bans;
pub mod evidence;
pub mod health;
pub mod reports;
pub mod settings;
