//! Known-answer test harness
//!
//! `use gostsig_tests::kat::*;` brings in the whole surface.

pub mod engine;
pub mod error;
pub mod loader;
pub mod runner;

pub use engine::*;
pub use error::*;
pub use loader::*;
pub use model::*;
pub use runner::*;
