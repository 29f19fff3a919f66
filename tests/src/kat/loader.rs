//! Loading of vector files

use super::error::Result;
use super::model::TestSuite;

/// Streebog and GOST R 34.10 vectors bundled with the crate
pub const GOST_VECTORS: &str = include_str!("../../vectors/gost.json");

/// Parse a suite from its JSON text
pub fn load_suite(json: &str) -> Result<TestSuite> {
    Ok(serde_json::from_str(json)?)
}

/// Parse the bundled GOST suite
pub fn load_gost_suite() -> Result<TestSuite> {
    load_suite(GOST_VECTORS)
}
