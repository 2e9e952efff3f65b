//! tg-scenario - deterministic test-scenario synthesis
//!
//! Maps an extracted [`tg_sql::QueryModel`] to a deduplicated,
//! deterministically sorted list of test scenarios, each carrying a
//! content-derived identifier. Everything here is synchronous and purely
//! functional; the same model always produces byte-identical output.

pub mod scenario;
pub mod summary;
pub mod synthesizer;

pub use scenario::{Criticality, Scenario, ScenarioType};
pub use summary::ParserValidationSummary;
pub use synthesizer::{supplement_prompt, synthesize_scenarios};
