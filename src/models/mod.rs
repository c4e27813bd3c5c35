pub mod entry;
pub mod outcome;
pub mod property;
pub mod settings;

pub use entry::BenchmarkEntry;
pub use outcome::{RunReport, RunSummary, SubmissionOutcome};
pub use property::{Properties, PropertyValue};
pub use settings::Settings;
