pub mod validation;

pub use validation::{parse_launch_date, validate_draft, ValidDraft};
