pub mod draft;
pub mod launch;
pub mod pagination;
pub mod patch;
pub mod planet;

pub use draft::LaunchDraft;
pub use launch::{seed_launch, LaunchRecord};
pub use pagination::Pagination;
pub use patch::LaunchPatch;
pub use planet::Planet;
