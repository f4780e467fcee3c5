pub mod launches;
pub mod planets;
pub mod sync;
