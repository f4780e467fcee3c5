pub mod allocator;
pub mod planets;
pub mod store;

pub use allocator::{FlightNumberAllocator, DEFAULT_FLIGHT_NUMBER};
pub use planets::{MemoryPlanetCatalog, PlanetLookup};
pub use store::{LaunchStore, MemoryLaunchStore};
