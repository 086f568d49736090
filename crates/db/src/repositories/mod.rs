//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod galaxy_repo;
pub mod planet_repo;
pub mod user_repo;

pub use galaxy_repo::GalaxyRepo;
pub use planet_repo::PlanetRepo;
pub use user_repo::UserRepo;
