//! Repository structs providing explicit queries per table.
//!
//! Every method takes the pool by reference and returns plain records;
//! nothing is tracked between calls.

pub mod game_repo;
pub mod genre_repo;

pub use game_repo::GameRepo;
pub use genre_repo::GenreRepo;
