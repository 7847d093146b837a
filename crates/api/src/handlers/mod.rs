pub mod games;
pub mod genres;
