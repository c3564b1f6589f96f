pub mod romaji;
pub mod unicode;
