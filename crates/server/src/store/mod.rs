pub mod match_index;
pub mod matches_csv;
pub mod tables;
pub mod tournaments;
