pub mod aggregate;
pub mod scores;
