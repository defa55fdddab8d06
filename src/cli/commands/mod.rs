pub mod basic;
pub mod generate;
