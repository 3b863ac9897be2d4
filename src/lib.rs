pub mod config;
pub mod emit;
pub mod generator;
pub mod table;

pub use table::{Classifier, RawRow, ScanCodeTable, TABLE_SIZE};
