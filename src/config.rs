// ========================================
// ARTIFACTS
// ========================================
// Paths are fixed; the tool takes no flags and reads no environment.
pub const INPUT_TABLE: &str = "keyboard.csv";
pub const OUTPUT_ARRAY: &str = "c_array.txt";
pub const OUTPUT_PAIRS: &str = "pairs.csv";
