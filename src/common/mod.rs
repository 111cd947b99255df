//! Helpers shared by the card runner and the command line

pub mod interface;

/// Print a key and a value to stderr, for verbose output
///
/// Use [format_args] to build the value without allocating.
pub fn veprintln(key: &str, format_args: std::fmt::Arguments) {
    eprintln!("? {key:<12}\t{format_args}");
}
