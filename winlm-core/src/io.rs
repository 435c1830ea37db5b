use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Reads a text file and returns its full contents as a single `String`.
///
/// - Reads the entire file into memory in one pass
/// - No streaming: the whole corpus must be materialized before training
pub(crate) fn read_corpus<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents)
}
