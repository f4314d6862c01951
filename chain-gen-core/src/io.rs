use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::io;

/// Reads a corpus file and returns its whole content.
///
/// - Reads the entire file into memory
/// - Invalid UTF-8 is reported as `InvalidData`
pub fn read_corpus<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	#[test]
	fn reads_whole_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		write!(file, "The cat sat.\nThe dog ran.\n").unwrap();
		assert_eq!(read_corpus(file.path()).unwrap(), "The cat sat.\nThe dog ran.\n");
	}

	#[test]
	fn rejects_binary_content() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		file.write_all(&[0xff, 0xfe, 0x00]).unwrap();
		let err = read_corpus(file.path()).unwrap_err();
		assert_eq!(err.kind(), io::ErrorKind::InvalidData);
	}
}
