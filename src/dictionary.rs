//! # Dictionary
//!
//! Herein is the word list the games consult: a prefix tree of uppercase
//! words. The engines never look at it; deciding whether a formable word is
//! a real one is the game layer's separate step.

use std::{
	fs::File,
	io::{self, BufRead, BufReader, ErrorKind, Read, Write},
	path::Path
};

use log::{trace, warn};
use pfx::PrefixTreeSet;
use serde::{Deserialize, Serialize};

////////////////////////////////////////////////////////////////////////////////
//                                Definitions.                                 //
////////////////////////////////////////////////////////////////////////////////

/// A dictionary is a [`PrefixTreeSet`] of words. Tile labels are uppercase,
/// so words are stored and looked up in uppercase, whatever case they arrive
/// in.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct Dictionary(PrefixTreeSet<String>);

/// Normalize a word for storage and lookup.
#[inline]
fn normalize(word: &str) -> String
{
	word.trim().to_ascii_uppercase()
}

impl Dictionary
{
	/// Construct an empty dictionary. Same as [`Default::default`].
	///
	/// # Returns
	///
	/// An empty dictionary.
	#[inline]
	pub fn new() -> Self { Self(Default::default()) }

	/// Check if the dictionary is empty.
	///
	/// # Returns
	///
	/// `true` if the dictionary is empty, `false` otherwise.
	#[inline]
	#[must_use]
	pub fn is_empty(&self) -> bool { self.0.is_empty() }

	/// Check if the given word is in the dictionary, without regard to
	/// case.
	///
	/// # Arguments
	///
	/// * `word` - The word to look up.
	///
	/// # Returns
	///
	/// `true` if the word is in the dictionary, `false` otherwise.
	#[inline]
	#[must_use]
	pub fn is_word(&self, word: &str) -> bool
	{
		self.0.contains(&normalize(word))
	}

	/// Check if some word in the dictionary starts with the given prefix,
	/// without regard to case. Useful for deciding whether a partial entry
	/// is still worth typing.
	///
	/// # Arguments
	///
	/// * `prefix` - The prefix to look up.
	///
	/// # Returns
	///
	/// `true` if some word starts with the prefix, `false` otherwise.
	#[inline]
	#[must_use]
	pub fn has_prefix(&self, prefix: &str) -> bool
	{
		self.0.contains_prefix(&normalize(prefix))
	}

	/// Add the given words to the dictionary, normalizing as they land.
	/// Blank entries are dropped.
	///
	/// # Arguments
	///
	/// * `words` - The words to add.
	pub fn populate<T: AsRef<str>>(&mut self, words: &[T])
	{
		for word in words
		{
			let word = normalize(word.as_ref());
			if !word.is_empty()
			{
				self.0.insert(word);
			}
		}
	}

	/// Open the named dictionary, looking only in the given directory.
	/// `name` denotes the dictionary sans extension. When a binary
	/// dictionary (`<name>.dict`) exists and is newer than the text file
	/// (`<name>.txt`), the binary one is read; otherwise the text file is
	/// read and the binary form is written beside it to speed up later
	/// opens.
	///
	/// # Arguments
	///
	/// * `dir` - The directory to search.
	/// * `name` - The name of the dictionary.
	///
	/// # Returns
	///
	/// The dictionary.
	///
	/// # Errors
	///
	/// * If neither file can be opened and read, an error is returned.
	/// * If the binary file contains invalid data, an
	///   [`ErrorKind::InvalidData`] is returned.
	pub fn open<T: AsRef<Path>>(dir: T, name: &str) -> Result<Self, io::Error>
	{
		let binary_path = dir.as_ref().join(format!("{}.dict", name));
		let text_path = dir.as_ref().join(format!("{}.txt", name));
		if binary_is_fresh(&binary_path, &text_path)
		{
			let dictionary = Self::deserialize_from_file(&binary_path)?;
			trace!("read binary dictionary: {}", binary_path.display());
			return Ok(dictionary)
		}
		let dictionary = Self::read_from_file(&text_path)?;
		trace!("read text dictionary: {}", text_path.display());
		// The cache only speeds up later opens, so failing to write it is
		// just a warning.
		match dictionary.serialize_to_file(&binary_path)
		{
			Ok(_) =>
				trace!("wrote binary dictionary: {}", binary_path.display()),
			Err(e) => warn!(
				"failed to write binary dictionary: {}: {}",
				binary_path.display(),
				e
			)
		}
		Ok(dictionary)
	}

	/// Construct a dictionary from the contents of the given text file, one
	/// word per line. Blank lines are dropped.
	///
	/// # Arguments
	///
	/// * `path` - The target file.
	///
	/// # Returns
	///
	/// A dictionary containing the words from the file.
	///
	/// # Errors
	///
	/// If the file cannot be opened or read, an error is returned.
	pub fn read_from_file<T: AsRef<Path>>(path: T) -> Result<Self, io::Error>
	{
		let file = File::open(path)?;
		let reader = BufReader::new(file);
		let words = reader.lines().collect::<Result<Vec<_>, _>>()?;
		let mut dictionary = Self::new();
		dictionary.populate(&words);
		Ok(dictionary)
	}

	/// Deserialize a dictionary from the given file, which must contain a
	/// dictionary in [`bincode`](bincode) format.
	///
	/// # Arguments
	///
	/// * `path` - The target file.
	///
	/// # Returns
	///
	/// The deserialized dictionary.
	///
	/// # Errors
	///
	/// * If the file cannot be opened or read, an error is returned.
	/// * If the file contains invalid data, an [`ErrorKind::InvalidData`]
	///   is returned.
	pub fn deserialize_from_file<T: AsRef<Path>>(
		path: T
	) -> Result<Self, io::Error>
	{
		let file = File::open(path)?;
		let mut reader = BufReader::new(file);
		let mut bytes = Vec::new();
		reader.read_to_end(&mut bytes)?;
		let dictionary = bincode::deserialize(&bytes)
			.map_err(|_e| ErrorKind::InvalidData)?;
		Ok(dictionary)
	}

	/// Serialize the dictionary to the given file, in [`bincode`](bincode)
	/// format.
	///
	/// # Arguments
	///
	/// * `path` - The target file.
	///
	/// # Errors
	///
	/// * If the file cannot be created or written, an error is returned.
	/// * If the dictionary cannot be serialized, an
	///   [`ErrorKind::InvalidData`] is returned.
	pub fn serialize_to_file<T: AsRef<Path>>(
		&self,
		path: T
	) -> Result<(), io::Error>
	{
		let mut file = File::create(path)?;
		let bytes =
			bincode::serialize(self).map_err(|_e| ErrorKind::InvalidData)?;
		file.write_all(&bytes)?;
		Ok(())
	}
}

/// Check if the binary dictionary exists and is newer than the text file
/// beside it. Any difficulty answering, such as a missing file, counts as
/// stale.
///
/// # Arguments
///
/// * `binary_path` - The path of the binary dictionary.
/// * `text_path` - The path of the text dictionary.
///
/// # Returns
///
/// `true` if the binary dictionary is authoritative, `false` otherwise.
fn binary_is_fresh(binary_path: &Path, text_path: &Path) -> bool
{
	let modified = |path: &Path| path.metadata().and_then(|m| m.modified());
	match (modified(binary_path), modified(text_path))
	{
		(Ok(binary), Ok(text)) => binary > text,
		_ => false
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                    //
////////////////////////////////////////////////////////////////////////////////
