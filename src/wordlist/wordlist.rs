use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use typed_builder::TypedBuilder;

use crate::alphabet::{get_idx, normalize};
use crate::error::Error;
use crate::wordlist::dictionary::Dictionary;

/// A loaded word file: the length-bucketed dictionary plus how many input
/// tokens were thrown away on the way in.
pub struct Wordlist {
    dictionary: Dictionary,
    rejected: usize,
}

/// Shape of the input file. The default is one word per line; delimited
/// files pick the word out of `word_column`.
#[derive(TypedBuilder)]
pub struct FileFormat {
    #[builder(default)]
    delimiter: Option<char>,
    #[builder(default)]
    word_column: Option<usize>,
}

impl FileFormat {
    fn parse_line<'a>(&self, line: &'a str) -> Option<&'a str> {
        match self.delimiter {
            None => Some(line),
            Some(delimiter) => line.split(delimiter).nth(self.word_column.unwrap_or(0)),
        }
    }
}

impl Wordlist {
    pub fn from_file(path: &Path, format: FileFormat) -> Result<Wordlist, Error> {
        println!("Reading words from {:?}", path);
        let start = Instant::now();
        let file = File::open(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let wordlist = Self::from_reader(BufReader::new(file), &format);
        println!(
            "Read {} words in {:.3}s [{} rejected]",
            wordlist.dictionary.word_count(),
            start.elapsed().as_secs_f64(),
            wordlist.rejected
        );
        Ok(wordlist)
    }

    /// Tokens are lowercased before validation; anything still containing a
    /// character outside `a..=z` is counted and skipped, never fatal. An
    /// unreadable line counts as one rejected token.
    pub fn from_reader<R: BufRead>(reader: R, format: &FileFormat) -> Wordlist {
        let mut dictionary = Dictionary::new();
        let mut rejected: usize = 0;
        for line in reader.lines() {
            match line {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    match format.parse_line(&line) {
                        Some(raw) => {
                            let word = normalize(raw);
                            if word.is_empty() {
                                continue;
                            }
                            if word.chars().all(|c| get_idx(c).is_some()) {
                                dictionary.push(word);
                            } else {
                                rejected += 1;
                            }
                        }
                        None => rejected += 1,
                    }
                }
                Err(_) => rejected += 1,
            }
        }
        Wordlist {
            dictionary,
            rejected,
        }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn word_count(&self) -> usize {
        self.dictionary.word_count()
    }

    pub fn rejected_count(&self) -> usize {
        self.rejected
    }
}
