use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use serde::Serialize;
use structopt::StructOpt;
use typed_arena::Arena;

use compound_words::wordlist::trie::decompose::Compound;
use compound_words::wordlist::trie::trie::Trie;
use compound_words::wordlist::wordlist::{FileFormat, Wordlist};

/// Read a word file and report every word that is a concatenation of two or
/// more other words from the same file, longest first.
#[derive(StructOpt)]
struct Cli {
    /// The path to the word file to read, one word per line
    #[structopt(parse(from_os_str))]
    path: PathBuf,
    /// Where to write the found compound words, one per line
    /// (default: compounds_<input name> next to the input)
    #[structopt(short, long, parse(from_os_str))]
    output: Option<PathBuf>,
    /// Column delimiter for word files with more than one column
    #[structopt(short, long)]
    delimiter: Option<char>,
    /// Which column holds the word when --delimiter is given
    #[structopt(long)]
    word_column: Option<usize>,
    /// Scan with the rayon worker pool instead of a single thread
    #[structopt(long)]
    parallel: bool,
    /// Also print the scan summary as JSON
    #[structopt(long)]
    json: bool,
}

#[derive(Serialize)]
struct ScanSummary<'a> {
    input_words: usize,
    rejected_tokens: usize,
    compounds_found: usize,
    longest: Option<&'a str>,
    second_longest: Option<&'a str>,
    compounds: &'a [Compound],
}

fn default_output_path(input: &Path) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "words.txt".to_string());
    input.with_file_name(format!("compounds_{}", name))
}

fn main() -> anyhow::Result<()> {
    let args = Cli::from_args();

    let format = FileFormat::builder()
        .delimiter(args.delimiter)
        .word_column(args.word_column)
        .build();
    let wordlist = Wordlist::from_file(&args.path, format)?;
    let dictionary = wordlist.dictionary();
    println!("Input words: {}", dictionary.word_count());

    let trie = Trie::new();
    dictionary.index_into(&trie)?;
    let arena = Arena::new();
    let index = trie.build(&arena);

    let start = Instant::now();
    let compounds = if args.parallel {
        index.find_compound_words_par(dictionary)
    } else {
        index.find_compound_words(dictionary)
    };
    let elapsed = start.elapsed();

    let out_path = args.output.unwrap_or_else(|| default_output_path(&args.path));
    let out_file = File::create(&out_path)
        .with_context(|| format!("cannot create output file {:?}", out_path))?;
    let mut out = BufWriter::new(out_file);
    for compound in &compounds {
        writeln!(out, "{}", compound.word)
            .with_context(|| format!("cannot write to {:?}", out_path))?;
    }
    out.flush()
        .with_context(|| format!("cannot write to {:?}", out_path))?;

    if let Some(compound) = compounds.first() {
        println!("Longest compound: {} ({} parts)", compound.word, compound.parts);
    }
    if let Some(compound) = compounds.get(1) {
        println!(
            "Second longest compound: {} ({} parts)",
            compound.word, compound.parts
        );
    }
    println!("Total compound words found: {}", compounds.len());
    println!("Scanned in {:.3}s, results in {:?}", elapsed.as_secs_f64(), out_path);

    if args.json {
        let summary = ScanSummary {
            input_words: dictionary.word_count(),
            rejected_tokens: wordlist.rejected_count(),
            compounds_found: compounds.len(),
            longest: compounds.first().map(|c| c.word.as_str()),
            second_longest: compounds.get(1).map(|c| c.word.as_str()),
            compounds: &compounds,
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}
