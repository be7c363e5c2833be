//! Find the words in a dictionary that are concatenations of two or more
//! other words from the same dictionary.

pub mod alphabet;
pub mod error;
pub mod wordlist;
