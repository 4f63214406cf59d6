/*!
 * Common test utilities for the lexiscan test suite
 */

use std::fs;
use std::path::PathBuf;
use anyhow::Result;
use tempfile::TempDir;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a small Gutenberg-style book with nine chapters for testing
pub fn create_test_book(dir: &PathBuf, filename: &str) -> Result<PathBuf> {
    let mut content = String::from(
        "The Test Book\n\nby Nobody\n\n*** START OF THE PROJECT GUTENBERG EBOOK THE TEST BOOK ***\n\nPreamble that the segmenter discards.\n\n",
    );

    let bodies = [
        "god walked among men and the men prayed",
        "a long road wound through the dark for-\nest toward town",
        "the priest spoke of sin and of mercy",
        "nothing holy happened in the market square today",
        "faith and doubt quarrelled in his heart",
        "an old monk kept a small silent chapel",
        "judgment came swiftly and without warning",
        "grace settled on the house like snow",
        "the soul finds rest at the end of suffering",
    ];
    for (i, body) in bodies.iter().enumerate() {
        content.push_str(&format!("CHAPTER {}\n\n{}\n\n", roman(i + 1), body));
    }

    content.push_str("*** END OF THE PROJECT GUTENBERG EBOOK THE TEST BOOK ***\n\nLicense text.\n");
    create_test_file(dir, filename, content.as_str())
}

/// Uppercase Roman numeral for a small chapter index
pub fn roman(n: usize) -> &'static str {
    match n {
        1 => "I",
        2 => "II",
        3 => "III",
        4 => "IV",
        5 => "V",
        6 => "VI",
        7 => "VII",
        8 => "VIII",
        9 => "IX",
        10 => "X",
        _ => panic!("test helper only covers chapters 1-10"),
    }
}
