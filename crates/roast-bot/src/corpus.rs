//! Roast lines loaded once at startup

use std::io;
use std::path::{Path, PathBuf};

use roast_std::fs::ReadFile;
use thiserror::Error;

use crate::dice::Dice;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("{} file not found", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} has no usable lines", .0.display())]
    Empty(PathBuf),
}

/// Immutable, never-empty list of trimmed roast lines.
#[derive(Debug, Clone)]
pub struct Corpus {
    lines: Vec<String>,
}

impl Corpus {
    /// One entry per non-blank line, trimmed, in file order.
    pub fn load<F: ReadFile>(fs: &F, path: &Path) -> Result<Self, CorpusError> {
        let content = fs.read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => CorpusError::NotFound(path.to_path_buf()),
            _ => CorpusError::Read {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        let lines: Vec<String> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        if lines.is_empty() {
            return Err(CorpusError::Empty(path.to_path_buf()));
        }

        Ok(Self { lines })
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[cfg(test)]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// A uniformly chosen line.
    pub fn pick(&self, dice: &dyn Dice) -> &str {
        let index = dice.pick(self.lines.len()) % self.lines.len();
        &self.lines[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::testing::FixedDice;
    use roast_std::fs::MemFs;

    fn load(content: &str) -> Result<Corpus, CorpusError> {
        let fs = MemFs::new();
        fs.insert("comments.txt", content);
        Corpus::load(&fs, Path::new("comments.txt"))
    }

    #[test]
    fn test_lines_trimmed_and_blanks_dropped() {
        let corpus = load("  first  \n\n\t\nsecond\r\n   third\n").unwrap();
        assert_eq!(corpus.lines(), ["first", "second", "third"]);
        assert_eq!(corpus.len(), 3);
    }

    #[test]
    fn test_missing_file() {
        let fs = MemFs::new();
        let err = Corpus::load(&fs, Path::new("comments.txt")).unwrap_err();
        assert!(matches!(err, CorpusError::NotFound(_)));
        assert_eq!(err.to_string(), "comments.txt file not found");
    }

    #[test]
    fn test_blank_file_is_empty() {
        let err = load("\n   \n\t\n").unwrap_err();
        assert!(matches!(err, CorpusError::Empty(_)));
    }

    #[test]
    fn test_pick_uses_dice() {
        let corpus = load("a\nb\nc\n").unwrap();
        assert_eq!(corpus.pick(&FixedDice { roll: 1, pick: 2 }), "c");
        assert_eq!(corpus.pick(&FixedDice { roll: 1, pick: 0 }), "a");
    }

    #[test]
    fn test_pick_wraps_out_of_range_index() {
        let corpus = load("a\nb\n").unwrap();
        assert_eq!(corpus.pick(&FixedDice { roll: 1, pick: 5 }), "b");
    }
}
