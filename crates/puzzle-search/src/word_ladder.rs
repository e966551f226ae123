//! Word ladders: step from one word to another, changing one letter at a
//! time, where every intermediate word must be in a fixed word set.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use crate::puzzle::Puzzle;

/// Letters tried at each position when building extensions
const ALPHABET: std::ops::RangeInclusive<char> = 'a'..='z';

#[derive(Debug, Clone)]
pub struct WordLadderPuzzle {
    from: String,
    to: String,
    words: Arc<BTreeSet<String>>,
}

impl WordLadderPuzzle {
    /// A ladder currently at `from`, aiming for `to`, through `words`.
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        words: Arc<BTreeSet<String>>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            words,
        }
    }

    /// Build the shared word set from any list of words.
    pub fn with_words<I, W>(from: impl Into<String>, to: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        Self::new(from, to, Arc::new(words.into_iter().map(Into::into).collect()))
    }

    pub fn from_word(&self) -> &str {
        &self.from
    }

    pub fn to_word(&self) -> &str {
        &self.to
    }

    fn step_to(&self, word: String) -> Self {
        Self {
            from: word,
            to: self.to.clone(),
            words: Arc::clone(&self.words),
        }
    }
}

impl PartialEq for WordLadderPuzzle {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from
            && self.to == other.to
            && (Arc::ptr_eq(&self.words, &other.words) || self.words == other.words)
    }
}

impl Eq for WordLadderPuzzle {}

impl fmt::Display for WordLadderPuzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

impl Puzzle for WordLadderPuzzle {
    fn is_solved(&self) -> bool {
        self.from == self.to
    }

    fn extensions(&self) -> Vec<Self> {
        let letters: Vec<char> = self.from.chars().collect();
        let mut extensions = Vec::new();
        for (position, &current) in letters.iter().enumerate() {
            for letter in ALPHABET {
                if letter == current {
                    continue;
                }
                let mut candidate = letters.clone();
                candidate[position] = letter;
                let word: String = candidate.into_iter().collect();
                if self.words.contains(&word) {
                    extensions.push(self.step_to(word));
                }
            }
        }
        extensions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words() -> Vec<&'static str> {
        vec!["cost", "cast", "case", "cave", "save"]
    }

    #[test]
    fn test_display() {
        let ladder = WordLadderPuzzle::with_words("cost", "save", words());
        assert_eq!(ladder.to_string(), "cost -> save");
    }

    #[test]
    fn test_equality_includes_word_set() {
        let a = WordLadderPuzzle::with_words("cost", "save", words());
        let b = WordLadderPuzzle::with_words("cost", "save", words());
        let c = WordLadderPuzzle::with_words("cost", "save", ["cost", "cast", "case", "save"]);
        assert_eq!(a, b);
        assert_ne!(b, c);
    }

    #[test]
    fn test_extensions_by_position_then_letter() {
        let ladder =
            WordLadderPuzzle::with_words("case", "save", ["cost", "cast", "case", "base", "save"]);
        let next: Vec<String> = ladder
            .extensions()
            .iter()
            .map(|l| l.from_word().to_owned())
            .collect();
        assert_eq!(next, ["base", "cast"]);
    }

    #[test]
    fn test_no_extensions_outside_word_set() {
        let ladder = WordLadderPuzzle::with_words("mango", "fruit", words());
        assert!(ladder.extensions().is_empty());
    }

    #[test]
    fn test_extensions_share_target_and_words() {
        let ladder = WordLadderPuzzle::with_words("cost", "save", words());
        let next = ladder.extensions();
        assert_eq!(next.len(), 1);
        assert_eq!(next[0].from_word(), "cast");
        assert_eq!(next[0].to_word(), "save");
        assert!(Arc::ptr_eq(&next[0].words, &ladder.words));
    }

    #[test]
    fn test_solved_when_words_match() {
        assert!(!WordLadderPuzzle::with_words("cost", "save", words()).is_solved());
        assert!(WordLadderPuzzle::with_words("cost", "cost", words()).is_solved());
    }
}
