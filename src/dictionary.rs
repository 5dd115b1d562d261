// Vortspuro – A multiplayer word-tracing game
// Copyright (C) 2025  Neil Roberts
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use std::fmt;
use std::io;
use std::io::BufRead;

#[derive(Default)]
struct Node {
    // Sorted by letter so that lookups can binary search
    children: Vec<(char, Node)>,
    is_word: bool,
}

pub struct Dictionary {
    root: Node,
    n_words: usize,
}

#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    Empty,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LoadError::Io(e) => e.fmt(f),
            LoadError::Empty => write!(f, "word list contains no words"),
        }
    }
}

impl Node {
    fn child(&self, letter: char) -> Option<&Node> {
        self.children
            .binary_search_by(|(ch, _)| ch.cmp(&letter))
            .ok()
            .map(|i| &self.children[i].1)
    }
}

impl Dictionary {
    pub fn new() -> Dictionary {
        Dictionary {
            root: Node::default(),
            n_words: 0,
        }
    }

    /// Reads a newline-delimited word list. Blank lines are skipped
    /// and words are folded to lowercase.
    pub fn load<R: BufRead>(reader: R) -> Result<Dictionary, LoadError> {
        let mut dictionary = Dictionary::new();

        for line in reader.lines() {
            let line = line.map_err(LoadError::Io)?;
            let word = line.trim();

            if word.is_empty() {
                continue;
            }

            dictionary.insert(word);
        }

        if dictionary.n_words == 0 {
            return Err(LoadError::Empty);
        }

        log::debug!("loaded dictionary with {} words", dictionary.n_words);

        Ok(dictionary)
    }

    pub fn from_words<I>(words: I) -> Dictionary
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut dictionary = Dictionary::new();

        for word in words {
            dictionary.insert(word.as_ref());
        }

        dictionary
    }

    fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;

        for ch in word.chars().flat_map(char::to_lowercase) {
            let pos = match node
                .children
                .binary_search_by(|(c, _)| c.cmp(&ch))
            {
                Ok(pos) => pos,
                Err(pos) => {
                    node.children.insert(pos, (ch, Node::default()));
                    pos
                }
            };

            node = &mut node.children[pos].1;
        }

        if !node.is_word {
            node.is_word = true;
            self.n_words += 1;
        }
    }

    fn node_for(&self, s: &str) -> Option<&Node> {
        let mut node = &self.root;

        for ch in s.chars().flat_map(char::to_lowercase) {
            node = node.child(ch)?;
        }

        Some(node)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.node_for(word).map_or(false, |node| node.is_word)
    }

    /// Whether some word in the dictionary starts with `s`
    pub fn is_prefix(&self, s: &str) -> bool {
        self.node_for(s).is_some()
    }

    pub fn len(&self) -> usize {
        self.n_words
    }

    pub fn is_empty(&self) -> bool {
        self.n_words == 0
    }

    pub fn walker(&self) -> Walker {
        Walker { node: &self.root }
    }
}

impl Default for Dictionary {
    fn default() -> Dictionary {
        Dictionary::new()
    }
}

/// A cursor that follows the dictionary one letter at a time, so that
/// a search can abandon a branch as soon as its letters stop being the
/// prefix of any word.
#[derive(Clone)]
pub struct Walker<'a> {
    node: &'a Node,
}

impl<'a> Walker<'a> {
    pub fn step(&self, letter: char) -> Option<Walker<'a>> {
        self.node.child(letter).map(|node| Walker { node })
    }

    pub fn is_word(&self) -> bool {
        self.node.is_word
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn make_test_dictionary() -> Dictionary {
        Dictionary::from_words(["a", "b", "c", "apple", "app", "cap"])
    }

    #[test]
    fn contains() {
        let dictionary = make_test_dictionary();

        assert!(dictionary.contains("a"));
        assert!(dictionary.contains("b"));
        assert!(dictionary.contains("c"));
        assert!(dictionary.contains("apple"));
        assert!(dictionary.contains("app"));
        assert!(dictionary.contains("cap"));

        assert!(!dictionary.contains(""));
        assert!(!dictionary.contains("d"));
        assert!(!dictionary.contains("appl"));
        assert!(!dictionary.contains("apples"));

        assert!(dictionary.contains("APPLE"));
        assert!(dictionary.contains("Cap"));
    }

    #[test]
    fn is_prefix() {
        let dictionary = make_test_dictionary();

        assert!(dictionary.is_prefix(""));
        assert!(dictionary.is_prefix("a"));
        assert!(dictionary.is_prefix("ap"));
        assert!(dictionary.is_prefix("appl"));
        assert!(dictionary.is_prefix("APPL"));

        assert!(!dictionary.is_prefix("d"));
        assert!(!dictionary.is_prefix("apples"));
        assert!(!dictionary.is_prefix("ba"));
    }

    #[test]
    fn load() {
        let source = "cat\n\
                      \n\
                      CATS\n\
                      at\n";

        let dictionary = Dictionary::load(source.as_bytes()).unwrap();

        assert_eq!(dictionary.len(), 3);
        assert!(dictionary.contains("cat"));
        assert!(dictionary.contains("cats"));
        assert!(dictionary.contains("at"));
        assert!(!dictionary.contains(""));
    }

    #[test]
    fn load_empty() {
        assert!(matches!(
            Dictionary::load("\n\n".as_bytes()),
            Err(LoadError::Empty),
        ));
    }

    #[test]
    fn duplicate_words_counted_once() {
        let dictionary = Dictionary::from_words(["cat", "CAT", "Cat"]);
        assert_eq!(dictionary.len(), 1);
    }

    #[test]
    fn walker() {
        let dictionary = make_test_dictionary();

        let walker = dictionary.walker();
        assert!(!walker.is_word());

        let walker = walker.step('a').unwrap();
        assert!(walker.is_word());

        let walker = walker.step('p').unwrap();
        assert!(!walker.is_word());

        let walker = walker.step('p').unwrap();
        assert!(walker.is_word());

        assert!(walker.step('z').is_none());
    }
}
