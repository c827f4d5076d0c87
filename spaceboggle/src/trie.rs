//! Prefix tree used as the dictionary.

use std::{collections::HashMap, iter::FromIterator};

use log::debug;

/// A node in the [`Trie`]. The path of characters from the root to a node spells a
/// prefix of at least one dictionary word.
#[derive(Debug, Default, Clone)]
pub struct TrieNode {
    /// Nodes for each character which continues this prefix.
    children: HashMap<char, TrieNode>,
    /// Whether the prefix spelled by this node is itself a word.
    word_end: bool,
}

impl TrieNode {
    /// Get the node reached by appending `c` to this node's prefix, if any word continues
    /// that way.
    #[inline]
    pub fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    /// Whether the path to this node spells a complete word.
    #[inline]
    pub fn is_word_end(&self) -> bool {
        self.word_end
    }

    /// Iterate the characters which continue this prefix and their nodes.
    pub fn children(&self) -> impl Iterator<Item = (char, &TrieNode)> {
        self.children.iter().map(|(&c, node)| (c, node))
    }

    /// Whether no word continues past this node.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Dictionary of words stored as a prefix tree.
///
/// Words are stored exactly as given; no case folding or other normalization is done.
#[derive(Debug, Default, Clone)]
pub struct Trie {
    root: TrieNode,
    /// Number of distinct words inserted.
    words: usize,
}

impl Trie {
    /// Construct an empty [`Trie`]. Its root has no children and is not a word.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a [`Trie`] containing every word in `words`.
    pub fn build<I>(words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut trie = Self::new();
        trie.extend(words);
        debug!("built trie with {} words", trie.len());
        trie
    }

    /// Insert a word, creating any nodes needed along its path. Returns true if the word
    /// was not already present. Inserting the empty string marks the root as a word.
    pub fn insert(&mut self, word: &str) -> bool {
        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.children.entry(c).or_default();
        }
        if node.word_end {
            false
        } else {
            node.word_end = true;
            self.words += 1;
            true
        }
    }

    /// Get the root node, which stands for the empty prefix.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Follow `prefix` from the root, returning the node it reaches if any word starts
    /// with it.
    pub fn find(&self, prefix: &str) -> Option<&TrieNode> {
        prefix
            .chars()
            .try_fold(&self.root, |node, c| node.child(c))
    }

    /// Whether `word` was inserted into this trie.
    pub fn contains(&self, word: &str) -> bool {
        self.find(word).map_or(false, TrieNode::is_word_end)
    }

    /// Whether any word in this trie starts with `prefix`.
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.find(prefix).is_some()
    }

    /// Number of distinct words in the trie.
    pub fn len(&self) -> usize {
        self.words
    }

    /// Whether the trie contains no words.
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::build(iter)
    }
}
