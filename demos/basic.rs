//! Examples of using the trie
use seq_trie::{Error, StrTrie, Trie};

fn main() {
    // Create a new trie with string keys
    let mut trie = StrTrie::<i32>::new();

    // Insert some values
    trie.insert("hello".chars(), 1);
    trie.insert("help".chars(), 2);
    trie.insert("world".chars(), 3);

    // Check values
    assert_eq!(trie.get("hello".chars()), Some(&1));
    assert_eq!(trie.get("missing".chars()), None);

    // "hel" is a path to other keys but holds no value of its own
    assert!(trie.contains("hel".chars()));
    assert_eq!(trie.at("hel".chars()), Err(Error::OutOfRange));

    // Count words with the access-or-insert entry point
    let mut counts = StrTrie::<u32>::new();
    for word in "the cat and the hat and the bat".split_whitespace() {
        *counts.get_or_insert_default(word.chars()) += 1;
    }
    for (word, count) in counts.iter_str() {
        println!("{word}: {count}");
    }

    // Keys need not be text
    let mut routes = Trie::<&str, u16>::new();
    routes.insert(vec!["api", "v1", "users"], 200);
    routes.insert(vec!["api", "v1", "health"], 204);
    for (path, status) in routes.iter_prefix(["api", "v1"]) {
        println!("/{} -> {}", path.join("/"), status);
    }

    // Erasing prunes the branch that no other key uses
    assert!(trie.erase("world".chars()));
    assert!(!trie.contains("w".chars()));
}
