// Property tests comparing the trie against a HashMap model.

use std::collections::{HashMap, HashSet};

use quickcheck::{quickcheck, Arbitrary, Gen};

use crate::{Error, Trie};

// Keys drawn from a three-letter alphabet so that random keys share prefixes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct Key(Vec<u8>);

impl Arbitrary for Key {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 6;
        Key((0..len)
            .map(|_| *g.choose(b"abc").unwrap_or(&b'a'))
            .collect())
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(Key))
    }
}

fn build(pairs: &[(Key, u32)]) -> (Trie<u8, u32>, HashMap<Vec<u8>, u32>) {
    let mut trie = Trie::new();
    let mut model = HashMap::new();
    for (key, value) in pairs {
        trie.insert(key.0.iter().copied(), *value);
        model.entry(key.0.clone()).or_insert(*value);
    }
    (trie, model)
}

// No node other than the root may be left without a value and without children.
fn no_dead_nodes(trie: &Trie<u8, u32>) -> bool {
    let mut stack: Vec<_> = trie.root.children.iter().collect();
    while let Some(node) = stack.pop() {
        if node.is_prunable() {
            return false;
        }
        stack.extend(node.children.iter());
    }
    true
}

quickcheck! {
    fn insert_then_get(key: Key, value: u32) -> bool {
        let mut trie = Trie::new();
        trie.insert(key.0.iter().copied(), value);
        trie.get(&key.0) == Some(&value)
            && trie.contains(&key.0)
            && trie.len() == 1
    }

    fn first_insert_wins(key: Key, first: u32, second: u32) -> bool {
        let mut trie = Trie::new();
        let inserted_first = trie.insert(key.0.iter().copied(), first).1;
        let inserted_second = trie.insert(key.0.iter().copied(), second).1;
        inserted_first
            && !inserted_second
            && trie.get(&key.0) == Some(&first)
            && trie.len() == 1
    }

    fn matches_model(pairs: Vec<(Key, u32)>) -> bool {
        let (trie, model) = build(&pairs);
        trie.len() == model.len()
            && model.iter().all(|(key, value)| trie.get(key) == Some(value))
    }

    fn traversal_is_complete(pairs: Vec<(Key, u32)>) -> bool {
        let (trie, model) = build(&pairs);
        let yielded: Vec<(Vec<u8>, u32)> =
            trie.iter().map(|(key, value)| (key, *value)).collect();
        let distinct: HashSet<Vec<u8>> = yielded.iter().map(|(key, _)| key.clone()).collect();

        yielded.len() == trie.len()
            && distinct.len() == yielded.len()
            && yielded.iter().all(|(key, value)| model.get(key) == Some(value))
    }

    fn erase_round_trip(pairs: Vec<(Key, u32)>, victim: Key) -> bool {
        let (mut trie, mut model) = build(&pairs);
        let before = trie.len();
        let expected = model.remove(&victim.0);

        let removed = trie.remove(&victim.0);
        let sized = match expected {
            Some(_) => trie.len() == before - 1,
            None => trie.len() == before,
        };

        removed == expected
            && sized
            && trie.get(&victim.0).is_none()
            && !trie.erase(&victim.0)
            && model.iter().all(|(key, value)| trie.get(key) == Some(value))
            && no_dead_nodes(&trie)
    }

    fn erase_everything_leaves_bare_root(pairs: Vec<(Key, u32)>) -> bool {
        let (mut trie, model) = build(&pairs);
        for key in model.keys() {
            trie.erase(key);
        }
        trie.is_empty() && trie.root.is_leaf() && trie.root.value.is_none()
    }

    fn contains_every_prefix(pairs: Vec<(Key, u32)>) -> bool {
        let (trie, model) = build(&pairs);
        model
            .keys()
            .all(|key| (0..=key.len()).all(|end| trie.contains(&key[..end])))
    }

    fn at_agrees_with_get(pairs: Vec<(Key, u32)>, probe: Key) -> bool {
        let (trie, _) = build(&pairs);
        match trie.get(&probe.0) {
            Some(value) => trie.at(&probe.0) == Ok(value),
            None => trie.at(&probe.0) == Err(Error::OutOfRange),
        }
    }

    fn clear_forgets_everything(pairs: Vec<(Key, u32)>) -> bool {
        let (mut trie, model) = build(&pairs);
        trie.clear();
        trie.is_empty()
            && trie.iter().next().is_none()
            && model.keys().all(|key| key.is_empty() || !trie.contains(key))
    }
}
