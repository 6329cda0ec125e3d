//! `serde` support for [`Trie`].
//!
//! A trie is written as a sequence of `(key, value)` tuples in traversal order,
//! each key being a sequence of elements. Maps are avoided because most formats
//! only accept strings as map keys. Reading a trie back inserts the pairs in
//! order, so a repeated key keeps its first value.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::Trie;

impl<E, V> Serialize for Trie<E, V>
where
    E: Clone + Serialize,
    V: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for entry in self.iter() {
            seq.serialize_element(&entry)?;
        }
        seq.end()
    }
}

struct TrieVisitor<E, V> {
    marker: PhantomData<fn() -> Trie<E, V>>,
}

impl<'de, E, V> Visitor<'de> for TrieVisitor<E, V>
where
    E: Deserialize<'de> + PartialEq,
    V: Deserialize<'de>,
{
    type Value = Trie<E, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence of (key, value) pairs")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut trie = Trie::new();
        while let Some((key, value)) = seq.next_element::<(Vec<E>, V)>()? {
            trie.insert(key, value);
        }
        Ok(trie)
    }
}

impl<'de, E, V> Deserialize<'de> for Trie<E, V>
where
    E: Deserialize<'de> + PartialEq,
    V: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(TrieVisitor {
            marker: PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_test::{assert_de_tokens, assert_tokens, Token};

    use crate::Trie;

    #[test]
    fn test_tokens() {
        let mut trie: Trie<char, i32> = Trie::new();
        trie.insert("ab".chars(), 1);
        trie.insert("a".chars(), 2);

        assert_tokens(
            &trie,
            &[
                Token::Seq { len: Some(2) },
                Token::Tuple { len: 2 },
                Token::Seq { len: Some(1) },
                Token::Char('a'),
                Token::SeqEnd,
                Token::I32(2),
                Token::TupleEnd,
                Token::Tuple { len: 2 },
                Token::Seq { len: Some(2) },
                Token::Char('a'),
                Token::Char('b'),
                Token::SeqEnd,
                Token::I32(1),
                Token::TupleEnd,
                Token::SeqEnd,
            ],
        );
    }

    #[test]
    fn test_empty() {
        let trie: Trie<char, i32> = Trie::new();
        assert_tokens(&trie, &[Token::Seq { len: Some(0) }, Token::SeqEnd]);
    }

    #[test]
    fn test_duplicate_keys_keep_first() {
        let mut expected: Trie<u8, i32> = Trie::new();
        expected.insert(vec![7], 1);

        assert_de_tokens(
            &expected,
            &[
                Token::Seq { len: None },
                Token::Tuple { len: 2 },
                Token::Seq { len: Some(1) },
                Token::U8(7),
                Token::SeqEnd,
                Token::I32(1),
                Token::TupleEnd,
                Token::Tuple { len: 2 },
                Token::Seq { len: Some(1) },
                Token::U8(7),
                Token::SeqEnd,
                Token::I32(9),
                Token::TupleEnd,
                Token::SeqEnd,
            ],
        );
    }
}
