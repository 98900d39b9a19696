//! `serde` support: a list serializes as a plain sequence of its elements.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::SeqList;
use crate::node::NONE;

/// Upper bound on pre-allocation from an untrusted length hint.
const MAX_PREALLOC: usize = 4096;

impl<T: Serialize> Serialize for SeqList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

struct SeqListVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for SeqListVisitor<T> {
    type Value = SeqList<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a sequence")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOC);
        let mut list = SeqList::with_capacity(capacity);
        let mut tail = NONE;
        while let Some(value) = seq.next_element()? {
            tail = list.link_after(tail, value);
        }
        Ok(list)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for SeqList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(SeqListVisitor(PhantomData))
    }
}
