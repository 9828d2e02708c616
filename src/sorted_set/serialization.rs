//! Serde support for [`SortedSet`].
//!
//! A set serializes as a plain sequence in ascending order. Deserialization
//! accepts any sequence and normalizes it, so unsorted or duplicated input
//! still produces a valid set.

use super::SortedSet;
use serde::de::{SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

impl<T: Serialize> Serialize for SortedSet<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut sequence = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            sequence.serialize_element(element)?;
        }
        sequence.end()
    }
}

struct SortedSetVisitor<T> {
    marker: PhantomData<T>,
}

impl<T> SortedSetVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<'de, T> Visitor<'de> for SortedSetVisitor<T>
where
    T: Deserialize<'de> + Ord,
{
    type Value = SortedSet<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut sequence: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        // The size hint comes from the input and is not trusted.
        let capacity = sequence.size_hint().unwrap_or(0).min(4096);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = sequence.next_element()? {
            elements.push(element);
        }
        Ok(SortedSet::from_unsorted_vec(elements))
    }
}

impl<'de, T> Deserialize<'de> for SortedSet<T>
where
    T: Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(SortedSetVisitor::new())
    }
}
