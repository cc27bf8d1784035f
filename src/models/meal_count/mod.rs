//! Tomorrow's meal count snapshot as served by `GET /mealcount/tomorrow`.
//!
//! The caffeine tables are keyed by preference label ("Tea", "Black Coffee", ...).
//! Their rows are shown in the order the server sends them, so they are decoded
//! into [`OrderedMap`] rather than a hashed map.

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;
use std::marker::PhantomData;

/// String-keyed map that keeps entries in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V> OrderedMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace. A replaced key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }
}

struct OrderedMapVisitor<V> {
    marker: PhantomData<V>,
}

impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
    type Value = OrderedMap<V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map keyed by label")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = OrderedMap::new();
        while let Some((key, value)) = access.next_entry::<String, V>()? {
            map.insert(key, value);
        }
        Ok(map)
    }

    // A null table is treated the same as an empty one
    fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
        Ok(OrderedMap::new())
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(OrderedMapVisitor {
            marker: PhantomData,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MealCounts {
    pub date: String,
    pub veg: u32,
    pub non_veg: u32,
    pub veg_students: Vec<String>,
    pub non_veg_students: Vec<String>,
    pub caffeine: OrderedMap<u32>,
    pub caffeine_students: OrderedMap<Vec<String>>,
}

/// Date heading for the meal counts panel; "None" until a snapshot is loaded.
pub fn date_label(counts: Option<&MealCounts>) -> &str {
    match counts {
        Some(counts) => &counts.date,
        None => "None",
    }
}

/// Rows for a student name table. An empty list renders as a single "None" row.
pub fn student_rows(students: &[String]) -> Vec<&str> {
    if students.is_empty() {
        vec!["None"]
    } else {
        students.iter().map(String::as_str).collect()
    }
}
