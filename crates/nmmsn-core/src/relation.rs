//! Classification of key/value relations.
//!
//! A [`Relation`] is a set of `(key, value)` pairs. Its [`RelationKind`] says
//! whether keys and values determine each other, which decides whether the
//! relation can be used as a lookup table in either direction.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use nmmsn_model::{MappingDirection, NamingError, Result};

/// Shape of a relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationKind {
    /// No pairs.
    None,
    OneToOne,
    /// Several keys share a value; every key has one value.
    ManyToOne,
    /// A key has several values; every value has one key.
    OneToMany,
    ManyToMany,
}

impl RelationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationKind::None => "none",
            RelationKind::OneToOne => "one-to-one",
            RelationKind::ManyToOne => "many-to-one",
            RelationKind::OneToMany => "one-to-many",
            RelationKind::ManyToMany => "many-to-many",
        }
    }

    /// The kind of the relation with keys and values exchanged.
    #[must_use]
    pub fn mirrored(self) -> Self {
        match self {
            RelationKind::ManyToOne => RelationKind::OneToMany,
            RelationKind::OneToMany => RelationKind::ManyToOne,
            other => other,
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deduplicated `(key, value)` pairs, sorted by key then value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Relation {
    pairs: Vec<(String, String)>,
}

impl Relation {
    /// Builds a relation from raw pairs. Both sides are trimmed; an empty
    /// side is an error.
    pub fn new<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        Self::build(pairs, false)
    }

    /// Like [`Relation::new`], but lowercases both sides first.
    pub fn case_insensitive<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        Self::build(pairs, true)
    }

    fn build<I, K, V>(pairs: I, lowercase: bool) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut unique = BTreeSet::new();
        for (key, value) in pairs {
            let (key, value) = (key.as_ref().trim(), value.as_ref().trim());
            if key.is_empty() || value.is_empty() {
                return Err(NamingError::InvalidRelation);
            }
            if lowercase {
                unique.insert((key.to_lowercase(), value.to_lowercase()));
            } else {
                unique.insert((key.to_string(), value.to_string()));
            }
        }
        Ok(Self {
            pairs: unique.into_iter().collect(),
        })
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(key, _)| key.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The relation with keys and values exchanged.
    #[must_use]
    pub fn swapped(&self) -> Self {
        let mut pairs: Vec<(String, String)> = self
            .pairs
            .iter()
            .map(|(key, value)| (value.clone(), key.clone()))
            .collect();
        pairs.sort();
        Self { pairs }
    }

    pub fn kind(&self) -> RelationKind {
        if self.pairs.is_empty() {
            return RelationKind::None;
        }
        let (by_key, by_value) = self.fan_out();
        let keys_single = by_key.values().all(|values| values.len() == 1);
        let values_single = by_value.values().all(|keys| keys.len() == 1);
        match (keys_single, values_single) {
            (true, true) => RelationKind::OneToOne,
            (false, true) => RelationKind::OneToMany,
            (true, false) => RelationKind::ManyToOne,
            (false, false) => RelationKind::ManyToMany,
        }
    }

    /// Key to value lookup. Requires every key to have a single value.
    pub fn forward(&self) -> Result<BTreeMap<String, String>> {
        match self.kind() {
            RelationKind::None | RelationKind::OneToOne | RelationKind::ManyToOne => {
                Ok(self.pairs.iter().cloned().collect())
            }
            _ => Err(NamingError::AmbiguousRelation(MappingDirection::Forward)),
        }
    }

    /// Value to key lookup. Requires every value to have a single key.
    pub fn backward(&self) -> Result<BTreeMap<String, String>> {
        match self.kind() {
            RelationKind::None | RelationKind::OneToOne | RelationKind::OneToMany => Ok(self
                .pairs
                .iter()
                .map(|(key, value)| (value.clone(), key.clone()))
                .collect()),
            _ => Err(NamingError::AmbiguousRelation(MappingDirection::Backward)),
        }
    }

    /// Pairs whose value is shared by at least two keys, for a many-to-one
    /// relation.
    pub fn duplicates_toward_same_value(&self) -> Result<Vec<(String, String)>> {
        if self.kind() != RelationKind::ManyToOne {
            return Err(NamingError::NotManyToOne);
        }
        let (_, by_value) = self.fan_out();
        Ok(self
            .pairs
            .iter()
            .filter(|(_, value)| by_value.get(value.as_str()).is_some_and(|keys| keys.len() > 1))
            .cloned()
            .collect())
    }

    /// One `key -> value` line per duplicate pair.
    pub fn describe_duplicates(&self) -> Result<String> {
        let lines: Vec<String> = self
            .duplicates_toward_same_value()?
            .iter()
            .map(|(key, value)| format!("{key} -> {value}"))
            .collect();
        Ok(lines.join("\n"))
    }

    #[allow(clippy::type_complexity)]
    fn fan_out(&self) -> (BTreeMap<&str, BTreeSet<&str>>, BTreeMap<&str, BTreeSet<&str>>) {
        let mut by_key: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
        let mut by_value: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
        for (key, value) in &self.pairs {
            by_key.entry(key).or_default().insert(value);
            by_value.entry(value).or_default().insert(key);
        }
        (by_key, by_value)
    }
}
