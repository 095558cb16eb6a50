//! The ordered feature names a model expects.

use std::collections::HashSet;

use periop_core::errors::ModelError;

/// Ordered, unique feature names. Index `i` of every vector, weight,
/// center, and scale corresponds to `names()[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSchema {
    names: Vec<String>,
}

impl FeatureSchema {
    /// Build a schema, rejecting empty lists, blank names, and duplicates.
    pub fn new<I, S>(names: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(ModelError::EmptySchema);
        }
        let mut seen = HashSet::with_capacity(names.len());
        for (index, name) in names.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(ModelError::BlankFeature { index });
            }
            if !seen.insert(name.as_str()) {
                return Err(ModelError::DuplicateFeature {
                    feature: name.clone(),
                });
            }
        }
        Ok(Self { names })
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false for a constructed schema.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn index_of(&self, feature: &str) -> Option<usize> {
        self.names.iter().position(|name| name == feature)
    }

    /// Schema features absent from `columns`, in schema order.
    pub fn missing_from<'a, I>(&self, columns: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let present: HashSet<&str> = columns.into_iter().collect();
        self.names
            .iter()
            .filter(|name| !present.contains(name.as_str()))
            .cloned()
            .collect()
    }
}
