use crate::error::{ParcelError, Result};

/// Fixed set of location names, compared by exact equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationRegistry {
    names: Vec<String>,
}

impl LocationRegistry {
    /// Build a registry, rejecting blank or duplicate names.
    pub fn new(names: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut collected: Vec<String> = Vec::new();
        for name in names {
            if name.trim().is_empty() {
                return Err(ParcelError::InvalidNetwork {
                    reason: "location names must not be blank".to_string(),
                });
            }
            if collected.contains(&name) {
                return Err(ParcelError::InvalidNetwork {
                    reason: format!("location '{name}' declared twice"),
                });
            }
            collected.push(name);
        }
        if collected.is_empty() {
            return Err(ParcelError::InvalidNetwork {
                reason: "no locations configured".to_string(),
            });
        }
        Ok(Self { names: collected })
    }

    pub(crate) fn from_trusted(names: Vec<String>) -> Self {
        Self { names }
    }

    /// Whether `name` is one of the known locations.
    pub fn is_valid(&self, name: &str) -> bool {
        self.names.iter().any(|known| known == name)
    }

    /// Location names in declaration order.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}
