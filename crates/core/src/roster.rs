//! # Judge Roster
//!
//! The fixed set of participants whose availability is collected. A roster is
//! built once at startup, either from the compiled-in table or from a JSON
//! file, and never changes afterwards.

use std::{collections::HashSet, path::Path};

use eyre::{Result, WrapErr, eyre};

use crate::models::judge::Judge;

const DEFAULT_JUDGES: [(&str, &str, &str); 5] = [
    ("7f8a9b1c-2d3e-4f5a-6b7c-8d9e0f1a2b3c", "دکتر افشین بنازاده", "داور داخل دانشکده"),
    ("1a2b3c4d-5e6f-7a8b-9c0d-1e2f3a4b5c6d", "دکتر علیرضا شریفی", "داور داخل دانشکده"),
    ("9e8d7c6b-5a4f-3e2d-1c0b-9a8f7e6d5c4b", "دکتر سعید خدایگان", "داور داخل دانشگاه"),
    ("5c4b3a2f-1e0d-9c8b-7a6f-5e4d3c2b1a0f", "دکتر علیرضا رودباری", "داور خارج دانشگاه"),
    ("3c2b3ف2f-1e0d-9cلb-7a6f-5e4d3c2b1a1f", "دکتر محمد مراد", "ناظر جلسه"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    judges: Vec<Judge>,
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            judges: DEFAULT_JUDGES
                .iter()
                .map(|(id, name, role)| Judge {
                    id: id.to_string(),
                    name: name.to_string(),
                    role: role.to_string(),
                })
                .collect(),
        }
    }
}

impl Roster {
    /// Builds a roster, rejecting duplicate or empty ids.
    pub fn new(judges: Vec<Judge>) -> Result<Self> {
        let mut seen = HashSet::new();
        for judge in &judges {
            if judge.id.trim().is_empty() {
                return Err(eyre!("Judge {:?} has an empty id", judge.name));
            }
            if !seen.insert(judge.id.as_str()) {
                return Err(eyre!("Duplicate judge id {}", judge.id));
            }
        }

        Ok(Self { judges })
    }

    /// Loads a roster from a JSON array of `{id, name, role}` objects.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read roster file {}", path.display()))?;
        let judges: Vec<Judge> = serde_json::from_str(&content)
            .wrap_err_with(|| format!("Invalid roster file {}", path.display()))?;

        Self::new(judges)
    }

    pub fn get(&self, id: &str) -> Option<&Judge> {
        self.judges.iter().find(|judge| judge.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Judge> {
        self.judges.iter()
    }

    pub fn len(&self) -> usize {
        self.judges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.judges.is_empty()
    }
}
