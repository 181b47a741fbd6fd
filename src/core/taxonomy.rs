use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Category assigned to skills the taxonomy does not know
pub const UNKNOWN_CATEGORY: &str = "General";

/// One taxonomy entry: category, alternate spellings and learning metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub category: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Estimated months to learn from scratch
    #[serde(default = "default_time_months")]
    pub time_months: f64,
    /// 1 (easiest) to 5
    #[serde(default = "default_difficulty")]
    pub difficulty: u8,
}

fn default_time_months() -> f64 { 1.0 }
fn default_difficulty() -> u8 { 1 }

impl SkillEntry {
    pub fn new(category: &str, aliases: &[&str], time_months: f64, difficulty: u8) -> Self {
        Self {
            category: category.to_string(),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
            time_months,
            difficulty,
        }
    }

    /// Entry used for skills missing from the taxonomy
    pub fn unknown() -> Self {
        Self::new(UNKNOWN_CATEGORY, &[], default_time_months(), default_difficulty())
    }
}

/// Read-only skill lookup keyed by canonical lowercase name
///
/// Built once at startup and shared through an `Arc`. Keys are kept in a
/// `BTreeMap` so alias resolution scans entries in a fixed order.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillTaxonomy {
    entries: BTreeMap<String, SkillEntry>,
}

impl SkillTaxonomy {
    /// Build a taxonomy from arbitrary entries; keys and aliases are lowercased
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, SkillEntry)>,
    {
        let entries = entries
            .into_iter()
            .map(|(key, mut entry)| {
                entry.aliases = entry
                    .aliases
                    .iter()
                    .map(|alias| alias.trim().to_lowercase())
                    .collect();
                (key.trim().to_lowercase(), entry)
            })
            .collect();

        Self { entries }
    }

    /// The built-in technology taxonomy
    pub fn builtin() -> Self {
        let table = [
            ("python", SkillEntry::new("Backend", &["py"], 2.0, 2)),
            ("fastapi", SkillEntry::new("Backend", &["fast-api"], 1.0, 2)),
            ("django", SkillEntry::new("Backend", &[], 2.0, 3)),
            ("nodejs", SkillEntry::new("Backend", &["node", "node.js"], 2.0, 2)),
            ("javascript", SkillEntry::new("Frontend", &["js"], 2.0, 2)),
            ("react", SkillEntry::new("Frontend", &["react.js"], 2.0, 3)),
            ("typescript", SkillEntry::new("Frontend", &["ts"], 1.0, 2)),
            ("postgresql", SkillEntry::new("Database", &["postgres", "pg"], 1.5, 3)),
            ("mongodb", SkillEntry::new("Database", &[], 1.0, 2)),
            ("docker", SkillEntry::new("DevOps", &[], 1.0, 2)),
            ("kubernetes", SkillEntry::new("DevOps", &["k8s"], 3.0, 4)),
            ("aws", SkillEntry::new("Cloud", &[], 3.0, 4)),
            ("gcp", SkillEntry::new("Cloud", &["google cloud"], 3.0, 4)),
            ("azure", SkillEntry::new("Cloud", &[], 3.0, 4)),
            ("git", SkillEntry::new("Tools", &[], 0.5, 1)),
        ];

        Self::new(table.into_iter().map(|(key, entry)| (key.to_string(), entry)))
    }

    /// Copy of this taxonomy with `overrides` added or replacing existing keys
    pub fn merged_with<I>(&self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (String, SkillEntry)>,
    {
        let extra = Self::new(overrides);
        let mut entries = self.entries.clone();
        entries.extend(extra.entries);
        Self { entries }
    }

    /// Canonicalize a free-text skill name
    ///
    /// Lowercases and trims, then resolves taxonomy keys and aliases. Unknown
    /// skills pass through as their own canonical form.
    pub fn normalize(&self, skill: &str) -> String {
        let normalized = skill.trim().to_lowercase();

        if self.entries.contains_key(&normalized) {
            return normalized;
        }

        self.entries
            .iter()
            .find(|(_, entry)| entry.aliases.iter().any(|alias| *alias == normalized))
            .map(|(key, _)| key.clone())
            .unwrap_or(normalized)
    }

    /// Look up an entry by canonical key
    pub fn get(&self, canonical: &str) -> Option<&SkillEntry> {
        self.entries.get(canonical)
    }

    /// Category of a canonical skill, if known
    pub fn category_of(&self, canonical: &str) -> Option<&str> {
        self.entries.get(canonical).map(|entry| entry.category.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SkillTaxonomy {
    fn default() -> Self {
        Self::builtin()
    }
}
