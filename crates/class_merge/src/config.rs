//! Runtime extensions to the built-in utility group table.
//!
//! A config is a small TOML document:
//!
//! ```toml
//! prefix = "tw-"
//!
//! [[groups]]
//! id = "glow"
//! rules = [{ prefix = "glow", values = ["sm", "md", "lg"] }]
//! conflicts = ["shadow"]
//!
//! [conflicts]
//! shadow = ["glow"]
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::groups::{GroupTable, Validator};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Extensions applied on top of the built-in table.
pub struct MergeConfig {
    /// Utility prefix configured for the styling framework (`tw-`).
    ///
    /// When set, only tokens carrying the prefix are classified.
    pub prefix: Option<String>,
    /// New groups, or extra rules for an existing group id.
    pub groups: Vec<GroupSpec>,
    /// Extra conflicts keyed by group id.
    pub conflicts: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// A utility group declared in a [`MergeConfig`].
pub struct GroupSpec {
    /// Group id; reusing a built-in id appends rules to that group.
    pub id: String,
    /// Classification rules, tried after any existing rules for the prefix.
    #[serde(default)]
    pub rules: Vec<RuleSpec>,
    /// Groups overridden when a token of this group wins.
    #[serde(default)]
    pub conflicts: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// One classification rule inside a [`GroupSpec`].
pub struct RuleSpec {
    /// Utility prefix before the value dash; empty for whole class names.
    #[serde(default)]
    pub prefix: String,
    /// Accepted values, or whole class names when `prefix` is empty.
    #[serde(default)]
    pub values: Vec<String>,
    /// Accepted value shapes.
    #[serde(default)]
    pub validators: Vec<Validator>,
}

#[derive(Debug, Error)]
/// Invalid merge configuration.
pub enum ConfigError {
    /// The TOML document could not be parsed.
    #[error("invalid merge config: {0}")]
    Parse(#[from] toml::de::Error),
    /// A group was declared with an empty id.
    #[error("utility group id must not be empty")]
    EmptyGroupId,
    /// A rule can never match a class.
    #[error("utility group `{group}` has a rule that matches nothing")]
    EmptyRule {
        /// Group declaring the rule.
        group: String,
    },
    /// Conflicts were declared for a group that does not exist.
    #[error("conflicts declared for unknown utility group `{group}`")]
    UnknownGroup {
        /// Missing group id.
        group: String,
    },
    /// A conflict names a group that is neither built in nor configured.
    #[error("utility group `{group}` conflicts with unknown group `{conflict}`")]
    UnknownConflict {
        /// Group declaring the conflict.
        group: String,
        /// Missing conflicting group.
        conflict: String,
    },
}

impl MergeConfig {
    /// Parses a config from TOML.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when `raw` is not a valid config document.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// Configured prefix, ignoring an empty string.
    pub fn effective_prefix(&self) -> Option<&str> {
        self.prefix.as_deref().filter(|prefix| !prefix.is_empty())
    }

    /// Applies the configured groups and conflicts to `table`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for empty ids, rules that match nothing, and
    /// conflicts naming unknown groups. `table` may be partially extended
    /// when an error is returned.
    pub fn apply(&self, table: &mut GroupTable) -> Result<(), ConfigError> {
        for spec in &self.groups {
            if spec.id.is_empty() {
                return Err(ConfigError::EmptyGroupId);
            }
            let group = table.ensure_group(&spec.id);
            for rule in &spec.rules {
                let matches_nothing = (rule.prefix.is_empty() && rule.values.is_empty())
                    || (rule.values.is_empty() && rule.validators.is_empty());
                if matches_nothing {
                    return Err(ConfigError::EmptyRule {
                        group: spec.id.clone(),
                    });
                }
                table.add_rule(
                    group,
                    &rule.prefix,
                    rule.values.clone(),
                    rule.validators.clone(),
                );
            }
        }

        let declared = self
            .groups
            .iter()
            .map(|spec| (&spec.id, &spec.conflicts))
            .chain(self.conflicts.iter());
        for (id, conflicts) in declared {
            let Some(group) = table.position(id) else {
                return Err(ConfigError::UnknownGroup { group: id.clone() });
            };
            for conflict in conflicts {
                let Some(other) = table.position(conflict) else {
                    return Err(ConfigError::UnknownConflict {
                        group: id.clone(),
                        conflict: conflict.clone(),
                    });
                };
                table.add_conflict(group, other);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config_document() {
        let config = MergeConfig::from_toml_str(
            r#"
prefix = "tw-"

[[groups]]
id = "glow"
rules = [{ prefix = "glow", values = ["sm", "md"], validators = ["arbitrary-length"] }]
conflicts = ["shadow"]

[conflicts]
shadow = ["glow"]
"#,
        )
        .expect("parse config");

        assert_eq!(config.effective_prefix(), Some("tw-"));
        assert_eq!(config.groups.len(), 1);
        assert_eq!(
            config.groups[0].rules[0].validators,
            vec![Validator::ArbitraryLength]
        );
        assert_eq!(config.conflicts["shadow"], vec!["glow".to_string()]);
    }

    #[test]
    fn empty_document_is_default() {
        let config = MergeConfig::from_toml_str("").expect("parse empty");
        assert_eq!(config, MergeConfig::default());
        assert_eq!(config.effective_prefix(), None);
    }

    #[test]
    fn rejects_unknown_validator() {
        let err = MergeConfig::from_toml_str(
            r#"
[[groups]]
id = "glow"
rules = [{ prefix = "glow", validators = ["sparkly"] }]
"#,
        )
        .expect_err("unknown validator");
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn apply_extends_table() {
        let mut table = GroupTable::builtin();
        let config = MergeConfig {
            groups: vec![GroupSpec {
                id: "glow".to_string(),
                rules: vec![RuleSpec {
                    prefix: "glow".to_string(),
                    values: vec!["sm".to_string()],
                    validators: Vec::new(),
                }],
                conflicts: vec!["shadow".to_string()],
            }],
            ..MergeConfig::default()
        };
        config.apply(&mut table).expect("apply config");
        assert_eq!(table.group_of("glow-sm"), Some("glow"));
        assert_eq!(table.conflicts_of("glow"), vec!["shadow"]);
    }

    #[test]
    fn apply_rejects_invalid_specs() {
        let mut table = GroupTable::builtin();
        let empty_id = MergeConfig {
            groups: vec![GroupSpec::default()],
            ..MergeConfig::default()
        };
        assert!(matches!(
            empty_id.apply(&mut table),
            Err(ConfigError::EmptyGroupId)
        ));

        let empty_rule = MergeConfig {
            groups: vec![GroupSpec {
                id: "glow".to_string(),
                rules: vec![RuleSpec {
                    prefix: "glow".to_string(),
                    ..RuleSpec::default()
                }],
                conflicts: Vec::new(),
            }],
            ..MergeConfig::default()
        };
        assert!(matches!(
            empty_rule.apply(&mut table),
            Err(ConfigError::EmptyRule { group }) if group == "glow"
        ));

        let mut unknown = MergeConfig::default();
        unknown
            .conflicts
            .insert("p".to_string(), vec!["nonexistent".to_string()]);
        assert!(matches!(
            unknown.apply(&mut table),
            Err(ConfigError::UnknownConflict { conflict, .. }) if conflict == "nonexistent"
        ));

        let mut missing_group = MergeConfig::default();
        missing_group
            .conflicts
            .insert("nonexistent".to_string(), vec!["p".to_string()]);
        assert!(matches!(
            missing_group.apply(&mut table),
            Err(ConfigError::UnknownGroup { group }) if group == "nonexistent"
        ));
    }
}
