//! Class composition with last-write-wins conflict resolution.

use std::collections::HashSet;
use std::sync::OnceLock;

use crate::config::{ConfigError, MergeConfig};
use crate::groups::GroupTable;
use crate::input::ClassInput;
use crate::token::parse_class;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum GroupKey<'a> {
    Table(usize),
    Property(&'a str),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ConflictKey<'a> {
    modifiers: String,
    group: GroupKey<'a>,
}

/// Composes class inputs into one class string.
///
/// Later tokens win over earlier tokens of the same utility group under the
/// same variants; unrecognised tokens always survive.
#[derive(Debug, Clone)]
pub struct ClassMerger {
    table: GroupTable,
    prefix: Option<String>,
}

impl Default for ClassMerger {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassMerger {
    /// Merger over the built-in utility group table.
    pub fn new() -> Self {
        Self {
            table: GroupTable::builtin(),
            prefix: None,
        }
    }

    /// Merger over the built-in table extended by `config`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when `config` declares invalid groups or conflicts.
    pub fn with_config(config: &MergeConfig) -> Result<Self, ConfigError> {
        let mut table = GroupTable::builtin();
        config.apply(&mut table)?;
        Ok(Self {
            table,
            prefix: config.effective_prefix().map(str::to_string),
        })
    }

    /// Utility group table used for classification.
    pub fn table(&self) -> &GroupTable {
        &self.table
    }

    /// Flattens, deduplicates, and resolves `inputs` into a class string.
    pub fn merge<'a, I>(&self, inputs: I) -> String
    where
        I: IntoIterator,
        I::Item: Into<ClassInput<'a>>,
    {
        let inputs: Vec<ClassInput<'a>> = inputs.into_iter().map(Into::into).collect();
        let mut tokens = Vec::new();
        for input in &inputs {
            input.push_tokens(&mut tokens);
        }
        self.resolve(&tokens)
    }

    /// Resolves a single whitespace-separated class string.
    pub fn merge_str(&self, classes: &str) -> String {
        let tokens: Vec<&str> = classes.split_whitespace().collect();
        self.resolve(&tokens)
    }

    /// Merges a fixed default style string with an optional caller override.
    pub fn merge_override(&self, base: &str, extra: Option<&str>) -> String {
        self.merge([Some(base), extra])
    }

    fn resolve(&self, tokens: &[&str]) -> String {
        let mut seen = HashSet::with_capacity(tokens.len());
        let mut claimed = HashSet::new();
        let mut kept = Vec::with_capacity(tokens.len());

        for &token in tokens.iter().rev() {
            if !seen.insert(token) {
                continue;
            }
            if let Some(key) = self.conflict_key(token) {
                if claimed.contains(&key) {
                    continue;
                }
                if let GroupKey::Table(group) = key.group {
                    for &other in self.table.conflicting(group) {
                        claimed.insert(ConflictKey {
                            modifiers: key.modifiers.clone(),
                            group: GroupKey::Table(other),
                        });
                    }
                }
                claimed.insert(key);
            }
            kept.push(token);
        }

        kept.reverse();
        kept.join(" ")
    }

    fn conflict_key<'t>(&self, token: &'t str) -> Option<ConflictKey<'t>> {
        let parsed = parse_class(token);
        let mut modifiers = parsed.variant_key();
        modifiers.push(':');
        if parsed.important {
            modifiers.push('!');
        }

        if let Some(property) = parsed.arbitrary_property() {
            return Some(ConflictKey {
                modifiers,
                group: GroupKey::Property(property),
            });
        }

        let (base, full) = match self.prefix.as_deref() {
            Some(prefix) => (
                parsed.base_without_postfix().strip_prefix(prefix)?,
                parsed.base.strip_prefix(prefix)?,
            ),
            None => (parsed.base_without_postfix(), parsed.base),
        };
        let group = self
            .table
            .classify(base)
            .or_else(|| (base != full).then(|| self.table.classify(full)).flatten())?;
        Some(ConflictKey {
            modifiers,
            group: GroupKey::Table(group),
        })
    }
}

/// Process-wide merger over the built-in table.
pub fn default_merger() -> &'static ClassMerger {
    static DEFAULT: OnceLock<ClassMerger> = OnceLock::new();
    DEFAULT.get_or_init(ClassMerger::new)
}

/// Composes `inputs` with the default merger.
///
/// ```
/// use class_merge::compose;
///
/// assert_eq!(compose(["rounded-sm p-2", "rounded-lg"]), "p-2 rounded-lg");
/// ```
pub fn compose<'a, I>(inputs: I) -> String
where
    I: IntoIterator,
    I::Item: Into<ClassInput<'a>>,
{
    default_merger().merge(inputs)
}

/// Composes heterogeneous class inputs with the default merger.
///
/// ```
/// use class_merge::cn;
///
/// let active = true;
/// let extra: Option<&str> = None;
/// assert_eq!(cn!("px-2 py-1", ("bg-accent", active), extra, "px-4"), "py-1 bg-accent px-4");
/// ```
#[macro_export]
macro_rules! cn {
    () => {
        ::std::string::String::new()
    };
    ($($input:expr),+ $(,)?) => {
        $crate::compose([$($crate::ClassInput::from($input)),+])
    };
}
