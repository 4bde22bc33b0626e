//! Utility group classification table.
//!
//! A [`GroupTable`] maps utility class bases (the part after variants and
//! modifiers) to a utility group, and records which groups a winning token
//! overrides. The built-in table is generated from `utility_groups.toml` at
//! build time; [`crate::MergeConfig`] can extend it at runtime.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

include!(concat!(env!("OUT_DIR"), "/utility_groups_generated.rs"));

/// Static group definition emitted by the build script.
pub(crate) struct GroupDef {
    pub(crate) id: &'static str,
    pub(crate) rules: &'static [RuleDef],
    pub(crate) conflicts: &'static [&'static str],
}

/// Static rule definition emitted by the build script.
pub(crate) struct RuleDef {
    pub(crate) prefix: &'static str,
    pub(crate) values: &'static [&'static str],
    pub(crate) validators: &'static [Validator],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Value shapes a prefixed rule accepts after `<prefix>-`.
pub enum Validator {
    /// Unsigned decimal such as `4` or `1.5`.
    Number,
    /// Unsigned integer such as `50`.
    Integer,
    /// Integer fraction such as `1/2`.
    Fraction,
    /// Number followed by `%`.
    Percent,
    /// T-shirt size such as `sm`, `lg`, or `2xl`.
    Tshirt,
    /// Any non-empty value.
    Any,
    /// Any bracketed arbitrary value.
    ArbitraryValue,
    /// Bracketed length (`[10px]`, `[calc(100%-1rem)]`, `[length:var(--x)]`).
    ArbitraryLength,
    /// Bracketed color (`[#fff]`, `[rgb(0,0,0)]`, `[color:var(--x)]`).
    ArbitraryColor,
    /// Bracketed number (`[600]`, `[number:var(--x)]`).
    ArbitraryNumber,
    /// Bracketed image (`[url(/a.png)]`, `[linear-gradient(...)]`).
    ArbitraryImage,
    /// Bracketed box shadow (`[0_35px_60px_-15px_rgba(0,0,0,0.3)]`).
    ArbitraryShadow,
}

const ARBITRARY_LABELS: &[&str] = &[
    "any", "color", "family-name", "image", "length", "number", "percentage", "position", "shadow",
    "size", "url",
];

const LENGTH_UNITS: &[&str] = &[
    "px", "rem", "em", "%", "vh", "vw", "vmin", "vmax", "dvh", "dvw", "svh", "svw", "lvh", "lvw",
    "ch", "ex", "lh", "rlh", "cm", "mm", "in", "pt", "pc", "cqw", "cqh", "cqi", "cqb", "cqmin",
    "cqmax",
];

const LENGTH_FUNCTIONS: &[&str] = &["calc(", "min(", "max(", "clamp("];

const COLOR_FUNCTIONS: &[&str] = &[
    "rgb(", "rgba(", "hsl(", "hsla(", "hwb(", "lab(", "lch(", "oklab(", "oklch(", "color(",
    "color-mix(",
];

impl Validator {
    /// Returns whether `value` (the text after `<prefix>-`) has this shape.
    pub fn matches(self, value: &str) -> bool {
        match self {
            Self::Number => is_number(value),
            Self::Integer => is_integer(value),
            Self::Fraction => is_fraction(value),
            Self::Percent => value.strip_suffix('%').is_some_and(is_number),
            Self::Tshirt => is_tshirt(value),
            Self::Any => !value.is_empty(),
            Self::ArbitraryValue => arbitrary_inner(value).is_some(),
            Self::ArbitraryLength => arbitrary_matches(value, "length", is_length),
            Self::ArbitraryColor => arbitrary_matches(value, "color", is_color),
            Self::ArbitraryNumber => arbitrary_matches(value, "number", is_number),
            Self::ArbitraryImage => arbitrary_matches(value, "image", is_image),
            Self::ArbitraryShadow => arbitrary_matches(value, "shadow", is_shadow),
        }
    }
}

fn arbitrary_inner(value: &str) -> Option<&str> {
    value
        .strip_prefix('[')?
        .strip_suffix(']')
        .filter(|inner| !inner.is_empty())
}

fn arbitrary_matches(value: &str, label: &str, test: fn(&str) -> bool) -> bool {
    let Some(inner) = arbitrary_inner(value) else {
        return false;
    };
    match inner.split_once(':') {
        Some((found, _)) if ARBITRARY_LABELS.contains(&found) => {
            found == label || (label == "image" && found == "url")
        }
        _ => test(inner),
    }
}

fn is_integer(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|byte| byte.is_ascii_digit())
}

fn is_number(value: &str) -> bool {
    let mut digits = 0usize;
    let mut dots = 0usize;
    for byte in value.bytes() {
        match byte {
            b'0'..=b'9' => digits += 1,
            b'.' => dots += 1,
            _ => return false,
        }
    }
    digits > 0 && dots <= 1
}

fn is_fraction(value: &str) -> bool {
    value
        .split_once('/')
        .is_some_and(|(numerator, denominator)| is_integer(numerator) && is_integer(denominator))
}

fn is_tshirt(value: &str) -> bool {
    ["xs", "sm", "md", "lg", "xl"].iter().any(|size| {
        value
            .strip_suffix(size)
            .is_some_and(|scale| scale.is_empty() || is_number(scale))
    })
}

fn is_length(inner: &str) -> bool {
    if inner == "0" || LENGTH_FUNCTIONS.iter().any(|func| inner.starts_with(func)) {
        return true;
    }
    let unsigned = inner.strip_prefix('-').unwrap_or(inner);
    LENGTH_UNITS
        .iter()
        .any(|unit| unsigned.strip_suffix(unit).is_some_and(is_number))
}

fn is_color(inner: &str) -> bool {
    inner.starts_with('#') || COLOR_FUNCTIONS.iter().any(|func| inner.starts_with(func))
}

fn is_image(inner: &str) -> bool {
    inner.starts_with("url(") || inner.starts_with("image-set(") || inner.contains("gradient(")
}

fn is_shadow(inner: &str) -> bool {
    let offsets = inner.strip_prefix("inset_").unwrap_or(inner);
    let mut parts = offsets.split('_');
    let (Some(x), Some(y)) = (parts.next(), parts.next()) else {
        return false;
    };
    is_shadow_offset(x) && is_shadow_offset(y)
}

fn is_shadow_offset(part: &str) -> bool {
    let unsigned = part.strip_prefix('-').unwrap_or(part);
    if unsigned == "0" {
        return true;
    }
    let unit_start = unsigned
        .find(|ch: char| ch.is_ascii_alphabetic())
        .unwrap_or(unsigned.len());
    let (number, unit) = unsigned.split_at(unit_start);
    is_number(number) && !unit.is_empty() && unit.bytes().all(|byte| byte.is_ascii_alphabetic())
}

#[derive(Debug, Clone)]
struct Rule {
    group: usize,
    values: Vec<String>,
    validators: Vec<Validator>,
}

impl Rule {
    fn matches(&self, value: &str) -> bool {
        self.values.iter().any(|candidate| candidate == value)
            || self.validators.iter().any(|validator| validator.matches(value))
    }
}

#[derive(Debug, Clone, Default)]
/// Data-driven mapping from utility class bases to utility groups.
pub struct GroupTable {
    ids: Vec<String>,
    index: HashMap<String, usize>,
    standalone: HashMap<String, usize>,
    prefixed: HashMap<String, Vec<Rule>>,
    conflicts: Vec<Vec<usize>>,
}

impl GroupTable {
    /// Builds the table compiled from `utility_groups.toml`.
    pub fn builtin() -> Self {
        let mut table = Self::default();
        for def in BUILTIN_GROUPS {
            let group = table.ensure_group(def.id);
            for rule in def.rules {
                table.add_rule(
                    group,
                    rule.prefix,
                    rule.values.iter().map(|value| value.to_string()).collect(),
                    rule.validators.to_vec(),
                );
            }
        }
        for def in BUILTIN_GROUPS {
            for conflict in def.conflicts {
                if let (Some(group), Some(other)) = (table.position(def.id), table.position(conflict))
                {
                    table.add_conflict(group, other);
                }
            }
        }
        table
    }

    /// Number of groups in the table.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the table has no groups.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Whether a group with `id` is declared.
    pub fn contains_group(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Returns the group id a class base belongs to.
    ///
    /// `base` must already be stripped of variants, the important marker,
    /// and any negative sign; see [`crate::parse_class`].
    pub fn group_of(&self, base: &str) -> Option<&str> {
        self.classify(base).map(|group| self.ids[group].as_str())
    }

    /// Group ids overridden by a winning token of group `id`.
    pub fn conflicts_of(&self, id: &str) -> Vec<&str> {
        self.position(id)
            .map(|group| {
                self.conflicts[group]
                    .iter()
                    .map(|other| self.ids[*other].as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub(crate) fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub(crate) fn conflicting(&self, group: usize) -> &[usize] {
        &self.conflicts[group]
    }

    pub(crate) fn ensure_group(&mut self, id: &str) -> usize {
        if let Some(group) = self.position(id) {
            return group;
        }
        let group = self.ids.len();
        self.ids.push(id.to_string());
        self.index.insert(id.to_string(), group);
        self.conflicts.push(Vec::new());
        group
    }

    pub(crate) fn add_rule(
        &mut self,
        group: usize,
        prefix: &str,
        values: Vec<String>,
        validators: Vec<Validator>,
    ) {
        if prefix.is_empty() {
            for value in values {
                self.standalone.entry(value).or_insert(group);
            }
            return;
        }
        self.prefixed.entry(prefix.to_string()).or_default().push(Rule {
            group,
            values,
            validators,
        });
    }

    pub(crate) fn add_conflict(&mut self, group: usize, other: usize) {
        if group != other && !self.conflicts[group].contains(&other) {
            self.conflicts[group].push(other);
        }
    }

    pub(crate) fn classify(&self, base: &str) -> Option<usize> {
        if let Some(group) = self.standalone.get(base) {
            return Some(*group);
        }
        // Dashes inside an arbitrary value never split prefix from value.
        let search_end = base.find('[').unwrap_or(base.len());
        for (dash, _) in base[..search_end].rmatch_indices('-') {
            let (prefix, value) = (&base[..dash], &base[dash + 1..]);
            if prefix.is_empty() || value.is_empty() {
                continue;
            }
            let Some(rules) = self.prefixed.get(prefix) else {
                continue;
            };
            if let Some(rule) = rules.iter().find(|rule| rule.matches(value)) {
                return Some(rule.group);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(base: &str) -> Option<String> {
        GroupTable::builtin().group_of(base).map(str::to_string)
    }

    #[test]
    fn builtin_table_is_populated() {
        let table = GroupTable::builtin();
        assert!(!table.is_empty());
        assert!(table.contains_group("p"));
        assert!(table.contains_group("text-color"));
        assert_eq!(table.len(), BUILTIN_GROUPS.len());
    }

    #[test]
    fn keyword_groups_win_over_catch_all_groups() {
        assert_eq!(group("text-lg").as_deref(), Some("font-size"));
        assert_eq!(group("text-center").as_deref(), Some("text-alignment"));
        assert_eq!(group("text-red-500").as_deref(), Some("text-color"));
        assert_eq!(group("text-muted-foreground").as_deref(), Some("text-color"));
        assert_eq!(group("border-2").as_deref(), Some("border-w"));
        assert_eq!(group("border-dashed").as_deref(), Some("border-style"));
        assert_eq!(group("border-input").as_deref(), Some("border-color"));
    }

    #[test]
    fn longest_prefix_is_tried_first() {
        assert_eq!(group("border-t-2").as_deref(), Some("border-w-t"));
        assert_eq!(group("border-t-red-500").as_deref(), Some("border-color-t"));
        assert_eq!(group("inset-x-0").as_deref(), Some("inset-x"));
        assert_eq!(group("ring-offset-2").as_deref(), Some("ring-offset-w"));
        assert_eq!(group("ring-offset-background").as_deref(), Some("ring-offset-color"));
        assert_eq!(group("flex-col-reverse").as_deref(), Some("flex-direction"));
        assert_eq!(group("ease-in-out").as_deref(), Some("ease"));
    }

    #[test]
    fn standalone_classes_resolve_by_full_name() {
        assert_eq!(group("flex").as_deref(), Some("display"));
        assert_eq!(group("hidden").as_deref(), Some("display"));
        assert_eq!(group("border").as_deref(), Some("border-w"));
        assert_eq!(group("rounded").as_deref(), Some("rounded"));
        assert_eq!(group("space-x-reverse").as_deref(), Some("space-x-reverse"));
    }

    #[test]
    fn arbitrary_values_group_with_named_scale() {
        assert_eq!(group("px-[10px]").as_deref(), Some("px"));
        assert_eq!(group("w-[calc(100%-2rem)]").as_deref(), Some("w"));
        assert_eq!(group("text-[14px]").as_deref(), Some("font-size"));
        assert_eq!(group("text-[#333]").as_deref(), Some("text-color"));
        assert_eq!(group("translate-x-[-50%]").as_deref(), Some("translate-x"));
        assert_eq!(group("bg-[url(/hero.png)]").as_deref(), Some("bg-image"));
        assert_eq!(group("shadow-[0_35px_60px_-15px_rgba(0,0,0,0.3)]").as_deref(), Some("shadow"));
    }

    #[test]
    fn unknown_classes_have_no_group() {
        assert_eq!(group("animate-in"), None);
        assert_eq!(group("my-custom-widget"), None);
        assert_eq!(group("ui-button"), None);
        assert_eq!(group(""), None);
    }

    #[test]
    fn conflicts_are_recorded_per_group() {
        let table = GroupTable::builtin();
        let padding = table.conflicts_of("p");
        assert!(padding.contains(&"px"));
        assert!(padding.contains(&"pl"));
        assert!(table.conflicts_of("px").contains(&"pr"));
        assert!(table.conflicts_of("pl").is_empty());
        assert!(table.conflicts_of("missing").is_empty());
    }

    #[test]
    fn validators_accept_expected_shapes() {
        assert!(Validator::Number.matches("1.5"));
        assert!(!Validator::Number.matches("1.5.2"));
        assert!(Validator::Tshirt.matches("2xl"));
        assert!(!Validator::Tshirt.matches("full"));
        assert!(Validator::Fraction.matches("3/4"));
        assert!(Validator::Percent.matches("48%"));
        assert!(Validator::ArbitraryLength.matches("[length:var(--gap)]"));
        assert!(!Validator::ArbitraryLength.matches("[color:var(--gap)]"));
        assert!(Validator::ArbitraryColor.matches("[rgb(0,0,0)]"));
        assert!(!Validator::ArbitraryValue.matches("[]"));
    }
}
