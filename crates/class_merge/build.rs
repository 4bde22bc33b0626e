use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

const TABLE_FILE: &str = "utility_groups.toml";
const SCHEMA_VERSION: u32 = 1;

/// Validator names accepted in the table, paired with their `Validator` variant.
const VALIDATORS: &[(&str, &str)] = &[
    ("number", "Number"),
    ("integer", "Integer"),
    ("fraction", "Fraction"),
    ("percent", "Percent"),
    ("tshirt", "Tshirt"),
    ("any", "Any"),
    ("arbitrary-value", "ArbitraryValue"),
    ("arbitrary-length", "ArbitraryLength"),
    ("arbitrary-color", "ArbitraryColor"),
    ("arbitrary-number", "ArbitraryNumber"),
    ("arbitrary-image", "ArbitraryImage"),
    ("arbitrary-shadow", "ArbitraryShadow"),
];

#[derive(Debug, Deserialize)]
struct GroupTableFile {
    schema_version: u32,
    #[serde(rename = "group")]
    groups: Vec<GroupEntry>,
}

#[derive(Debug, Deserialize)]
struct GroupEntry {
    id: String,
    rules: Vec<RuleEntry>,
    #[serde(default)]
    conflicts: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RuleEntry {
    #[serde(default)]
    prefix: String,
    #[serde(default)]
    values: Vec<String>,
    #[serde(default)]
    validators: Vec<String>,
}

fn validator_variant(name: &str) -> Option<&'static str> {
    VALIDATORS
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, variant)| *variant)
}

fn validate(table: &GroupTableFile, path: &str) {
    if table.schema_version != SCHEMA_VERSION {
        panic!(
            "group table schema mismatch in {path}: expected {SCHEMA_VERSION} found {}",
            table.schema_version
        );
    }

    let mut ids = HashSet::new();
    for group in &table.groups {
        if group.id.is_empty() {
            panic!("empty group id in {path}");
        }
        if !ids.insert(group.id.as_str()) {
            panic!("duplicate group id `{}` in {path}", group.id);
        }
        if group.rules.is_empty() {
            panic!("group `{}` has no rules in {path}", group.id);
        }
        for rule in &group.rules {
            if rule.prefix.is_empty() && (rule.values.is_empty() || !rule.validators.is_empty()) {
                panic!(
                    "group `{}` has a standalone rule without plain values in {path}",
                    group.id
                );
            }
            if rule.values.is_empty() && rule.validators.is_empty() {
                panic!("group `{}` has a rule that matches nothing in {path}", group.id);
            }
            for name in &rule.validators {
                if validator_variant(name).is_none() {
                    panic!("group `{}` uses unknown validator `{name}` in {path}", group.id);
                }
            }
        }
    }

    for group in &table.groups {
        for conflict in &group.conflicts {
            if !ids.contains(conflict.as_str()) {
                panic!(
                    "group `{}` conflicts with undeclared group `{conflict}` in {path}",
                    group.id
                );
            }
        }
    }
}

fn render(table: &GroupTableFile) -> String {
    let mut out = String::from(
        "/// Build-time generated utility group table.\n\
pub(crate) static BUILTIN_GROUPS: &[GroupDef] = &[\n",
    );
    for group in &table.groups {
        out.push_str(&format!("    GroupDef {{\n        id: {:?},\n        rules: &[\n", group.id));
        for rule in &group.rules {
            let validators = rule
                .validators
                .iter()
                .filter_map(|name| validator_variant(name))
                .map(|variant| format!("Validator::{variant}"))
                .collect::<Vec<_>>()
                .join(", ");
            out.push_str(&format!(
                "            RuleDef {{ prefix: {:?}, values: &{:?}, validators: &[{validators}] }},\n",
                rule.prefix, rule.values
            ));
        }
        out.push_str(&format!(
            "        ],\n        conflicts: &{:?},\n    }},\n",
            group.conflicts
        ));
    }
    out.push_str("];\n");
    out
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join(TABLE_FILE);
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let table: GroupTableFile = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    validate(&table, TABLE_FILE);

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("utility_groups_generated.rs");
    fs::write(&out_file, render(&table))
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
