//! Syntactic decomposition of a single class token.

/// A class token split into variant prefixes, modifiers, and its utility base.
///
/// `data-[state=open]:hover:!-mt-2/50` parses to variants
/// `["data-[state=open]", "hover"]`, `important`, `negative`, base `mt-2/50`,
/// and postfix `50`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedClass<'a> {
    /// Variant prefixes in source order, without the trailing `:`.
    pub variants: Vec<&'a str>,
    /// Whether the token carries the `!` important marker.
    pub important: bool,
    /// Whether the utility base had a leading `-`.
    pub negative: bool,
    /// Utility base with variants, `!`, and `-` removed.
    pub base: &'a str,
    postfix_at: Option<usize>,
}

impl<'a> ParsedClass<'a> {
    /// Postfix modifier after a top-level `/` (`50` in `bg-black/50`).
    pub fn postfix(&self) -> Option<&'a str> {
        self.postfix_at.map(|at| &self.base[at + 1..])
    }

    /// Base with any postfix modifier removed.
    pub fn base_without_postfix(&self) -> &'a str {
        match self.postfix_at {
            Some(at) => &self.base[..at],
            None => self.base,
        }
    }

    /// Whether the base is an arbitrary property such as `[mask-type:alpha]`.
    pub fn arbitrary_property(&self) -> Option<&'a str> {
        let inner = self.base.strip_prefix('[')?.strip_suffix(']')?;
        let (property, value) = inner.split_once(':')?;
        let valid = !property.is_empty()
            && !value.is_empty()
            && property
                .bytes()
                .all(|byte| byte.is_ascii_alphanumeric() || byte == b'-');
        valid.then_some(property)
    }

    /// Variant prefixes normalised for conflict comparison.
    ///
    /// Plain variants commute, so runs of them are sorted; arbitrary
    /// `[...]` variants keep their position because selector order matters.
    pub fn variant_key(&self) -> String {
        let mut ordered = Vec::with_capacity(self.variants.len());
        let mut run: Vec<&'a str> = Vec::new();
        for variant in self.variants.iter().copied() {
            if variant.starts_with('[') {
                run.sort_unstable();
                ordered.append(&mut run);
                ordered.push(variant);
            } else {
                run.push(variant);
            }
        }
        run.sort_unstable();
        ordered.append(&mut run);
        ordered.join(":")
    }
}

/// Splits `class` into variants, modifiers, and base.
///
/// Separators inside `[...]` or `(...)` are ignored so arbitrary values and
/// variants such as `data-[state=open]` or `[&>*]` stay intact.
pub fn parse_class(class: &str) -> ParsedClass<'_> {
    let mut bracket_depth = 0usize;
    let mut paren_depth = 0usize;
    let mut variants = Vec::new();
    let mut segment_start = 0usize;

    for (idx, ch) in class.char_indices() {
        match ch {
            '[' => bracket_depth += 1,
            ']' => bracket_depth = bracket_depth.saturating_sub(1),
            '(' => paren_depth += 1,
            ')' => paren_depth = paren_depth.saturating_sub(1),
            ':' if bracket_depth == 0 && paren_depth == 0 => {
                variants.push(&class[segment_start..idx]);
                segment_start = idx + 1;
            }
            _ => {}
        }
    }

    let mut base = &class[segment_start..];
    let mut important = false;
    if let Some(stripped) = base.strip_prefix('!') {
        base = stripped;
        important = true;
    } else if let Some(stripped) = base.strip_suffix('!') {
        base = stripped;
        important = true;
    }

    let mut negative = false;
    if let Some(stripped) = base.strip_prefix('-') {
        if !stripped.is_empty() {
            base = stripped;
            negative = true;
        }
    }

    ParsedClass {
        variants,
        important,
        negative,
        base,
        postfix_at: top_level_slash(base),
    }
}

fn top_level_slash(base: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut found = None;
    for (idx, ch) in base.char_indices() {
        match ch {
            '[' | '(' => depth += 1,
            ']' | ')' => depth = depth.saturating_sub(1),
            '/' if depth == 0 => found = Some(idx),
            _ => {}
        }
    }
    found.filter(|idx| *idx > 0 && *idx + 1 < base.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_variants_outside_brackets() {
        let parsed = parse_class("data-[state=open]:hover:opacity-100");
        assert_eq!(parsed.variants, vec!["data-[state=open]", "hover"]);
        assert_eq!(parsed.base, "opacity-100");
        assert!(!parsed.important);
    }

    #[test]
    fn keeps_colons_inside_arbitrary_values() {
        let parsed = parse_class("[mask-type:luminance]");
        assert!(parsed.variants.is_empty());
        assert_eq!(parsed.arbitrary_property(), Some("mask-type"));

        let parsed = parse_class("md:bg-[url(data:image/png;base64,AA)]");
        assert_eq!(parsed.variants, vec!["md"]);
        assert_eq!(parsed.base, "bg-[url(data:image/png;base64,AA)]");
        assert_eq!(parsed.postfix(), None);
    }

    #[test]
    fn detects_important_and_negative_markers() {
        let parsed = parse_class("sm:!-mt-2");
        assert!(parsed.important);
        assert!(parsed.negative);
        assert_eq!(parsed.base, "mt-2");

        let trailing = parse_class("p-4!");
        assert!(trailing.important);
        assert_eq!(trailing.base, "p-4");
    }

    #[test]
    fn separates_postfix_modifier() {
        let parsed = parse_class("bg-black/80");
        assert_eq!(parsed.base_without_postfix(), "bg-black");
        assert_eq!(parsed.postfix(), Some("80"));

        let plain = parse_class("w-full");
        assert_eq!(plain.base_without_postfix(), "w-full");
        assert_eq!(plain.postfix(), None);
    }

    #[test]
    fn variant_key_sorts_plain_variants_only() {
        assert_eq!(parse_class("hover:focus:p-2").variant_key(), "focus:hover");
        assert_eq!(parse_class("focus:hover:p-2").variant_key(), "focus:hover");
        assert_eq!(
            parse_class("hover:[&>*]:focus:p-2").variant_key(),
            "hover:[&>*]:focus"
        );
        assert_eq!(parse_class("p-2").variant_key(), "");
    }

    #[test]
    fn lone_dash_is_not_negative() {
        let parsed = parse_class("-");
        assert!(!parsed.negative);
        assert_eq!(parsed.base, "-");
    }
}
