//! Conditional class inputs and their flattening into tokens.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde_json::Value;

/// One argument to a class composition call.
///
/// Mirrors how callers pass conditional class logic: plain strings, nested
/// lists, and condition maps. Any shape without a meaningful class
/// contribution converts to [`ClassInput::Empty`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ClassInput<'a> {
    /// Contributes nothing.
    #[default]
    Empty,
    /// Whitespace-separated class tokens.
    Tokens(Cow<'a, str>),
    /// Nested inputs, flattened depth-first in order.
    List(Vec<ClassInput<'a>>),
    /// Condition map; a key contributes its tokens when its flag is set.
    Map(Vec<(Cow<'a, str>, bool)>),
}

impl<'a> ClassInput<'a> {
    /// Appends this input's tokens to `out` in encounter order.
    pub fn push_tokens<'s>(&'s self, out: &mut Vec<&'s str>) {
        match self {
            Self::Empty => {}
            Self::Tokens(classes) => out.extend(classes.split_whitespace()),
            Self::List(items) => {
                for item in items {
                    item.push_tokens(out);
                }
            }
            Self::Map(entries) => {
                for (classes, enabled) in entries {
                    if *enabled {
                        out.extend(classes.split_whitespace());
                    }
                }
            }
        }
    }

    /// Flattened tokens of this input.
    pub fn tokens(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.push_tokens(&mut out);
        out
    }

    /// Whether this input contributes no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens().is_empty()
    }

    /// Converts borrowed text into owned text.
    pub fn into_owned(self) -> ClassInput<'static> {
        match self {
            Self::Empty => ClassInput::Empty,
            Self::Tokens(classes) => ClassInput::Tokens(Cow::Owned(classes.into_owned())),
            Self::List(items) => {
                ClassInput::List(items.into_iter().map(ClassInput::into_owned).collect())
            }
            Self::Map(entries) => ClassInput::Map(
                entries
                    .into_iter()
                    .map(|(classes, enabled)| (Cow::Owned(classes.into_owned()), enabled))
                    .collect(),
            ),
        }
    }
}

impl<'a> From<&'a str> for ClassInput<'a> {
    fn from(classes: &'a str) -> Self {
        Self::Tokens(Cow::Borrowed(classes))
    }
}

impl<'a> From<&'a String> for ClassInput<'a> {
    fn from(classes: &'a String) -> Self {
        Self::Tokens(Cow::Borrowed(classes.as_str()))
    }
}

impl From<String> for ClassInput<'_> {
    fn from(classes: String) -> Self {
        Self::Tokens(Cow::Owned(classes))
    }
}

impl<'a> From<Cow<'a, str>> for ClassInput<'a> {
    fn from(classes: Cow<'a, str>) -> Self {
        Self::Tokens(classes)
    }
}

/// Bare booleans carry no class name (`cond && "x"` with a false `cond`).
impl From<bool> for ClassInput<'_> {
    fn from(_: bool) -> Self {
        Self::Empty
    }
}

impl From<()> for ClassInput<'_> {
    fn from(_: ()) -> Self {
        Self::Empty
    }
}

impl<'a, T> From<Option<T>> for ClassInput<'a>
where
    T: Into<ClassInput<'a>>,
{
    fn from(input: Option<T>) -> Self {
        input.map(Into::into).unwrap_or_default()
    }
}

impl<'a, T> From<Vec<T>> for ClassInput<'a>
where
    T: Into<ClassInput<'a>>,
{
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl<'a, T, const N: usize> From<[T; N]> for ClassInput<'a>
where
    T: Into<ClassInput<'a>>,
{
    fn from(items: [T; N]) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

/// Single conditional entry: `("font-bold", is_active)`.
impl<'a> From<(&'a str, bool)> for ClassInput<'a> {
    fn from((classes, enabled): (&'a str, bool)) -> Self {
        Self::Map(vec![(Cow::Borrowed(classes), enabled)])
    }
}

impl<'a, K> From<BTreeMap<K, bool>> for ClassInput<'a>
where
    K: Into<Cow<'a, str>>,
{
    fn from(entries: BTreeMap<K, bool>) -> Self {
        Self::Map(
            entries
                .into_iter()
                .map(|(classes, enabled)| (classes.into(), enabled))
                .collect(),
        )
    }
}

/// JSON class inputs: strings are tokens, arrays nest, objects are condition
/// maps using JavaScript truthiness. Numbers, booleans, and `null` are empty.
impl<'a> From<&'a Value> for ClassInput<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::String(classes) => Self::Tokens(Cow::Borrowed(classes.as_str())),
            Value::Array(items) => Self::List(items.iter().map(Into::into).collect()),
            Value::Object(entries) => Self::Map(
                entries
                    .iter()
                    .map(|(classes, flag)| (Cow::Borrowed(classes.as_str()), is_truthy(flag)))
                    .collect(),
            ),
            Value::Null | Value::Bool(_) | Value::Number(_) => Self::Empty,
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Flattens `inputs` and joins the tokens with single spaces, without any
/// conflict resolution.
pub fn class_list<'a, I>(inputs: I) -> String
where
    I: IntoIterator,
    I::Item: Into<ClassInput<'a>>,
{
    let inputs: Vec<ClassInput<'a>> = inputs.into_iter().map(Into::into).collect();
    let mut tokens = Vec::new();
    for input in &inputs {
        input.push_tokens(&mut tokens);
    }
    tokens.join(" ")
}
