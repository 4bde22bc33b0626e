//! Class merger selection for the primitive wrappers.

use std::rc::Rc;

use class_merge::{default_merger, ClassMerger, ConfigError, MergeConfig};
use leptos::*;

#[derive(Clone)]
/// Leptos context carrying a configured [`ClassMerger`].
pub struct ClassMergeContext(Rc<ClassMerger>);

impl ClassMergeContext {
    /// Wraps a configured merger for descendant wrappers.
    pub fn new(merger: ClassMerger) -> Self {
        Self(Rc::new(merger))
    }

    /// Configured merger.
    pub fn merger(&self) -> &ClassMerger {
        &self.0
    }
}

fn load_merger(raw: &str) -> Result<ClassMerger, ConfigError> {
    let config = MergeConfig::from_toml_str(raw)?;
    ClassMerger::with_config(&config)
}

#[component]
/// Installs a class merger extended by a TOML merge config for descendant wrappers.
///
/// An invalid config is logged and descendants keep the built-in table.
pub fn ClassMergeProvider(
    /// TOML merge config (utility prefix, extra groups, extra conflicts).
    #[prop(optional, into)]
    config: Option<String>,
    children: Children,
) -> impl IntoView {
    match config.as_deref().map(load_merger) {
        Some(Ok(merger)) => provide_context(ClassMergeContext::new(merger)),
        Some(Err(err)) => logging::warn!("class merge config load failed: {err}"),
        None => {}
    }
    children().into_view()
}

/// Merges `base` with an optional caller override using the active merger.
pub(crate) fn merge_class(base: &str, extra: Option<&str>) -> String {
    match use_context::<ClassMergeContext>() {
        Some(context) => context.merger().merge_override(base, extra),
        None => default_merger().merge_override(base, extra),
    }
}

/// Merges `base`, a variant class string, and an optional caller override.
pub(crate) fn merge_variant_class(base: &str, variant: &str, extra: Option<&str>) -> String {
    let inputs = [Some(base), Some(variant), extra];
    match use_context::<ClassMergeContext>() {
        Some(context) => context.merger().merge(inputs),
        None => default_merger().merge(inputs),
    }
}
