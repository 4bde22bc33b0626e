use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

static NEXT_OVERLAY_ID: AtomicUsize = AtomicUsize::new(1);

#[derive(Clone, Copy)]
/// Open state shared by the parts of one dialog or sheet.
///
/// The state is controlled when the root receives an `open` signal and
/// uncontrolled otherwise; in both cases every requested change is reported
/// through the root's `on_open_change` callback.
pub struct OverlayState {
    open: Signal<bool>,
    internal: RwSignal<bool>,
    controlled: bool,
    on_open_change: Option<Callback<bool>>,
    titles: RwSignal<usize>,
    descriptions: RwSignal<usize>,
    id: usize,
}

impl OverlayState {
    pub(crate) fn new(
        open: Option<MaybeSignal<bool>>,
        default_open: bool,
        on_open_change: Option<Callback<bool>>,
    ) -> Self {
        let internal = create_rw_signal(default_open);
        let controlled = open.is_some();
        let open = match open {
            Some(open) => Signal::derive(move || open.get()),
            None => internal.into(),
        };
        Self {
            open,
            internal,
            controlled,
            on_open_change,
            titles: create_rw_signal(0),
            descriptions: create_rw_signal(0),
            id: NEXT_OVERLAY_ID.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// Whether the overlay is open, tracked.
    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    /// Requests an open-state change. No-op when the state already matches.
    pub fn set_open(&self, open: bool) {
        if self.open.get_untracked() == open {
            return;
        }
        if !self.controlled {
            self.internal.set(open);
        }
        if let Some(on_open_change) = self.on_open_change {
            on_open_change.call(open);
        }
    }

    pub(crate) fn panel_id(&self) -> String {
        format!("overlay-{}", self.id)
    }

    pub(crate) fn title_id(&self) -> String {
        format!("overlay-{}-title", self.id)
    }

    pub(crate) fn description_id(&self) -> String {
        format!("overlay-{}-description", self.id)
    }

    /// Marks a title as mounted until the calling component is cleaned up.
    pub(crate) fn register_title(&self) {
        track_mount(self.titles);
    }

    /// Marks a description as mounted until the calling component is cleaned up.
    pub(crate) fn register_description(&self) {
        track_mount(self.descriptions);
    }

    /// Title id while a title is mounted.
    pub(crate) fn labelled_by(&self) -> Option<String> {
        (self.titles.get() > 0).then(|| self.title_id())
    }

    /// Description id while a description is mounted.
    pub(crate) fn described_by(&self) -> Option<String> {
        (self.descriptions.get() > 0).then(|| self.description_id())
    }
}

fn track_mount(count: RwSignal<usize>) {
    count.update(|count| *count += 1);
    on_cleanup(move || count.update(|count| *count = count.saturating_sub(1)));
}

/// `data-slot` names of the parts rendered by [`OverlayLayer`].
#[derive(Debug, Clone, Copy)]
pub(crate) struct LayerParts {
    pub(crate) overlay: &'static str,
    pub(crate) content: &'static str,
    pub(crate) close: &'static str,
}

#[component]
pub(crate) fn OverlayTrigger(
    state: OverlayState,
    part: &'static str,
    #[prop(into)] class: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=class
            data-slot=part
            data-state=move || state_token(state.is_open())
            aria-haspopup="dialog"
            aria-expanded=move || bool_token(state.is_open())
            aria-controls=state.panel_id()
            disabled=move || disabled.get()
            on:click=move |_| state.set_open(true)
            {..attrs}
        >
            {children()}
        </button>
    }
}

#[component]
pub(crate) fn OverlayClose(
    state: OverlayState,
    part: &'static str,
    #[prop(into)] class: Option<String>,
    #[prop(optional)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=class
            data-slot=part
            data-state=move || state_token(state.is_open())
            on:click=move |_| state.set_open(false)
            {..attrs}
        >
            {children()}
        </button>
    }
}

#[component]
/// Mounts children into the document body while the overlay is open.
pub(crate) fn OverlayPortal(
    state: OverlayState,
    part: &'static str,
    #[prop(optional)] attrs: Vec<(&'static str, Attribute)>,
    children: ChildrenFn,
) -> impl IntoView {
    let attrs = store_value(attrs);
    let children = store_value(children);
    view! {
        <Show when=move || state.is_open() fallback=|| ()>
            <Portal>
                <div data-slot=part style="display: contents" {..attrs.get_value()}>
                    {children.with_value(|children| children())}
                </div>
            </Portal>
        </Show>
    }
}

#[component]
pub(crate) fn OverlayBackdrop(
    state: OverlayState,
    part: &'static str,
    #[prop(into)] class: Option<String>,
    #[prop(optional)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    view! {
        <div
            class=class
            data-slot=part
            data-state=move || state_token(state.is_open())
            aria-hidden="true"
            on:click=move |_| state.set_open(false)
            {..attrs}
        ></div>
    }
}

#[component]
/// Modal panel. Closes the overlay on Escape while mounted.
pub(crate) fn OverlayPanel(
    state: OverlayState,
    part: &'static str,
    #[prop(into)] class: Option<String>,
    #[prop(default = None)] side: Option<&'static str>,
    #[prop(optional)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() || ev.key() != "Escape" {
            return;
        }
        if state.open.get_untracked() {
            ev.prevent_default();
            state.set_open(false);
        }
    });
    on_cleanup(move || escape_listener.remove());

    view! {
        <div
            id=state.panel_id()
            class=class
            data-slot=part
            data-state=move || state_token(state.is_open())
            data-side=side
            role="dialog"
            aria-modal="true"
            aria-labelledby=move || state.labelled_by()
            aria-describedby=move || state.described_by()
            tabindex="-1"
            {..attrs}
        >
            {children()}
        </div>
    }
}

#[component]
/// Backdrop and modal panel, with an optional corner close button.
///
/// Renders in place; callers wrap it in [`OverlayPortal`].
pub(crate) fn OverlayLayer(
    state: OverlayState,
    parts: LayerParts,
    overlay_class: String,
    content_class: String,
    close_class: String,
    #[prop(default = None)] side: Option<&'static str>,
    show_close_button: bool,
    #[prop(optional)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <OverlayBackdrop state=state part=parts.overlay class=overlay_class/>
        <OverlayPanel state=state part=parts.content class=content_class side=side attrs=attrs>
            {children()}
            {show_close_button
                .then(|| {
                    view! {
                        <OverlayClose state=state part=parts.close class=close_class>
                            <CloseGlyph/>
                        </OverlayClose>
                    }
                })}
        </OverlayPanel>
    }
}

#[component]
/// Corner close glyph used by dialog and sheet panels.
pub(crate) fn CloseGlyph() -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width="16"
            height="16"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class="h-4 w-4"
            aria-hidden="true"
        >
            <path d="M18 6 6 18"></path>
            <path d="m6 6 12 12"></path>
        </svg>
        <span class="sr-only">"Close"</span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TEST_PARTS: LayerParts = LayerParts {
        overlay: "test-overlay",
        content: "test-content",
        close: "test-close",
    };

    #[test]
    fn aria_references_follow_mounted_parts() {
        let _ = leptos::create_runtime();
        let state = OverlayState::new(None, true, None);
        assert_eq!(state.labelled_by(), None);
        assert_eq!(state.described_by(), None);

        state.register_title();
        assert_eq!(state.labelled_by(), Some(state.title_id()));
        assert_eq!(state.described_by(), None);

        state.register_description();
        assert_eq!(state.described_by(), Some(state.description_id()));
    }

    #[test]
    fn layer_renders_backdrop_panel_and_close() {
        let html = leptos::ssr::render_to_string(|| {
            let state = OverlayState::new(None, true, None);
            view! {
                <OverlayLayer
                    state=state
                    parts=TEST_PARTS
                    overlay_class="fixed inset-0".to_string()
                    content_class="grid p-6".to_string()
                    close_class="absolute right-4".to_string()
                    show_close_button=true
                >
                    "Body"
                </OverlayLayer>
            }
        })
        .to_string();

        assert!(html.contains(r#"data-slot="test-overlay""#));
        assert!(html.contains(r#"data-slot="test-content""#));
        assert!(html.contains(r#"data-slot="test-close""#));
        assert!(html.contains(r#"role="dialog""#));
        assert!(html.contains(r#"data-state="open""#));
        assert!(html.contains(r#"class="grid p-6""#));
        assert!(!html.contains("aria-labelledby"));
        assert!(!html.contains("data-side"));
        assert!(html.contains("Body"));
    }

    #[test]
    fn layer_omits_close_button_on_request() {
        let html = leptos::ssr::render_to_string(|| {
            let state = OverlayState::new(None, true, None);
            view! {
                <OverlayLayer
                    state=state
                    parts=TEST_PARTS
                    overlay_class=String::new()
                    content_class=String::new()
                    close_class=String::new()
                    side=Some("left")
                    show_close_button=false
                >
                    "Body"
                </OverlayLayer>
            }
        })
        .to_string();

        assert!(!html.contains(r#"data-slot="test-close""#));
        assert!(html.contains(r#"data-side="left""#));
    }
}
