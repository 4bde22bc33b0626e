use super::overlays::{
    LayerParts, OverlayBackdrop, OverlayClose, OverlayLayer, OverlayPortal, OverlayState,
    OverlayTrigger,
};
use super::*;

#[derive(Clone, Copy)]
struct DialogContext(OverlayState);

/// Open state of the enclosing [`Dialog`].
///
/// # Panics
///
/// Panics if called outside a [`Dialog`].
pub fn use_dialog() -> OverlayState {
    use_context::<DialogContext>()
        .expect("dialog parts must be rendered inside Dialog")
        .0
}

#[component]
/// Dialog root. Owns the open state shared by its parts and renders no element.
pub fn Dialog(
    /// Controlled open state. When set, the dialog only reports changes.
    #[prop(optional, into)]
    open: Option<MaybeSignal<bool>>,
    /// Initial open state when uncontrolled.
    #[prop(optional)]
    default_open: bool,
    /// Called with each requested open-state change.
    #[prop(optional, into)]
    on_open_change: Option<Callback<bool>>,
    children: Children,
) -> impl IntoView {
    provide_context(DialogContext(OverlayState::new(
        open,
        default_open,
        on_open_change,
    )));
    children().into_view()
}

#[component]
/// Button that opens the enclosing dialog.
pub fn DialogTrigger(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <OverlayTrigger
            state=use_dialog()
            part="dialog-trigger"
            class=class
            disabled=disabled
            attrs=attrs
        >
            {children()}
        </OverlayTrigger>
    }
}

#[component]
/// Mounts its children into the document body while the dialog is open.
pub fn DialogPortal(
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <OverlayPortal state=use_dialog() part="dialog-portal" attrs=attrs>
            {children()}
        </OverlayPortal>
    }
}

#[component]
/// Dimmed backdrop; clicking it closes the dialog.
pub fn DialogOverlay(
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let class = merge_class(styles::DIALOG_OVERLAY, class.as_deref());
    view! { <OverlayBackdrop state=use_dialog() part="dialog-overlay" class=class attrs=attrs/> }
}

const DIALOG_LAYER: LayerParts = LayerParts {
    overlay: "dialog-overlay",
    content: "dialog-content",
    close: "dialog-close",
};

#[component]
/// Dialog panel, rendered in a portal over its own overlay.
///
/// Includes a corner close button unless `show_close_button` is `false`.
pub fn DialogContent(
    #[prop(optional, into)] class: Option<String>,
    #[prop(default = true)] show_close_button: bool,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: ChildrenFn,
) -> impl IntoView {
    let class = store_value(class);
    let attrs = store_value(attrs);
    let children = store_value(children);

    view! {
        <OverlayPortal state=use_dialog() part="dialog-portal">
            <DialogContentBody
                class=class.get_value()
                show_close_button=show_close_button
                attrs=attrs.get_value()
            >
                {children.with_value(|children| children())}
            </DialogContentBody>
        </OverlayPortal>
    }
}

#[component]
/// Overlay and panel of [`DialogContent`], rendered in place.
pub(crate) fn DialogContentBody(
    #[prop(into)] class: Option<String>,
    show_close_button: bool,
    #[prop(optional)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <OverlayLayer
            state=use_dialog()
            parts=DIALOG_LAYER
            overlay_class=merge_class(styles::DIALOG_OVERLAY, None)
            content_class=merge_class(styles::DIALOG_CONTENT, class.as_deref())
            close_class=merge_class(styles::DIALOG_CLOSE, None)
            show_close_button=show_close_button
            attrs=attrs
        >
            {children()}
        </OverlayLayer>
    }
}

#[component]
/// Button that closes the enclosing dialog.
pub fn DialogClose(
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <OverlayClose state=use_dialog() part="dialog-close" class=class attrs=attrs>
            {children()}
        </OverlayClose>
    }
}

#[component]
/// Title and description stack.
pub fn DialogHeader(
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_class(styles::DIALOG_HEADER, class.as_deref())
            data-slot="dialog-header"
            {..attrs}
        >
            {children()}
        </div>
    }
}

#[component]
/// Action row.
pub fn DialogFooter(
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_class(styles::DIALOG_FOOTER, class.as_deref())
            data-slot="dialog-footer"
            {..attrs}
        >
            {children()}
        </div>
    }
}

#[component]
/// Dialog heading; labels the dialog panel while mounted.
pub fn DialogTitle(
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let state = use_dialog();
    state.register_title();
    view! {
        <h2
            id=state.title_id()
            class=merge_class(styles::DIALOG_TITLE, class.as_deref())
            data-slot="dialog-title"
            {..attrs}
        >
            {children()}
        </h2>
    }
}

#[component]
/// Supporting text; describes the dialog panel while mounted.
pub fn DialogDescription(
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let state = use_dialog();
    state.register_description();
    view! {
        <p
            id=state.description_id()
            class=merge_class(styles::DIALOG_DESCRIPTION, class.as_deref())
            data-slot="dialog-description"
            {..attrs}
        >
            {children()}
        </p>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::render_html;
    use class_merge::default_merger;
    use pretty_assertions::assert_eq;

    #[test]
    fn uncontrolled_dialog_tracks_requests() {
        let _ = leptos::create_runtime();
        let changes = create_rw_signal(Vec::new());
        let state = OverlayState::new(
            None,
            false,
            Some(Callback::new(move |open| changes.update(|log| log.push(open)))),
        );

        assert!(!state.is_open());
        state.set_open(true);
        assert!(state.is_open());
        state.set_open(true);
        state.set_open(false);
        assert!(!state.is_open());
        assert_eq!(changes.get_untracked(), vec![true, false]);
    }

    #[test]
    fn controlled_dialog_only_reports_requests() {
        let _ = leptos::create_runtime();
        let open = create_rw_signal(false);
        let changes = create_rw_signal(Vec::new());
        let state = OverlayState::new(
            Some(open.into()),
            true,
            Some(Callback::new(move |next| changes.update(|log| log.push(next)))),
        );

        assert!(!state.is_open());
        state.set_open(true);
        assert!(!state.is_open());
        assert_eq!(changes.get_untracked(), vec![true]);

        open.set(true);
        assert!(state.is_open());
    }

    #[test]
    fn dialog_part_ids_are_distinct() {
        let _ = leptos::create_runtime();
        let first = OverlayState::new(None, false, None);
        let second = OverlayState::new(None, false, None);
        assert_ne!(first.panel_id(), second.panel_id());
        assert_ne!(first.title_id(), first.description_id());
    }

    #[test]
    fn content_override_replaces_default_width() {
        let _ = leptos::create_runtime();
        let class = merge_class(styles::DIALOG_CONTENT, Some("max-w-3xl p-0"));
        assert!(class.ends_with("max-w-3xl p-0"));
        assert!(!class.contains("max-w-lg"));
        assert!(!class.contains(" p-6"));
        assert!(class.contains("sm:rounded-lg"));
    }

    #[test]
    fn title_renders_slot_id_and_merged_class() {
        let html = render_html(|| {
            view! {
                <Dialog>
                    <DialogTitle class="text-xl" attr:data-testid="profile-title">
                        "Edit profile"
                    </DialogTitle>
                </Dialog>
            }
        });
        let class = default_merger().merge_override(styles::DIALOG_TITLE, Some("text-xl"));

        assert!(html.contains(r#"data-slot="dialog-title""#));
        assert!(html.contains(&format!(r#"class="{class}""#)));
        assert!(!class.contains("text-lg"));
        assert!(html.contains(r#"id="overlay-"#));
        assert!(html.contains(r#"data-testid="profile-title""#));
        assert!(html.contains("Edit profile"));
    }

    #[test]
    fn trigger_reflects_closed_state_and_forwards_attrs() {
        let html = render_html(|| {
            view! {
                <Dialog>
                    <DialogTrigger attr:id="open-profile">"Open"</DialogTrigger>
                </Dialog>
            }
        });

        assert!(html.contains(r#"data-slot="dialog-trigger""#));
        assert!(html.contains(r#"data-state="closed""#));
        assert!(html.contains(r#"aria-expanded="false""#));
        assert!(html.contains(r#"id="open-profile""#));
        assert!(!html.contains(r#"data-slot="dialog""#));
    }

    #[test]
    fn open_content_renders_overlay_panel_and_close() {
        let html = render_html(|| {
            view! {
                <Dialog default_open=true>
                    <DialogContentBody class="max-w-3xl".to_string() show_close_button=true>
                        <DialogDescription>"Changes apply on save."</DialogDescription>
                    </DialogContentBody>
                </Dialog>
            }
        });

        assert!(html.contains(r#"data-slot="dialog-overlay""#));
        assert!(html.contains(r#"data-slot="dialog-content""#));
        assert!(html.contains(r#"data-slot="dialog-close""#));
        assert!(html.contains(r#"data-slot="dialog-description""#));
        assert!(html.contains(r#"data-state="open""#));
        assert!(html.contains(r#"role="dialog""#));
        assert!(html.contains("max-w-3xl"));
        assert!(!html.contains("max-w-lg"));
    }

    #[test]
    fn header_and_footer_slots() {
        let html = render_html(|| {
            view! {
                <Dialog>
                    <DialogHeader class="gap-2">"Header"</DialogHeader>
                    <DialogFooter>"Footer"</DialogFooter>
                </Dialog>
            }
        });

        assert!(html.contains(r#"data-slot="dialog-header""#));
        assert!(html.contains(r#"data-slot="dialog-footer""#));
        assert!(html.contains(&format!(
            r#"class="{}""#,
            default_merger().merge_override(styles::DIALOG_HEADER, Some("gap-2"))
        )));
    }
}
