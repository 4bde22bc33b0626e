use super::overlays::{
    LayerParts, OverlayBackdrop, OverlayClose, OverlayLayer, OverlayPortal, OverlayState,
    OverlayTrigger,
};
use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Viewport edge a sheet slides in from.
pub enum SheetSide {
    /// Top edge, full width.
    Top,
    /// Right edge, three quarters wide.
    Right,
    /// Bottom edge, full width.
    Bottom,
    /// Left edge, three quarters wide.
    Left,
}

impl Default for SheetSide {
    fn default() -> Self {
        Self::Right
    }
}

impl SheetSide {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }

    pub(crate) fn class(self) -> &'static str {
        match self {
            Self::Top => styles::SHEET_SIDE_TOP,
            Self::Right => styles::SHEET_SIDE_RIGHT,
            Self::Bottom => styles::SHEET_SIDE_BOTTOM,
            Self::Left => styles::SHEET_SIDE_LEFT,
        }
    }
}

#[derive(Clone, Copy)]
struct SheetContext(OverlayState);

/// Open state of the enclosing [`Sheet`].
///
/// # Panics
///
/// Panics if called outside a [`Sheet`].
pub fn use_sheet() -> OverlayState {
    use_context::<SheetContext>()
        .expect("sheet parts must be rendered inside Sheet")
        .0
}

#[component]
/// Sheet root. Owns the open state shared by its parts and renders no element.
pub fn Sheet(
    /// Controlled open state. When set, the sheet only reports changes.
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
    provide_context(SheetContext(OverlayState::new(
        open,
        default_open,
        on_open_change,
    )));
    children().into_view()
}

#[component]
/// Button that opens the enclosing sheet.
pub fn SheetTrigger(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <OverlayTrigger
            state=use_sheet()
            part="sheet-trigger"
            class=class
            disabled=disabled
            attrs=attrs
        >
            {children()}
        </OverlayTrigger>
    }
}

#[component]
/// Mounts its children into the document body while the sheet is open.
pub fn SheetPortal(
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <OverlayPortal state=use_sheet() part="sheet-portal" attrs=attrs>
            {children()}
        </OverlayPortal>
    }
}

#[component]
/// Dimmed backdrop; clicking it closes the sheet.
pub fn SheetOverlay(
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let class = merge_class(styles::SHEET_OVERLAY, class.as_deref());
    view! { <OverlayBackdrop state=use_sheet() part="sheet-overlay" class=class attrs=attrs/> }
}

const SHEET_LAYER: LayerParts = LayerParts {
    overlay: "sheet-overlay",
    content: "sheet-content",
    close: "sheet-close",
};

#[component]
/// Edge-anchored sheet panel, rendered in a portal over its own overlay.
///
/// The side classes are applied after the base panel classes and before the
/// caller's `class`.
pub fn SheetContent(
    #[prop(optional)] side: SheetSide,
    #[prop(optional, into)] class: Option<String>,
    #[prop(default = true)] show_close_button: bool,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: ChildrenFn,
) -> impl IntoView {
    let class = store_value(class);
    let attrs = store_value(attrs);
    let children = store_value(children);

    view! {
        <OverlayPortal state=use_sheet() part="sheet-portal">
            <SheetContentBody
                side=side
                class=class.get_value()
                show_close_button=show_close_button
                attrs=attrs.get_value()
            >
                {children.with_value(|children| children())}
            </SheetContentBody>
        </OverlayPortal>
    }
}

#[component]
/// Overlay and panel of [`SheetContent`], rendered in place.
pub(crate) fn SheetContentBody(
    side: SheetSide,
    #[prop(into)] class: Option<String>,
    show_close_button: bool,
    #[prop(optional)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <OverlayLayer
            state=use_sheet()
            parts=SHEET_LAYER
            overlay_class=merge_class(styles::SHEET_OVERLAY, None)
            content_class=merge_variant_class(styles::SHEET_CONTENT, side.class(), class.as_deref())
            close_class=merge_class(styles::SHEET_CLOSE, None)
            side=Some(side.token())
            show_close_button=show_close_button
            attrs=attrs
        >
            {children()}
        </OverlayLayer>
    }
}

#[component]
/// Button that closes the enclosing sheet.
pub fn SheetClose(
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <OverlayClose state=use_sheet() part="sheet-close" class=class attrs=attrs>
            {children()}
        </OverlayClose>
    }
}

#[component]
/// Title and description stack.
pub fn SheetHeader(
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_class(styles::SHEET_HEADER, class.as_deref())
            data-slot="sheet-header"
            {..attrs}
        >
            {children()}
        </div>
    }
}

#[component]
/// Action row.
pub fn SheetFooter(
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_class(styles::SHEET_FOOTER, class.as_deref())
            data-slot="sheet-footer"
            {..attrs}
        >
            {children()}
        </div>
    }
}

#[component]
/// Sheet heading; labels the sheet panel while mounted.
pub fn SheetTitle(
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let state = use_sheet();
    state.register_title();
    view! {
        <h2
            id=state.title_id()
            class=merge_class(styles::SHEET_TITLE, class.as_deref())
            data-slot="sheet-title"
            {..attrs}
        >
            {children()}
        </h2>
    }
}

#[component]
/// Supporting text; describes the sheet panel while mounted.
pub fn SheetDescription(
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let state = use_sheet();
    state.register_description();
    view! {
        <p
            id=state.description_id()
            class=merge_class(styles::SHEET_DESCRIPTION, class.as_deref())
            data-slot="sheet-description"
            {..attrs}
        >
            {children()}
        </p>
    }
}
