//! Styled dialog, sheet, avatar, and label wrappers.
//!
//! Every wrapper renders its part with a `data-slot` attribute naming the part
//! and a class string composed from the part's default style and the caller's
//! `class` override.

use leptos::*;

use crate::class_context::{merge_class, merge_variant_class};
use crate::styles;

mod avatar;
mod dialog;
mod label;
mod overlays;
mod sheet;

pub use avatar::{Avatar, AvatarFallback, AvatarImage, ImageLoadingStatus};
pub use dialog::{
    use_dialog, Dialog, DialogClose, DialogContent, DialogDescription, DialogFooter,
    DialogHeader, DialogOverlay, DialogPortal, DialogTitle, DialogTrigger,
};
pub use label::Label;
pub use overlays::OverlayState;
pub use sheet::{
    use_sheet, Sheet, SheetClose, SheetContent, SheetDescription, SheetFooter, SheetHeader,
    SheetOverlay, SheetPortal, SheetSide, SheetTitle, SheetTrigger,
};

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

pub(crate) fn state_token(open: bool) -> &'static str {
    if open {
        "open"
    } else {
        "closed"
    }
}

/// Renders a view tree to HTML for assertions on the DOM contract.
#[cfg(test)]
pub(crate) fn render_html<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    leptos::ssr::render_to_string(view).to_string()
}
