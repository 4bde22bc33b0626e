//! Styled Leptos wrappers for dialog, sheet, avatar, and label.
//!
//! Each wrapper renders one part of a small accessible primitive, tags it with
//! a stable `data-slot` attribute, and composes its default utility classes
//! with the caller's `class` override through [`class_merge`], so conflicting
//! utilities in the override replace the defaults.
//!
//! Wrap an application in [`ClassMergeProvider`] to extend the utility group
//! table (for example with a class prefix); wrappers outside a provider use the
//! built-in table.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod class_context;
mod primitives;
pub mod styles;

pub use class_context::{ClassMergeContext, ClassMergeProvider};
pub use primitives::{
    use_dialog, use_sheet, Avatar, AvatarFallback, AvatarImage, Dialog, DialogClose,
    DialogContent, DialogDescription, DialogFooter, DialogHeader, DialogOverlay, DialogPortal,
    DialogTitle, DialogTrigger, ImageLoadingStatus, Label, OverlayState, Sheet, SheetClose,
    SheetContent, SheetDescription, SheetFooter, SheetHeader, SheetOverlay, SheetPortal,
    SheetSide, SheetTitle, SheetTrigger,
};

/// Convenience imports for application crates rendering the wrappers.
pub mod prelude {
    pub use crate::{
        Avatar, AvatarFallback, AvatarImage, ClassMergeProvider, Dialog, DialogClose,
        DialogContent, DialogDescription, DialogFooter, DialogHeader, DialogOverlay,
        DialogPortal, DialogTitle, DialogTrigger, Label, Sheet, SheetClose, SheetContent,
        SheetDescription, SheetFooter, SheetHeader, SheetOverlay, SheetPortal, SheetSide,
        SheetTitle, SheetTrigger,
    };
    pub use class_merge::{cn, compose};
}
