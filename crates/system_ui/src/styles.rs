//! Default utility class strings for each component slot.
//!
//! Wrappers pass these to the class merger first and the caller's `class`
//! override last, so any utility in the override replaces the default of the
//! same group.

/// Backdrop behind dialog content.
pub const DIALOG_OVERLAY: &str = "fixed inset-0 z-50 bg-black/80 data-[state=open]:animate-in data-[state=closed]:animate-out data-[state=closed]:fade-out-0 data-[state=open]:fade-in-0";

/// Centered dialog panel.
pub const DIALOG_CONTENT: &str = "fixed left-[50%] top-[50%] z-50 grid w-full max-w-lg translate-x-[-50%] translate-y-[-50%] gap-4 border bg-background p-6 shadow-lg duration-200 data-[state=open]:animate-in data-[state=closed]:animate-out data-[state=closed]:fade-out-0 data-[state=open]:fade-in-0 data-[state=closed]:zoom-out-95 data-[state=open]:zoom-in-95 data-[state=closed]:slide-out-to-left-1/2 data-[state=closed]:slide-out-to-top-[48%] data-[state=open]:slide-in-from-left-1/2 data-[state=open]:slide-in-from-top-[48%] sm:rounded-lg";

/// Corner close button inside dialog and sheet panels.
pub const DIALOG_CLOSE: &str = "absolute right-4 top-4 rounded-sm opacity-70 ring-offset-background transition-opacity hover:opacity-100 focus:outline-none focus:ring-2 focus:ring-ring focus:ring-offset-2 disabled:pointer-events-none data-[state=open]:bg-accent data-[state=open]:text-muted-foreground";

/// Title and description stack.
pub const DIALOG_HEADER: &str = "flex flex-col space-y-1.5 text-center sm:text-left";

/// Action row.
pub const DIALOG_FOOTER: &str = "flex flex-col-reverse sm:flex-row sm:justify-end sm:space-x-2";

/// Dialog heading.
pub const DIALOG_TITLE: &str = "text-lg font-semibold leading-none tracking-tight";

/// Supporting dialog text.
pub const DIALOG_DESCRIPTION: &str = "text-sm text-muted-foreground";

/// Backdrop behind sheet content.
pub const SHEET_OVERLAY: &str = DIALOG_OVERLAY;

/// Edge-anchored sheet panel, before the side-specific classes.
pub const SHEET_CONTENT: &str = "fixed z-50 gap-4 bg-background p-6 shadow-lg transition ease-in-out data-[state=open]:animate-in data-[state=closed]:animate-out data-[state=closed]:duration-300 data-[state=open]:duration-500";

/// Sheet anchored to the top edge.
pub const SHEET_SIDE_TOP: &str = "inset-x-0 top-0 border-b data-[state=closed]:slide-out-to-top data-[state=open]:slide-in-from-top";

/// Sheet anchored to the right edge.
pub const SHEET_SIDE_RIGHT: &str = "inset-y-0 right-0 h-full w-3/4 border-l data-[state=closed]:slide-out-to-right data-[state=open]:slide-in-from-right sm:max-w-sm";

/// Sheet anchored to the bottom edge.
pub const SHEET_SIDE_BOTTOM: &str = "inset-x-0 bottom-0 border-t data-[state=closed]:slide-out-to-bottom data-[state=open]:slide-in-from-bottom";

/// Sheet anchored to the left edge.
pub const SHEET_SIDE_LEFT: &str = "inset-y-0 left-0 h-full w-3/4 border-r data-[state=closed]:slide-out-to-left data-[state=open]:slide-in-from-left sm:max-w-sm";

/// Sheet corner close button.
pub const SHEET_CLOSE: &str = "absolute right-4 top-4 rounded-sm opacity-70 ring-offset-background transition-opacity hover:opacity-100 focus:outline-none focus:ring-2 focus:ring-ring focus:ring-offset-2 disabled:pointer-events-none data-[state=open]:bg-secondary";

/// Sheet title and description stack.
pub const SHEET_HEADER: &str = "flex flex-col space-y-2 text-center sm:text-left";

/// Sheet action row.
pub const SHEET_FOOTER: &str = "flex flex-col-reverse sm:flex-row sm:justify-end sm:space-x-2";

/// Sheet heading.
pub const SHEET_TITLE: &str = "text-lg font-semibold text-foreground";

/// Supporting sheet text.
pub const SHEET_DESCRIPTION: &str = "text-sm text-muted-foreground";

/// Avatar frame.
pub const AVATAR: &str = "relative flex h-10 w-10 shrink-0 overflow-hidden rounded-full";

/// Avatar image.
pub const AVATAR_IMAGE: &str = "aspect-square h-full w-full";

/// Avatar placeholder shown until the image loads.
pub const AVATAR_FALLBACK: &str = "flex h-full w-full items-center justify-center rounded-full bg-muted";

/// Form label.
pub const LABEL: &str = "text-sm font-medium leading-none peer-disabled:cursor-not-allowed peer-disabled:opacity-70";
