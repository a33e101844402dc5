//! Leptos widget library for the artisan marketplace front end.
//!
//! The crate owns the shared primitives (buttons, surfaces, menus, icons) and the widget family
//! built from them: [`Popover`], [`Dropdown`], [`DatePicker`] with its [`Calendar`], and
//! [`DataTable`]. Interaction logic lives in `market_ui_headless`; components here translate DOM
//! events into its actions and its effects back into callbacks, focus moves, and listeners.
//! Every component emits the stable `data-ui-*` DOM contract consumed by stylesheet layers.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod a11y;
pub mod clock;
mod icon;
mod primitives;
mod widgets;

use thiserror::Error;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    Badge, Button, ButtonSize, ButtonVariant, CheckboxField, Cluster, EmptyState, Heading,
    LayoutAlign, LayoutGap, LayoutPadding, MenuItem, MenuSurface, PaneHeader, Panel, Stack, Text,
    TextRole, TextTone,
};
pub use widgets::{
    display_sort_value, Calendar, DataTable, DatePicker, Dropdown, DropdownOption,
    DropdownVariant, Popover, PopoverTrigger, TableColumn,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} `{value}`")]
/// Returned when a string token does not name a variant of a props enum.
pub struct TokenParseError {
    kind: &'static str,
    value: String,
}

impl TokenParseError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Convenience imports for crates composing marketplace screens.
pub mod prelude {
    pub use crate::{
        Badge, Button, ButtonSize, ButtonVariant, Calendar, CheckboxField, Cluster, DataTable,
        DatePicker, Dropdown, DropdownOption, DropdownVariant, EmptyState, Heading, Icon,
        IconName, IconSize, LayoutAlign, LayoutGap, LayoutPadding, MenuItem, MenuSurface,
        PaneHeader, Panel, Popover, PopoverTrigger, Stack, TableColumn, Text, TextRole, TextTone,
    };
    pub use market_ui_headless::{
        ColumnAlign, DateFormat, DisabledDates, Locale, PickerValue, PickerVariant, Placement,
        SortDirection, SortState, SortStrategy, WeekStart,
    };
}
