//! Headless view-state for the marketplace widget family.
//!
//! Every widget in `market_ui` keeps its interaction logic here as plain data plus pure
//! transition functions: overlays, hover debouncing, dropdown selection, calendar grids, date
//! constraints, and table sort/selection. Nothing in this crate touches the DOM, so each
//! transition can be exercised without a renderer.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod async_guard;
pub mod calendar;
pub mod constraint;
pub mod controlled;
pub mod date_picker;
pub mod dropdown;
pub mod format;
pub mod hover;
pub mod overlay;
pub mod placement;
pub mod table;

pub use async_guard::{RequestGuard, RequestTicket};
pub use calendar::{
    month_grid, DayCell, MonthGrid, MonthView, WeekStart, GRID_CELLS, GRID_COLUMNS,
};
pub use constraint::{DateConstraint, DisabledDates};
pub use controlled::{ControlMode, Controllable};
pub use date_picker::{
    reduce_date_picker, DatePickerAction, DatePickerEffect, DatePickerState, PickerValue,
    PickerVariant,
};
pub use dropdown::{
    reduce_dropdown, DropdownAction, DropdownEffect, DropdownItem, DropdownState, HighlightMove,
};
pub use format::{
    format_date, month_title, weekday_labels, DateFormat, FormatError, Locale, LocaleError,
    PickerLabels,
};
pub use hover::{
    HoverEffect, HoverEvent, HoverIntent, TimerToken, DEFAULT_HIDE_DELAY, DEFAULT_SHOW_DELAY,
};
pub use overlay::{
    reduce_overlay, CloseReason, DismissOptions, Key, ListenerChange, OverlayAction,
    OverlayState, OverlayTransition,
};
pub use placement::{Placement, PlacementAlign, PlacementParseError, PlacementSide};
pub use table::{
    compare_sort_values, duplicate_keys, resolve_body, sorted_indices, ColumnAlign,
    ColumnVisibility, SelectAllState, SelectionSet, SortDirection, SortState, SortStrategy,
    SortValue, TableBody, DEFAULT_SKELETON_ROWS,
};
