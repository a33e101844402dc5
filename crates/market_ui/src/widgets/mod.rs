//! Marketplace widgets built on the headless view-state in `market_ui_headless`.

mod date_picker;
mod dismiss;
mod dropdown;
mod popover;
mod table;

pub use date_picker::{Calendar, DatePicker};
pub use dropdown::{Dropdown, DropdownOption, DropdownVariant};
pub use popover::{Popover, PopoverTrigger};
pub use table::{display_sort_value, DataTable, TableColumn};
