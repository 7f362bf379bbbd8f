//! Ratatui widgets for the settings TUI

mod help_bar;
mod row_list;
mod search_bar;

pub use help_bar::{HelpBar, KeyHint, hints_for};
pub use row_list::RowList;
pub use search_bar::SearchBar;
