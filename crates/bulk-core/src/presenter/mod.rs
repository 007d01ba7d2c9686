//! Pure view models for the dialog: status cells, progress bar, buttons and
//! the paginated item/result table.
//!
//! Nothing here holds run state; every function maps a [`bulk_model::RunSnapshot`]
//! (plus labels and pagination) to plain data a front end can draw.
mod buttons;
pub use buttons::{ActionButton, ButtonVariant};

mod column;
pub use column::Column;

mod pager;
pub use pager::Pager;

mod progress;
pub use progress::{ProgressVariant, ProgressView};

mod status;
pub use status::{ResultPresenter, StatusCell, Tone};

mod table;
pub use table::{TableModel, TableRow, TableView};
