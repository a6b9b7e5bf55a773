//! Interactive control widgets: buttons, tables, page controls and
//! progress bars.

mod align;
mod button;
mod page;
mod progress;
mod table;

pub use align::{HorizontalAlignment, VerticalAlignment};
pub use button::{Button, button};
pub use page::{PageBackgroundStyle, PageControl, page_control};
pub use progress::{ProgressBar, ProgressStyle, progress_bar};
pub use table::{AccessoryType, SeparatorStyle, TableCell, TableView, cell, table};
