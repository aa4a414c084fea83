pub mod aggregate;
pub mod installation;
pub mod selection;

pub use aggregate::{AggregateRow, GroupKey, Measure, Totals};
pub use installation::{EnergyCategory, Installation, canton_display_name, category_display_name};
pub use selection::{
    ALL_OPTION, CantonFilter, CategoryFilter, NoData, Outcome, Selection, SelectionError,
};
