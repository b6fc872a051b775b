//! Reusable UI components

mod component_list;
mod health_label;
mod nav_link;
mod table;

pub use component_list::ComponentList;
pub use health_label::HealthLabel;
pub use nav_link::NavLink;
pub use table::Table;
