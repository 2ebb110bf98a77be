//! Scheduling types: meetings and their agenda items.

mod agenda_item;
mod meeting;

pub use agenda_item::AgendaItem;
pub use meeting::Meeting;
