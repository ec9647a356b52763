// ABOUTME: Terminal rendering of the pair session

pub mod entry_list;
pub mod help;
pub mod layout;
pub mod text;

pub use entry_list::{EntryList, EntryListComponent};
pub use help::HelpComponent;
pub use layout::LayoutComponent;
pub use text::render_text;
