//! Terminal UI components: sidebar and detail pane layout.

pub mod layout;
pub mod sidebar;

pub use sidebar::{FilterKeyResult, Sidebar, SidebarContext, SidebarState};
