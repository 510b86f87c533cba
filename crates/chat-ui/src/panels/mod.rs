pub mod conversation;
pub mod sidebar;
