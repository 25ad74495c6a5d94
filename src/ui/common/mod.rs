//! Common reusable UI components

pub mod dropdown;
pub mod form;
pub mod message;

pub use dropdown::{Dropdown, DropdownAlign, DropdownItem};
pub use form::FormField;
pub use message::Banner;
