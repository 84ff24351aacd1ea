//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the item detail card from plain props; the detail page
//! owns state and passes callbacks down.

pub mod item_actions;
pub mod item_detail_card;
pub mod rating_stars;
pub mod specification_list;
