#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Formatters describing squaddies: status details, the action menu and the
//! roster of squaddies able to act in the current phase.

mod actions;
mod controllable;
mod details;

pub use actions::{format_action_point_cost, format_squaddie_actions};
pub use controllable::{
    format_controllable_squaddies, gather_controllable_squaddies, ControllableSquaddieEntry,
};
pub use details::{format_condition, format_squaddie_details};
