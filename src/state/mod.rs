//! State - GPUI Entity State Modules

pub mod pane_state;
