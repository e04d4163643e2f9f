// TUI building blocks for the CareerFit assessment: reusable components,
// screen widgets, keybindings, and the top-level event loop.

pub mod components;
pub mod keymap;
pub mod screens;
pub mod ui;
