// One file per widget; each is a stateless function of (state, Ui) that
// reports changes back to the caller and keeps nothing between frames.
pub mod button_group;
pub mod slider_item;
pub mod switch_item;

mod tests;
