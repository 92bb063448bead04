pub mod like_states;
pub mod sort_order;
