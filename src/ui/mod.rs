pub mod result_grid;
pub mod search_input;
pub mod status;
pub mod theme;
