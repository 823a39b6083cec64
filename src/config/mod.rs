pub mod model;
pub mod theme;
