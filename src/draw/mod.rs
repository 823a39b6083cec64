pub mod pen;
pub mod primitives;
pub mod ribbon;
pub mod styles;
pub mod symbols;
