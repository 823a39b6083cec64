pub mod contrast;
pub mod resolve;
