pub mod backend;
pub mod composite;
pub mod cpu;
pub mod fingerprint;
pub mod ops;
pub mod surface;
pub mod text;
