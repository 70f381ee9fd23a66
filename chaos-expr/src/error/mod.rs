pub mod kind;

pub use chaos_error::Error;
