pub mod category;
pub mod clock;
pub mod types;
