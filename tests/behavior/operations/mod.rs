pub mod cancel;
pub mod failure;
