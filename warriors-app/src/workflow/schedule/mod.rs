pub mod round_robin;
pub mod scheduling;
pub mod swiss;
