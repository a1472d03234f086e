pub mod plans;
pub mod serve;
