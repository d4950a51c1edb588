pub mod commercial;
pub mod generic;
pub mod medicaid;
pub mod medicare;
