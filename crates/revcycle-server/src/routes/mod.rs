pub mod appeals;
pub mod demo;
pub mod health;
pub mod payers;
pub mod pricing;
pub mod quality;
pub mod records;
pub mod settings;
pub mod summary;
pub mod uploads;
pub mod variances;
