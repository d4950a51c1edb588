pub mod appeal;
pub mod claim;
pub mod contract;
pub mod key;
pub mod payment;
pub mod pricing;
pub mod provider;
pub mod quality;
pub mod risk;
pub mod summary;
pub mod variance;
