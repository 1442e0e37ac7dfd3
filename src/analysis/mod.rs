pub mod aggregate;
pub mod coverage;
pub mod decision;
pub mod scorer;
pub mod shrinkage;
