pub mod model;
pub mod pricing;
pub mod repository;
pub mod validation;
