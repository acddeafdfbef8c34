pub mod entities;
pub mod repositories;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use repositories::CatalogRepository;
pub use services::{CatalogQueryVariables, QueryPlanner};
pub use value_objects::*;
