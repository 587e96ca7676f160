pub mod basemaps;
pub mod bounds;
pub mod models;
pub mod names;
pub mod viewport;
