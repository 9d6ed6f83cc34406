pub mod consts;
pub mod index;
pub mod model;
pub mod pipeline;
pub mod sample;
pub mod schema;
