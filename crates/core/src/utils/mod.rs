pub mod ids;

pub use ids::validate_id;
