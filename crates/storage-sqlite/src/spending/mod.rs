mod model;
mod repository;

pub use model::SpendRecordDB;
pub use repository::SpendingRepository;
