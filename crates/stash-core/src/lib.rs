pub mod models;

pub use models::user_record::UserRecord;
