pub mod backup;
pub mod bulk;
pub mod catalog;
pub mod dispatch;
pub mod plan;
pub mod roadmap;
pub mod schema;
pub mod shared;
pub mod technology;
pub mod transfer;
