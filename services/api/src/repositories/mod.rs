//! Repositories for database operations

pub mod order;
pub mod product;
pub mod setting;
pub mod user;

pub use order::OrderRepository;
pub use product::ProductRepository;
pub use setting::SettingRepository;
pub use user::UserRepository;
