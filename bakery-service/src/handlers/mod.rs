pub mod contact;
pub mod diagnostics;
pub mod health;
pub mod products;
pub mod root;

pub use contact::send_contact;
pub use diagnostics::test_database;
pub use health::{health_check, metrics_endpoint};
pub use products::{list_products, seed_products};
pub use root::read_root;
