pub mod activity_store;
pub mod seed;
