pub mod postgres;
pub mod storages;
