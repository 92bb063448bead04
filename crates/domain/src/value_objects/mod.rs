pub mod enums;
pub mod songs;
pub mod storage;
