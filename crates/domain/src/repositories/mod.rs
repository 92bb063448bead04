pub mod liked_songs;
pub mod songs;
pub mod storage;
