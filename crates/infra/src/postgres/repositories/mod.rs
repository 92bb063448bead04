pub mod liked_songs;
pub mod songs;
