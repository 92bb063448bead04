pub mod like_toggle;
pub mod song_queries;
pub mod song_upload;
