use std::fmt;

/// Logical buckets the service writes to. Audio blobs go to `songs`,
/// cover art to `images`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBucket {
    Songs,
    Images,
}

impl StorageBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageBucket::Songs => "songs",
            StorageBucket::Images => "images",
        }
    }
}

impl fmt::Display for StorageBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
