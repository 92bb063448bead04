use uuid::Uuid;

/// Collision-resistant token minted once per upload run. It namespaces the
/// object keys so two uploads of songs with the same title never collide,
/// and a resubmission after a partial failure never collides with the
/// failed run's leftovers.
#[cfg_attr(test, mockall::automock)]
pub trait UploadTokenGenerator: Send + Sync {
    fn generate(&self) -> String;
}

#[derive(Debug, Default)]
pub struct UuidTokenGenerator;

impl UploadTokenGenerator for UuidTokenGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
