use glam::Quat;

/// A background representation whose orientation must follow
/// environment rotation.
pub trait Skybox {
    /// Apply an incremental rotation.
    fn rotate(&mut self, delta: Quat);

    /// Current orientation.
    fn orientation(&self) -> Quat;
}

/// Skybox state reduced to its orientation, for renderers that read it
/// back each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyboxOrientation {
    orientation: Quat,
}

impl SkyboxOrientation {
    /// Skybox starting at `orientation`.
    #[must_use]
    pub fn new(orientation: Quat) -> Self {
        Self { orientation }
    }
}

impl Default for SkyboxOrientation {
    fn default() -> Self {
        Self::new(Quat::IDENTITY)
    }
}

impl Skybox for SkyboxOrientation {
    fn rotate(&mut self, delta: Quat) {
        self.orientation = (delta * self.orientation).normalize();
    }

    fn orientation(&self) -> Quat {
        self.orientation
    }
}
