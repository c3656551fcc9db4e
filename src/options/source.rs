use std::cell::RefCell;

use glam::Vec3;

use super::{InteractionOptions, Options};

/// Read-only view of the configuration the interactor consults per event.
pub trait OptionSource {
    /// Whether rotation is constrained to azimuth around [`up_axis`].
    ///
    /// [`up_axis`]: OptionSource::up_axis
    fn turntable_enabled(&self) -> bool;

    /// Unit vector of the scene's up direction.
    fn up_axis(&self) -> Vec3;
}

impl OptionSource for Options {
    fn turntable_enabled(&self) -> bool {
        self.interaction.turntable
    }

    fn up_axis(&self) -> Vec3 {
        self.interaction.up.to_vec3()
    }
}

/// Shared, mutable options as held by an application.
///
/// Reads fall back to the defaults if the cell is mutably borrowed at the
/// time of the event.
impl OptionSource for RefCell<Options> {
    fn turntable_enabled(&self) -> bool {
        self.try_borrow().map_or_else(
            |_| {
                log::warn!("options busy; using default turntable mode");
                InteractionOptions::default().turntable
            },
            |opts| opts.turntable_enabled(),
        )
    }

    fn up_axis(&self) -> Vec3 {
        self.try_borrow().map_or_else(
            |_| {
                log::warn!("options busy; using default up axis");
                InteractionOptions::default().up.to_vec3()
            },
            |opts| opts.up_axis(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::UpAxis;

    #[test]
    fn reads_interaction_section() {
        let mut opts = Options::default();
        opts.interaction.turntable = false;
        opts.interaction.up = UpAxis::NegZ;
        assert!(!opts.turntable_enabled());
        assert_eq!(opts.up_axis(), Vec3::NEG_Z);
    }

    #[test]
    fn refcell_source_sees_later_mutations() {
        let cell = RefCell::new(Options::default());
        assert!(cell.turntable_enabled());
        cell.borrow_mut().interaction.turntable = false;
        assert!(!cell.turntable_enabled());
    }

    #[test]
    fn refcell_source_falls_back_while_borrowed() {
        let cell = RefCell::new(Options::default());
        let mut guard = cell.borrow_mut();
        guard.interaction.up = UpAxis::PosX;
        assert_eq!(cell.up_axis(), Vec3::Y);
        drop(guard);
        assert_eq!(cell.up_axis(), Vec3::X);
    }
}
