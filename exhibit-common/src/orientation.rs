//! Orientation-change detection
//!
//! The carousel's slide offsets do not survive a portrait/landscape flip, so
//! the page reloads whenever the orientation actually changes.

use tracing::info;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OrientationReloader {
    last: Option<bool>,
}

impl OrientationReloader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an orientation. Returns `true` when the page must reload.
    ///
    /// The first observation only sets the baseline.
    pub fn observe(&mut self, is_portrait: bool) -> bool {
        match self.last.replace(is_portrait) {
            None => false,
            Some(previous) if previous == is_portrait => false,
            Some(_) => {
                info!(
                    "Orientation changed to {}",
                    if is_portrait { "portrait" } else { "landscape" }
                );
                true
            }
        }
    }

    pub fn baseline(&self) -> Option<bool> {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reloads_only_on_flips() {
        let mut reloader = OrientationReloader::new();
        let reloads: Vec<usize> = [true, true, false, false, true]
            .into_iter()
            .enumerate()
            .filter(|(_, p)| reloader.observe(*p))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(reloads, vec![2, 4]);
    }

    #[test]
    fn test_first_observation_is_baseline() {
        let mut reloader = OrientationReloader::new();
        assert!(!reloader.observe(false));
        assert_eq!(reloader.baseline(), Some(false));
    }
}
