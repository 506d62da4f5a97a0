//! Experiment sweep settings.

use crate::common::error::SimError;

#[derive(Debug, Clone, Copy)]
pub struct ExperimentSettings {
    /// Smallest batch size in the load sweep.
    pub min_requests: usize,
    /// Largest batch size in the load sweep.
    pub max_requests: usize,
    /// Sweep step between load levels.
    pub step: usize,
    /// Independent trials per load level.
    pub trials: usize,
    /// Base seed from which each trial derives its own stream.
    pub base_seed: u64,
}

impl Default for ExperimentSettings {
    fn default() -> Self {
        Self {
            min_requests: 50,
            max_requests: 150,
            step: 10,
            trials: 1000,
            base_seed: 0,
        }
    }
}

impl ExperimentSettings {
    pub fn validate(&self) -> Result<(), SimError> {
        if self.step == 0 {
            return Err(SimError::InvalidSettings("step must be positive".to_string()));
        }
        if self.min_requests == 0 {
            return Err(SimError::InvalidSettings(
                "load levels must be positive".to_string(),
            ));
        }
        if self.min_requests > self.max_requests {
            return Err(SimError::InvalidSettings(format!(
                "min load {} exceeds max load {}",
                self.min_requests, self.max_requests
            )));
        }
        if self.trials == 0 {
            return Err(SimError::InvalidSettings("trials must be positive".to_string()));
        }
        Ok(())
    }

    pub fn load_levels(&self) -> Vec<usize> {
        (self.min_requests..=self.max_requests)
            .step_by(self.step)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sweep_levels() {
        let settings = ExperimentSettings::default();
        let levels = settings.load_levels();
        assert_eq!(levels.len(), 11);
        assert_eq!(levels[0], 50);
        assert_eq!(levels[10], 150);
    }

    #[test]
    fn rejects_degenerate_settings() {
        let no_step = ExperimentSettings {
            step: 0,
            ..ExperimentSettings::default()
        };
        assert!(no_step.validate().is_err());

        let inverted = ExperimentSettings {
            min_requests: 200,
            ..ExperimentSettings::default()
        };
        assert!(inverted.validate().is_err());

        let no_trials = ExperimentSettings {
            trials: 0,
            ..ExperimentSettings::default()
        };
        assert!(no_trials.validate().is_err());
    }
}
