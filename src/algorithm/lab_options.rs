use nalgebra::convert;

use crate::{
    curve::bezier_curve::check_parameter,
    misc::{FloatingPoint, Result},
};

/// What to do with a curve parameter outside of [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParameterPolicy {
    /// Clamp the parameter into [0, 1]
    #[default]
    Clamp,
    /// Fail with `ParameterOutOfRange`
    Reject,
}

/// Parameters shared by the curve and surface algorithms
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LabOptions<T> {
    /// Parameter t of the de Casteljau construction
    pub parameter: T,
    /// Number of refinement passes for Chaikin and Doo-Sabin
    pub iterations: usize,
    /// Number of parameter steps used to sample a Bezier curve (`samples + 1` points)
    pub samples: usize,
    /// Number of parameter steps per direction used to sample a Bezier surface
    pub surface_steps: usize,
    pub parameter_policy: ParameterPolicy,
}

impl<T: FloatingPoint> Default for LabOptions<T> {
    fn default() -> Self {
        Self {
            parameter: convert(0.5),
            iterations: 3,
            samples: 100,
            surface_steps: 16,
            parameter_policy: ParameterPolicy::default(),
        }
    }
}

impl<T: FloatingPoint> LabOptions<T> {
    pub fn with_parameter(mut self, parameter: T) -> Self {
        self.parameter = parameter;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    pub fn with_surface_steps(mut self, surface_steps: usize) -> Self {
        self.surface_steps = surface_steps;
        self
    }

    pub fn with_parameter_policy(mut self, parameter_policy: ParameterPolicy) -> Self {
        self.parameter_policy = parameter_policy;
        self
    }

    /// The parameter after applying the policy
    /// NaN is rejected under both policies.
    pub fn resolved_parameter(&self) -> Result<T> {
        let t = self.parameter;
        match self.parameter_policy {
            ParameterPolicy::Clamp if t < T::zero() => Ok(T::zero()),
            ParameterPolicy::Clamp if t > T::one() => Ok(T::one()),
            _ => check_parameter(t).map(|_| t),
        }
    }
}
