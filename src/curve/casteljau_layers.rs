use nalgebra::{allocator::Allocator, DefaultAllocator, DimName, OPoint};

use crate::misc::{lerp, FloatingPoint};

use super::BezierCurve;

/// Hierarchy of points produced by one de Casteljau evaluation
/// Layer 0 is the control polygon, each following layer has one point less,
/// and the last layer holds the single point on the curve.
/// Serialization is one way: the layers are only ever produced by an evaluation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(bound(serialize = "T: serde::Serialize, OPoint<T, D>: serde::Serialize"))
)]
pub struct CasteljauLayers<T: FloatingPoint, D: DimName>
where
    DefaultAllocator: Allocator<D>,
{
    parameter: T,
    layers: Vec<Vec<OPoint<T, D>>>,
}

impl<T: FloatingPoint, D: DimName> CasteljauLayers<T, D>
where
    DefaultAllocator: Allocator<D>,
{
    /// Build the layers by interpolating every adjacent pair of the previous layer
    /// `control_points` must not be empty.
    pub(crate) fn build(control_points: &[OPoint<T, D>], t: T) -> Self {
        let mut layers = vec![control_points.to_vec()];
        while layers[layers.len() - 1].len() > 1 {
            let prev = &layers[layers.len() - 1];
            let next = prev
                .windows(2)
                .map(|pair| lerp(&pair[0], &pair[1], t))
                .collect();
            layers.push(next);
        }
        Self {
            parameter: t,
            layers,
        }
    }

    /// The parameter the layers were evaluated at
    pub fn parameter(&self) -> T {
        self.parameter
    }

    pub fn layers(&self) -> &[Vec<OPoint<T, D>>] {
        &self.layers
    }

    /// Number of layers, the degree of the curve plus one
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Always `false`: there is at least the layer holding the curve point
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// The original control polygon (layer 0)
    pub fn control_polygon(&self) -> &[OPoint<T, D>] {
        &self.layers[0]
    }

    /// The construction layers strictly between the control polygon and the curve point
    pub fn intermediate(&self) -> &[Vec<OPoint<T, D>>] {
        if self.layers.len() < 2 {
            &[]
        } else {
            &self.layers[1..self.layers.len() - 1]
        }
    }

    /// The point on the curve
    pub fn point(&self) -> &OPoint<T, D> {
        &self.layers[self.layers.len() - 1][0]
    }

    /// Split the curve at the evaluated parameter
    /// The left curve is made of the first point of every layer,
    /// the right curve of the last point of every layer in reverse order.
    pub fn split(&self) -> (BezierCurve<T, D>, BezierCurve<T, D>) {
        let left = self
            .layers
            .iter()
            .map(|layer| layer[0].clone())
            .collect();
        let right = self
            .layers
            .iter()
            .rev()
            .map(|layer| layer[layer.len() - 1].clone())
            .collect();
        (
            BezierCurve::from_points_unchecked(left),
            BezierCurve::from_points_unchecked(right),
        )
    }

    pub fn into_layers(self) -> Vec<Vec<OPoint<T, D>>> {
        self.layers
    }
}
