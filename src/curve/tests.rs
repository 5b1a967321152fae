use approx::assert_relative_eq;
use nalgebra::{Point2, Point3};

use crate::{
    curve::{BezierCurve2D, BezierCurve3D, Polyline2D},
    misc::GeometryError,
};

fn cubic() -> BezierCurve2D<f64> {
    BezierCurve2D::try_new(vec![
        Point2::new(100., 500.),
        Point2::new(200., 100.),
        Point2::new(500., 100.),
        Point2::new(700., 500.),
    ])
    .unwrap()
}

#[test]
fn quadratic_midpoint() {
    let curve = BezierCurve2D::try_new(vec![
        Point2::new(0., 0.),
        Point2::new(2., 0.),
        Point2::new(2., 2.),
    ])
    .unwrap();
    let layers = curve.casteljau(0.5).unwrap();
    assert_eq!(layers.point(), &Point2::new(1.5, 0.5));
    assert_eq!(layers.layers().last().map(|l| l.len()), Some(1));
    assert_eq!(curve.point_at(0.5).unwrap(), Point2::new(1.5, 0.5));
}

#[test]
fn layers_shrink_by_one() {
    let curve = cubic();
    let layers = curve.casteljau(0.3).unwrap();
    assert_eq!(layers.len(), 4);
    assert_eq!(layers.parameter(), 0.3);
    assert_eq!(layers.control_polygon(), curve.control_points());
    layers
        .layers()
        .iter()
        .enumerate()
        .for_each(|(i, layer)| assert_eq!(layer.len(), 4 - i));
    assert_eq!(layers.intermediate().len(), 2);
}

#[test]
fn end_points_interpolated() {
    let curve = cubic();
    assert_eq!(curve.casteljau(0.).unwrap().point(), &Point2::new(100., 500.));
    assert_eq!(curve.casteljau(1.).unwrap().point(), &Point2::new(700., 500.));
}

#[test]
fn single_point_curve() {
    let curve = BezierCurve2D::try_new(vec![Point2::new(3., 4.)]).unwrap();
    assert_eq!(curve.degree(), 0);
    let layers = curve.casteljau(0.7).unwrap();
    assert_eq!(layers.len(), 1);
    assert!(!layers.is_empty());
    assert!(layers.intermediate().is_empty());
    assert_eq!(layers.point(), &Point2::new(3., 4.));
    assert_eq!(curve.sample(3).unwrap(), vec![Point2::new(3., 4.); 4]);
}

#[test]
fn casteljau_matches_bernstein() {
    let curve = BezierCurve3D::try_new(
        (0..7)
            .map(|i| {
                let x = i as f64;
                Point3::new(x, (x * 1.3).sin() * 5., x * x - 3.)
            })
            .collect(),
    )
    .unwrap();
    for step in 0..=20 {
        let t = step as f64 / 20.;
        let a = curve.point_at(t).unwrap();
        let b = curve.bernstein_point_at(t).unwrap();
        assert_relative_eq!(a, b, epsilon = 1e-10);
    }
}

#[test]
fn bernstein_extrapolates() {
    // a line extrapolates linearly
    let curve = BezierCurve2D::try_new(vec![Point2::new(0., 0.), Point2::new(1., 2.)]).unwrap();
    assert_relative_eq!(
        curve.bernstein_point_at(2.).unwrap(),
        Point2::new(2., 4.),
        epsilon = 1e-12
    );
}

#[test]
fn parameter_out_of_range() {
    let curve = cubic();
    assert!(matches!(
        curve.casteljau(1.5),
        Err(GeometryError::ParameterOutOfRange(_))
    ));
    assert!(matches!(
        curve.point_at(-0.1),
        Err(GeometryError::ParameterOutOfRange(_))
    ));
    assert!(curve.casteljau(f64::NAN).is_err());
}

#[test]
fn sample_regular_parameters() {
    let curve = cubic();
    let samples = curve.sample(100).unwrap();
    assert_eq!(samples.len(), 101);
    assert_eq!(samples[0], Point2::new(100., 500.));
    assert_eq!(samples[100], Point2::new(700., 500.));
    assert_relative_eq!(samples[25], curve.point_at(0.25).unwrap(), epsilon = 1e-12);
    assert!(matches!(
        curve.sample(0),
        Err(GeometryError::ParameterOutOfRange(_))
    ));
}

#[test]
fn degree_from_leading_points() {
    let points = cubic().control_points().to_vec();
    let quadratic = BezierCurve2D::try_with_degree(&points, 2).unwrap();
    assert_eq!(quadratic.control_points(), &points[..3]);
    let cubic = BezierCurve2D::try_with_degree(&points, 3).unwrap();
    assert_eq!(cubic.degree(), 3);
    assert_eq!(
        BezierCurve2D::try_with_degree(&points[..2], 2),
        Err(GeometryError::InvalidControlInput {
            required: 3,
            actual: 2
        })
    );
    assert!(BezierCurve2D::<f64>::try_new(vec![]).is_err());
}

#[test]
fn split_at_parameter() {
    let curve = cubic();
    let t = 0.4;
    let (left, right) = curve.casteljau(t).unwrap().split();
    assert_eq!(left.degree(), 3);
    assert_eq!(right.degree(), 3);
    assert_eq!(left.control_points()[0], curve.control_points()[0]);
    assert_eq!(right.control_points()[3], curve.control_points()[3]);
    for step in 0..=10 {
        let s = step as f64 / 10.;
        assert_relative_eq!(
            left.point_at(s).unwrap(),
            curve.point_at(s * t).unwrap(),
            epsilon = 1e-9
        );
        assert_relative_eq!(
            right.point_at(s).unwrap(),
            curve.point_at(t + s * (1. - t)).unwrap(),
            epsilon = 1e-9
        );
    }
}

#[test]
fn polyline_round_trip() {
    let curve = cubic();
    let polyline = curve.control_polygon();
    assert_eq!(polyline.len(), 4);
    let back: BezierCurve2D<f64> = polyline.into();
    assert_eq!(back, curve);

    let polyline = Polyline2D::try_new(vec![Point2::new(1., 1.)]).unwrap();
    assert_eq!(polyline.len(), 1);
    assert!(!polyline.is_empty());
    let point = BezierCurve2D::from(polyline);
    assert_eq!(point.degree(), 0);
}

#[test]
fn cast_to_f32() {
    let curve = cubic().cast::<f32>();
    assert_eq!(curve.point_at(1.).unwrap(), Point2::new(700_f32, 500.));
}
