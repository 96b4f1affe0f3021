//! Test document builders.
//!
//! `create_catalog_document()` commits one instance of every catalog entity,
//! wired together through real directory pointers. Any new catalog type
//! should be added here.

#![allow(dead_code)]

use super::fixed_document;
use igesrust::entities::SplineType;
use igesrust::types::{Color, LineFontPattern};
use igesrust::*;
use std::f64::consts::{FRAC_PI_2, TAU};

/// Two lines and the composite curve joining them
pub fn create_profile_document() -> IgesDocument {
    let mut doc = fixed_document();
    let first = doc
        .add(Line::from_coords([0.0, 0.0, 0.0], [10.0, 0.0, 0.0]))
        .unwrap();
    let second = doc
        .add(Line::from_coords([10.0, 0.0, 0.0], [10.0, 5.0, 0.0]))
        .unwrap();
    doc.add(CompositeCurve::new([first, second])).unwrap();
    doc
}

/// Every catalog entity type, 21 commits in total
pub fn create_catalog_document() -> IgesDocument {
    let mut doc = fixed_document();
    doc.set_prolog(["Catalog test document", "Every entity type once"])
        .unwrap();

    doc.add(Point::new(3.5, 15.0, 0.0)).unwrap();

    let bottom = doc
        .add(Line::from_coords([0.0, 0.0, 0.0], [20.0, 0.0, 0.0]))
        .unwrap();
    let mut arc = CircularArc::new(
        Point3::new(20.0, 5.0, 0.0),
        Point3::new(20.0, 0.0, 0.0),
        Point3::new(20.0, 10.0, 0.0),
    );
    arc.common = arc.common.clone().with_color(Color::Red);
    let end = doc.add(arc).unwrap();
    let outline = doc.add(CompositeCurve::new([bottom, end])).unwrap();
    doc.add(Plane::new(outline)).unwrap();

    let polyline = doc
        .add(Polyline::new([
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(5.0, 0.0, 0.0),
            Point3::new(5.0, 5.0, 0.0),
        ]))
        .unwrap();

    let mut spline = SplineCurve::new(SplineType::Cubic, 2, 3);
    spline
        .add_segment(0.0, &[0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0])
        .unwrap();
    spline
        .add_segment(1.0, &[1.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0])
        .unwrap();
    doc.add(spline).unwrap();

    let axis = doc
        .add(Line::from_coords([0.0, 0.0, 0.0], [0.0, 0.0, 10.0]))
        .unwrap();
    let generatrix = doc
        .add(Line::from_coords([5.0, 0.0, 0.0], [3.0, 0.0, 10.0]))
        .unwrap();
    doc.add(RevolvedSurface::new(axis, generatrix)).unwrap();

    let circle = CircularArc::circle(Point3::new(30.0, 0.0, 0.0), 4.0);
    let start = circle.start;
    let directrix = doc.add(circle).unwrap();
    doc.add(TabulatedCylinder::extrude(directrix, start, Vector3::new(0.0, 0.0, 12.0)))
        .unwrap();

    let rotation = doc
        .add(TransformationMatrix::rotation_about(Vector3::z(), FRAC_PI_2).unwrap())
        .unwrap();

    let patch = doc
        .add(RationalBSplineSurface::bilinear([
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(10.0, 0.0, 0.0),
            Point3::new(0.0, 10.0, 0.0),
            Point3::new(10.0, 10.0, 0.0),
        ]))
        .unwrap();
    let on_surface = doc
        .add(CurveOnSurface::new(patch, None::<DirectoryPointer>, polyline))
        .unwrap();
    doc.add(TrimmedSurface::new(patch, on_surface)).unwrap();

    let mut sphere = Sphere::new(5.0, Point3::new(0.0, 0.0, 50.0));
    sphere.common = sphere.common.clone().with_transform(rotation);
    doc.add(sphere).unwrap();
    doc.add(Torus::new(12.0, 2.0, Point3::origin(), Vector3::z()))
        .unwrap();

    let group = doc
        .add(SubfigureDefinition::new("HOLE", [directrix]))
        .unwrap();
    doc.add(CircularArray::new(group, 6, Point3::origin(), 40.0, 0.0, TAU / 6.0))
        .unwrap();

    let mut note = GeneralNote::new([Value::from(1), Value::from("CATALOG")]);
    note.common = note.common.clone().with_line_font(LineFontPattern::Dashed);
    doc.add(note).unwrap();

    doc
}
