//! Writes demonstration IGES files
//!
//! ```text
//! igesgen profile.igs --scene profile --set global.author="Jane Doe"
//! igesgen - --scene point --timestamp 20240101.000000
//! ```

use std::f64::consts::{FRAC_PI_2, TAU};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use igesrust::config::{apply_override, split_override};
use igesrust::entities::{PreferredRepresentation, SplineType};
use igesrust::{
    CircularArc, CircularArray, CompositeCurve, CurveOnSurface, DirectoryPointer, GeneralNote,
    IgesDocument, IgesSettings, Line, Plane, Point, Point3, Polyline, RationalBSplineSurface,
    RevolvedSurface, Sphere, SplineCurve, SubfigureDefinition, TabulatedCylinder, Torus,
    TransformationMatrix, TrimmedSurface, Value, Vector3,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Scene {
    /// A single point
    Point,
    /// Closed profile of lines and an arc, bounding a plane
    Profile,
    /// Surface of revolution and an extruded circle
    Revolve,
    /// Grouped circle repeated around a circular array
    Array,
    /// Every entity type the catalog offers
    Showcase,
}

#[derive(Debug, Parser)]
#[command(name = "igesgen", version, about = "Write demonstration IGES files")]
struct Cli {
    /// Output file, or `-` for standard output
    output: PathBuf,

    /// Geometry to write
    #[arg(long, value_enum, default_value_t = Scene::Profile)]
    scene: Scene,

    /// TOML settings file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override a single setting, e.g. `global.author=Jane`
    #[arg(long = "set", value_name = "KEY=VALUE")]
    overrides: Vec<String>,

    /// Fixed `YYYYMMDD.HHMMSS` timestamp for reproducible output
    #[arg(long)]
    timestamp: Option<String>,

    /// Log filter, takes precedence over RUST_LOG
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => IgesSettings::from_file(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => IgesSettings::default(),
    };
    init_logging(cli.log_level.as_deref(), &settings);

    let mut doc = IgesDocument::from_settings(&settings).context("applying settings")?;
    if let Some(global) = doc.global_mut() {
        for pair in &cli.overrides {
            let (key, value) = split_override(pair)?;
            apply_override(global, key, value).with_context(|| format!("applying --set {pair}"))?;
        }
        if let Some(stamp) = &cli.timestamp {
            global.set_timestamp(stamp.as_str());
        }
    }
    if doc.prolog().is_empty() {
        doc.add_prolog_line(format!("igesgen demonstration scene: {:?}", cli.scene))?;
    }

    build_scene(&mut doc, cli.scene).with_context(|| format!("building scene {:?}", cli.scene))?;
    info!(scene = ?cli.scene, entities = doc.entity_count(), "scene built");

    if cli.output.as_os_str() == "-" {
        doc.write_to_writer(std::io::stdout().lock())?;
    } else {
        doc.save(&cli.output)
            .with_context(|| format!("writing {}", cli.output.display()))?;
    }
    Ok(())
}

fn init_logging(level: Option<&str>, settings: &IgesSettings) {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level).ok(),
        None => EnvFilter::try_from_default_env().ok(),
    }
    .or_else(|| EnvFilter::try_new(&settings.logging.level).ok())
    .unwrap_or_else(|| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn build_scene(doc: &mut IgesDocument, scene: Scene) -> igesrust::Result<()> {
    match scene {
        Scene::Point => {
            doc.add(Point::new(3.5, 15.0, 0.0))?;
        }
        Scene::Profile => profile(doc)?,
        Scene::Revolve => revolve(doc)?,
        Scene::Array => array(doc)?,
        Scene::Showcase => {
            profile(doc)?;
            revolve(doc)?;
            array(doc)?;
            showcase(doc)?;
        }
    }
    Ok(())
}

/// Rectangle with a rounded end, bounding a plane
fn profile(doc: &mut IgesDocument) -> igesrust::Result<()> {
    let bottom = doc.add(Line::from_coords([0.0, 0.0, 0.0], [20.0, 0.0, 0.0]))?;
    let end = doc.add(CircularArc::new(
        Point3::new(20.0, 5.0, 0.0),
        Point3::new(20.0, 0.0, 0.0),
        Point3::new(20.0, 10.0, 0.0),
    ))?;
    let top = doc.add(Line::from_coords([20.0, 10.0, 0.0], [0.0, 10.0, 0.0]))?;
    let back = doc.add(Line::from_coords([0.0, 10.0, 0.0], [0.0, 0.0, 0.0]))?;
    let outline = doc.add(CompositeCurve::new([bottom, end, top, back]))?;
    doc.add(Plane::new(outline))?;

    let hole = doc.add(CircularArc::circle(Point3::new(8.0, 5.0, 0.0), 2.0))?;
    doc.add(Plane::new(hole).as_hole())?;
    Ok(())
}

fn revolve(doc: &mut IgesDocument) -> igesrust::Result<()> {
    let axis = doc.add(Line::from_coords([0.0, 0.0, 0.0], [0.0, 0.0, 10.0]))?;
    let generatrix = doc.add(Line::from_coords([5.0, 0.0, 0.0], [3.0, 0.0, 10.0]))?;
    doc.add(RevolvedSurface::new(axis, generatrix))?;

    let base = CircularArc::circle(Point3::new(30.0, 0.0, 0.0), 4.0);
    let start = base.start;
    let directrix = doc.add(base)?;
    doc.add(TabulatedCylinder::extrude(directrix, start, Vector3::new(0.0, 0.0, 12.0)))?;
    Ok(())
}

fn array(doc: &mut IgesDocument) -> igesrust::Result<()> {
    let hole = doc.add(CircularArc::circle(Point3::new(40.0, 0.0, 0.0), 1.5))?;
    let group = doc.add(SubfigureDefinition::new("BOLTHOLE", [hole]))?;
    doc.add(CircularArray::new(group, 6, Point3::new(0.0, 0.0, 0.0), 40.0, 0.0, TAU / 6.0))?;
    Ok(())
}

fn showcase(doc: &mut IgesDocument) -> igesrust::Result<()> {
    doc.add(Point::new(3.5, 15.0, 0.0))?;
    doc.add(Sphere::new(5.0, Point3::new(0.0, 0.0, 50.0)))?;
    doc.add(Torus::new(12.0, 2.0, Point3::new(0.0, 0.0, 70.0), Vector3::z()))?;

    let patch = doc.add(RationalBSplineSurface::bilinear([
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(10.0, 0.0, 0.0),
        Point3::new(0.0, 10.0, 0.0),
        Point3::new(10.0, 10.0, 2.0),
    ]))?;
    let boundary = doc.add(Polyline::new([
        Point3::new(1.0, 1.0, 0.0),
        Point3::new(9.0, 1.0, 0.0),
        Point3::new(9.0, 9.0, 0.0),
        Point3::new(1.0, 9.0, 0.0),
        Point3::new(1.0, 1.0, 0.0),
    ]))?;
    let on_surface = doc.add(
        CurveOnSurface::new(patch, None::<DirectoryPointer>, boundary).with_preferred(PreferredRepresentation::ModelSpace),
    )?;
    doc.add(TrimmedSurface::new(patch, on_surface))?;

    let mut spline = SplineCurve::new(SplineType::Cubic, 2, 3);
    spline.add_segment(0.0, &[0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0])?;
    spline.add_segment(1.0, &[1.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0])?;
    doc.add(spline)?;

    let rotate = doc.add(TransformationMatrix::rotation_about(Vector3::z(), FRAC_PI_2)?)?;
    let mut rotated = Line::from_coords([0.0, 0.0, 0.0], [5.0, 0.0, 0.0]);
    rotated.common = rotated.common.clone().with_transform(rotate);
    doc.add(rotated)?;

    doc.add(GeneralNote::new([
        Value::from(1),
        Value::from(11),
        Value::from(2.5),
        Value::from(3.0),
        Value::Default,
        Value::from(0.0),
        Value::from(0.0),
        Value::from(0),
        Value::from(0),
        Value::from(0.0),
        Value::from(0.0),
        Value::from(0.0),
        Value::from("IGESRUST NOTE"),
    ]))?;
    Ok(())
}
