// File: crates/chart-core/tests/generators.rs
// Purpose: Line, cardinal and area generators: gap handling and curve shape.

use chart_core::chart::{curve_line, range_area, revenue_line};
use chart_core::{
    AreaGenerator, BandScale, Curve, Dataset, LineGenerator, LinearScale, Observation, PathCommand, Point,
};

fn scales(data: &Dataset) -> (BandScale, LinearScale) {
    let x = BandScale::new(data.categories(), (0.0, 520.0)).padding(0.1);
    let y = LinearScale::new((0.0, 40.0), (340.0, 0.0));
    (x, y)
}

#[test]
fn dashed_line_breaks_at_undefined_point() {
    let data = Dataset::new(vec![
        Observation::new("Jan").with_primary(30.0, 0.0),
        Observation::new("Feb").with_primary(f64::NAN, 0.0),
        Observation::new("Mar").with_primary(25.0, 0.0),
    ]);
    let (x, y) = scales(&data);
    let line = revenue_line(data.observations(), &x, &y);

    assert_eq!(line.segments.len(), 2, "break at Feb");
    assert_eq!(line.curve, Curve::Linear);
    assert_eq!(line.segments[0], vec![Point::new(x.center("Jan").unwrap(), 85.0)]);
    assert_eq!(line.segments[1], vec![Point::new(x.center("Mar").unwrap(), 127.5)]);

    // lone vertices only move the pen
    assert_eq!(line.visible_segments(), 0);
    let cmds = line.to_commands();
    assert_eq!(cmds.len(), 2);
    assert!(cmds.iter().all(|c| matches!(c, PathCommand::MoveTo(_))));
}

#[test]
fn dashed_line_is_continuous_without_gaps() {
    let data = Dataset::sample();
    let (x, y) = scales(&data);
    let line = revenue_line(data.observations(), &x, &y);
    assert_eq!(line.segments.len(), 1);
    assert_eq!(line.segments[0].len(), 3);
    let cmds = line.to_commands();
    assert!(matches!(cmds[0], PathCommand::MoveTo(_)));
    assert!(cmds[1..].iter().all(|c| matches!(c, PathCommand::LineTo(_))));
}

#[test]
fn band_area_spans_all_defined_rows() {
    let data = Dataset::sample();
    let (x, y) = scales(&data);
    let area = range_area(data.observations(), &x, &y);

    assert_eq!(area.regions.len(), 1);
    let region = &area.regions[0];
    assert_eq!(region.upper.len(), 3);
    assert_eq!(region.lower.len(), 3);
    for (i, label) in ["Jan", "Feb", "Mar"].iter().enumerate() {
        // anchored at the band start, not the center
        let start = x.position(label).unwrap();
        assert_eq!(region.upper[i].x, start);
        assert_eq!(region.lower[i].x, start);
        assert!(region.upper[i].y < region.lower[i].y, "max above min on screen");
    }

    let cmds = area.to_commands();
    assert_eq!(cmds.len(), 7, "3 forward + 3 backward + close");
    assert_eq!(cmds[0], PathCommand::MoveTo(region.upper[0]));
    assert_eq!(cmds[3], PathCommand::LineTo(region.lower[2]));
    assert_eq!(cmds[5], PathCommand::LineTo(region.lower[0]));
    assert_eq!(cmds[6], PathCommand::Close);
}

#[test]
fn band_area_needs_both_bounds() {
    let data = Dataset::new(vec![
        Observation::new("A").with_range(1.0, 2.0),
        Observation::new("B").with_range(1.0, 2.0),
        Observation::new("C").with_range(f64::NAN, 2.0),
        Observation::new("D").with_range(1.0, 2.0),
        Observation::new("E").with_range(1.0, 2.0),
    ]);
    let (x, y) = scales(&data);
    let area = range_area(data.observations(), &x, &y);
    assert_eq!(area.regions.len(), 2);
    assert!(area.regions.iter().all(|r| r.upper.len() == 2));
}

#[test]
fn cardinal_curve_passes_through_every_vertex() {
    let pts = [(0.0, 10.0), (10.0, 0.0), (20.0, 10.0), (30.0, 5.0)];
    let line = LineGenerator::new(|p: &(f64, f64)| Some(p.0), |p: &(f64, f64)| Some(p.1))
        .curve(Curve::cardinal())
        .generate(&pts);
    let cmds = line.to_commands();
    assert_eq!(cmds.len(), 4);
    assert_eq!(cmds[0], PathCommand::MoveTo(Point::new(0.0, 10.0)));
    let ends: Vec<Point> = cmds[1..]
        .iter()
        .map(|c| match c {
            PathCommand::CubicTo(_, _, p) => *p,
            other => panic!("expected cubic, got {other:?}"),
        })
        .collect();
    assert_eq!(ends, vec![Point::new(10.0, 0.0), Point::new(20.0, 10.0), Point::new(30.0, 5.0)]);
}

#[test]
fn cardinal_tangents_are_smooth_at_inner_vertices() {
    let pts = [(0.0, 0.0), (10.0, 10.0), (20.0, 0.0), (30.0, 10.0)];
    let line = LineGenerator::new(|p: &(f64, f64)| Some(p.0), |p: &(f64, f64)| Some(p.1))
        .curve(Curve::cardinal())
        .generate(&pts);
    let cmds = line.to_commands();
    let (PathCommand::CubicTo(_, in_ctrl, joint), PathCommand::CubicTo(out_ctrl, _, _)) = (cmds[1], cmds[2]) else {
        panic!("expected cubic pieces");
    };
    // incoming and outgoing control points are mirrored around the joint
    assert!((joint.x - in_ctrl.x - (out_ctrl.x - joint.x)).abs() < 1e-9);
    assert!((joint.y - in_ctrl.y - (out_ctrl.y - joint.y)).abs() < 1e-9);

    // first control point sits on the first vertex (duplicated endpoint)
    let PathCommand::CubicTo(c1, _, _) = cmds[1] else { unreachable!() };
    assert_eq!(c1, Point::new(0.0, 0.0));
}

#[test]
fn cardinal_with_two_vertices_is_straight() {
    let pts = [(0.0, 0.0), (10.0, 10.0)];
    let line = LineGenerator::new(|p: &(f64, f64)| Some(p.0), |p: &(f64, f64)| Some(p.1))
        .curve(Curve::cardinal())
        .generate(&pts);
    assert_eq!(
        line.to_commands(),
        vec![PathCommand::MoveTo(Point::new(0.0, 0.0)), PathCommand::LineTo(Point::new(10.0, 10.0))]
    );
}

#[test]
fn curve_overlays_break_at_nan() {
    let data = Dataset::new(vec![
        Observation::new("Jan").with_curves(25.0, 15.0),
        Observation::new("Feb").with_curves(30.0, f64::NAN),
        Observation::new("Mar").with_curves(35.0, 25.0),
    ]);
    let (x, y) = scales(&data);
    let c1 = curve_line(data.observations(), &x, &y, |o| o.curve1);
    let c2 = curve_line(data.observations(), &x, &y, |o| o.curve2);
    assert_eq!(c1.segments.len(), 1);
    assert_eq!(c1.visible_segments(), 1);
    assert_eq!(c2.segments.len(), 2);
    assert_eq!(c2.visible_segments(), 0);
}

#[test]
fn area_generator_works_on_plain_tuples() {
    let rows = [(0.0, 1.0, 3.0), (1.0, 2.0, 4.0)];
    let area = AreaGenerator::new(
        |r: &(f64, f64, f64)| Some(r.0),
        |r: &(f64, f64, f64)| Some(r.1),
        |r: &(f64, f64, f64)| Some(r.2),
    )
    .generate(&rows);
    assert_eq!(area.regions[0].upper, vec![Point::new(0.0, 3.0), Point::new(1.0, 4.0)]);
    assert_eq!(area.regions[0].lower, vec![Point::new(0.0, 1.0), Point::new(1.0, 2.0)]);
}

#[test]
fn cardinal_area_curves_both_boundaries() {
    let rows = [(0.0, 1.0, 3.0), (1.0, 2.0, 5.0), (2.0, 1.0, 4.0)];
    let area = AreaGenerator::new(
        |r: &(f64, f64, f64)| Some(r.0),
        |r: &(f64, f64, f64)| Some(r.1),
        |r: &(f64, f64, f64)| Some(r.2),
    )
    .curve(Curve::cardinal())
    .generate(&rows);
    let cmds = area.to_commands();
    assert_eq!(cmds.len(), 7);
    assert_eq!(cmds[0], PathCommand::MoveTo(Point::new(0.0, 3.0)));
    assert!(matches!(cmds[2], PathCommand::CubicTo(_, _, p) if p == Point::new(2.0, 4.0)));
    assert_eq!(cmds[3], PathCommand::LineTo(Point::new(2.0, 1.0)));
    assert!(matches!(cmds[5], PathCommand::CubicTo(_, _, p) if p == Point::new(0.0, 1.0)));
    assert_eq!(cmds[6], PathCommand::Close);
}
