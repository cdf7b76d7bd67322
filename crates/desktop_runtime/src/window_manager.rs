//! Geometry helpers shared by the desktop reducer.

use crate::model::{ContainerBounds, DragSession, Point, ResizeSession, Size};

/// Clamps a dragged window origin so `keep_visible` of it stays inside `container`.
///
/// When the container is narrower than the kept region the upper bound collapses to zero.
pub fn clamp_drag_position(position: Point, container: ContainerBounds, keep_visible: Size) -> Point {
    let max_x = (container.width - keep_visible.width).max(0.0);
    let max_y = (container.height - keep_visible.height).max(0.0);
    Point {
        x: position.x.clamp(0.0, max_x),
        y: position.y.clamp(0.0, max_y),
    }
}

/// Window origin for a drag session at `pointer`, before clamping.
pub fn drag_target(session: &DragSession, pointer: Point) -> Point {
    Point {
        x: pointer.x - (session.pointer_origin.x - session.window_origin.x),
        y: pointer.y - (session.pointer_origin.y - session.window_origin.y),
    }
}

/// Applies a resize session at `pointer` and returns the new origin and size.
///
/// Each dimension is floored at `min_size`. West and north edges move the origin by the amount
/// the size actually changed, so the opposite edge stays put.
pub fn resize_geometry(session: &ResizeSession, pointer: Point, min_size: Size) -> (Point, Size) {
    let dx = pointer.x - session.pointer_origin.x;
    let dy = pointer.y - session.pointer_origin.y;
    let edge = session.edge;
    let start = session.size_origin;
    let mut position = session.position_origin;
    let mut size = start;

    if edge.moves_east() {
        size.width = (start.width + dx).max(min_size.width);
    }
    if edge.moves_west() {
        size.width = (start.width - dx).max(min_size.width);
        position.x = session.position_origin.x + (start.width - size.width);
    }
    if edge.moves_south() {
        size.height = (start.height + dy).max(min_size.height);
    }
    if edge.moves_north() {
        size.height = (start.height - dy).max(min_size.height);
        position.y = session.position_origin.y + (start.height - size.height);
    }

    (position, size)
}

/// Clamps the origin produced by a west or north resize into `container` and shrinks the moved
/// axis to match, so the opposite edge stays where the session started it.
pub fn clamp_resize_origin(
    session: &ResizeSession,
    position: Point,
    size: Size,
    container: ContainerBounds,
    keep_visible: Size,
    min_size: Size,
) -> (Point, Size) {
    let clamped = clamp_drag_position(position, container, keep_visible);
    let start = session.position_origin;
    let mut fitted = size;
    if session.edge.moves_west() {
        fitted.width = (start.x + session.size_origin.width - clamped.x).max(min_size.width);
    }
    if session.edge.moves_north() {
        fitted.height = (start.y + session.size_origin.height - clamped.y).max(min_size.height);
    }
    (clamped, fitted)
}

/// Origin that centers a window of `size` in `container`, nudged 10 px upward.
pub fn centered_position(size: Size, container: ContainerBounds) -> Point {
    Point {
        x: ((container.width - size.width) / 2.0).max(0.0),
        y: ((container.height - size.height) / 2.0 - 10.0).max(0.0),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{AppId, ResizeEdge};

    const KEEP: Size = Size::new(100.0, 50.0);
    const MIN: Size = Size::new(300.0, 200.0);

    fn bounds(width: f64, height: f64) -> ContainerBounds {
        ContainerBounds { width, height }
    }

    fn resize_from(edge: ResizeEdge) -> ResizeSession {
        ResizeSession {
            window_id: AppId::Terminal,
            edge,
            pointer_origin: Point::new(500.0, 400.0),
            size_origin: Size::new(400.0, 300.0),
            position_origin: Point::new(100.0, 100.0),
        }
    }

    #[test]
    fn drag_clamp_stays_within_bounds() {
        let container = bounds(800.0, 600.0);
        let cases = [
            (Point::new(-40.0, -5.0), Point::new(0.0, 0.0)),
            (Point::new(900.0, 700.0), Point::new(700.0, 550.0)),
            (Point::new(321.5, 42.0), Point::new(321.5, 42.0)),
        ];
        for (input, expected) in cases {
            assert_eq!(clamp_drag_position(input, container, KEEP), expected);
        }
    }

    #[test]
    fn drag_clamp_collapses_in_tiny_container() {
        let clamped = clamp_drag_position(Point::new(30.0, 30.0), bounds(80.0, 40.0), KEEP);
        assert_eq!(clamped, Point::new(0.0, 0.0));
    }

    #[test]
    fn drag_target_preserves_grab_offset() {
        let session = DragSession {
            window_id: AppId::ReadMe,
            pointer_origin: Point::new(50.0, 40.0),
            window_origin: Point::new(30.0, 30.0),
        };
        assert_eq!(drag_target(&session, Point::new(70.0, 90.0)), Point::new(50.0, 80.0));
    }

    #[test]
    fn south_east_resize_floors_at_minimum() {
        let session = resize_from(ResizeEdge::SouthEast);
        let (position, size) = resize_geometry(&session, Point::new(100.0, 0.0), MIN);
        assert_eq!(position, Point::new(100.0, 100.0));
        assert_eq!(size, MIN);

        let (_, grown) = resize_geometry(&session, Point::new(560.0, 450.0), MIN);
        assert_eq!(grown, Size::new(460.0, 350.0));
    }

    #[test]
    fn north_west_resize_keeps_opposite_corner() {
        let session = resize_from(ResizeEdge::NorthWest);
        let (position, size) = resize_geometry(&session, Point::new(450.0, 380.0), MIN);
        assert_eq!(size, Size::new(450.0, 320.0));
        assert_eq!(position, Point::new(50.0, 80.0));
        assert_eq!(position.x + size.width, 500.0);
        assert_eq!(position.y + size.height, 400.0);

        let (floored_at, floored) = resize_geometry(&session, Point::new(900.0, 900.0), MIN);
        assert_eq!(floored, MIN);
        assert_eq!(floored_at, Point::new(200.0, 200.0));
    }

    #[test]
    fn single_axis_edges_leave_other_axis_alone() {
        let (_, size) = resize_geometry(&resize_from(ResizeEdge::East), Point::new(540.0, 999.0), MIN);
        assert_eq!(size, Size::new(440.0, 300.0));
        let (_, size) = resize_geometry(&resize_from(ResizeEdge::North), Point::new(0.0, 390.0), MIN);
        assert_eq!(size, Size::new(400.0, 310.0));
    }

    #[test]
    fn clamped_west_edge_keeps_east_edge_fixed() {
        let session = resize_from(ResizeEdge::West);
        let (position, size) = resize_geometry(&session, Point::new(350.0, 400.0), MIN);
        assert_eq!(position.x, -50.0);

        let (position, size) =
            clamp_resize_origin(&session, position, size, bounds(1000.0, 700.0), KEEP, MIN);
        assert_eq!(position, Point::new(0.0, 100.0));
        assert_eq!(size, Size::new(500.0, 300.0));
        assert_eq!(position.x + size.width, 500.0);
    }

    #[test]
    fn clamped_north_west_corner_keeps_south_east_corner_fixed() {
        let session = resize_from(ResizeEdge::NorthWest);
        let (position, size) = resize_geometry(&session, Point::new(300.0, 250.0), MIN);
        let (position, size) =
            clamp_resize_origin(&session, position, size, bounds(1000.0, 700.0), KEEP, MIN);
        assert_eq!(position, Point::new(0.0, 0.0));
        assert_eq!(position.x + size.width, 500.0);
        assert_eq!(position.y + size.height, 400.0);
    }

    #[test]
    fn centering_nudges_up_and_never_goes_negative() {
        assert_eq!(
            centered_position(Size::new(560.0, 400.0), bounds(1000.0, 700.0)),
            Point::new(220.0, 140.0)
        );
        assert_eq!(
            centered_position(Size::new(560.0, 400.0), bounds(400.0, 300.0)),
            Point::new(0.0, 0.0)
        );
    }
}
