use super::*;

const BG: Color = Color(0x102030);
const RED: Color = Color(0xFF0000);
const BLUE: Color = Color(0x0000FF);

fn px(img: &RasterImage, x: u32, y: u32) -> [u8; 3] {
    img.get_pixel(x, y).0
}

#[test]
fn new_surface_is_filled_with_background() {
    let s = CpuSurface::new(7, 5, BG).unwrap();
    assert_eq!((s.width(), s.height()), (7, 5));
    let img = s.finish().unwrap();
    assert_eq!(img.dimensions(), (7, 5));
    assert!(img.pixels().all(|p| p.0 == [0x10, 0x20, 0x30]));
}

#[test]
fn rejects_oversized_and_empty_canvas() {
    assert!(matches!(
        CpuSurface::new(70_000, 4, BG).unwrap_err(),
        FiguraError::Render(_)
    ));
    assert!(matches!(
        CpuSurface::new(4, 0, BG).unwrap_err(),
        FiguraError::Render(_)
    ));
}

#[test]
fn pixel_sets_exactly_one_pixel() {
    let mut s = CpuSurface::new(8, 8, BG).unwrap();
    s.fill_pixel(Point::new(3.0, 4.0), RED).unwrap();
    let img = s.finish().unwrap();
    for (x, y, p) in img.enumerate_pixels() {
        let expected = if (x, y) == (3, 4) {
            [255, 0, 0]
        } else {
            [0x10, 0x20, 0x30]
        };
        assert_eq!(p.0, expected, "({x},{y})");
    }
}

#[test]
fn box_includes_both_corners() {
    let mut s = CpuSurface::new(16, 16, BG).unwrap();
    s.fill_box(Rect::new(8.0, 9.0, 12.0, 11.0), RED).unwrap();
    let img = s.finish().unwrap();
    for (x, y, p) in img.enumerate_pixels() {
        let inside = (8..=12).contains(&x) && (9..=11).contains(&y);
        assert_eq!(p.0 == [255, 0, 0], inside, "({x},{y})");
    }
}

#[test]
fn box_corners_snap_half_to_even() {
    let mut s = CpuSurface::new(16, 16, BG).unwrap();
    // Snaps to (2, 2)-(4, 4).
    s.fill_box(Rect::new(2.5, 1.5, 3.5, 4.5), RED).unwrap();
    let img = s.finish().unwrap();
    assert_eq!(px(&img, 2, 2), [255, 0, 0]);
    assert_eq!(px(&img, 4, 4), [255, 0, 0]);
    assert_eq!(px(&img, 1, 2), [0x10, 0x20, 0x30]);
    assert_eq!(px(&img, 5, 4), [0x10, 0x20, 0x30]);
    assert_eq!(px(&img, 3, 5), [0x10, 0x20, 0x30]);
}

#[test]
fn later_fills_paint_over_earlier_ones() {
    let mut s = CpuSurface::new(16, 16, BG).unwrap();
    s.fill_box(Rect::new(0.0, 0.0, 9.0, 9.0), RED).unwrap();
    s.fill_box(Rect::new(5.0, 5.0, 14.0, 14.0), BLUE).unwrap();
    let img = s.finish().unwrap();
    assert_eq!(px(&img, 2, 2), [255, 0, 0]);
    assert_eq!(px(&img, 7, 7), [0, 0, 255]);
    assert_eq!(px(&img, 12, 12), [0, 0, 255]);
}

#[test]
fn ellipse_covers_its_center_but_not_box_corners() {
    let mut s = CpuSurface::new(32, 32, BG).unwrap();
    s.fill_ellipse(Rect::new(4.0, 4.0, 24.0, 24.0), RED).unwrap();
    let img = s.finish().unwrap();
    assert_eq!(px(&img, 14, 14), [255, 0, 0]);
    assert_eq!(px(&img, 4, 4), [0x10, 0x20, 0x30]);
    assert_eq!(px(&img, 24, 24), [0x10, 0x20, 0x30]);
    assert_eq!(px(&img, 30, 14), [0x10, 0x20, 0x30]);
}

#[test]
fn polygon_fills_interior() {
    let mut s = CpuSurface::new(16, 16, BG).unwrap();
    let tri = [
        Point::new(0.0, 0.0),
        Point::new(12.0, 0.0),
        Point::new(0.0, 12.0),
    ];
    s.fill_polygon(&tri, BLUE).unwrap();
    let img = s.finish().unwrap();
    assert_eq!(px(&img, 2, 2), [0, 0, 255]);
    assert_eq!(px(&img, 14, 14), [0x10, 0x20, 0x30]);
}

#[test]
fn axis_aligned_polygon_includes_its_boundary() {
    let mut s = CpuSurface::new(8, 8, BG).unwrap();
    let quad = [
        Point::new(2.0, 2.0),
        Point::new(6.0, 2.0),
        Point::new(6.0, 6.0),
        Point::new(2.0, 6.0),
    ];
    s.fill_polygon(&quad, RED).unwrap();
    let img = s.finish().unwrap();
    for (x, y, p) in img.enumerate_pixels() {
        let inside = (2..=6).contains(&x) && (2..=6).contains(&y);
        assert_eq!(p.0 == [255, 0, 0], inside, "({x},{y})");
    }
}

#[test]
fn polygon_and_box_with_same_corners_cover_same_pixels() {
    let corners = Rect::new(8.0, 9.0, 12.0, 11.0);

    let mut boxed = CpuSurface::new(20, 20, BG).unwrap();
    boxed.fill_box(corners, RED).unwrap();
    let boxed = boxed.finish().unwrap();

    let mut poly = CpuSurface::new(20, 20, BG).unwrap();
    let quad = [
        Point::new(8.0, 9.0),
        Point::new(12.0, 9.0),
        Point::new(12.0, 11.0),
        Point::new(8.0, 11.0),
    ];
    poly.fill_polygon(&quad, RED).unwrap();
    let poly = poly.finish().unwrap();

    let painted = |img: &RasterImage| img.pixels().filter(|p| p.0 == [255, 0, 0]).count();
    assert_eq!(painted(&boxed), 15);
    assert_eq!(boxed, poly);
}

#[test]
fn curved_edges_never_blend_colors() {
    let mut s = CpuSurface::new(24, 24, Color::BLACK).unwrap();
    s.fill_box(Rect::new(2.0, 2.0, 21.0, 21.0), RED).unwrap();
    s.fill_ellipse(Rect::new(4.0, 4.0, 19.0, 19.0), BLUE).unwrap();
    s.fill_polygon(
        &[
            Point::new(0.0, 23.0),
            Point::new(11.0, 13.0),
            Point::new(23.0, 23.0),
        ],
        Color(0x00FF00),
    )
    .unwrap();
    let img = s.finish().unwrap();

    let allowed = [[0, 0, 0], [255, 0, 0], [0, 0, 255], [0, 255, 0]];
    for (x, y, p) in img.enumerate_pixels() {
        assert!(allowed.contains(&p.0), "({x},{y}) = {:?}", p.0);
    }
}

#[test]
fn out_of_bounds_shapes_are_clipped() {
    let mut s = CpuSurface::new(4, 4, BG).unwrap();
    s.fill_box(Rect::new(-10.0, -10.0, 1.0, 1.0), RED).unwrap();
    s.fill_pixel(Point::new(100.0, 100.0), BLUE).unwrap();
    s.fill_pixel(Point::new(-1.0, 2.0), BLUE).unwrap();
    let img = s.finish().unwrap();
    assert_eq!(px(&img, 0, 0), [255, 0, 0]);
    assert_eq!(px(&img, 1, 1), [255, 0, 0]);
    assert_eq!(px(&img, 2, 2), [0x10, 0x20, 0x30]);
    assert_eq!(px(&img, 0, 2), [0x10, 0x20, 0x30]);
}

#[test]
fn only_low_channel_bytes_reach_the_canvas() {
    let mut s = CpuSurface::new(2, 1, BG).unwrap();
    // (256,0,0) packs to 0x1000000; its low 24 bits are black.
    s.fill_pixel(Point::new(0.0, 0.0), Color(0x0100_0000)).unwrap();
    let img = s.finish().unwrap();
    assert_eq!(px(&img, 0, 0), [0, 0, 0]);
}
