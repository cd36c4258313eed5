use {
  super::*,
  crate::geometry::{Circle, Segment, Shape, P2},
  euclid::{Angle, Vector2D as V2},
  image::Rgba,
};

fn alpha_at(canvas: &Canvas, x: u32, y: u32) -> u8 {
  canvas.image().get_pixel(x, y).0[3]
}

#[test] fn canvas_resolution_follows_dpr() {
  let canvas = Canvas::new(100.0, 50.0, 2.0);
  assert_eq!(canvas.image().dimensions(), (200, 100));
  assert_eq!(canvas.size(), Size2D::new(100.0, 50.0));
  assert_eq!(canvas.center(), P2::new(50.0, 25.0));
}

#[test] fn invalid_dpr_falls_back_to_one() {
  let canvas = Canvas::new(10.0, 10.0, f32::NAN);
  assert_eq!(canvas.dpr(), 1.0);
  assert_eq!(canvas.image().dimensions(), (10, 10));
}

#[test] fn filled_circle_is_solid_inside_and_clear_outside() {
  let mut canvas = Canvas::new(64.0, 64.0, 1.0);
  canvas.fill_circle(P2::new(32.0, 32.0), 10.0, ink(1.0));
  assert_eq!(alpha_at(&canvas, 32, 32), 255);
  assert_eq!(alpha_at(&canvas, 32, 50), 0);
  // antialiased edge
  let edge = alpha_at(&canvas, 41, 35);
  assert!(edge > 0 && edge < 255, "{}", edge);
}

#[test] fn stroked_circle_is_hollow() {
  let mut canvas = Canvas::new(64.0, 64.0, 1.0);
  canvas.stroke_circle(P2::new(32.0, 32.0), 20.0, 2.0, ink(1.0));
  assert_eq!(alpha_at(&canvas, 32, 32), 0);
  assert!(alpha_at(&canvas, 52, 32) > 200);
}

#[test] fn polyline_joints_are_not_painted_twice() {
  let mut canvas = Canvas::new(64.0, 64.0, 1.0);
  let points = [P2::new(8.0, 32.5), P2::new(32.0, 32.5), P2::new(56.0, 32.5)];
  canvas.stroke_polyline(&points, 3.0, ink(0.5));
  let joint = alpha_at(&canvas, 32, 32);
  let middle = alpha_at(&canvas, 20, 32);
  assert_eq!(joint, middle);
}

#[test] fn degenerate_paths_draw_nothing() {
  let mut canvas = Canvas::new(16.0, 16.0, 1.0);
  canvas.stroke_polyline(&[], 1.0, ink(1.0));
  canvas.stroke_polyline(&[P2::new(4.0, 4.0)], 1.0, ink(1.0));
  canvas.fill_circle(P2::new(8.0, 8.0), 0.0, ink(1.0));
  canvas.stroke_line(P2::new(0.0, 0.0), P2::new(16.0, 16.0), 0.0, ink(1.0));
  assert!(canvas.image().pixels().all(|p| p.0[3] == 0));
}

#[test] fn shapes_outside_are_clipped() {
  let mut canvas = Canvas::new(16.0, 16.0, 1.0);
  canvas.fill_circle(P2::new(-50.0, -50.0), 5.0, ink(1.0));
  canvas.stroke_line(P2::new(100.0, 0.0), P2::new(200.0, 0.0), 2.0, ink(1.0));
  assert!(canvas.image().pixels().all(|p| p.0[3] == 0));
}

#[test] fn global_alpha_multiplies() {
  let mut canvas = Canvas::new(32.0, 32.0, 1.0);
  canvas.save();
  canvas.set_alpha(0.5);
  canvas.fill_rect(Box2D::new(P2::new(0.0, 0.0), P2::new(32.0, 32.0)), ink(1.0));
  canvas.restore();
  let a = alpha_at(&canvas, 16, 16);
  assert!((127..=128).contains(&a), "{}", a);
  // restored
  canvas.fill_rect(Box2D::new(P2::new(0.0, 0.0), P2::new(32.0, 32.0)), ink(1.0));
  assert_eq!(alpha_at(&canvas, 16, 16), 255);
}

#[test] fn strokes_take_global_alpha() {
  let mut canvas = Canvas::new(32.0, 32.0, 1.0);
  canvas.set_alpha(0.5);
  canvas.stroke_line(P2::new(0.0, 16.5), P2::new(32.0, 16.5), 4.0, ink(1.0));
  let a = alpha_at(&canvas, 16, 16);
  assert!((127..=128).contains(&a), "{}", a);
}

#[test] fn transform_stack() {
  let mut canvas = Canvas::new(64.0, 64.0, 1.0);
  canvas.save();
  canvas.translate(32.0, 32.0);
  canvas.rotate(std::f32::consts::FRAC_PI_2);
  canvas.scale(2.0, 2.0);
  // (5, 0) -> scaled (10, 0) -> rotated (0, 10) -> translated (32, 42)
  canvas.fill_circle(P2::new(5.0, 0.0), 2.0, ink(1.0));
  canvas.restore();
  assert_eq!(alpha_at(&canvas, 32, 42), 255);
  // the radius was scaled too
  assert!(alpha_at(&canvas, 32, 45) > 0);
  assert_eq!(alpha_at(&canvas, 42, 32), 0);
}

#[test] fn fade_accumulates_towards_white() {
  let mut canvas = Canvas::new(8.0, 8.0, 1.0);
  canvas.fill_rect(Box2D::new(P2::new(0.0, 0.0), P2::new(8.0, 8.0)), ink(1.0));
  (0..60).for_each(|_| canvas.fade(with_alpha(WHITE, 0.1)));
  let px = canvas.image().get_pixel(4, 4);
  assert!(px.0[0] > 200, "{:?}", px);
  assert_eq!(px.0[3], 255);
}

#[test] fn put_pixel_overwrites_a_dpr_block() {
  let mut canvas = Canvas::new(8.0, 8.0, 2.0);
  canvas.fill_rect(Box2D::new(P2::new(0.0, 0.0), P2::new(8.0, 8.0)), ink(1.0));
  canvas.put_pixel(P2::new(1.0, 1.0), Rgba([0, 0, 0, 10]));
  for (x, y) in [(2, 2), (3, 2), (2, 3), (3, 3)] {
    assert_eq!(alpha_at(&canvas, x, y), 10);
  }
  assert_eq!(alpha_at(&canvas, 4, 4), 255);
  // out of bounds is ignored
  canvas.put_pixel(P2::new(-4.0, 100.0), Rgba([0, 0, 0, 10]));
}

#[test] fn flatten_over_background() {
  let canvas = Canvas::new(4.0, 4.0, 1.0);
  let out = canvas.flatten(Rgba([249, 250, 251, 255]));
  assert!(out.pixels().all(|p| *p == Rgba([249, 250, 251, 255])));
}

#[test] fn textured_shapes_draw_into_framebuffer() {
  let mut fb = Framebuffer::new(Size2D::new(64, 64), 1.0);
  Segment { a: P2::new(0.0, 0.0), b: P2::new(16.0, 0.0), radius: 2.0 }
    .rotate(Angle::degrees(90.0))
    .translate(V2::new(24.0, 24.0))
    .texture(ink(1.0))
    .draw(&mut fb);
  // rotated around its own center (8, 0), then moved
  assert_eq!(fb.image.get_pixel(32, 24 + 7).0[3], 255);
  assert_eq!(fb.image.get_pixel(24 + 14, 24).0[3], 0);

  Circle
    .scale(V2::splat(4.0))
    .translate(V2::new(8.0, 56.0))
    .texture(Rgba([255, 0, 0, 255]))
    .draw(&mut fb);
  assert_eq!(*fb.image.get_pixel(8, 56), Rgba([255, 0, 0, 255]));
}

#[test] fn mask_merges_coverage() -> anyhow::Result<()> {
  let fb = Framebuffer::new(Size2D::new(32, 32), 1.0);
  let a = Circle.scale(V2::splat(6.0)).translate(V2::new(12.0, 16.0));
  let b = Circle.scale(V2::splat(6.0)).translate(V2::new(20.0, 16.0));
  let mut mask = Mask::new(&fb, a.bounding_box().union(&b.bounding_box()))
    .ok_or_else(|| anyhow::anyhow!("mask outside of framebuffer"))?;
  mask.add(&a);
  mask.add(&b);
  assert_eq!(mask.get(euclid::Point2D::new(16, 16)), 1.0);
  assert_eq!(mask.get(euclid::Point2D::new(0, 0)), 0.0);
  Ok(())
}
