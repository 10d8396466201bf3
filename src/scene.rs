use log::debug;
use sdl2::gfx::primitives::DrawRenderer;
use sdl2::pixels::Color;
use sdl2::render::{Canvas, RenderTarget};
use vect2d::{Vect, check_axis, closest_point_on_segment};

/// Arrow head length as a fraction of the pointer length.
const HEAD_RATIO: f64 = 0.15;

fn to_abgr(color: Color) -> Color {
    Color::RGBA(color.a, color.b, color.g, color.r)
}

fn pixel(v: Vect) -> (i16, i16) {
    (v.x as i16, v.y as i16)
}

/// Tunables for the demo scene.
#[derive(Debug, Clone)]
pub struct SceneConfig {
    /// How many random segments to scatter over the window.
    pub segment_count: usize,
    /// Segment width in pixels.
    pub segment_width: u8,
    /// Longest segment, in pixels.
    pub segment_reach: f64,
    /// Maximum pointer turn in radians per second.
    pub turn_rate: f64,
    /// Maximum tracker travel in pixels per second.
    pub follow_speed: f64,
    /// Tracker stays at least this far from the centre.
    pub leash: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        SceneConfig {
            segment_count: 6,
            segment_width: 6,
            segment_reach: 220.0,
            turn_rate: 1.5,
            follow_speed: 250.0,
            leash: 300.0,
        }
    }
}

pub struct Segment {
    pub a: Vect,
    pub b: Vect,
    pub width: u8,
    pub color: Color,
}

impl Segment {
    pub fn new(a: Vect, b: Vect, width: Option<u8>, color: Option<Color>) -> Segment {
        Segment {
            a,
            b,
            width: width.unwrap_or(6),
            color: color.unwrap_or(Color::GREEN),
        }
    }

    /// Segment with a random centre inside `bounds` and a random direction,
    /// no longer than `reach`.
    pub fn random(bounds: Vect, reach: f64, width: u8) -> Segment {
        let centre = Vect::new(
            rand::random_range(0.0..bounds.x),
            rand::random_range(0.0..bounds.y),
        );
        let half = Vect::for_angle(rand::random_range(-std::f64::consts::PI..std::f64::consts::PI))
            .scale(rand::random_range(reach * 0.25..reach) * 0.5);
        Segment::new(centre - half, centre + half, Some(width), None)
    }

    pub fn closest_point(&self, p: Vect) -> Vect {
        closest_point_on_segment(p, self.a, self.b)
    }

    /// Whether `p` sits behind the segment, taking the counter-clockwise
    /// normal as the front.
    pub fn behind(&self, p: Vect) -> bool {
        let n = (self.b - self.a).perp().normalize();
        check_axis(self.a, self.b, p, n)
    }

    pub fn draw<T: RenderTarget>(&self, canvas: &mut Canvas<T>, highlight: bool) {
        let (x1, y1) = pixel(self.a);
        let (x2, y2) = pixel(self.b);
        let color = if highlight { Color::YELLOW } else { self.color };
        let _ = canvas.thick_line(x1, y1, x2, y2, self.width, to_abgr(color));
    }
}

/// A dot that chases a target at bounded speed.
pub struct Tracker {
    pub position: Vect,
    pub radius: i16,
    pub color: Color,
}

impl Tracker {
    pub fn new(position: Vect, radius: Option<i16>, color: Option<Color>) -> Tracker {
        Tracker {
            position,
            radius: radius.unwrap_or(8),
            color: color.unwrap_or(Color::RED),
        }
    }

    /// Steps toward `target` by at most `max_step`, then pulls back inside
    /// `leash` of `anchor`.
    pub fn follow(&mut self, target: Vect, max_step: f64, anchor: Vect, leash: f64) {
        let moved = self.position.lerp_const(target, max_step);
        self.position = anchor + (moved - anchor).clamp_length(leash);
    }

    pub fn draw<T: RenderTarget>(&self, canvas: &mut Canvas<T>) {
        let (x, y) = pixel(self.position);
        let _ = canvas.filled_circle(x, y, self.radius, to_abgr(self.color));
    }
}

/// An arrow fixed at `origin` that turns toward a target at bounded angular speed.
pub struct Pointer {
    pub origin: Vect,
    pub heading: Vect,
    pub length: f64,
    pub color: Color,
}

impl Pointer {
    pub fn new(origin: Vect, length: f64) -> Pointer {
        Pointer {
            origin,
            heading: Vect::for_angle(0.0),
            length,
            color: Color::CYAN,
        }
    }

    pub fn turn_toward(&mut self, target: Vect, max_angle: f64) {
        let offset = target - self.origin;
        if offset.length_squared() == 0.0 {
            return;
        }
        let wanted = offset.normalize();
        // Already aligned; slerp_const has no direction to turn in.
        if self.heading.near(wanted, 1e-6) {
            self.heading = wanted;
            return;
        }
        // Directly behind: every arc is equally short and slerp stays put, so
        // pick the counter-clockwise one.
        if self.heading.dot(wanted) < -1.0 + 1e-9 {
            self.heading = self.heading.rotate(Vect::for_angle(max_angle)).normalize();
            return;
        }
        self.heading = self.heading.slerp_const(wanted, max_angle).normalize();
    }

    /// Heading in degrees, clockwise on screen since y grows downward.
    pub fn degrees(&self) -> f64 {
        self.heading.to_angle().to_degrees()
    }

    pub fn draw<T: RenderTarget>(&self, canvas: &mut Canvas<T>) {
        let tip = self.origin + self.heading * self.length;
        let back = tip - self.heading * (self.length * HEAD_RATIO);
        let side = self.heading.perp() * (self.length * HEAD_RATIO * 0.5);
        let color = to_abgr(self.color);

        let (ox, oy) = pixel(self.origin);
        let (tx, ty) = pixel(tip);
        let (lx, ly) = pixel(back + side);
        let (rx, ry) = pixel(back - side);
        let _ = canvas.thick_line(ox, oy, tx, ty, 3, color);
        let _ = canvas.filled_trigon(tx, ty, lx, ly, rx, ry, color);
    }
}

pub struct Scene {
    pub config: SceneConfig,
    pub bounds: Vect,
    pub segments: Vec<Segment>,
    pub tracker: Tracker,
    pub pointer: Pointer,
}

impl Scene {
    pub fn new(config: SceneConfig, width: u32, height: u32) -> Scene {
        let bounds = Vect::new(width as f64, height as f64);
        let centre = bounds * 0.5;
        let mut scene = Scene {
            config,
            bounds,
            segments: Vec::new(),
            tracker: Tracker::new(centre, None, None),
            pointer: Pointer::new(centre, 60.0),
        };
        scene.scatter();
        scene
    }

    /// Replaces every segment with a fresh random one.
    pub fn scatter(&mut self) {
        self.segments = (0..self.config.segment_count)
            .map(|_| {
                Segment::random(self.bounds, self.config.segment_reach, self.config.segment_width)
            })
            .collect();
        debug!("scattered {} segments", self.segments.len());
    }

    pub fn update(&mut self, cursor: Vect, dt: f64) {
        self.tracker.follow(
            cursor,
            self.config.follow_speed * dt,
            self.pointer.origin,
            self.config.leash,
        );
        self.pointer.turn_toward(cursor, self.config.turn_rate * dt);
    }

    /// Index of the segment nearest to `p`, with its closest point.
    pub fn nearest(&self, p: Vect) -> Option<(usize, Vect)> {
        self.segments
            .iter()
            .map(|segment| segment.closest_point(p))
            .enumerate()
            .min_by(|(_, a), (_, b)| a.distance_squared(p).total_cmp(&b.distance_squared(p)))
    }

    pub fn draw<T: RenderTarget>(&self, canvas: &mut Canvas<T>, cursor: Vect) {
        let nearest = self.nearest(cursor);
        for (idx, segment) in self.segments.iter().enumerate() {
            let highlight = matches!(nearest, Some((n, _)) if n == idx);
            segment.draw(canvas, highlight);

            let (cx, cy) = pixel(segment.closest_point(cursor));
            let (px, py) = pixel(cursor);
            let _ = canvas.line(px, py, cx, cy, to_abgr(Color::GREY));
            let marker = if segment.behind(cursor) { Color::MAGENTA } else { Color::WHITE };
            let _ = canvas.filled_circle(cx, cy, 4, to_abgr(marker));
        }
        self.tracker.draw(canvas);
        self.pointer.draw(canvas);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn pointer_turns_around_from_behind() {
        let mut pointer = Pointer::new(Vect::ZERO, 60.0);
        let step = 0.025;

        pointer.turn_toward(Vect::new(-10.0, 0.0), step);
        assert_abs_diff_eq!(pointer.heading.to_angle(), step, epsilon = 1e-9);

        for _ in 0..200 {
            pointer.turn_toward(Vect::new(-10.0, 0.0), step);
        }
        assert_abs_diff_eq!(pointer.heading.x, -1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(pointer.heading.y, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn pointer_turn_is_bounded() {
        let mut pointer = Pointer::new(Vect::ZERO, 60.0);
        pointer.turn_toward(Vect::new(0.0, 5.0), 0.1);
        assert_abs_diff_eq!(pointer.heading.to_angle(), 0.1, epsilon = 1e-9);
        assert_abs_diff_eq!(pointer.heading.length(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn tracker_respects_speed_and_leash() {
        let mut tracker = Tracker::new(Vect::ZERO, None, None);
        tracker.follow(Vect::new(100.0, 0.0), 10.0, Vect::ZERO, 50.0);
        assert_abs_diff_eq!(tracker.position.x, 10.0, epsilon = 1e-12);

        let mut tracker = Tracker::new(Vect::new(45.0, 0.0), None, None);
        tracker.follow(Vect::new(100.0, 0.0), 10.0, Vect::ZERO, 50.0);
        assert_abs_diff_eq!(tracker.position.x, 50.0, epsilon = 1e-12);
    }
}
