//! Cubic-bezier easing curves.
//!
//! A curve is defined by its two inner control points `(x1, y1)` and `(x2, y2)`;
//! the outer points are fixed at `(0, 0)` and `(1, 1)`. `ease(p)` solves the
//! curve for `x == p` and returns the matching `y`.

use serde::Serialize;

const NEWTON_ITERATIONS: usize = 8;
const NEWTON_MIN_SLOPE: f64 = 1e-3;
const SUBDIVISION_PRECISION: f64 = 1e-7;
const SUBDIVISION_MAX_ITERATIONS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Fast start, long soft landing. Used by every word and card reveal on the landing page.
pub const REVEAL_EASE: CubicBezier = CubicBezier::new(0.22, 1.0, 0.36, 1.0);

/// The standard `easeOut` curve. Used by resume sections.
pub const EASE_OUT: CubicBezier = CubicBezier::new(0.0, 0.0, 0.58, 1.0);

impl CubicBezier {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Eased progress for linear progress `p`. Input is clamped to `[0, 1]`.
    pub fn ease(&self, p: f64) -> f64 {
        if p <= 0.0 {
            return 0.0;
        }
        if p >= 1.0 {
            return 1.0;
        }
        if self.x1 == self.y1 && self.x2 == self.y2 {
            return p;
        }
        let t = self.solve_t(p);
        sample(t, self.y1, self.y2)
    }

    /// Finds the curve parameter `t` whose x coordinate equals `x`.
    /// Newton-Raphson first, bisection when the slope is too flat.
    fn solve_t(&self, x: f64) -> f64 {
        let mut t = x;
        for _ in 0..NEWTON_ITERATIONS {
            let slope = slope(t, self.x1, self.x2);
            if slope.abs() < NEWTON_MIN_SLOPE {
                break;
            }
            let err = sample(t, self.x1, self.x2) - x;
            if err.abs() < SUBDIVISION_PRECISION {
                return t;
            }
            t -= err / slope;
        }

        let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
        t = x;
        for _ in 0..SUBDIVISION_MAX_ITERATIONS {
            let current = sample(t, self.x1, self.x2);
            if (current - x).abs() < SUBDIVISION_PRECISION {
                break;
            }
            if current < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        t
    }
}

// B(t) = 3(1-t)^2 t p1 + 3(1-t) t^2 p2 + t^3
fn sample(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    ((a * t + b) * t + c) * t
}

fn slope(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;
    3.0 * a * t * t + 2.0 * b * t + c
}
