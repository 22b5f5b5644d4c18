//! Smooth curve construction over sparse control points
//!
//! Treats a control polyline as a Catmull-Rom-like control scheme: each
//! consecutive pair of points becomes one cubic Bezier segment whose handles
//! are derived from the neighboring direction vectors. Produces naturally
//! curving connectors rather than straight lines.

/// Evaluate a cubic Bezier curve at parameter `t` in `[0, 1]`
pub fn cubic_bezier(p0: [f64; 2], p1: [f64; 2], p2: [f64; 2], p3: [f64; 2], t: f64) -> [f64; 2] {
    let u = 1.0 - t;
    let b0 = u * u * u;
    let b1 = 3.0 * u * u * t;
    let b2 = 3.0 * u * t * t;
    let b3 = t * t * t;

    [
        b0 * p0[0] + b1 * p1[0] + b2 * p2[0] + b3 * p3[0],
        b0 * p0[1] + b1 * p1[1] + b2 * p2[1] + b3 * p3[1],
    ]
}

/// Sample a smoothed path through the given control points
///
/// For each consecutive control-point pair, two Bezier handles are derived
/// from the neighboring direction vectors scaled by `curviness` and half the
/// inter-point distance, and the resulting cubic segment is sampled
/// `samples_per_segment` times. Fewer than two control points are returned
/// unchanged.
pub fn sample_smoothed_path(
    control: &[[f64; 2]],
    curviness: f64,
    samples_per_segment: usize,
) -> Vec<[f64; 2]> {
    if control.len() < 2 || samples_per_segment == 0 {
        return control.to_vec();
    }

    let tangents = direction_tangents(control);
    let mut samples = Vec::with_capacity(control.len() * samples_per_segment);

    for i in 0..control.len() - 1 {
        let (Some(&start), Some(&end)) = (control.get(i), control.get(i + 1)) else {
            continue;
        };
        let tangent_start = tangents.get(i).copied().unwrap_or([0.0, 0.0]);
        let tangent_end = tangents.get(i + 1).copied().unwrap_or([0.0, 0.0]);

        let span = distance(start, end);
        let reach = curviness * span / 2.0;

        let handle_out = [
            tangent_start[0].mul_add(reach, start[0]),
            tangent_start[1].mul_add(reach, start[1]),
        ];
        let handle_in = [
            tangent_end[0].mul_add(-reach, end[0]),
            tangent_end[1].mul_add(-reach, end[1]),
        ];

        for step in 0..samples_per_segment {
            let t = step as f64 / samples_per_segment as f64;
            samples.push(cubic_bezier(start, handle_out, handle_in, end, t));
        }
    }

    if let Some(&last) = control.last() {
        samples.push(last);
    }

    samples
}

/// Unit direction at each control point, taken from its neighbors
///
/// Interior points use the direction between their two neighbors; endpoints
/// use the single adjacent segment. Coincident neighbors yield a zero vector,
/// degrading that handle to the control point itself.
fn direction_tangents(control: &[[f64; 2]]) -> Vec<[f64; 2]> {
    let count = control.len();
    let mut tangents = Vec::with_capacity(count);

    for i in 0..count {
        let before = if i == 0 {
            control.get(0)
        } else {
            control.get(i - 1)
        };
        let after = if i + 1 < count {
            control.get(i + 1)
        } else {
            control.get(i)
        };

        let tangent = match (before, after) {
            (Some(&a), Some(&b)) => normalize([b[0] - a[0], b[1] - a[1]]),
            _ => [0.0, 0.0],
        };
        tangents.push(tangent);
    }

    tangents
}

fn normalize(vector: [f64; 2]) -> [f64; 2] {
    let length = vector[0].hypot(vector[1]);
    if length > f64::EPSILON {
        [vector[0] / length, vector[1] / length]
    } else {
        [0.0, 0.0]
    }
}

fn distance(a: [f64; 2], b: [f64; 2]) -> f64 {
    (b[0] - a[0]).hypot(b[1] - a[1])
}
