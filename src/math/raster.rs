/// Rasterize the straight segment between two grid positions
///
/// Standard integer Bresenham walk; the returned sequence includes both
/// endpoints and never leaves the axis-aligned bounding box of the segment.
pub fn bresenham_line(from: [i32; 2], to: [i32; 2]) -> Vec<[i32; 2]> {
    let mut cells = Vec::new();

    let dx = (to[0] - from[0]).abs();
    let dy = -(to[1] - from[1]).abs();
    let step_x = if from[0] < to[0] { 1 } else { -1 };
    let step_y = if from[1] < to[1] { 1 } else { -1 };

    let mut error = dx + dy;
    let mut current = from;

    loop {
        cells.push(current);
        if current == to {
            break;
        }
        let doubled = 2 * error;
        if doubled >= dy {
            error += dy;
            current[0] += step_x;
        }
        if doubled <= dx {
            error += dx;
            current[1] += step_y;
        }
    }

    cells
}
