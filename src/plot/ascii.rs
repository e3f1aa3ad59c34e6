//! ASCII/Unicode plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Two views of a kernel:
//! - `render_heatmap`: the 2D matrix as a character-ramp image
//! - `render_profile`: the center row as a cross-section curve

use nalgebra::DMatrix;

/// Character ramp from lowest to highest value.
const RAMP: [char; 10] = [' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Render the kernel as an ASCII heatmap.
///
/// Each output cell samples the nearest kernel entry; values are mapped
/// linearly onto the character ramp between the kernel's min and max.
pub fn render_heatmap(kernel: &DMatrix<f64>, width: usize, height: usize) -> String {
    let n = kernel.nrows();
    let cols = width.max(2).min(n.max(2));
    let rows = height.max(2).min(n.max(2));

    let (v_min, v_max) = value_range(kernel);
    let span = v_max - v_min;

    let mut out = String::new();
    out.push_str(&format!(
        "Heatmap: {n}x{n} | v=[{v_min:.6}, {v_max:.6}]\n"
    ));

    for r in 0..rows {
        for c in 0..cols {
            let i = map_index(r, rows, n);
            let j = map_index(c, cols, n);
            let v = kernel[(i, j)];
            let u = if span > 0.0 { ((v - v_min) / span).clamp(0.0, 1.0) } else { 0.0 };
            let idx = (u * (RAMP.len() as f64 - 1.0)).round() as usize;
            out.push(RAMP[idx]);
        }
        out.push('\n');
    }

    out
}

/// Render the kernel's center row as an ASCII cross-section plot.
pub fn render_profile(kernel: &DMatrix<f64>, width: usize, height: usize) -> String {
    let n = kernel.nrows();
    let width = width.max(10);
    let height = height.max(5);

    let center = n / 2;
    let profile: Vec<f64> = kernel.row(center).iter().copied().collect();

    let mut v_min = f64::INFINITY;
    let mut v_max = f64::NEG_INFINITY;
    for &v in &profile {
        v_min = v_min.min(v);
        v_max = v_max.max(v);
    }
    let (v_min, v_max) = pad_range(v_min, v_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];
    let mut prev = None;
    for (j, &v) in profile.iter().enumerate() {
        let x = map_x(j, n, width);
        let y = map_y(v, v_min, v_max, height);
        if let Some((x0, y0)) = prev {
            draw_line(&mut grid, x0, y0, x, y, '-');
        } else {
            grid[y][x] = '-';
        }
        prev = Some((x, y));
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Profile (row {center}): col=[0, {}] | v=[{v_min:.4}, {v_max:.4}]\n",
        n - 1
    ));
    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

fn value_range(kernel: &DMatrix<f64>) -> (f64, f64) {
    let mut v_min = f64::INFINITY;
    let mut v_max = f64::NEG_INFINITY;
    for &v in kernel.iter() {
        v_min = v_min.min(v);
        v_max = v_max.max(v);
    }
    if v_min.is_finite() && v_max.is_finite() {
        (v_min, v_max)
    } else {
        (0.0, 1.0)
    }
}

fn map_index(out_pos: usize, out_len: usize, n: usize) -> usize {
    let u = out_pos as f64 / (out_len as f64 - 1.0);
    (u * (n as f64 - 1.0)).round() as usize
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(j: usize, n: usize, width: usize) -> usize {
    let u = j as f64 / (n as f64 - 1.0).max(1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(v: f64, v_min: f64, v_max: f64, height: usize) -> usize {
    let u = ((v - v_min) / (v_max - v_min)).clamp(0.0, 1.0);
    // v=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::expand_separable;

    #[test]
    fn heatmap_golden_snapshot_small() {
        let kernel = expand_separable(&[0.0, 1.0, 0.0]);
        let txt = render_heatmap(&kernel, 3, 3);
        let expected = concat!(
            "Heatmap: 3x3 | v=[0.000000, 1.000000]\n",
            "   \n",
            " @ \n",
            "   \n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn heatmap_is_constant_safe() {
        let kernel = DMatrix::from_element(4, 4, 0.25);
        let txt = render_heatmap(&kernel, 4, 4);
        // Flat kernels map everything to the lowest ramp character.
        assert!(txt.lines().skip(1).all(|l| l.chars().all(|c| c == ' ')));
    }

    #[test]
    fn profile_has_header_and_requested_height() {
        let kernel = expand_separable(&[0.0, 0.5, 1.0, 0.5, 0.0]);
        let txt = render_profile(&kernel, 20, 8);
        let lines: Vec<&str> = txt.lines().collect();
        assert_eq!(lines.len(), 9);
        assert!(lines[0].starts_with("Profile (row 2):"));
        assert!(txt.contains('-'));
    }
}
