//! PNG rendering of a solved board

use crate::board::Board;
use crate::geometry::GridPoint;
use crate::io::configuration::{
    IMAGE_ANCHOR, IMAGE_BACKGROUND, IMAGE_CELL_PIXELS, IMAGE_GRID, IMAGE_MARGIN_PIXELS,
    IMAGE_PALETTE,
};
use crate::io::error::{Result, SolverError};
use crate::search::Solution;
use image::{Rgb, RgbImage};
use std::path::Path;

type Pixel = (i64, i64);

// Image rows grow downward, board rows upward
fn to_pixel(point: GridPoint, span: i64) -> Pixel {
    let cell = i64::from(IMAGE_CELL_PIXELS);
    let margin = i64::from(IMAGE_MARGIN_PIXELS);
    (
        margin + i64::from(point.x) * cell,
        margin + (span - i64::from(point.y)) * cell,
    )
}

fn put(img: &mut RgbImage, (x, y): Pixel, colour: Rgb<u8>) {
    if let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y))
        && let Some(pixel) = img.get_pixel_mut_checked(x, y)
    {
        *pixel = colour;
    }
}

// Bresenham
fn draw_line(img: &mut RgbImage, from: Pixel, to: Pixel, colour: Rgb<u8>) {
    let (mut x, mut y) = from;
    let dx = (to.0 - x).abs();
    let dy = -(to.1 - y).abs();
    let step_x = if x < to.0 { 1 } else { -1 };
    let step_y = if y < to.1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        put(img, (x, y), colour);
        if (x, y) == to {
            break;
        }
        let doubled = 2 * err;
        if doubled >= dy {
            err += dy;
            x += step_x;
        }
        if doubled <= dx {
            err += dx;
            y += step_y;
        }
    }
}

/// Draw the grid, every anchor square and the solution's triangle outlines
pub fn render_solution(board: &Board, solution: &Solution) -> RgbImage {
    let span = u32::try_from(board.max_coordinate()).unwrap_or(0);
    let side = span * IMAGE_CELL_PIXELS + 2 * IMAGE_MARGIN_PIXELS + 1;
    let mut img = RgbImage::from_pixel(side, side, Rgb(IMAGE_BACKGROUND));
    let span = i64::from(span);

    let max = board.max_coordinate();
    let grid = Rgb(IMAGE_GRID);
    for i in 0..=max {
        draw_line(
            &mut img,
            to_pixel(GridPoint::new(i, 0), span),
            to_pixel(GridPoint::new(i, max), span),
            grid,
        );
        draw_line(
            &mut img,
            to_pixel(GridPoint::new(0, i), span),
            to_pixel(GridPoint::new(max, i), span),
            grid,
        );
    }

    for cell in board.cells() {
        let anchor = cell.anchor();
        let (left, top) = to_pixel(GridPoint::new(anchor.x, anchor.y + 1), span);
        let (right, bottom) = to_pixel(GridPoint::new(anchor.x + 1, anchor.y), span);
        for y in top..=bottom {
            for x in left..=right {
                put(&mut img, (x, y), Rgb(IMAGE_ANCHOR));
            }
        }
    }

    for (index, triangle) in solution.triangles().iter().enumerate() {
        let colour = IMAGE_PALETTE
            .get(index % IMAGE_PALETTE.len())
            .copied()
            .unwrap_or([0, 0, 0]);
        for edge in triangle.edges() {
            draw_line(
                &mut img,
                to_pixel(edge.start, span),
                to_pixel(edge.end, span),
                Rgb(colour),
            );
        }
    }

    img
}

/// Render the solution and save it as a PNG
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_solution_as_png(board: &Board, solution: &Solution, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| SolverError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    render_solution(board, solution)
        .save(output_path)
        .map_err(|e| SolverError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
