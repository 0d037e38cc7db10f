//! Text output: the solution block, candidate tables and run summaries

use crate::board::Board;
use crate::board::prefilter::PrefilterReport;
use crate::geometry::GridTriangle;
use crate::io::error::{Result, output_context};
use crate::search::{SearchStats, Solution};
use std::io::Write;
use std::time::Duration;

/// Prefix of every line in the solution block
pub const SOLUTION_PREFIX: &str = "Printing Triangle Coordinates: ";

/// Line written when the search exhausts
pub const NO_SOLUTION: &str = "No solution found";

/// `(x1,y1) | (x2,y2) | (x3,y3)`
pub fn format_triangle(triangle: &GridTriangle) -> String {
    let [a, b, c] = triangle.vertices();
    format!("{a} | {b} | {c}")
}

/// Write one line per triangle followed by a blank line
///
/// # Errors
///
/// Returns an error if writing to `out` fails
pub fn write_solution<W: Write>(out: &mut W, solution: &Solution) -> Result<()> {
    for triangle in solution.triangles() {
        output_context(
            writeln!(out, "{SOLUTION_PREFIX}{}", format_triangle(triangle)),
            "solution block",
        )?;
    }
    output_context(writeln!(out), "solution block")
}

/// Write the explicit exhaustion notice
///
/// # Errors
///
/// Returns an error if writing to `out` fails
pub fn write_exhausted<W: Write>(out: &mut W) -> Result<()> {
    output_context(writeln!(out, "{NO_SOLUTION}"), "exhaustion notice")
}

/// Write each cell's leg/offset table and remaining candidates
///
/// Dimensions appear as `base height = sx sy sx sy ...`, candidates as
/// `( x y ) |( x y ) |( x y ) |`.
///
/// # Errors
///
/// Returns an error if writing to `out` fails
pub fn write_candidate_tables<W: Write>(out: &mut W, board: &Board) -> Result<()> {
    let op = "candidate table";
    for (index, cell) in board.cells().iter().enumerate() {
        output_context(
            writeln!(
                out,
                "Cell {index}: area {} at {} ({} candidates)",
                cell.area(),
                cell.anchor(),
                cell.candidates().len()
            ),
            op,
        )?;

        for entry in cell.dimensions() {
            let offsets: String = entry
                .offsets
                .iter()
                .map(|offset| format!("{} {} ", offset.x, offset.y))
                .collect();
            output_context(
                writeln!(
                    out,
                    "{} {} = {offsets}",
                    entry.dimension.base, entry.dimension.height
                ),
                op,
            )?;
        }

        for triangle in cell.candidates() {
            let line: String = triangle
                .vertices()
                .iter()
                .map(|v| format!("( {} {} ) |", v.x, v.y))
                .collect();
            output_context(writeln!(out, "{line}"), op)?;
        }
        output_context(writeln!(out), op)?;
    }
    Ok(())
}

/// One-line summary of a pre-filter pass
pub fn format_prefilter_summary(report: &PrefilterReport) -> String {
    format!(
        "Pre-filter kept {} of {} candidates across {} cells ({} removed)",
        report.retained(),
        report.generated(),
        report.cells.len(),
        report.removed()
    )
}

/// One-line summary of a finished search
pub fn format_search_summary(stats: &SearchStats, elapsed: Duration) -> String {
    format!(
        "Visited {} nodes, {} backtracks, deepest cell {} in {:.3}s",
        stats.nodes,
        stats.backtracks,
        stats.deepest,
        elapsed.as_secs_f64()
    )
}
