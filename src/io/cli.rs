//! Command-line interface running the full build, filter, search and report pipeline

use crate::board::Board;
use crate::board::layout::BoardLayout;
use crate::board::prefilter::prefilter;
use crate::io::error::{Result, output_context};
use crate::io::image::export_solution_as_png;
use crate::io::progress::SearchProgress;
use crate::io::report::{
    format_prefilter_summary, format_search_summary, write_candidate_tables, write_exhausted,
    write_solution,
};
use crate::search::observer::{DepthTrace, NoopObserver, SearchObserver};
use crate::search::{SearchOutcome, Solver};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "tritri")]
#[command(
    author,
    version,
    about = "Place one right triangle on every cell of the 18x18 triangle puzzle"
)]
/// Command-line arguments for the puzzle solver
pub struct Cli {
    /// Suppress progress and summary output on stderr
    #[arg(short, long)]
    pub quiet: bool,

    /// Print a dash-indented depth line on every recursive step
    #[arg(short, long)]
    pub trace: bool,

    /// Print each cell's leg/offset table and candidates before searching
    #[arg(short, long)]
    pub candidates: bool,

    /// Render the solution to this PNG file
    #[arg(short, long, value_name = "PNG")]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet && !self.trace
    }
}

/// Runs one solve according to the CLI arguments
pub struct SolveRunner {
    cli: Cli,
    layout: BoardLayout,
}

impl SolveRunner {
    /// Runner for the fixed puzzle
    pub fn new(cli: Cli) -> Self {
        Self::with_layout(cli, BoardLayout::puzzle())
    }

    /// Runner for an arbitrary layout
    pub const fn with_layout(cli: Cli, layout: BoardLayout) -> Self {
        Self { cli, layout }
    }

    /// Solve and write results to stdout
    ///
    /// # Errors
    ///
    /// Returns an error if writing output or exporting the image fails, or if
    /// the found solution fails verification
    pub fn run(&self) -> Result<SearchOutcome> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        let outcome = self.run_to(&mut out)?;
        output_context(out.flush(), "stdout")?;
        Ok(outcome)
    }

    /// Solve and write results to `out`
    ///
    /// The solution block is written only after the assignment passes
    /// verification. Exhaustion writes a single notice line and is not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns an error if writing output or exporting the image fails, or if
    /// the found solution fails verification
    // Allow print for user feedback on stderr
    #[allow(clippy::print_stderr)]
    pub fn run_to<W: Write>(&self, out: &mut W) -> Result<SearchOutcome> {
        let mut board = Board::from_layout(&self.layout);
        let report = prefilter(&mut board);
        if !self.cli.quiet {
            eprintln!("{}", format_prefilter_summary(&report));
        }

        if self.cli.candidates {
            write_candidate_tables(out, &board)?;
        }

        let start_time = Instant::now();
        let (outcome, stats) = {
            let observer: Box<dyn SearchObserver + '_> = if self.cli.trace {
                Box::new(DepthTrace::new(&mut *out))
            } else if self.cli.should_show_progress() {
                Box::new(SearchProgress::new(board.len()))
            } else {
                Box::new(NoopObserver)
            };
            let mut solver = Solver::new(&board, observer);
            let outcome = solver.run()?;
            (outcome, *solver.stats())
        };

        if !self.cli.quiet {
            eprintln!("{}", format_search_summary(&stats, start_time.elapsed()));
        }

        match &outcome {
            SearchOutcome::Solved(solution) => {
                solution.verify(&board)?;
                write_solution(out, solution)?;
                if let Some(path) = &self.cli.output {
                    export_solution_as_png(&board, solution, path)?;
                }
            }
            SearchOutcome::Exhausted => write_exhausted(out)?,
        }

        Ok(outcome)
    }
}
