use acs::algorithm::TerminatingIterativeAlgorithm;
use acs::exact::BranchAndBound;
use acs::grid::{Coord, CostModel, fits_in_cost_budget};
use acs::log::build_solver_logger_for_level;
use log::info;

/// Puzzle instance; the grid is fixed at compile time.
const HEIGHT: Coord = 4;
const WIDTH: Coord = 4;
const PRECISION: u32 = 40;

// worst-case accumulated cost must fit i64; revisit when changing the grid
const _: () = assert!(fits_in_cost_budget(HEIGHT, WIDTH, PRECISION));

fn main() -> anyhow::Result<()> {
    build_solver_logger_for_level(log::LevelFilter::Info);

    let model = CostModel::new(HEIGHT, WIDTH, PRECISION);
    let mut solver = BranchAndBound::new(&model);

    let solved = solver
        .run_to_completion()
        .expect("the search only stops once a complete placement surfaces");

    info!("objective={}", model.to_real(solved.cost_lower_bound));
    info!(
        "iterations={} open={}",
        solver.number_of_iterations(),
        solver.queue_size()
    );

    let stdout = std::io::stdout();
    solved.solution.write(&stdout)?;
    solved.solution.write_grid(&model, &stdout)?;

    Ok(())
}
