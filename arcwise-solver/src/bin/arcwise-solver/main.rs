mod os_signal_termination;
mod result;

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use arcwise_solver::core::asserts::ARCWISE_ASSERT_LEVEL_DEFINITION;
use arcwise_solver::core::asserts::ARCWISE_ASSERT_MODERATE;
use arcwise_solver::core::convert_case::Case;
use arcwise_solver::core::options::PropagationStrategy;
use arcwise_solver::core::options::SearchOptions;
use arcwise_solver::core::options::ValueOrdering;
use arcwise_solver::core::options::VariableOrdering;
use arcwise_solver::core::results::SatisfactionResult;
use arcwise_solver::core::search::BacktrackingSearch;
use arcwise_solver::core::statistics::configure_statistic_logging;
use arcwise_solver::core::termination::Combinator;
use arcwise_solver::core::termination::DecisionBudget;
use arcwise_solver::core::termination::TimeBudget;
use arcwise_solver::kenken::kenken_model;
use arcwise_solver::kenken::GridEncoding;
use arcwise_solver::kenken::KenKenGrid;
use clap::Parser;
use log::error;
use log::info;
use log::warn;
use log::LevelFilter;
use os_signal_termination::OsSignal;
use result::ArcwiseError;
use result::ArcwiseResult;

#[derive(Debug, Parser)]
#[command(
    help_template = "\
{before-help}{name} {version}
Authors: {author}
About: {about}

{usage-heading}\n{tab}{usage}

{all-args}{after-help}
",
    author,
    version,
    about,
    arg_required_else_help = true
)]
struct Args {
    /// The KenKen puzzle to solve.
    ///
    /// The first line holds the size of the grid, every further line one cage in the form
    /// `c1 c2 ... target operation`. A cell is the two-digit code `rowcolumn` counted from 1, the
    /// operation is one of `0`/`+`, `1`/`-`, `2`/`/` or `3`/`*`. Commas and brackets are ignored
    /// and `#` starts a comment.
    #[clap(verbatim_doc_comment)]
    puzzle_path: PathBuf,

    /// The propagation which is performed after every decision.
    #[arg(short = 'p', long, value_enum, default_value_t)]
    propagator: PropagationStrategy,

    /// The order in which the variables are assigned.
    #[arg(long, value_enum, default_value_t)]
    variable_ordering: VariableOrdering,

    /// The order in which the values of a variable are tried.
    #[arg(long, value_enum, default_value_t)]
    value_ordering: ValueOrdering,

    /// How the rows and columns are constrained to hold different values.
    #[arg(long, value_enum, default_value_t)]
    grid_encoding: GridEncoding,

    /// The time budget for the search, given in milliseconds.
    ///
    /// Possible values: u64 (Optional)
    #[arg(short = 't', long = "time-limit", verbatim_doc_comment)]
    time_limit: Option<u64>,

    /// The maximum number of decisions the search is allowed to make.
    ///
    /// Possible values: u64 (Optional)
    #[arg(long = "decision-limit", verbatim_doc_comment)]
    decision_limit: Option<u64>,

    /// Enables log message output from the solver.
    ///
    /// Possible values: bool
    #[arg(short = 'v', long = "verbose", verbatim_doc_comment)]
    verbose: bool,

    /// Enables logging of statistics from the solver.
    ///
    /// Possible values: bool
    #[arg(short = 's', long = "log-statistics", verbatim_doc_comment)]
    log_statistics: bool,
}

fn configure_logging(verbose: bool, log_statistics: bool) {
    if log_statistics {
        configure_statistic_logging("c", None, Some(Case::Camel), None);
    }

    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| {
            write!(buf, "c ")?;

            writeln!(buf, "{}", record.args())
        })
        .filter_level(level_filter)
        .target(env_logger::Target::Stdout)
        .init();
    info!("Logging successfully configured");
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            error!("Execution failed, error: {e}");
            std::process::exit(1);
        }
    }
}

fn run() -> ArcwiseResult<()> {
    let args = Args::parse();

    configure_logging(args.verbose, args.log_statistics);

    if ARCWISE_ASSERT_LEVEL_DEFINITION >= ARCWISE_ASSERT_MODERATE {
        warn!(
            "Potential performance degradation: the assert level is set to {ARCWISE_ASSERT_LEVEL_DEFINITION}, meaning many debug asserts are active which may result in performance degradation."
        );
    }

    let text = std::fs::read_to_string(&args.puzzle_path)?;
    let puzzle = text
        .parse::<KenKenGrid>()
        .map_err(|source| ArcwiseError::invalid_puzzle(&args.puzzle_path, source))?;
    let (mut csp, board) = kenken_model(&puzzle, args.grid_encoding)?;
    info!(
        "Read a {size}x{size} puzzle with {} cages",
        puzzle.cages().len(),
        size = puzzle.size()
    );

    let mut termination = Combinator::new(
        OsSignal::install()?,
        Combinator::new(
            args.time_limit
                .map(|limit| TimeBudget::starting_now(Duration::from_millis(limit))),
            args.decision_limit.map(DecisionBudget::new),
        ),
    );

    let mut search = BacktrackingSearch::new(SearchOptions {
        propagation: args.propagator,
        variable_ordering: args.variable_ordering,
        value_ordering: args.value_ordering,
    });
    let result = search.solve(&mut csp, &mut termination);

    match result {
        SatisfactionResult::Satisfiable(solution) => {
            if !csp.verify(&solution) {
                warn!("The solution does not satisfy every constraint");
            }
            print!("{}", board.render(&solution));
        }
        SatisfactionResult::Unsatisfiable => println!("UNSATISFIABLE"),
        SatisfactionResult::Unknown => println!("UNKNOWN"),
    }

    search.statistics().log();

    Ok(())
}
