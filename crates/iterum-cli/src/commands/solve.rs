//! Solve command implementation.
//!
//! Runs one iterative method on a catalogue problem and prints its trace.

use anyhow::Result;
use clap::{Args, ValueEnum};
use num_complex::Complex64;
use serde::Serialize;
use tabled::Tabled;

use iterum_math::solvers::{
    aitken, bisection, fixed_point, modified_newton, muller, newton_raphson,
    newton_raphson_numerical, regula_falsi, secant, steffensen, Iterate, Solution, SolverConfig,
};

use crate::cli::OutputFormat;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::{
    format_change, format_complex, format_real, print_header, print_json, print_status,
    print_table,
};
use crate::problems::{self, Problem};

/// Iterative methods available from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Method {
    /// Bracket halving
    Bisection,
    /// Plain iteration of x = g(x)
    FixedPoint,
    /// Newton-Raphson with the analytic derivative
    Newton,
    /// Newton-Raphson with a central-difference derivative
    NewtonNumerical,
    /// Newton on f / f' for multiple roots
    ModifiedNewton,
    /// Two-point secant
    Secant,
    /// False position
    RegulaFalsi,
    /// Aitken Δ² acceleration of fixed-point iteration
    Aitken,
    /// Steffensen acceleration
    Steffensen,
    /// Müller's method in the complex plane
    Muller,
}

impl Method {
    /// Name used in messages.
    pub fn label(self) -> &'static str {
        match self {
            Method::Bisection => "bisection",
            Method::FixedPoint => "fixed-point",
            Method::Newton => "newton",
            Method::NewtonNumerical => "newton-numerical",
            Method::ModifiedNewton => "modified-newton",
            Method::Secant => "secant",
            Method::RegulaFalsi => "regula-falsi",
            Method::Aitken => "aitken",
            Method::Steffensen => "steffensen",
            Method::Muller => "muller",
        }
    }
}

/// Arguments for the solve command.
#[derive(Args, Debug)]
pub struct SolveArgs {
    /// Method to run
    #[arg(value_enum)]
    pub method: Method,

    /// Problem from `iterum problems`
    #[arg(short, long)]
    pub problem: String,

    /// First starting value. Defaults to the problem's guess, or the left end
    /// of its bracket for two-point methods.
    #[arg(long, allow_negative_numbers = true)]
    pub x0: Option<f64>,

    /// Second starting value (bracketing methods, secant, Müller)
    #[arg(long, allow_negative_numbers = true)]
    pub x1: Option<f64>,

    /// Third starting value (Müller)
    #[arg(long, allow_negative_numbers = true)]
    pub x2: Option<f64>,

    /// Convergence tolerance (overrides the configuration file)
    #[arg(short, long)]
    pub tolerance: Option<f64>,

    /// Iteration budget (overrides the configuration file)
    #[arg(short = 'n', long)]
    pub max_iterations: Option<u32>,
}

impl SolveArgs {
    fn solver_config(&self, defaults: SolverConfig) -> SolverConfig {
        let mut config = defaults;
        if let Some(tolerance) = self.tolerance {
            config = config.with_tolerance(tolerance);
        }
        if let Some(max_iterations) = self.max_iterations {
            config = config.with_max_iterations(max_iterations);
        }
        config
    }

    fn bracket(&self, problem: &Problem) -> (f64, f64) {
        (
            self.x0.unwrap_or(problem.bracket.0),
            self.x1.unwrap_or(problem.bracket.1),
        )
    }

    fn start(&self, problem: &Problem) -> f64 {
        self.x0.unwrap_or(problem.guess)
    }

    fn muller_start(&self, problem: &Problem) -> [Complex64; 3] {
        let real = |x: f64| Complex64::new(x, 0.0);
        [
            real(self.x0.unwrap_or(problem.guess - 0.5)),
            real(self.x1.unwrap_or(problem.guess)),
            real(self.x2.unwrap_or(problem.guess + 0.5)),
        ]
    }
}

/// One row of the printed trace.
#[derive(Debug, Serialize, Tabled)]
pub struct TraceRow {
    #[tabled(rename = "Step")]
    pub step: u32,
    #[tabled(rename = "Approximation")]
    pub value: String,
    #[tabled(rename = "Change")]
    pub change: String,
    #[tabled(rename = "Bracket")]
    pub bracket: String,
}

impl TraceRow {
    fn new<T: Copy>(iterate: &Iterate<T>, show: impl Fn(T) -> String) -> Self {
        Self {
            step: iterate.step,
            value: show(iterate.value),
            change: format_change(iterate.change),
            bracket: iterate
                .bracket
                .map(|(a, b)| format!("[{}, {}]", show(a), show(b)))
                .unwrap_or_default(),
        }
    }
}

/// Everything printed for one run in JSON mode.
#[derive(Debug, Serialize)]
struct Report<'a, T> {
    method: Method,
    problem: &'static str,
    config: SolverConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    base: Option<&'a [f64]>,
    solution: &'a Solution<T>,
}

fn fixed_point_form(method: Method, problem: &Problem) -> CliResult<fn(f64) -> f64> {
    problem.g.ok_or(CliError::Unsupported {
        method: method.label(),
        problem: problem.name,
        form: "fixed-point form",
    })
}

/// Execute the solve command.
pub fn execute(args: SolveArgs, config: &CliConfig, format: OutputFormat) -> Result<()> {
    let problem = problems::find(&args.problem)?;
    let method = args.method;
    let solver = args.solver_config(config.solver);

    tracing::info!(
        "solving {} with {} (tolerance {:e}, max {} iterations)",
        problem.name,
        method.label(),
        solver.tolerance,
        solver.max_iterations
    );

    let mut base = None;
    let solution = match method {
        Method::Bisection => {
            let (a, b) = args.bracket(problem);
            bisection(problem.f, a, b, &solver)?
        }
        Method::FixedPoint => {
            fixed_point(fixed_point_form(method, problem)?, args.start(problem), &solver)?
        }
        Method::Newton => newton_raphson(problem.f, problem.df, args.start(problem), &solver)?,
        Method::NewtonNumerical => {
            newton_raphson_numerical(problem.f, args.start(problem), &solver)?
        }
        Method::ModifiedNewton => modified_newton(
            problem.f,
            problem.df,
            problem.d2f,
            args.start(problem),
            &solver,
        )?,
        Method::Secant => {
            let (x0, x1) = args.bracket(problem);
            secant(problem.f, x0, x1, &solver)?
        }
        Method::RegulaFalsi => {
            let (x0, x1) = args.bracket(problem);
            regula_falsi(problem.f, x0, x1, &solver)?
        }
        Method::Aitken => {
            let g = fixed_point_form(method, problem)?;
            let accelerated = aitken(g, args.start(problem), &solver)?;
            base = Some(accelerated.base);
            accelerated.solution
        }
        Method::Steffensen => {
            steffensen(fixed_point_form(method, problem)?, args.start(problem), &solver)?
        }
        Method::Muller => {
            let [p0, p1, p2] = args.muller_start(problem);
            let solution = muller(problem.fz, p0, p1, p2, &solver)?;
            let report = Report {
                method,
                problem: problem.name,
                config: solver,
                base: None,
                solution: &solution,
            };
            return finish(&report, format, format_complex);
        }
    };

    let report = Report {
        method,
        problem: problem.name,
        config: solver,
        base: base.as_deref(),
        solution: &solution,
    };
    finish(&report, format, format_real)
}

fn finish<T>(report: &Report<'_, T>, format: OutputFormat, show: fn(T) -> String) -> Result<()>
where
    T: Copy + Serialize,
{
    let solution = report.solution;

    match format {
        OutputFormat::Json => print_json(report)?,
        OutputFormat::Table => {
            if let Some(base) = report.base {
                print_header("Fixed-point sequence");
                let rows: Vec<_> = base
                    .iter()
                    .zip(1u32..)
                    .map(|(&value, step)| TraceRow {
                        step,
                        value: format_real(value),
                        change: String::new(),
                        bracket: String::new(),
                    })
                    .collect();
                print_table(&rows);
            }

            print_header(&format!("{} on {}", report.method.label(), report.problem));
            let rows: Vec<_> = solution
                .trace
                .iter()
                .map(|iterate| TraceRow::new(iterate, show))
                .collect();
            print_table(&rows);

            print_status(report.method.label(), &solution.status, solution.iterations);
            println!("root ≈ {}", show(solution.root));
        }
    }

    if !solution.is_converged() {
        return Err(CliError::NotConverged {
            method: report.method.label(),
            status: solution.status.to_string(),
        }
        .into());
    }
    Ok(())
}
