//! Quadratic command implementation.
//!
//! Closed-form roots of `a x^2 + b x + c`, with optional imaginary parts.

use anyhow::Result;
use clap::Args;
use num_complex::Complex64;

use iterum_math::quadratic::{quadratic, quadratic_complex, QuadraticRoots};

use crate::cli::OutputFormat;
use crate::error::CliResult;
use crate::output::{format_complex, print_header, print_json, print_table, KeyValue};

/// Arguments for the quadratic command.
#[derive(Args, Debug)]
pub struct QuadraticArgs {
    /// Coefficient of x^2 (real part)
    #[arg(allow_negative_numbers = true)]
    pub a: f64,

    /// Coefficient of x (real part)
    #[arg(allow_negative_numbers = true)]
    pub b: f64,

    /// Constant term (real part)
    #[arg(allow_negative_numbers = true)]
    pub c: f64,

    /// Imaginary part of a
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub a_im: f64,

    /// Imaginary part of b
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub b_im: f64,

    /// Imaginary part of c
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub c_im: f64,
}

impl QuadraticArgs {
    fn is_real(&self) -> bool {
        self.a_im == 0.0 && self.b_im == 0.0 && self.c_im == 0.0
    }

    fn solve(&self) -> CliResult<QuadraticRoots> {
        let roots = if self.is_real() {
            quadratic(self.a, self.b, self.c)?
        } else {
            quadratic_complex(
                Complex64::new(self.a, self.a_im),
                Complex64::new(self.b, self.b_im),
                Complex64::new(self.c, self.c_im),
            )?
        };
        Ok(roots)
    }
}

/// Execute the quadratic command.
pub fn execute(args: QuadraticArgs, format: OutputFormat) -> Result<()> {
    let result = args.solve()?;
    tracing::debug!("quadratic: {}", result.kind);

    match format {
        OutputFormat::Json => print_json(&result)?,
        OutputFormat::Table => {
            print_header("Quadratic roots");
            print_table(&[
                KeyValue::new("Kind", result.kind.to_string()),
                KeyValue::new("Discriminant", format_complex(result.discriminant)),
                KeyValue::new("x1", format_complex(result.roots[0])),
                KeyValue::new("x2", format_complex(result.roots[1])),
            ]);
        }
    }
    Ok(())
}
