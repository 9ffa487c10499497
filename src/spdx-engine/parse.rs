use crate::{common::OutputContext, Format};
use anyhow::Error;
use spdx_engine::{
    diag::{self, Files},
    expr::Strictness,
    SpdxExpression,
};

#[derive(clap::ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Check {
    /// Any well-formed identifier is accepted
    Any,
    /// Identifiers must be in the SPDX license list
    Listed,
    /// Identifiers must be in the SPDX license list and not be deprecated
    Current,
}

#[derive(clap::Parser, Debug)]
pub struct Args {
    /// How strictly license identifiers are validated against the SPDX list
    #[arg(long, default_value = "any", value_enum)]
    check: Check,
    /// Removes duplicate operands from the expression before printing it
    #[arg(long)]
    simplify: bool,
    /// The expressions to parse
    #[arg(required = true)]
    expressions: Vec<String>,
}

pub fn cmd(ctx: OutputContext, args: Args) -> Result<bool, Error> {
    let strictness = match args.check {
        Check::Any => Strictness::AllowAny,
        Check::Listed => Strictness::AllowDeprecated,
        Check::Current => Strictness::AllowCurrent,
    };

    let mut files = Files::new();
    let mut diags = Vec::new();
    let mut parsed = Vec::new();

    for (i, expression) in args.expressions.iter().enumerate() {
        let file_id = files.add(format!("<expression {}>", i + 1), expression.as_str());

        match SpdxExpression::parse(expression) {
            Ok(expr) => {
                let expr = if args.simplify { expr.simplify() } else { expr };

                let invalid = expr.invalid_ids(strictness);
                if !invalid.is_empty() {
                    log::debug!(
                        "'{expr}' contains identifiers that are not {strictness}: {}",
                        invalid.join(", ")
                    );
                    diags.push(diag::disallowed_identifiers(
                        expression,
                        &invalid,
                        strictness,
                        file_id,
                    ));
                    continue;
                }

                parsed.push(expr);
            }
            Err(err) => diags.push(diag::parse_error(&err, file_id, 0)),
        }
    }

    ctx.emit_diagnostics(&files, &diags)?;

    for expr in &parsed {
        match ctx.format {
            Format::Human => {
                println!("{expr}");
                println!("  licenses: {}", expr.licenses().join(", "));
                if expr.offers_choice() {
                    for choice in expr.valid_choices() {
                        println!("  choice: {choice}");
                    }
                }
            }
            Format::Json => {
                let choices: Vec<_> = expr.valid_choices().iter().map(|c| c.to_string()).collect();
                println!(
                    "{}",
                    serde_json::json!({
                        "expression": expr,
                        "licenses": expr.licenses(),
                        "exceptions": expr.exceptions(),
                        "choices": choices,
                    })
                );
            }
        }
    }

    Ok(diags.is_empty())
}
