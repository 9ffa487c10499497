use crate::{common::OutputContext, Format};
use anyhow::Error;
use spdx_engine::{
    diag::{self, Files},
    mapping,
};

#[derive(clap::Parser, Debug)]
pub struct Args {
    /// Replaces unmappable licenses with a `LicenseRef-<namespace>-<name>`
    /// placeholder instead of reporting them as errors
    #[arg(short, long)]
    namespace: Option<String>,
    /// Also normalizes strings that are already valid SPDX expressions, eg.
    /// `GPL-2.0+` becomes `GPL-2.0-or-later`
    #[arg(long)]
    normalize: bool,
    /// The declared license strings to map
    #[arg(required = true)]
    declared: Vec<String>,
}

pub fn cmd(ctx: OutputContext, args: Args) -> Result<bool, Error> {
    let mut files = Files::new();
    let mut diags = Vec::new();

    for (i, declared) in args.declared.iter().enumerate() {
        let mapped = mapping::map(declared).or_else(|| {
            if !args.normalize {
                return None;
            }

            spdx_engine::SpdxExpression::parse(declared)
                .ok()
                .map(|expr| mapping::normalize(&expr))
        });

        let mapped = match (mapped, &args.namespace) {
            (Some(expr), _) => Some(expr),
            (None, Some(ns)) => {
                let placeholder = mapping::license_ref_placeholder(ns, declared);
                log::info!("using placeholder '{placeholder}' for '{declared}'");
                Some(placeholder)
            }
            (None, None) => {
                let file_id = files.add(format!("<declared {}>", i + 1), declared.as_str());
                diags.push(diag::unmapped_license(declared, file_id));
                None
            }
        };

        match ctx.format {
            Format::Human => match &mapped {
                Some(expr) => println!("{declared} => {expr}"),
                None => println!("{declared} => <unmapped>"),
            },
            Format::Json => println!(
                "{}",
                serde_json::json!({
                    "declared": declared,
                    "expression": mapped,
                })
            ),
        }
    }

    ctx.emit_diagnostics(&files, &diags)?;

    Ok(diags.is_empty())
}
