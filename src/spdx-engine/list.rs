use crate::{
    common::{stdout_color, OutputContext},
    Color, Format,
};
use anyhow::Error;
use nu_ansi_term::Color as AnsiColor;
use spdx_engine::catalog;

#[derive(clap::Parser, Debug)]
pub struct Args {
    /// Includes deprecated licenses
    #[arg(short, long)]
    deprecated: bool,
    /// Lists license exceptions instead of licenses
    #[arg(short, long)]
    exceptions: bool,
    /// Output coloring, only applies to the human format
    #[arg(long, default_value = "auto", value_enum)]
    color: Color,
}

pub fn cmd(ctx: OutputContext, args: Args) -> Result<(), Error> {
    let color = stdout_color(args.color);

    let entries: Vec<_> = if args.exceptions {
        catalog::exceptions().map(catalog::Entry::Exception).collect()
    } else {
        catalog::licenses().map(catalog::Entry::License).collect()
    };

    for entry in entries
        .into_iter()
        .filter(|e| args.deprecated || !e.is_deprecated())
    {
        match ctx.format {
            Format::Human => {
                let id = if !color {
                    entry.id().to_owned()
                } else if entry.is_deprecated() {
                    AnsiColor::Yellow.paint(entry.id()).to_string()
                } else {
                    AnsiColor::Green.paint(entry.id()).to_string()
                };

                if entry.is_exception() {
                    println!("{id}");
                } else {
                    println!("{id}: {}", entry.full_name());
                }
            }
            Format::Json => {
                let (osi, fsf, copyleft) = match entry {
                    catalog::Entry::License(lic) => (
                        lic.is_osi_approved(),
                        lic.is_fsf_free_libre(),
                        lic.is_copyleft(),
                    ),
                    catalog::Entry::Exception(_) => (false, false, false),
                };

                println!(
                    "{}",
                    serde_json::json!({
                        "id": entry.id(),
                        "name": entry.full_name(),
                        "deprecated": entry.is_deprecated(),
                        "osi_approved": osi,
                        "fsf_libre": fsf,
                        "copyleft": copyleft,
                    })
                );
            }
        }
    }

    Ok(())
}
