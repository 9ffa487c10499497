use crate::common::{self, OutputContext};
use anyhow::{bail, Context as _, Error};
use spdx_engine::{
    diag::Files,
    findings::{cfg::MatcherConfig, FindingsMatcher, PackageFindings},
    PathBuf,
};

#[derive(clap::Parser, Debug)]
pub struct Args {
    /// Path to the matcher configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Overrides the tolerance in the configuration
    #[arg(short, long)]
    tolerance_lines: Option<u32>,
    /// Pretty prints the JSON output
    #[arg(long)]
    pretty: bool,
    /// Path to a JSON file containing an array of package findings, `-` reads
    /// from stdin
    findings: PathBuf,
}

fn load_matcher(ctx: OutputContext, path: Option<&PathBuf>) -> Result<FindingsMatcher, Error> {
    let Some(path) = path else {
        return Ok(FindingsMatcher::default());
    };

    let contents = common::read_file(path)?;

    let mut files = Files::new();
    let file_id = files.add(path.clone(), contents);

    let cfg = match MatcherConfig::parse(files.source(file_id)) {
        Ok(cfg) => cfg,
        Err(err) => {
            let diags = spdx_engine::findings::cfg::deser_diagnostics(&err, file_id);
            ctx.emit_diagnostics(&files, &diags)?;
            bail!("failed to deserialize config from '{path}'");
        }
    };

    match cfg.validate(file_id) {
        Ok(matcher) => Ok(matcher),
        Err(diags) => {
            ctx.emit_diagnostics(&files, &diags)?;
            bail!("'{path}' contains {} error(s)", diags.len());
        }
    }
}

pub fn cmd(ctx: OutputContext, args: Args) -> Result<(), Error> {
    let mut matcher = load_matcher(ctx, args.config.as_ref())?;

    if let Some(tolerance_lines) = args.tolerance_lines {
        matcher = matcher.with_tolerance_lines(tolerance_lines);
    }

    let input = if args.findings == "-" {
        std::io::read_to_string(std::io::stdin()).context("failed to read findings from stdin")?
    } else {
        common::read_file(&args.findings)?
    };

    let packages: Vec<PackageFindings> =
        serde_json::from_str(&input).context("failed to deserialize package findings")?;

    log::info!("matching findings of {} package(s)", packages.len());

    let matched = matcher.match_packages(&packages);

    let output = if args.pretty {
        serde_json::to_string_pretty(&matched)?
    } else {
        serde_json::to_string(&matched)?
    };

    println!("{output}");
    Ok(())
}
