use anyhow::{Result, bail};

use super::super::{
    args::{ExtractArgs, OutputFormat},
    exit_status::ExitStatus,
    report,
};
use crate::{
    core::ExtractContext,
    json_writer::{sort_by_text, to_json, write_output},
};

pub fn extract(args: ExtractArgs) -> Result<ExitStatus> {
    if args.output.is_some() && args.format == OutputFormat::Text {
        bail!("--output writes JSON; it cannot be combined with --format text");
    }

    let ctx = ExtractContext::new(&args)?;
    let mut result = ctx.extract();
    sort_by_text(&mut result.strings);

    match (&args.output, args.format) {
        (Some(path), _) => {
            let written = write_output(path, &result.strings, ctx.config.split_threshold)?;
            report::print_written(&written, result.strings.len());
        }
        (None, OutputFormat::Json) => print!("{}", to_json(&result.strings)?),
        (None, OutputFormat::Text) => report::report(&result.strings, ctx.options.context_lines),
    }

    report::print_summary(&result, ctx.verbose);

    Ok(ExitStatus::Success)
}
