use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use htmlconst::application::{render_lines, LinesOptions};
use htmlconst::infrastructure::LocalFs;
use htmlconst::presentation::render_lines_json;

/// Run `lines`: print line-literal statements for `file` to stdout,
/// or one JSON document with `--json`
pub fn cmd_lines(
    file: &Path,
    config: Option<&Path>,
    variable: Option<String>,
    declare_type: Option<String>,
    no_declare: bool,
    json: bool,
) -> Result<()> {
    let loaded = super::load_config(config)?;
    let defaults = &loaded.config.line_literal;

    let options = LinesOptions {
        variable: variable.unwrap_or_else(|| defaults.variable.clone()),
        declare_type: if no_declare {
            None
        } else {
            declare_type.or_else(|| defaults.declare_type().map(str::to_string))
        },
    };

    let out = render_lines(&LocalFs::new(), file, &options)?;
    if json {
        println!("{}", render_lines_json(file, &options.variable, &out));
        return Ok(());
    }

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(out.as_bytes())
        .context("failed to write to stdout")?;
    Ok(())
}
