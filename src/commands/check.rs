use anyhow::Result;

use htmlconst::application::CheckUseCase;
use htmlconst::infrastructure::LocalFs;
use htmlconst::presentation::{render_check_json, render_check_text, AssetArgs};
use htmlconst::ui::detect_capabilities;

/// Run `check`. Returns `false` unless every header is up to date.
pub fn cmd_check(args: &AssetArgs, json: bool) -> Result<bool> {
    let plan = super::plan(args)?;

    let use_case = CheckUseCase::new(LocalFs::new());
    let result = use_case.execute(&plan.assets, &plan.options)?;

    if json {
        println!("{}", render_check_json(&result));
    } else {
        print!("{}", render_check_text(&result, detect_capabilities()));
    }

    Ok(result.is_success())
}
