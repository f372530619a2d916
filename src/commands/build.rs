use anyhow::Result;

use htmlconst::application::BuildUseCase;
use htmlconst::domain::ports::BuildEventSink;
use htmlconst::domain::value_objects::MissingPolicy;
use htmlconst::infrastructure::{ConsoleEventSink, JsonEventSink, LocalFs};
use htmlconst::presentation::AssetArgs;
use htmlconst::ui::detect_capabilities;

/// Run `build`. Returns `false` when any asset was missing or failed.
pub fn cmd_build(args: &AssetArgs, on_missing: Option<MissingPolicy>, json: bool) -> Result<bool> {
    let mut plan = super::plan(args)?;
    if let Some(policy) = on_missing {
        plan.options.on_missing = policy;
    }

    log::info!(
        "building {} asset(s) into {} (on_missing={:?})",
        plan.assets.len(),
        plan.options.out_dir.display(),
        plan.options.on_missing
    );

    let sink: Box<dyn BuildEventSink> = if json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(ConsoleEventSink::new(detect_capabilities()))
    };

    let use_case = BuildUseCase::new(LocalFs::new());
    let result = use_case.execute(&plan.assets, &plan.options, sink.as_ref())?;
    Ok(result.is_success())
}
