//! Plan, pricing and options command handlers.

use captionstudio::{PlanStore, StudioSettings, render};

/// Handles the plan command.
pub fn handle_plan_command(settings: &StudioSettings) -> anyhow::Result<()> {
    let store = PlanStore::at_or_default(settings.plan().state_path().as_deref())?;
    let plan = store.load(
        *settings.plan().tier(),
        *settings.plan().free_daily_limit(),
        chrono::Utc::now().date_naive(),
    )?;
    print!("{}", render::render_plan(&plan));
    Ok(())
}

/// Handles the pricing command.
pub fn handle_pricing_command(settings: &StudioSettings) {
    print!("{}", render::render_pricing(*settings.plan().tier()));
}

/// Handles the options command.
pub fn handle_options_command() {
    print!("{}", render::render_options());
}
