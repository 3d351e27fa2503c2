use crate::config::Config;
use crate::display;
use crate::error::Result;
use crate::renderer;

/// Show prayers, hiding answered ones when `active_only` or configured so
pub fn run(config: &Config, active_only: bool) -> Result<()> {
    let store = super::open_store(config);

    let show_answered = !(active_only || config.display.hide_answered);
    let listing = store.list(show_answered);

    display::print_markdown(&renderer::render_listing(&listing));
    Ok(())
}
