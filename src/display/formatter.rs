//! Markdown terminal formatting using termimad

use termimad::MadSkin;

use crate::display::terminal::should_use_colors;

/// Print markdown to terminal with rich formatting (or plain fallback)
pub fn print_markdown(markdown: &str) {
    if should_use_colors() {
        let mut skin = MadSkin::default();
        customize_skin(&mut skin);
        skin.print_text(markdown);
    } else {
        println!("{}", markdown);
    }
}

/// Journal look: cyan title, yellow entry headings, dim rules
fn customize_skin(skin: &mut MadSkin) {
    use termimad::crossterm::style::{Attribute, Color::*};

    skin.headers[0].set_fg(Cyan);
    skin.headers[0].add_attr(Attribute::Bold);
    skin.headers[1].set_fg(Yellow);
    skin.headers[1].add_attr(Attribute::Bold);

    skin.bold.set_fg(White);
    skin.bold.add_attr(Attribute::Bold);
    skin.horizontal_rule.set_fg(DarkGrey);
}
