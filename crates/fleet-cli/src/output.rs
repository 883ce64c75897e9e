use console::style;
use dashboard::view::Panel;

pub struct Console;

impl Console {
    pub fn info(label: &str, value: &str) {
        println!("{}: {}", style(label).dim().cyan(), style(value).white());
    }

    pub fn success(text: &str) {
        println!("{} {}", style("✓").green().bold(), style(text).green());
    }

    pub fn error(text: &str) {
        println!("{} {}", style("✗").red().bold(), style(text).red());
    }
}

pub fn print_panel(panel: &Panel) {
    if panel.is_empty() {
        println!("{}", style("(no entries)").dim());
        return;
    }
    for line in panel.lines() {
        println!("{line}");
    }
}
