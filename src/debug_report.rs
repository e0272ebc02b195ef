use menuscan::{FlatReport, MenuReport, Report, StallReport, Status};

mod ansi {
    const RESET: &str = "\x1b[0m";
    const DIM: &str = "\x1b[2m";
    const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RED: &str = "\x1b[31m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    /// Wraps text in escape codes, or passes it through when color is off.
    pub struct Palette {
        pub enabled: bool,
    }

    impl Palette {
        pub fn paint(&self, s: impl AsRef<str>, code: &str) -> String {
            let s = s.as_ref();
            if self.enabled { format!("{code}{s}{RESET}") } else { s.to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            self.paint(s, BOLD)
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            self.paint(s, DIM)
        }
    }
}

/// Compact human summary of a report, printed after it is written.
pub fn print_report(report: &Report, destination: &str, color: bool) {
    let palette = ansi::Palette { enabled: color };
    println!("\n{}", palette.bold(palette.paint(format!("🍽  {}", report.location()), ansi::CYAN)));

    match report {
        Report::Menu(r) => print_menu(r, &palette),
        Report::Stalls(r) => print_stalls(r, &palette),
        Report::Flat(r) => print_flat(r, &palette),
    }

    println!("  {} {}", palette.dim("→"), palette.paint(destination, ansi::GRAY));
}

fn status_label(status: Status, palette: &ansi::Palette) -> String {
    let code = match status {
        Status::Ok => ansi::GREEN,
        Status::NoDataToday => ansi::YELLOW,
        Status::FetchError => ansi::RED,
    };
    palette.paint(status.as_str(), code)
}

fn print_menu(report: &MenuReport, palette: &ansi::Palette) {
    println!(
        "  {}  │  {}  │  {}",
        palette.paint(&report.date, ansi::BLUE),
        if report.is_weekend { palette.paint("weekend", ansi::YELLOW) } else { palette.dim("weekday") },
        status_label(report.status, palette),
    );
    if report.status != Status::Ok {
        println!("  {}", palette.dim(&report.message));
    }

    for (meal, blocks) in report.meals.iter() {
        let items: usize = blocks.iter().map(|b| b.items.len()).sum();
        let label = format!("{meal}:");
        if blocks.is_empty() {
            println!("  {} {}", palette.paint(label, ansi::BLUE), palette.dim("✗ empty"));
            continue;
        }
        println!(
            "  {} {}",
            palette.paint(label, ansi::BLUE),
            palette.paint(format!("✓ {} sections, {} items", blocks.len(), items), ansi::GREEN)
        );
        for block in blocks.iter().take(6) {
            println!("    {} {}", palette.paint(&block.section, ansi::CYAN), palette.dim(format!("({})", block.items.len())));
        }
        if blocks.len() > 6 {
            println!("    {}", palette.dim(format!("... +{} more", blocks.len() - 6)));
        }
    }
}

fn print_stalls(report: &StallReport, palette: &ansi::Palette) {
    println!("  {}  │  {}", palette.paint(&report.date, ansi::BLUE), palette.dim(&report.hours_today));
    for stall in &report.sections {
        let hours = if stall.items.is_empty() {
            palette.paint(&stall.hours_today, ansi::YELLOW)
        } else {
            palette.paint(&stall.hours_today, ansi::GREEN)
        };
        println!(
            "  {} {} {}",
            palette.paint(&stall.section, ansi::CYAN),
            hours,
            palette.dim(format!("({} items)", stall.items.len()))
        );
    }
}

fn print_flat(report: &FlatReport, palette: &ansi::Palette) {
    println!(
        "  {}  │  {}  │  {}",
        palette.paint(&report.date, ansi::BLUE),
        status_label(report.status, palette),
        palette.dim(&report.message)
    );
    for item in report.menu.iter().take(8) {
        println!("    {}", palette.paint(&item.name, ansi::CYAN));
    }
    if report.menu.len() > 8 {
        println!("    {}", palette.dim(format!("... +{} more", report.menu.len() - 8)));
    }
}
