use lis_translator::{Direction, TranslationVerbose, UnitSummary};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_run(res: &TranslationVerbose, color: bool) {
    let palette = ansi::Palette::new(color);
    let arrow = match res.details.direction {
        Direction::Forward => "Lis → 中文",
        Direction::Reverse => "中文 → Lis",
    };
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Translating ({arrow}): \"{}\"", res.text), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Units ━━━", ansi::GRAY));
    if res.details.units.is_empty() {
        println!("{}", palette.dim("  No units produced (blank input)"));
    } else {
        for (idx, unit) in res.details.units.iter().enumerate() {
            println!("  {}", fmt_unit(idx, unit, &palette));
        }
    }
    if res.details.retractions > 0 {
        println!(
            "  {}",
            palette.paint(format!("{} earlier unit(s) retracted by prefix pull-in", res.details.retractions), ansi::YELLOW)
        );
    }

    println!("\n{}", palette.paint("━━━ Output ━━━", ansi::GRAY));
    println!("  {}", palette.bold(palette.paint(&res.output, ansi::GREEN)));

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    let invert = match res.details.invert {
        Some(d) => format!("{:?}", d),
        None => "-".to_string(),
    };
    println!(
        "  Total: {}  │  Invert: {}  │  Phrase probes: {}",
        palette.paint(format!("{:?}", res.details.total), ansi::GREEN),
        palette.paint(invert, ansi::CYAN),
        palette.dim(res.details.phrase_probes.to_string()),
    );
    println!();
}

fn fmt_unit(idx: usize, unit: &UnitSummary, palette: &ansi::Palette) -> String {
    format!(
        "{} {} {} {} {} {}",
        palette.paint(format!("[{}]", idx), ansi::GRAY),
        palette.paint(format!("{}..{}", unit.span.start, unit.span.end), ansi::YELLOW),
        palette.paint(format!("\"{}\"", unit.source), ansi::BLUE),
        palette.dim("→"),
        palette.bold(palette.paint(&unit.text, ansi::GREEN)),
        palette.dim(format!("({})", unit.kinds.label())),
    )
}
