use std::path::PathBuf;

use anyhow::Result;
use getopts::{Matches, Options};
use serde_json::Value;
use uuid::Uuid;

use integer_inspector::card::{Card, ManyCards};
use integer_inspector::format::{check_bit_width, DEFAULT_BIT_WIDTH};
use integer_inspector::inspect::Inspection;
use integer_inspector::range::BitRange;
use integer_inspector::settings::Settings;

fn main() -> Result<()> {
    let args: Vec<_> = std::env::args().collect();
    let program = args[0].clone();

    let opts = options();

    let matches = match opts.parse(&args[1..]) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("{e}");
            usage_and_exit(&opts, &program);
        }
    };

    if matches.opt_present("help") {
        usage_and_exit(&opts, &program);
    }

    if matches.opt_present("version") {
        eprintln!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        std::process::exit(0);
    }

    let settings = Settings {
        verbose: matches.opt_present("verbose"),
        threads: matches
            .opt_get::<usize>("threads")
            .inspect_err(|e| eprintln!("! threads is not a number: {e}"))?,
    };

    if let Some(text) = matches.opt_str("eval") {
        return eval(&text, &matches, settings);
    }

    if settings.verbose {
        let mut example = ManyCards::new();
        example.insert(Uuid::default(), Card::default());
        eprintln!(
            "? Example card file\n{:#}",
            serde_json::json!({ "cards": example })
        );
    }

    if matches.free.len() != 1 {
        eprintln!("! No JSON file was provided for the card definitions");
        usage_and_exit(&opts, &program);
    }
    let path: PathBuf = matches.free[0].clone().into();
    eprintln!("* Path of the card file: {:?}", path);
    eprintln!("* Reading the card file into memory");

    let raw_text = std::fs::read_to_string(&path)
        .inspect_err(|e| eprintln!("! Could not read the card file: {e}"))?;
    let json_value: Value = serde_json::from_str(&raw_text)
        .inspect_err(|e| eprintln!("! Could not parse the text of the card file as JSON: {e}"))?;
    if settings.verbose {
        eprintln!("? card file: {json_value:#}");
    }

    // print our response to stdout
    println!(
        "{}",
        integer_inspector::card::run_cards(&json_value, settings)?
    );

    Ok(())
}

/// Every option of the command line
fn options() -> Options {
    let mut opts = Options::new();
    opts.parsing_style(getopts::ParsingStyle::FloatingFrees);
    opts.optflag("h", "help", "print this help menu");
    opts.optflag(
        "V",
        "version",
        &format!("print the version of {}", env!("CARGO_PKG_NAME")),
    );
    opts.optflag("v", "verbose", "print what is going on to stderr");
    opts.optopt("t", "threads", "worker threads for the cards", "N");
    opts.optopt(
        "w",
        "width",
        &format!("bit width of the field, default {DEFAULT_BIT_WIDTH}"),
        "N",
    );
    opts.optopt("r", "range", "select bits, in either order", "LOW:HIGH");
    opts.optopt("e", "eval", "show a single value as text", "VALUE");

    opts
}

/// Print one value like a single card would show it
fn eval(text: &str, matches: &Matches, settings: Settings) -> Result<()> {
    let (bit_width, range) = eval_args(matches)?;
    println!("{}", render(text, bit_width, range, settings)?);
    Ok(())
}

/// The `--width` and `--range` options, checked
fn eval_args(matches: &Matches) -> Result<(usize, Option<BitRange>)> {
    let bit_width: usize = matches
        .opt_get_default("width", DEFAULT_BIT_WIDTH)
        .inspect_err(|e| eprintln!("! width is not a number: {e}"))?;
    let bit_width = check_bit_width(bit_width).inspect_err(|e| eprintln!("! {e}"))?;
    let range = match matches.opt_get::<BitRange>("range")? {
        Some(range) => Some(range.check(bit_width).inspect_err(|e| eprintln!("! {e}"))?),
        None => None,
    };
    Ok((bit_width, range))
}

fn render(
    text: &str,
    bit_width: usize,
    range: Option<BitRange>,
    settings: Settings,
) -> Result<String> {
    let value = integer_inspector::parse::parse(text).inspect_err(|e| eprintln!("! {e}"))?;
    if settings.verbose {
        integer_inspector::common::veprintln("value", format_args!("{value:#x}"));
        integer_inspector::common::veprintln("bit width", format_args!("{bit_width}"));
    }
    Ok(Inspection::new(&value, bit_width, range).to_string())
}

// `!` is a pseudo type and means the function will never return
fn usage_and_exit(opts: &Options, program: &str) -> ! {
    let brief = format!(
        "{}\nUsage: {program} [options] FILE\n       {program} [options] --eval VALUE",
        opts.short_usage(program)
    );
    eprintln!("{}", opts.usage(&brief));
    std::process::exit(1);
}

#[cfg(test)]
mod test {
    use integer_inspector::errors::{ArgumentError, ParseFailure};
    use integer_inspector::format::MAX_BIT_WIDTH;

    use super::*;

    fn args(a: &[&str]) -> Matches {
        options().parse(a).expect("could not parse the arguments")
    }

    #[test]
    fn test_eval_args() {
        let m = args(&["--eval", "42", "-w", "8", "-r", "2:1"]);
        assert_eq!(m.opt_str("eval").as_deref(), Some("42"));
        assert_eq!(eval_args(&m).unwrap(), (8, Some(BitRange::new(1, 2))));

        let m = args(&["--eval", "42"]);
        assert_eq!(eval_args(&m).unwrap(), (DEFAULT_BIT_WIDTH, None));
    }

    #[test]
    fn test_eval_args_rejected() {
        let e = eval_args(&args(&["-w", "0"])).unwrap_err();
        assert_eq!(e.downcast_ref::<ArgumentError>(), Some(&ArgumentError::ZeroWidth));

        let too_wide = (MAX_BIT_WIDTH + 1).to_string();
        let e = eval_args(&args(&["-w", too_wide.as_str()])).unwrap_err();
        assert!(matches!(
            e.downcast_ref::<ArgumentError>(),
            Some(ArgumentError::WidthTooLarge { .. })
        ));

        assert!(eval_args(&args(&["-w", "8", "-r", "3:8"])).is_err());
        assert!(eval_args(&args(&["-r", "3"])).is_err());
        assert!(eval_args(&args(&["-w", "eight"])).is_err());
    }

    #[test]
    fn test_render() {
        let m = args(&["-w", "8", "--range", "2:1"]);
        let (bit_width, range) = eval_args(&m).unwrap();
        let text = render("42", bit_width, range, Settings::default()).unwrap();
        assert_eq!(
            text,
            [
                "42",
                "052 as octal",
                "2A as hexadecimal",
                " 7 6 5 4 | 3 2 1 0",
                " 0 0 1 0 | 1 0 1 0",
                "42 [2 .. 1] = 1",
                "1 as octal",
                "1 as hexadecimal",
            ]
            .join("\n")
        );

        let e = render("12x4", 8, None, Settings::default()).unwrap_err();
        assert_eq!(e.downcast_ref::<ParseFailure>(), Some(&ParseFailure::new("12x4")));
    }
}
