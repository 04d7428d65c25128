use clap::{Parser, Subcommand};

use rrc_config::{ToolConfig, toml_config};
use rrc_core::{EnumDescriptor, EnumErr, EnumErrSink, LogSink, convert_enum_idx_with, debug};
use rrc_enums::Registry;

mod printer;
use printer::EnumPrinter;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "LTE RRC enumeration lookup tool",
    long_about = "Lists the RRC ASN.1 enumerations, renders raw tags as labels and numbers, and checks the tables for consistency"
)]
struct Args {
    #[arg(short = 'c', long = "config", help = "TOML config with logging and output settings")]
    config: Option<String>,

    #[arg(short = 'l', long = "log", help = "Verbose log file, overrides debug_log from the config")]
    log: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all known enumerations
    List {
        #[arg(short = 'f', long = "filter", help = "Only list enumerations whose module, identifier or type contains this text")]
        filter: Option<String>,
    },
    /// Print every option of an enumeration
    Show {
        #[arg(help = "Type label (e.g. mib_s::dl_bw_e_) or identifier (e.g. MibDlBw)")]
        enum_type: String,
    },
    /// Render a raw tag as its ASN.1 label
    Name {
        enum_type: String,
        value: u32,
    },
    /// Render a raw tag as its number string
    Number {
        enum_type: String,
        value: u32,
    },
    /// Find the tag of a label, number or number string
    Lookup {
        enum_type: String,
        text: String,
    },
    /// Check all enumeration tables for consistency
    Verify,
}

/// Load configuration file, or defaults when none was given
fn load_config(cfg_path: Option<&str>) -> ToolConfig {
    let Some(path) = cfg_path else {
        return ToolConfig::default();
    };
    match toml_config::from_file(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration from {}: {}", path, e);
            std::process::exit(1);
        }
    }
}

/// Label of a raw tag. Out-of-range tags are an error in strict mode, otherwise they are
/// reported to `sink` and render as "".
fn resolve_name(d: &EnumDescriptor, value: u32, strict: bool, sink: &mut dyn EnumErrSink) -> Result<&'static str, EnumErr> {
    if strict {
        d.name(value)
    } else {
        Ok(convert_enum_idx_with(d.options, value, d.type_name, sink))
    }
}

/// Number string of a raw tag, same error handling as `resolve_name`
fn resolve_number_string<'a>(
    d: &'a EnumDescriptor,
    value: u32,
    strict: bool,
    sink: &mut dyn EnumErrSink,
) -> Result<&'a str, EnumErr> {
    match d.number_string(value) {
        Ok(s) => Ok(s),
        Err(e) if strict => Err(e),
        Err(e) => {
            sink.report(&e);
            Ok("")
        }
    }
}

fn run(cfg: &ToolConfig, command: Command) -> Result<(), EnumErr> {
    let registry = Registry::global();
    let printer = EnumPrinter::new(cfg.output.clone());

    match command {
        Command::List { filter } => match filter {
            Some(f) => printer.print_list(registry.filter(&f)),
            None => printer.print_list(registry.iter()),
        },
        Command::Show { enum_type } => {
            let (module, d) = registry.find(&enum_type)?;
            printer.print_enum(module, d);
        }
        Command::Name { enum_type, value } => {
            let (_, d) = registry.find(&enum_type)?;
            println!("{}", resolve_name(d, value, cfg.output.strict, &mut LogSink)?);
        }
        Command::Number { enum_type, value } => {
            let (_, d) = registry.find(&enum_type)?;
            println!("{}", resolve_number_string(d, value, cfg.output.strict, &mut LogSink)?);
        }
        Command::Lookup { enum_type, text } => {
            let (_, d) = registry.find(&enum_type)?;
            let value = d.find(&text)?;
            println!("{}\t{}", value, d.name(value)?);
        }
        Command::Verify => {
            let errs = registry.verify();
            printer.print_verify(registry.len(), &errs);
            if let Some(first) = errs.into_iter().next() {
                return Err(first);
            }
        }
    }
    Ok(())
}

fn main() {
    eprintln!("[+] LTE RRC enumeration lookup tool");

    let args = Args::parse();
    let mut cfg = load_config(args.config.as_deref());
    if args.log.is_some() {
        cfg.debug_log = args.log.clone();
    }
    let _log_guard = debug::setup_logging_default(cfg.debug_log.clone(), Some(cfg.logging.level.as_str()));
    tracing::debug!("config: {:?}", cfg);

    if let Err(e) = run(&cfg, args.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time_align_timer() -> &'static EnumDescriptor {
        let (_, d) = Registry::global().find("time_align_timer_e").unwrap();
        d
    }

    #[test]
    fn test_resolve_valid_tags() {
        debug::setup_logging_verbose();
        let d = time_align_timer();
        let mut errs = Vec::new();
        let mut sink = |e: &EnumErr| errs.push(e.clone());
        assert_eq!(resolve_name(d, 6, true, &mut sink), Ok("sf10240"));
        assert_eq!(resolve_name(d, 7, false, &mut sink), Ok("infinity"));
        assert_eq!(resolve_number_string(d, 7, true, &mut sink), Ok("-1"));
        assert_eq!(resolve_number_string(d, 0, false, &mut sink), Ok("500"));
        assert!(errs.is_empty());
    }

    #[test]
    fn test_strict_mode_fails_on_bad_tags() {
        let d = time_align_timer();
        let mut errs = Vec::new();
        let mut sink = |e: &EnumErr| errs.push(e.clone());
        let not_init = EnumErr::NotInitialized { enum_type: "time_align_timer_e" };
        let invalid = EnumErr::InvalidValue { enum_type: "time_align_timer_e", value: 12, nof_types: 8 };

        assert_eq!(resolve_name(d, 8, true, &mut sink), Err(not_init.clone()));
        assert_eq!(resolve_name(d, 12, true, &mut sink), Err(invalid.clone()));
        assert_eq!(resolve_number_string(d, 8, true, &mut sink), Err(not_init));
        assert_eq!(resolve_number_string(d, 12, true, &mut sink), Err(invalid));
        assert!(errs.is_empty());
    }

    #[test]
    fn test_lenient_mode_reports_and_prints_empty() {
        debug::setup_logging_verbose();
        let d = time_align_timer();
        let mut errs = Vec::new();
        let mut sink = |e: &EnumErr| errs.push(e.clone());

        assert_eq!(resolve_name(d, 8, false, &mut sink), Ok(""));
        assert_eq!(resolve_name(d, 12, false, &mut sink), Ok(""));
        assert_eq!(resolve_number_string(d, 8, false, &mut sink), Ok(""));
        assert_eq!(resolve_number_string(d, 12, false, &mut sink), Ok(""));
        assert_eq!(
            errs,
            vec![
                EnumErr::NotInitialized { enum_type: "time_align_timer_e" },
                EnumErr::InvalidValue { enum_type: "time_align_timer_e", value: 12, nof_types: 8 },
                EnumErr::NotInitialized { enum_type: "time_align_timer_e" },
                EnumErr::InvalidValue { enum_type: "time_align_timer_e", value: 12, nof_types: 8 },
            ]
        );
    }
}
