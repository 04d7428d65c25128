use rrc_config::{CfgOutput, OutputFormat};
use rrc_core::{EnumDescriptor, EnumErr};

/// Prints registry contents to stdout according to the output configuration
pub struct EnumPrinter {
    cfg: CfgOutput,
}

impl EnumPrinter {
    pub fn new(cfg: CfgOutput) -> Self {
        Self { cfg }
    }

    /// One line per enumeration: module, identifier, type label, option count
    pub fn print_list<'a>(&self, entries: impl Iterator<Item = (&'static str, &'a EnumDescriptor)>) {
        let rows: Vec<Vec<String>> = entries
            .map(|(module, d)| {
                let mut row = vec![module.to_string(), d.ident.to_string(), d.type_name.to_string(), d.nof_types().to_string()];
                if self.cfg.show_ext {
                    row.push(ext_marker(d));
                }
                row
            })
            .collect();

        let mut header = vec!["module", "ident", "type", "options"];
        if self.cfg.show_ext {
            header.push("ext");
        }
        self.print_rows(&header, &rows);
    }

    /// All options of one enumeration with their numbers
    pub fn print_enum(&self, module: &str, d: &EnumDescriptor) {
        if self.cfg.format == OutputFormat::Table {
            let kind = match d.number_type {
                Some(t) => format!(", numbers: {}", t),
                None => String::new(),
            };
            println!("{} ({}::{}), {} options{}", d.type_name, module, d.ident, d.nof_types(), kind);
            if self.cfg.show_ext {
                println!("extensible: {}", ext_marker(d));
            }
            println!();
        }

        let show_numbers = self.cfg.show_numbers && d.has_numbers();
        let rows: Vec<Vec<String>> = (0..d.nof_types())
            .map(|v| {
                let mut row = vec![v.to_string(), d.name(v).unwrap_or_default().to_string()];
                if show_numbers {
                    row.push(d.number(v).unwrap_or("-").to_string());
                    row.push(d.number_string(v).unwrap_or("-").to_string());
                }
                row
            })
            .collect();

        let mut header = vec!["idx", "label"];
        if show_numbers {
            header.push("number");
            header.push("number_string");
        }
        self.print_rows(&header, &rows);
    }

    pub fn print_verify(&self, checked: usize, errs: &[EnumErr]) {
        for e in errs {
            println!("FAIL {}", e);
        }
        if errs.is_empty() {
            println!("OK   {} enumerations consistent", checked);
        } else {
            println!("{} of {} checks failed", errs.len(), checked);
        }
    }

    fn print_rows(&self, header: &[&str], rows: &[Vec<String>]) {
        match self.cfg.format {
            OutputFormat::Plain => {
                for row in rows {
                    println!("{}", row.join("\t"));
                }
            }
            OutputFormat::Table => {
                let mut widths: Vec<usize> = header.iter().map(|h| h.len()).collect();
                for row in rows {
                    for (w, cell) in widths.iter_mut().zip(row) {
                        *w = (*w).max(cell.len());
                    }
                }
                println!("{}", format_row(header.iter().copied(), &widths));
                for row in rows {
                    println!("{}", format_row(row.iter().map(|s| s.as_str()), &widths));
                }
            }
        }
    }
}

fn ext_marker(d: &EnumDescriptor) -> String {
    if d.has_ext { format!("yes ({} ext)", d.nof_exts) } else { "no".to_string() }
}

fn format_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let line: Vec<String> = cells.zip(widths).map(|(c, w)| format!("{:<width$}", c, width = w)).collect();
    line.join("  ").trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_row() {
        let widths = [3, 6, 2];
        assert_eq!(format_row(["0", "n6", "6"].into_iter(), &widths), "0    n6      6");
        assert_eq!(format_row(["idx", "label", ""].into_iter(), &widths), "idx  label");
    }
}
