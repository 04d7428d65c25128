use std::collections::HashSet;

use crate::enum_err::EnumErr;
use crate::enumerated::{RrcEnum, RrcEnumNumber, lookup_name};
use crate::number::EnumNumber;

/// Type-erased view of one enumeration's tables, used wherever enumerations are handled by
/// name at runtime (registry, lookup tool, consistency checks).
#[derive(Debug, Clone, PartialEq)]
pub struct EnumDescriptor {
    pub type_name: &'static str,
    pub ident: &'static str,
    pub options: &'static [&'static str],
    pub has_ext: bool,
    pub nof_exts: u32,
    /// Rust type of the numbers, None when the enumeration has no numeric meaning
    pub number_type: Option<&'static str>,
    /// Numbers rendered at natural precision, positional prefix of `options`
    pub numbers: Vec<String>,
    /// Output of `number_string` for each numbered option
    pub number_strings: Vec<String>,
}

impl EnumDescriptor {
    pub fn of<E: RrcEnum>() -> Self {
        Self {
            type_name: E::TYPE_NAME,
            ident: E::IDENT,
            options: E::OPTIONS,
            has_ext: E::HAS_EXT,
            nof_exts: E::NOF_EXTS,
            number_type: None,
            numbers: Vec::new(),
            number_strings: Vec::new(),
        }
    }

    pub fn numbered<E: RrcEnumNumber>() -> Self {
        let numbers = E::NUMBERS.iter().map(|n| n.render()).collect();
        let number_strings = match E::NUMBER_STRINGS {
            Some(table) => table.iter().map(|s| s.to_string()).collect(),
            None => E::NUMBERS.iter().map(|n| n.render()).collect(),
        };
        Self {
            number_type: Some(<E::Number as EnumNumber>::TYPE_NAME),
            numbers,
            number_strings,
            ..Self::of::<E>()
        }
    }

    pub fn nof_types(&self) -> u32 {
        self.options.len() as u32
    }

    pub fn has_numbers(&self) -> bool {
        self.number_type.is_some()
    }

    pub fn name(&self, value: u32) -> Result<&'static str, EnumErr> {
        lookup_name(self.options, value, self.type_name)
    }

    pub fn number(&self, value: u32) -> Result<&str, EnumErr> {
        self.numbered_entry(&self.numbers, value)
    }

    pub fn number_string(&self, value: u32) -> Result<&str, EnumErr> {
        self.numbered_entry(&self.number_strings, value)
    }

    fn numbered_entry<'a>(&self, table: &'a [String], value: u32) -> Result<&'a str, EnumErr> {
        if !self.has_numbers() {
            // Valid tags of a label-only enumeration still have no number
            self.name(value)?;
            return Err(EnumErr::NoNumber { enum_type: self.type_name, value });
        }
        match table.get(value as usize) {
            Some(s) => Ok(s.as_str()),
            None if value < self.nof_types() => Err(EnumErr::NoNumber { enum_type: self.type_name, value }),
            None => Err(EnumErr::out_of_range(self.type_name, value, self.nof_types())),
        }
    }

    /// Reverse lookup of `text` as label, then number string, then number
    pub fn find(&self, text: &str) -> Result<u32, EnumErr> {
        let by_name = self.options.iter().position(|o| *o == text);
        let by_number_string = || self.number_strings.iter().position(|s| s == text);
        let by_number = || self.numbers.iter().position(|s| s == text);
        by_name
            .or_else(by_number_string)
            .or_else(by_number)
            .map(|i| i as u32)
            .ok_or_else(|| EnumErr::NoMatch { enum_type: self.type_name, input: text.to_string() })
    }

    /// Checks every table invariant and returns all violations found
    pub fn verify(&self) -> Vec<EnumErr> {
        let mut errs = Vec::new();
        let mut fail = |reason: String| {
            errs.push(EnumErr::Inconsistent { enum_type: self.type_name, reason });
        };

        if self.options.is_empty() {
            fail("no options declared".to_string());
        }

        let mut seen = HashSet::new();
        for o in self.options {
            if !seen.insert(*o) {
                fail(format!("label \"{}\" declared more than once", o));
            }
        }

        let first_spare = self.options.iter().position(|o| o.starts_with("spare"));
        let non_spare = first_spare.unwrap_or(self.options.len());
        if self.options[non_spare..].iter().any(|o| !o.starts_with("spare")) {
            fail(format!("spare options must be trailing, first spare at index {}", non_spare));
        }

        if !self.has_numbers() {
            if !self.numbers.is_empty() || !self.number_strings.is_empty() {
                fail("number table present without a number type".to_string());
            }
            return errs;
        }

        if self.numbers.is_empty() {
            fail("empty number table".to_string());
        }
        if self.numbers.len() > non_spare {
            fail(format!(
                "number table has {} entries, only {} non-spare options",
                self.numbers.len(),
                non_spare
            ));
        }
        if self.number_strings.len() != self.numbers.len() {
            fail(format!(
                "number string table has {} entries, number table {}",
                self.number_strings.len(),
                self.numbers.len()
            ));
        }

        let mut seen = HashSet::new();
        for n in &self.numbers {
            if !seen.insert(n.as_str()) {
                fail(format!("number {} declared more than once", n));
            }
        }

        errs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::rrc_enum! {
        enum Bw = "bw_e_" {
            N6 = "n6",
            N15 = "n15",
            N25 = "n25",
            Spare1 = "spare1",
        }
        numbers: u8 = [6, 15, 25];
    }

    crate::rrc_enum! {
        enum Dur = "phich_dur_e_" {
            Normal = "normal",
            Extended = "extended",
        }
    }

    fn broken(options: &'static [&'static str], numbers: &[&str]) -> EnumDescriptor {
        EnumDescriptor {
            type_name: "broken_e_",
            ident: "Broken",
            options,
            has_ext: false,
            nof_exts: 0,
            number_type: Some("u8"),
            numbers: numbers.iter().map(|s| s.to_string()).collect(),
            number_strings: numbers.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_numbered_descriptor() {
        let d = EnumDescriptor::numbered::<Bw>();
        assert_eq!(d.ident, "Bw");
        assert_eq!(d.nof_types(), 4);
        assert_eq!(d.number_type, Some("u8"));
        assert_eq!(d.name(1), Ok("n15"));
        assert_eq!(d.number(2), Ok("25"));
        assert_eq!(d.number(3), Err(EnumErr::NoNumber { enum_type: "bw_e_", value: 3 }));
        assert_eq!(d.number(4), Err(EnumErr::NotInitialized { enum_type: "bw_e_" }));
        assert_eq!(d.find("n25"), Ok(2));
        assert_eq!(d.find("15"), Ok(1));
        assert!(matches!(d.find("n100"), Err(EnumErr::NoMatch { .. })));
        assert!(d.verify().is_empty());
    }

    #[test]
    fn test_plain_descriptor() {
        let d = EnumDescriptor::of::<Dur>();
        assert!(!d.has_numbers());
        assert_eq!(d.number(0), Err(EnumErr::NoNumber { enum_type: "phich_dur_e_", value: 0 }));
        assert_eq!(
            d.number(5),
            Err(EnumErr::InvalidValue { enum_type: "phich_dur_e_", value: 5, nof_types: 2 })
        );
        assert!(d.verify().is_empty());
    }

    #[test]
    fn test_verify_reports_violations() {
        assert_eq!(broken(&["n1", "n1"], &["1"]).verify().len(), 1);
        assert_eq!(broken(&["spare1", "n1"], &["1"]).verify().len(), 2);
        assert_eq!(broken(&["n1", "spare1"], &["1", "2"]).verify().len(), 1);
        assert_eq!(broken(&["n1", "n2"], &["1", "1"]).verify().len(), 1);

        let mut d = broken(&["n1", "n2"], &["1", "2"]);
        d.number_strings.pop();
        let errs = d.verify();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].enum_type(), Some("broken_e_"));
    }
}
