use core::fmt;
use core::hash::Hash;
use core::marker::PhantomData;
use std::borrow::Cow;

use crate::enum_err::{EnumErr, EnumErrSink, LogSink};
use crate::number::EnumNumber;

/// A closed ASN.1 enumeration. Implemented through `rrc_enum!`, which guarantees that
/// `VARIANTS[i].idx() == i` and that `OPTIONS` and `VARIANTS` have equal length.
pub trait RrcEnum: Copy + Eq + Hash + fmt::Debug + 'static {
    /// Label used in diagnostics, e.g. `phich_cfg_s::phich_res_e_`
    const TYPE_NAME: &'static str;
    /// Rust identifier of the implementing type
    const IDENT: &'static str;
    /// ASN.1 identifiers, in declaration order
    const OPTIONS: &'static [&'static str];
    const VARIANTS: &'static [Self];
    const HAS_EXT: bool = false;
    const NOF_EXTS: u32 = 0;
    /// Number of declared options. Also the raw value of `nulltype`.
    const NOF_TYPES: u32 = Self::OPTIONS.len() as u32;

    fn idx(self) -> u32;

    fn from_idx(idx: u32) -> Option<Self> {
        Self::VARIANTS.get(idx as usize).copied()
    }

    fn name(self) -> &'static str {
        Self::OPTIONS.get(self.idx() as usize).copied().unwrap_or("")
    }

    fn from_name(s: &str) -> Option<Self> {
        string_to_enum(s)
    }

    fn is_spare(self) -> bool {
        self.name().starts_with("spare")
    }
}

/// Enumeration whose options encode a physical quantity. The number table is a positional
/// prefix of `OPTIONS`; trailing options (spares) have no numeric meaning.
pub trait RrcEnumNumber: RrcEnum {
    type Number: EnumNumber;
    const NUMBERS: &'static [Self::Number];
    /// Only set where the natural text is not the decimal rendering, e.g. "1/6"
    const NUMBER_STRINGS: Option<&'static [&'static str]> = None;

    fn try_number(self) -> Option<Self::Number> {
        Self::NUMBERS.get(self.idx() as usize).copied()
    }

    /// Numeric value. Logs and returns zero for options without numeric meaning.
    fn number(self) -> Self::Number {
        map_enum_number(Self::NUMBERS, Self::NOF_TYPES, self.idx(), Self::TYPE_NAME)
    }

    fn try_number_string(self) -> Option<Cow<'static, str>> {
        match Self::NUMBER_STRINGS {
            Some(table) => table.get(self.idx() as usize).map(|s| Cow::Borrowed(*s)),
            None => self.try_number().map(|n| Cow::Owned(n.render())),
        }
    }

    /// Decimal text of the number. Logs and returns an empty string for options without numeric meaning.
    fn number_string(self) -> Cow<'static, str> {
        number_string_at::<Self>(self.idx(), &mut LogSink)
    }

    fn from_number(n: Self::Number) -> Option<Self> {
        number_to_enum(n)
    }

    fn from_number_string(s: &str) -> Option<Self> {
        number_string_to_enum(s)
    }
}

/// Resolve `value` into its label
pub fn lookup_name(options: &[&'static str], value: u32, enum_type: &'static str) -> Result<&'static str, EnumErr> {
    options
        .get(value as usize)
        .copied()
        .ok_or_else(|| EnumErr::out_of_range(enum_type, value, options.len() as u32))
}

/// Resolve `value` into its number. `nof_types` is the option count of the enumeration, which
/// may exceed the length of the number table when trailing options carry no number.
pub fn lookup_number<T: Copy>(numbers: &[T], nof_types: u32, value: u32, enum_type: &'static str) -> Result<T, EnumErr> {
    if let Some(n) = numbers.get(value as usize) {
        return Ok(*n);
    }
    if value < nof_types {
        Err(EnumErr::NoNumber { enum_type, value })
    } else {
        Err(EnumErr::out_of_range(enum_type, value, nof_types))
    }
}

/// Label lookup that never fails: errors are logged and yield ""
pub fn convert_enum_idx(options: &[&'static str], value: u32, enum_type: &'static str) -> &'static str {
    convert_enum_idx_with(options, value, enum_type, &mut LogSink)
}

pub fn convert_enum_idx_with(
    options: &[&'static str],
    value: u32,
    enum_type: &'static str,
    sink: &mut dyn EnumErrSink,
) -> &'static str {
    lookup_name(options, value, enum_type).unwrap_or_else(|e| {
        sink.report(&e);
        ""
    })
}

/// Number lookup that never fails: errors are logged and yield zero
pub fn map_enum_number<T: EnumNumber>(numbers: &[T], nof_types: u32, value: u32, enum_type: &'static str) -> T {
    map_enum_number_with(numbers, nof_types, value, enum_type, &mut LogSink)
}

pub fn map_enum_number_with<T: EnumNumber>(
    numbers: &[T],
    nof_types: u32,
    value: u32,
    enum_type: &'static str,
    sink: &mut dyn EnumErrSink,
) -> T {
    lookup_number(numbers, nof_types, value, enum_type).unwrap_or_else(|e| {
        sink.report(&e);
        T::default()
    })
}

fn number_string_at<E: RrcEnumNumber>(value: u32, sink: &mut dyn EnumErrSink) -> Cow<'static, str> {
    let found = match E::NUMBER_STRINGS {
        Some(table) => lookup_number(table, E::NOF_TYPES, value, E::TYPE_NAME).map(Cow::Borrowed),
        None => lookup_number(E::NUMBERS, E::NOF_TYPES, value, E::TYPE_NAME).map(|n| Cow::Owned(n.render())),
    };
    found.unwrap_or_else(|e| {
        sink.report(&e);
        Cow::Borrowed("")
    })
}

/// Option whose label equals `s`
pub fn string_to_enum<E: RrcEnum>(s: &str) -> Option<E> {
    E::OPTIONS.iter().position(|o| *o == s).and_then(|i| E::from_idx(i as u32))
}

/// Option whose number equals `n`
pub fn number_to_enum<E: RrcEnumNumber>(n: E::Number) -> Option<E> {
    E::NUMBERS.iter().position(|v| *v == n).and_then(|i| E::from_idx(i as u32))
}

/// Option whose number string equals `s`
pub fn number_string_to_enum<E: RrcEnumNumber>(s: &str) -> Option<E> {
    E::VARIANTS
        .iter()
        .copied()
        .find(|e| e.try_number_string().is_some_and(|ns| ns == s))
}

/// Reports an access to choice field `expected` while the choice currently holds `current`.
/// Returns true when the access is valid.
pub fn check_choice_type<E: RrcEnum>(expected: E, current: Enumerated<E>, choice_type: &'static str) -> bool {
    check_choice_type_with(expected, current, choice_type, &mut LogSink)
}

pub fn check_choice_type_with<E: RrcEnum>(
    expected: E,
    current: Enumerated<E>,
    choice_type: &'static str,
    sink: &mut dyn EnumErrSink,
) -> bool {
    if current.raw() == expected.idx() {
        return true;
    }
    sink.report(&EnumErr::InvalidChoiceAccess {
        choice_type,
        expected: expected.name(),
        found: current.to_str_with(&mut |_: &EnumErr| {}),
    });
    false
}

/// An enumeration field as it lives inside a message structure: a raw tag that may hold
/// `nulltype` (== `E::NOF_TYPES`) or, when set from untrusted input, any other integer.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Enumerated<E: RrcEnum> {
    value: u32,
    _kind: PhantomData<E>,
}

impl<E: RrcEnum> Enumerated<E> {
    pub fn new(e: E) -> Self {
        Self::from_raw(e.idx())
    }

    pub fn nulltype() -> Self {
        Self::from_raw(E::NOF_TYPES)
    }

    /// Accepts any raw tag; out-of-range values surface as errors on lookup
    pub fn from_raw(value: u32) -> Self {
        Self { value, _kind: PhantomData }
    }

    pub fn raw(&self) -> u32 {
        self.value
    }

    pub fn get(&self) -> Option<E> {
        E::from_idx(self.value)
    }

    pub fn set(&mut self, e: E) {
        self.value = e.idx();
    }

    pub fn is_null(&self) -> bool {
        self.value == E::NOF_TYPES
    }

    pub fn nof_types(&self) -> u32 {
        E::NOF_TYPES
    }

    pub fn has_ext(&self) -> bool {
        E::HAS_EXT
    }

    pub fn nof_exts(&self) -> u32 {
        E::NOF_EXTS
    }

    pub fn to_str(&self) -> &'static str {
        self.to_str_with(&mut LogSink)
    }

    pub fn to_str_with(&self, sink: &mut dyn EnumErrSink) -> &'static str {
        convert_enum_idx_with(E::OPTIONS, self.value, E::TYPE_NAME, sink)
    }

    /// string_to_enum
    pub fn from_name(s: &str) -> Option<Self> {
        string_to_enum::<E>(s).map(Self::new)
    }
}

impl<E: RrcEnumNumber> Enumerated<E> {
    pub fn to_number(&self) -> E::Number {
        self.to_number_with(&mut LogSink)
    }

    pub fn to_number_with(&self, sink: &mut dyn EnumErrSink) -> E::Number {
        map_enum_number_with(E::NUMBERS, E::NOF_TYPES, self.value, E::TYPE_NAME, sink)
    }

    pub fn to_number_string(&self) -> Cow<'static, str> {
        self.to_number_string_with(&mut LogSink)
    }

    pub fn to_number_string_with(&self, sink: &mut dyn EnumErrSink) -> Cow<'static, str> {
        number_string_at::<E>(self.value, sink)
    }

    /// number_to_enum
    pub fn from_number(n: E::Number) -> Option<Self> {
        number_to_enum::<E>(n).map(Self::new)
    }

    /// number_string_to_enum
    pub fn from_number_string(s: &str) -> Option<Self> {
        number_string_to_enum::<E>(s).map(Self::new)
    }
}

impl<E: RrcEnum> Default for Enumerated<E> {
    fn default() -> Self {
        Self::nulltype()
    }
}

impl<E: RrcEnum> From<E> for Enumerated<E> {
    fn from(e: E) -> Self {
        Self::new(e)
    }
}

impl<E: RrcEnum> PartialEq<E> for Enumerated<E> {
    fn eq(&self, other: &E) -> bool {
        self.value == other.idx()
    }
}

impl<E: RrcEnum> fmt::Debug for Enumerated<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(e) => write!(f, "{}({})", E::IDENT, e.name()),
            None if self.is_null() => write!(f, "{}(nulltype)", E::IDENT),
            None => write!(f, "{}(invalid {})", E::IDENT, self.value),
        }
    }
}

impl<E: RrcEnum> fmt::Display for Enumerated<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debug;

    crate::rrc_enum! {
        enum EnumTest = "enum_test_e" {
            Test5 = "test5",
            Test10 = "test10",
            Test20 = "test20",
        }
        numbers: i32 = [5, 10, 20];
    }

    crate::rrc_enum! {
        enum Ratio = "ratio_e_", ext = 2 {
            OneSixth = "oneSixth",
            Half = "half",
            Both = "both",
            Spare1 = "spare1",
        }
        numbers: f32 = [0.16666667, 0.5] as ["1/6", "0.5"];
    }

    crate::rrc_enum! {
        enum Toggle = "toggle_c::types" {
            Release = "release",
            Setup = "setup",
        }
    }

    #[test]
    fn test_enum() {
        debug::setup_logging_verbose();
        let mut e = Enumerated::<EnumTest>::default();
        let e2 = Enumerated::new(EnumTest::Test10);
        e.set(EnumTest::Test10);

        assert_eq!(e.nof_types(), 3);
        assert_eq!(e.to_str(), "test10");
        assert_eq!(e.to_number(), 10);
        assert_eq!(Enumerated::<EnumTest>::from_name("test10"), Some(e2));
        assert_eq!(Enumerated::<EnumTest>::from_number(10), Some(e2));
        assert_eq!(Enumerated::<EnumTest>::from_number_string("10"), Some(e2));
        assert_eq!(e, EnumTest::Test10);
        assert!(!e.has_ext());
    }

    #[test]
    fn test_nulltype_and_invalid_values() {
        debug::setup_logging_verbose();
        let mut errs = Vec::new();
        let null = Enumerated::<EnumTest>::nulltype();
        assert!(null.is_null());
        assert_eq!(null.get(), None);
        assert_eq!(null.to_str_with(&mut |e: &EnumErr| errs.push(e.clone())), "");
        assert_eq!(null.to_number_with(&mut |e: &EnumErr| errs.push(e.clone())), 0);

        let bad = Enumerated::<EnumTest>::from_raw(42);
        assert_eq!(bad.to_str_with(&mut |e: &EnumErr| errs.push(e.clone())), "");
        assert_eq!(bad.to_number_string_with(&mut |e: &EnumErr| errs.push(e.clone())), "");

        assert_eq!(
            errs,
            vec![
                EnumErr::NotInitialized { enum_type: "enum_test_e" },
                EnumErr::NotInitialized { enum_type: "enum_test_e" },
                EnumErr::InvalidValue { enum_type: "enum_test_e", value: 42, nof_types: 3 },
                EnumErr::InvalidValue { enum_type: "enum_test_e", value: 42, nof_types: 3 },
            ]
        );

        // Logging variants degrade the same way
        assert_eq!(bad.to_str(), "");
        assert_eq!(format!("{:?}", bad), "EnumTest(invalid 42)");
        assert_eq!(format!("{:?}", null), "EnumTest(nulltype)");
    }

    #[test]
    fn test_numbers_prefix_and_spare() {
        debug::setup_logging_verbose();
        assert_eq!(Ratio::NOF_TYPES, 4);
        assert!(Ratio::HAS_EXT);
        assert_eq!(Ratio::NOF_EXTS, 2);

        assert_eq!(Ratio::Half.number(), 0.5);
        assert_eq!(Ratio::OneSixth.number_string(), "1/6");
        assert_eq!(Ratio::Both.try_number(), None);
        assert_eq!(Ratio::Spare1.try_number_string(), None);
        assert!(Ratio::Spare1.is_spare());
        assert!(!Ratio::Both.is_spare());

        let mut errs = Vec::new();
        let v = map_enum_number_with(Ratio::NUMBERS, Ratio::NOF_TYPES, 3, Ratio::TYPE_NAME, &mut |e: &EnumErr| {
            errs.push(e.clone())
        });
        assert_eq!(v, 0.0);
        assert_eq!(errs, vec![EnumErr::NoNumber { enum_type: "ratio_e_", value: 3 }]);

        assert_eq!(Ratio::from_number_string("1/6"), Some(Ratio::OneSixth));
        assert_eq!(Ratio::from_number(0.5), Some(Ratio::Half));
        assert_eq!(Ratio::from_number(0.25), None);
    }

    #[test]
    fn test_lookup_helpers() {
        let options = ["normal", "extended"];
        assert_eq!(lookup_name(&options, 1, "phich_dur_e_"), Ok("extended"));
        assert_eq!(
            lookup_name(&options, 2, "phich_dur_e_"),
            Err(EnumErr::NotInitialized { enum_type: "phich_dur_e_" })
        );
        assert_eq!(lookup_number(&[1u8, 2, 4], 4, 2, "num_pos_e_"), Ok(4));
        assert_eq!(lookup_number(&[1u8, 2, 4], 4, 3, "num_pos_e_"), Err(EnumErr::NoNumber { enum_type: "num_pos_e_", value: 3 }));
        assert_eq!(
            lookup_number(&[1u8, 2, 4], 4, 5, "num_pos_e_"),
            Err(EnumErr::InvalidValue { enum_type: "num_pos_e_", value: 5, nof_types: 4 })
        );
        assert_eq!(string_to_enum::<Toggle>("setup"), Some(Toggle::Setup));
        assert_eq!(string_to_enum::<Toggle>("Setup"), None);
    }

    #[test]
    fn test_macro_conversions() {
        assert_eq!(Toggle::try_from(1u32), Ok(Toggle::Setup));
        assert_eq!(Toggle::try_from(2u32), Err(EnumErr::NotInitialized { enum_type: "toggle_c::types" }));
        assert_eq!(u32::from(Toggle::Setup), 1);
        assert_eq!(Toggle::Release.to_string(), "release");
        assert_eq!(Toggle::IDENT, "Toggle");
        assert_eq!(Toggle::VARIANTS, &[Toggle::Release, Toggle::Setup]);
    }

    #[test]
    fn test_choice_type_check() {
        let mut errs = Vec::new();
        let current = Enumerated::new(Toggle::Release);
        assert!(check_choice_type_with(Toggle::Release, current, "toggle_c", &mut |e: &EnumErr| errs.push(e.clone())));
        assert!(!check_choice_type_with(Toggle::Setup, current, "toggle_c", &mut |e: &EnumErr| errs.push(e.clone())));
        assert!(!check_choice_type_with(Toggle::Setup, Enumerated::nulltype(), "toggle_c", &mut |e: &EnumErr| {
            errs.push(e.clone())
        }));
        assert_eq!(
            errs,
            vec![
                EnumErr::InvalidChoiceAccess { choice_type: "toggle_c", expected: "setup", found: "release" },
                EnumErr::InvalidChoiceAccess { choice_type: "toggle_c", expected: "setup", found: "" },
            ]
        );
    }
}
