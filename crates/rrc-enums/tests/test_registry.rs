mod common;

use common::CollectSink;
use rrc_core::{EnumErr, Enumerated, RrcEnum, RrcEnumNumber, debug};
use rrc_enums::Registry;
use rrc_enums::rr_common::{PcchCfgNb, PhichCfgPhichRes, TimeAlignTimer};
use rrc_enums::si::{AcBarrCfgAcBarrFactor, IntervDlHopCfgCommonModeAR13IntervTddR13, MibDlBw, SibType};

/// Enumerations whose number strings are spelled out instead of rendered from the numbers
const EXPLICIT_STRING_TABLES: &[&str] = &[
    "phich_cfg_s::phich_res_e_",
    "pcch_cfg_s::nb_e_",
    "ac_barr_cfg_s::ac_barr_factor_e_",
    "barr_per_acdc_category_r13_s::acdc_barr_cfg_r13_s_::ac_barr_factor_r13_e_",
];

#[test]
fn test_registry_is_consistent() {
    debug::setup_logging_verbose();
    let reg = Registry::global();
    let errs = reg.verify();
    for e in &errs {
        tracing::error!("{}", e);
    }
    assert!(errs.is_empty());
    assert!(reg.len() > 180);
    assert_eq!(reg.modules().len(), 10);
}

#[test]
fn test_names_total_over_declared_range() {
    debug::setup_logging_verbose();
    for (module, d) in Registry::global().iter() {
        for v in 0..d.nof_types() {
            assert!(d.name(v).is_ok(), "{}::{} tag {}", module, d.ident, v);
        }
        assert_eq!(d.name(d.nof_types()), Err(EnumErr::NotInitialized { enum_type: d.type_name }));
        assert_eq!(
            d.name(d.nof_types() + 1),
            Err(EnumErr::InvalidValue { enum_type: d.type_name, value: d.nof_types() + 1, nof_types: d.nof_types() })
        );
    }
}

#[test]
fn test_labels_round_trip() {
    for (_, d) in Registry::global().iter() {
        for v in 0..d.nof_types() {
            let label = d.name(v).unwrap();
            assert_eq!(d.find(label), Ok(v), "{} {}", d.type_name, label);
        }
    }
}

#[test]
fn test_number_strings_match_numbers() {
    for (_, d) in Registry::global().iter().filter(|(_, d)| d.has_numbers()) {
        if EXPLICIT_STRING_TABLES.contains(&d.type_name) {
            continue;
        }
        assert_eq!(d.numbers, d.number_strings, "{}", d.type_name);
    }
}

#[test]
fn test_numbers_are_positional_prefix() {
    for (_, d) in Registry::global().iter().filter(|(_, d)| d.has_numbers()) {
        for (i, n) in d.numbers.iter().enumerate() {
            let v = i as u32;
            assert!(!d.name(v).unwrap().starts_with("spare"), "{} numbers a spare option", d.type_name);
            assert_eq!(d.number(v), Ok(n.as_str()));
            if d.options.iter().all(|o| *o != n.as_str()) {
                assert_eq!(d.find(n), Ok(v));
            }
        }
        for v in d.numbers.len() as u32..d.nof_types() {
            assert_eq!(d.number(v), Err(EnumErr::NoNumber { enum_type: d.type_name, value: v }));
        }
    }
}

fn check_typed<E: RrcEnumNumber>() {
    let mut sink = CollectSink::new();
    for e in E::VARIANTS.iter().copied() {
        let field = Enumerated::new(e);
        assert_eq!(field.to_str_with(&mut sink), e.name());
        if let Some(n) = e.try_number() {
            assert_eq!(field.to_number_with(&mut sink), n);
            assert_eq!(E::from_number(n), Some(e));
            let ns = field.to_number_string_with(&mut sink);
            assert_eq!(E::from_number_string(&ns), Some(e));
        }
    }
    assert!(sink.take_errs().is_empty());

    let null = Enumerated::<E>::nulltype();
    assert_eq!(null.to_str_with(&mut sink), "");
    assert_eq!(null.to_number_with(&mut sink), E::Number::default());
    assert_eq!(null.to_number_string_with(&mut sink), "");
    let errs = sink.take_errs();
    assert_eq!(errs.len(), 3);
    assert!(errs.iter().all(|e| *e == EnumErr::NotInitialized { enum_type: E::TYPE_NAME }));
}

#[test]
fn test_typed_lookups() {
    debug::setup_logging_verbose();
    check_typed::<MibDlBw>();
    check_typed::<PhichCfgPhichRes>();
    check_typed::<PcchCfgNb>();
    check_typed::<TimeAlignTimer>();
    check_typed::<AcBarrCfgAcBarrFactor>();
    check_typed::<IntervDlHopCfgCommonModeAR13IntervTddR13>();
}

#[test]
fn test_typed_and_erased_views_agree() {
    let reg = Registry::global();
    let (_, d) = reg.find("SibType").unwrap();
    assert_eq!(d.options, SibType::OPTIONS);
    assert_eq!(d.nof_exts, SibType::NOF_EXTS);
    assert!(d.has_ext);

    let (_, d) = reg.find("ac_barr_cfg_s::ac_barr_factor_e_").unwrap();
    assert_eq!(d.number(1), Ok("0.5"));
    assert_eq!(d.number_string(2), Ok("1.0"));
    assert_eq!(d.find("1.0"), Ok(2));
    assert_eq!(d.find("1"), Ok(2));

    let (_, d) = reg.find(PcchCfgNb::TYPE_NAME).unwrap();
    assert_eq!(d.number_string(PcchCfgNb::OneEighthT.idx()), Ok("1/8"));
    assert_eq!(d.number(PcchCfgNb::OneEighthT.idx()), Ok("0.125"));
    assert_eq!(d.find("1/16"), Ok(PcchCfgNb::OneSixteenthT.idx()));
}
