use std::collections::HashMap;
use std::sync::OnceLock;

use rrc_core::{EnumDescriptor, EnumErr};

use crate::{asn1_common, common, common_ext, dl_ccch_msg, ho_cmd, paging, rr_common, security, si, ul_ccch_msg};

/// All enumerations of one ASN.1 module
#[derive(Debug)]
pub struct RegistryModule {
    pub name: &'static str,
    pub enums: Vec<EnumDescriptor>,
}

/// Index of every RRC enumeration, used for lookups by name at runtime
#[derive(Debug)]
pub struct Registry {
    modules: Vec<RegistryModule>,
}

static REGISTRY: OnceLock<Registry> = OnceLock::new();

impl Registry {
    /// Process-wide registry, built on first use
    pub fn global() -> &'static Registry {
        REGISTRY.get_or_init(Registry::build)
    }

    pub fn build() -> Self {
        let modules = vec![
            RegistryModule { name: "asn1_common", enums: asn1_common::descriptors() },
            RegistryModule { name: "common", enums: common::descriptors() },
            RegistryModule { name: "common_ext", enums: common_ext::descriptors() },
            RegistryModule { name: "rr_common", enums: rr_common::descriptors() },
            RegistryModule { name: "si", enums: si::descriptors() },
            RegistryModule { name: "paging", enums: paging::descriptors() },
            RegistryModule { name: "security", enums: security::descriptors() },
            RegistryModule { name: "ul_ccch_msg", enums: ul_ccch_msg::descriptors() },
            RegistryModule { name: "dl_ccch_msg", enums: dl_ccch_msg::descriptors() },
            RegistryModule { name: "ho_cmd", enums: ho_cmd::descriptors() },
        ];
        let registry = Self { modules };
        tracing::debug!("registry built: {} modules, {} enumerations", registry.modules.len(), registry.len());
        registry
    }

    pub fn modules(&self) -> &[RegistryModule] {
        &self.modules
    }

    /// Iterates (module name, descriptor) pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &EnumDescriptor)> + '_ {
        self.modules.iter().flat_map(|m| m.enums.iter().map(move |d| (m.name, d)))
    }

    pub fn len(&self) -> usize {
        self.modules.iter().map(|m| m.enums.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Finds an enumeration by type label (`mib_s::dl_bw_e_`) or Rust identifier (`MibDlBw`).
    /// Identifiers match case-insensitively.
    pub fn find(&self, query: &str) -> Result<(&'static str, &EnumDescriptor), EnumErr> {
        let query = query.trim();
        self.iter()
            .find(|(_, d)| d.type_name == query)
            .or_else(|| self.iter().find(|(_, d)| d.ident.eq_ignore_ascii_case(query)))
            .ok_or_else(|| EnumErr::UnknownType(query.to_string()))
    }

    /// Enumerations whose label, identifier or module contains `filter` (case-insensitive)
    pub fn filter<'a>(&'a self, filter: &'a str) -> impl Iterator<Item = (&'static str, &'a EnumDescriptor)> + 'a {
        let needle = filter.to_ascii_lowercase();
        self.iter().filter(move |(m, d)| {
            m.contains(&needle)
                || d.type_name.to_ascii_lowercase().contains(&needle)
                || d.ident.to_ascii_lowercase().contains(&needle)
        })
    }

    /// Runs the table checks of every enumeration, and checks that type labels and identifiers
    /// are unique across the registry
    pub fn verify(&self) -> Vec<EnumErr> {
        let mut errs = Vec::new();
        let mut labels: HashMap<&'static str, &'static str> = HashMap::new();
        let mut idents: HashMap<String, &'static str> = HashMap::new();

        for (module, d) in self.iter() {
            errs.extend(d.verify());

            if let Some(prev) = labels.insert(d.type_name, module) {
                errs.push(EnumErr::Inconsistent {
                    enum_type: d.type_name,
                    reason: format!("type label declared in both {} and {}", prev, module),
                });
            }
            if let Some(prev) = idents.insert(d.ident.to_ascii_lowercase(), module) {
                errs.push(EnumErr::Inconsistent {
                    enum_type: d.type_name,
                    reason: format!("identifier {} declared in both {} and {}", d.ident, prev, module),
                });
            }
        }

        if errs.is_empty() {
            tracing::debug!("verified {} enumerations", self.len());
        }
        errs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find() {
        let reg = Registry::global();
        let (module, d) = reg.find("mib_s::dl_bw_e_").unwrap();
        assert_eq!(module, "si");
        assert_eq!(d.ident, "MibDlBw");

        let (_, d) = reg.find("timealigntimer").unwrap();
        assert_eq!(d.type_name, "time_align_timer_e");

        assert_eq!(reg.find("no_such_e"), Err(EnumErr::UnknownType("no_such_e".to_string())));
    }

    #[test]
    fn test_filter() {
        let reg = Registry::global();
        let hits: Vec<_> = reg.filter("ue_timers_and_consts").map(|(_, d)| d.ident).collect();
        assert!(hits.contains(&"UeTimersAndConstsT300"));
        assert!(hits.iter().all(|i| i.starts_with("UeTimersAndConsts")));

        let paging: Vec<_> = reg.filter("PAGING").map(|(_, d)| d.ident).collect();
        assert!(paging.contains(&"PagingRecordCnDomain"));
        assert!(paging.contains(&"PcchCfgV1310MpdcchNumRepeatPagingR13"));
    }
}
