/// Declares a closed RRC enumeration together with its label table and, optionally, its
/// number table and explicit number-string table.
///
/// ```ignore
/// rrc_enum! {
///     /// PHICH-Config
///     pub enum PhichCfgPhichRes = "phich_cfg_s::phich_res_e_" {
///         OneSixth = "oneSixth",
///         Half = "half",
///         One = "one",
///         Two = "two",
///     }
///     numbers: f32 = [0.16666667, 0.5, 1.0, 2.0] as ["1/6", "0.5", "1", "2"];
/// }
/// ```
///
/// Extensible enumerations append `, ext = N` after the label, N being the number of
/// extension options.
#[macro_export]
macro_rules! rrc_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident = $label:literal $(, ext = $nof_exts:literal)? {
            $( $variant:ident = $text:literal ),+ $(,)?
        }
        $( numbers: $nty:ty = [ $( $num:expr ),+ $(,)? ] $( as [ $( $ns:literal ),+ $(,)? ] )? ; )?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $variant ),+
        }

        impl $crate::RrcEnum for $name {
            const TYPE_NAME: &'static str = $label;
            const IDENT: &'static str = stringify!($name);
            const OPTIONS: &'static [&'static str] = &[ $( $text ),+ ];
            const VARIANTS: &'static [Self] = &[ $( $name::$variant ),+ ];
            $(
                const HAS_EXT: bool = true;
                const NOF_EXTS: u32 = $nof_exts;
            )?

            fn idx(self) -> u32 {
                self as u32
            }
        }

        $(
            impl $crate::RrcEnumNumber for $name {
                type Number = $nty;
                const NUMBERS: &'static [$nty] = &[ $( $num ),+ ];
                $(
                    const NUMBER_STRINGS: Option<&'static [&'static str]> = Some(&[ $( $ns ),+ ]);
                )?
            }
        )?

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(<Self as $crate::RrcEnum>::name(*self))
            }
        }

        impl std::convert::TryFrom<u32> for $name {
            type Error = $crate::EnumErr;
            fn try_from(x: u32) -> Result<Self, Self::Error> {
                <Self as $crate::RrcEnum>::from_idx(x).ok_or_else(|| {
                    $crate::EnumErr::out_of_range($label, x, <Self as $crate::RrcEnum>::NOF_TYPES)
                })
            }
        }

        impl From<$name> for u32 {
            fn from(e: $name) -> Self {
                <$name as $crate::RrcEnum>::idx(e)
            }
        }
    };
}
