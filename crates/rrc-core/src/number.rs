use core::fmt::{Debug, Display};

/// Numeric types an enumeration may map its options to.
/// Power offsets are signed, counts and durations unsigned, ratios floating point.
pub trait EnumNumber: Copy + PartialEq + Default + Debug + Display + 'static {
    /// Name of the Rust type, used for listings
    const TYPE_NAME: &'static str;

    /// Decimal text at natural precision. Relies on the shortest round-trip
    /// formatting of `Display`, so 2.0f32 renders as "2" and 0.4f32 as "0.4".
    fn render(self) -> String {
        self.to_string()
    }
}

macro_rules! impl_enum_number {
    ($($t:ty),+) => {
        $(
            impl EnumNumber for $t {
                const TYPE_NAME: &'static str = stringify!($t);
            }
        )+
    };
}

impl_enum_number!(u8, u16, u32, u64, i8, i16, i32, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_natural_precision() {
        assert_eq!(2.0f32.render(), "2");
        assert_eq!(0.4f32.render(), "0.4");
        assert_eq!(4.8f32.render(), "4.8");
        assert_eq!(0.0f32.render(), "0");
        assert_eq!((-6i8).render(), "-6");
        assert_eq!(10240u16.render(), "10240");
        assert_eq!(<f32 as EnumNumber>::TYPE_NAME, "f32");
    }
}
