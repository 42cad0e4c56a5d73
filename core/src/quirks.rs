/// Behavioural switches for instructions whose semantics differ between interpreters.
///
/// The defaults give the conventional behaviour. Each flag set to `true` selects the legacy
/// behaviour of the browser interpreter this machine was first modelled on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Quirks {
    /// `8x0E` copies the whole of Vx into VF before shifting, rather than its high bit.
    pub legacy_shift_flag: bool,

    /// `Fx33` writes all three BCD digits to the same address I, so only the units digit
    /// survives, rather than to I, I+1 and I+2.
    pub legacy_bcd: bool,
}

impl Quirks {
    /// Every legacy behaviour enabled.
    pub fn legacy() -> Self {
        Quirks {
            legacy_shift_flag: true,
            legacy_bcd: true,
        }
    }
}
