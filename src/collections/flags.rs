// src/collections/flags.rs

//! Packing sets of enum values into a single `u64`, one bit per ordinal.

use crate::collections::error::FlagsError;

/// Enum-like types with a stable, dense ordinal.
pub trait Ordinal: Sized + Copy {
    fn ordinal(&self) -> u32;

    fn from_ordinal(ordinal: u32) -> Option<Self>;
}

/// Set bit `ordinal` for every value.
pub fn pack<E, I>(values: I) -> Result<u64, FlagsError>
where
    E: Ordinal,
    I: IntoIterator<Item = E>,
{
    values.into_iter().try_fold(0u64, |bits, value| {
        let ordinal = value.ordinal();
        if ordinal >= u64::BITS {
            return Err(FlagsError::OrdinalOutOfRange { ordinal });
        }
        Ok(bits | (1u64 << ordinal))
    })
}

/// Decode `bits` back into values, in ascending ordinal order.
pub fn unpack<E: Ordinal>(bits: u64) -> Result<Vec<E>, FlagsError> {
    let mut values = Vec::with_capacity(bits.count_ones() as usize);
    let mut rest = bits;
    while rest != 0 {
        let bit = rest.trailing_zeros();
        let value = E::from_ordinal(bit).ok_or(FlagsError::UnknownBit { bit })?;
        values.push(value);
        rest &= rest - 1;
    }
    Ok(values)
}

/// Whether `value` is present in `bits`. Out-of-range ordinals are never present.
pub fn contains<E: Ordinal>(bits: u64, value: E) -> bool {
    let ordinal = value.ordinal();
    ordinal < u64::BITS && bits & (1u64 << ordinal) != 0
}
