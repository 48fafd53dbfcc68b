//! Regeneration of the constant lookup tables.
//!
//! The engines never call into this module; it reproduces the tables under
//! `functions::tables` and prints them as Rust array initializers.

use std::fmt::{self, Write};

use itertools::Itertools;
use strum_macros::{Display, EnumIter, EnumString};

use crate::functions::tables::{
    log_slot_value, EXP_FRAC_OFFSET, EXP_FRAC_STEPS, EXP_INT_OFFSET,
};

/// A regenerable table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum Table {
    RecipF32,
    LogRecipF32,
    RecipF64,
    LogRecipF64,
    ExpInt,
    ExpFrac,
}

/// Bit patterns of a table, tagged with their storage width.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableData {
    F32(Vec<u32>),
    F64(Vec<u64>),
}

impl Table {
    pub fn static_name(self) -> &'static str {
        match self {
            Table::RecipF32 => "RECIP_F32",
            Table::LogRecipF32 => "LOG_RECIP_F32",
            Table::RecipF64 => "RECIP_F64",
            Table::LogRecipF64 => "LOG_RECIP_F64",
            Table::ExpInt => "EXP_INT",
            Table::ExpFrac => "EXP_FRAC",
        }
    }

    pub fn generate(self) -> TableData {
        match self {
            Table::RecipF32 => TableData::F32(
                (0..256).map(|i| recip_f32(i).to_bits()).collect(),
            ),
            Table::LogRecipF32 => TableData::F32(
                (0..256)
                    .map(|i| (f64::from(recip_f32(i)).ln() as f32).to_bits())
                    .collect(),
            ),
            Table::RecipF64 => TableData::F64(
                (0..256).map(|i| recip_f64(i).to_bits()).collect(),
            ),
            Table::LogRecipF64 => TableData::F64(
                (0..256).map(|i| recip_f64(i).ln().to_bits()).collect(),
            ),
            Table::ExpInt => TableData::F64(
                (-EXP_INT_OFFSET..=EXP_INT_OFFSET)
                    .map(|i| f64::from(i).exp().to_bits())
                    .collect(),
            ),
            Table::ExpFrac => TableData::F64(
                (-EXP_FRAC_OFFSET..=EXP_FRAC_OFFSET)
                    .map(|j| f64::from(j) / f64::from(EXP_FRAC_STEPS))
                    .map(|x| x.exp().to_bits())
                    .collect(),
            ),
        }
    }

    /// Writes the table as a `pub static` initializer.
    pub fn write_source<W: Write>(self, w: &mut W) -> fmt::Result {
        match self.generate() {
            TableData::F32(values) => {
                write_array(w, self.static_name(), "u32", &values, 8, 8)
            }
            TableData::F64(values) => {
                write_array(w, self.static_name(), "u64", &values, 16, 4)
            }
        }
    }
}

fn recip_f64(i: usize) -> f64 {
    1.0 / f64::from(log_slot_value(i))
}

fn recip_f32(i: usize) -> f32 {
    recip_f64(i) as f32
}

fn write_array<W, T>(
    w: &mut W,
    name: &str,
    ty: &str,
    values: &[T],
    digits: usize,
    per_line: usize,
) -> fmt::Result
where
    W: Write,
    T: fmt::LowerHex,
{
    writeln!(w, "pub static {name}: [{ty}; {}] = [", values.len())?;

    for line in &values.iter().chunks(per_line) {
        let line = line.map(|v| format!("{v:#0width$x},", width = digits + 2));
        writeln!(w, "    {}", line.format(" "))?;
    }

    writeln!(w, "];")
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::functions::tables::exp::{EXP_FRAC, EXP_INT};
    use crate::functions::tables::log::{
        LOG_RECIP_F32, LOG_RECIP_F64, RECIP_F32, RECIP_F64,
    };
    use crate::verify::ulp_difference;

    fn embedded(table: Table) -> TableData {
        match table {
            Table::RecipF32 => TableData::F32(RECIP_F32.to_vec()),
            Table::LogRecipF32 => TableData::F32(LOG_RECIP_F32.to_vec()),
            Table::RecipF64 => TableData::F64(RECIP_F64.to_vec()),
            Table::LogRecipF64 => TableData::F64(LOG_RECIP_F64.to_vec()),
            Table::ExpInt => TableData::F64(EXP_INT.to_vec()),
            Table::ExpFrac => TableData::F64(EXP_FRAC.to_vec()),
        }
    }

    #[test]
    fn regenerated_tables_match_embedded() {
        for table in Table::iter() {
            match (table.generate(), embedded(table)) {
                (TableData::F32(fresh), TableData::F32(fixed)) => {
                    assert_eq!(fresh.len(), fixed.len(), "{table}");
                    for (a, b) in fresh.into_iter().zip(fixed) {
                        let (a, b) = (f32::from_bits(a), f32::from_bits(b));
                        let ulp = ulp_difference(a, b);
                        assert!(ulp <= 1, "{table}: {a:e} vs {b:e}");
                    }
                }
                (TableData::F64(fresh), TableData::F64(fixed)) => {
                    assert_eq!(fresh.len(), fixed.len(), "{table}");
                    for (a, b) in fresh.into_iter().zip(fixed) {
                        let (a, b) = (f64::from_bits(a), f64::from_bits(b));
                        let ulp = ulp_difference(a, b);
                        assert!(ulp <= 1, "{table}: {a:e} vs {b:e}");
                    }
                }
                _ => panic!("{table}: storage width changed"),
            }
        }
    }

    #[test]
    fn reciprocal_is_exact() {
        assert_eq!(
            Table::RecipF32.generate(),
            TableData::F32(RECIP_F32.to_vec())
        );
        assert_eq!(
            Table::RecipF64.generate(),
            TableData::F64(RECIP_F64.to_vec())
        );
    }

    #[test]
    fn source_layout() {
        let mut out = String::new();
        Table::RecipF32.write_source(&mut out).unwrap();

        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 256 / 8 + 2);
        assert_eq!(lines[0], "pub static RECIP_F32: [u32; 256] = [");
        assert!(lines[1].starts_with("    0x40000000, 0x3ffe03f8,"));
        assert_eq!(lines.last(), Some(&"];"));
    }
}
