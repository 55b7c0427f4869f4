use serde::{Deserialize, Deserializer, Serializer};

/// Serializes a [`Plate`](crate::Plate) as its 6-character code.
///
/// Use with `#[serde(with = "platebatch::as_plate_code")]`.
pub mod as_plate_code {
    use super::*;
    use crate::Plate;

    pub fn serialize<S>(plate: &Plate, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(plate.as_str())
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Plate, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PlateVisitor;

        impl serde::de::Visitor<'_> for PlateVisitor {
            type Value = Plate;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("a 6-character plate code")
            }

            #[inline]
            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                v.parse().map_err(E::custom)
            }
        }

        d.deserialize_str(PlateVisitor)
    }
}

/// Serializes a [`Plate`](crate::Plate) as its enumeration index.
///
/// Use with `#[serde(with = "platebatch::as_plate_index")]`.
pub mod as_plate_index {
    use super::*;
    use crate::Plate;

    pub fn serialize<S>(plate: &Plate, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_u64(plate.index())
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Plate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let n = u64::deserialize(d)?;
        Plate::nth(n).map_err(<D::Error as serde::de::Error>::custom)
    }
}
