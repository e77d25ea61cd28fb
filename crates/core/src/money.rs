//! Monetary amounts with exactly two fraction digits.
//!
//! Prices are stored as integer cents and exposed as [`rust_decimal::Decimal`]
//! so arithmetic never goes through floating point. JSON carries amounts as
//! strings (`"19.99"`).

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Number of fraction digits every amount is kept at.
pub const SCALE: u32 = 2;

/// A currency amount, always at scale 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::from_parts(0, 0, 0, false, SCALE));

    /// Build an amount from a whole number of cents.
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, SCALE))
    }

    /// The amount in cents, or `None` if it does not fit in an `i64`.
    pub fn cents(&self) -> Option<i64> {
        i64::try_from(self.0.mantissa()).ok()
    }

    fn from_scaled(mut value: Decimal) -> Option<Money> {
        value.rescale(SCALE);
        i64::try_from(value.mantissa()).ok()?;
        Some(Money(value))
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Add two amounts, failing when the sum leaves the `i64` cent range.
    pub fn checked_add(&self, rhs: Money) -> Option<Money> {
        Money::from_scaled(self.0.checked_add(rhs.0)?)
    }

    /// Multiply by a quantity, failing on overflow.
    pub fn checked_mul_qty(&self, qty: i64) -> Option<Money> {
        Money::from_scaled(self.0.checked_mul(Decimal::from(qty))?)
    }
}

impl TryFrom<Decimal> for Money {
    type Error = CoreError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        if value.normalize().scale() > SCALE {
            return Err(CoreError::Validation(format!(
                "Amount {value} has more than {SCALE} fraction digits"
            )));
        }
        Money::from_scaled(value)
            .ok_or_else(|| CoreError::Validation(format!("Amount {value} is out of range")))
    }
}

impl From<Money> for Decimal {
    fn from(value: Money) -> Self {
        value.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(feature = "sqlx-support")]
mod sqlite {
    use sqlx::encode::IsNull;
    use sqlx::error::BoxDynError;
    use sqlx::sqlite::{Sqlite, SqliteArgumentValue, SqliteTypeInfo, SqliteValueRef};
    use sqlx::{Decode, Encode, Type};

    use super::Money;

    // Stored as INTEGER cents.
    impl Type<Sqlite> for Money {
        fn type_info() -> SqliteTypeInfo {
            <i64 as Type<Sqlite>>::type_info()
        }

        fn compatible(ty: &SqliteTypeInfo) -> bool {
            <i64 as Type<Sqlite>>::compatible(ty)
        }
    }

    impl<'q> Encode<'q, Sqlite> for Money {
        fn encode_by_ref(
            &self,
            buf: &mut Vec<SqliteArgumentValue<'q>>,
        ) -> Result<IsNull, BoxDynError> {
            let cents = self
                .cents()
                .ok_or_else(|| format!("Amount {self} does not fit in i64 cents"))?;
            <i64 as Encode<'q, Sqlite>>::encode_by_ref(&cents, buf)
        }
    }

    impl<'r> Decode<'r, Sqlite> for Money {
        fn decode(value: SqliteValueRef<'r>) -> Result<Self, BoxDynError> {
            let cents = <i64 as Decode<'r, Sqlite>>::decode(value)?;
            Ok(Money::from_cents(cents))
        }
    }
}
