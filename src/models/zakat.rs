use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;

/// Nisab expressed in grams of gold (20 mithqal).
pub const NISAB_GOLD_GRAMS: Decimal = dec!(87.48);
/// Nisab expressed in grams of silver (200 dirhams).
pub const NISAB_SILVER_GRAMS: Decimal = dec!(612.36);
/// One fortieth.
pub const ZAKAT_RATE: Decimal = dec!(0.025);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NisabBasis {
    Gold,
    Silver,
}

impl NisabBasis {
    pub fn as_str(&self) -> &'static str {
        match self {
            NisabBasis::Gold => "gold",
            NisabBasis::Silver => "silver",
        }
    }

    pub fn grams(&self) -> Decimal {
        match self {
            NisabBasis::Gold => NISAB_GOLD_GRAMS,
            NisabBasis::Silver => NISAB_SILVER_GRAMS,
        }
    }
}

impl std::str::FromStr for NisabBasis {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gold" => Ok(NisabBasis::Gold),
            "silver" => Ok(NisabBasis::Silver),
            _ => Err(anyhow::anyhow!("Nisab basis must be 'gold' or 'silver'")),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ZakatError {
    #[error("{field} cannot be negative")]
    NegativeInput { field: &'static str },
    #[error("the {metal} price per gram must be greater than zero")]
    InvalidPrice { metal: &'static str },
}

/// Zakatable holdings, all in the configured currency except the metals,
/// which are weights in grams.
#[derive(Debug, Clone, Default)]
pub struct ZakatAssets {
    pub cash: Decimal,
    pub gold_grams: Decimal,
    pub silver_grams: Decimal,
    pub business_goods: Decimal,
    pub liabilities: Decimal,
}

impl ZakatAssets {
    fn validate(&self) -> Result<(), ZakatError> {
        let fields = [
            ("cash", self.cash),
            ("gold grams", self.gold_grams),
            ("silver grams", self.silver_grams),
            ("business goods", self.business_goods),
            ("liabilities", self.liabilities),
        ];
        for (field, value) in fields {
            if value.is_sign_negative() && !value.is_zero() {
                return Err(ZakatError::NegativeInput { field });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ZakatAssessment {
    pub net_wealth: Decimal,
    pub nisab: Decimal,
    pub basis: NisabBasis,
    pub due: bool,
    pub amount: Decimal,
}

/// Closed-form zakat assessment: value the holdings, subtract liabilities,
/// compare against the nisab for the chosen basis, and take 2.5% if due.
pub fn assess(
    assets: &ZakatAssets,
    gold_price_per_gram: Decimal,
    silver_price_per_gram: Decimal,
    basis: NisabBasis,
) -> Result<ZakatAssessment, ZakatError> {
    assets.validate()?;

    if gold_price_per_gram <= Decimal::ZERO {
        return Err(ZakatError::InvalidPrice { metal: "gold" });
    }
    if silver_price_per_gram <= Decimal::ZERO {
        return Err(ZakatError::InvalidPrice { metal: "silver" });
    }
    let metal_price = match basis {
        NisabBasis::Gold => gold_price_per_gram,
        NisabBasis::Silver => silver_price_per_gram,
    };

    let gold_value = assets.gold_grams * gold_price_per_gram;
    let silver_value = assets.silver_grams * silver_price_per_gram;
    let net_wealth =
        assets.cash + gold_value + silver_value + assets.business_goods - assets.liabilities;

    let nisab = basis.grams() * metal_price;
    let due = net_wealth >= nisab && net_wealth > Decimal::ZERO;
    let amount = if due {
        (net_wealth * ZAKAT_RATE).round_dp(2)
    } else {
        Decimal::ZERO
    };

    Ok(ZakatAssessment {
        net_wealth: net_wealth.round_dp(2),
        nisab: nisab.round_dp(2),
        basis,
        due,
        amount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOLD: Decimal = dec!(75.00); // per gram
    const SILVER: Decimal = dec!(0.90);

    #[test]
    fn below_nisab_owes_nothing() {
        let assets = ZakatAssets {
            cash: dec!(100),
            ..Default::default()
        };
        let a = assess(&assets, GOLD, SILVER, NisabBasis::Silver).unwrap();
        assert!(!a.due);
        assert_eq!(a.amount, Decimal::ZERO);
        assert_eq!(a.nisab, dec!(551.12)); // 612.36 * 0.90
    }

    #[test]
    fn at_nisab_owes_one_fortieth() {
        let nisab = NISAB_SILVER_GRAMS * SILVER;
        let assets = ZakatAssets {
            cash: nisab,
            ..Default::default()
        };
        let a = assess(&assets, GOLD, SILVER, NisabBasis::Silver).unwrap();
        assert!(a.due);
        assert_eq!(a.amount, (nisab * ZAKAT_RATE).round_dp(2));
    }

    #[test]
    fn liabilities_can_push_below_threshold() {
        let assets = ZakatAssets {
            cash: dec!(10000),
            liabilities: dec!(9800),
            ..Default::default()
        };
        let a = assess(&assets, GOLD, SILVER, NisabBasis::Silver).unwrap();
        assert!(!a.due);
        assert_eq!(a.net_wealth, dec!(200.00));
    }

    #[test]
    fn metals_are_valued_at_their_own_price() {
        let assets = ZakatAssets {
            gold_grams: dec!(100),
            silver_grams: dec!(1000),
            ..Default::default()
        };
        let a = assess(&assets, GOLD, SILVER, NisabBasis::Gold).unwrap();
        // 100*75 + 1000*0.90 = 8400; gold nisab = 87.48*75 = 6561
        assert_eq!(a.net_wealth, dec!(8400.00));
        assert_eq!(a.nisab, dec!(6561.00));
        assert!(a.due);
        assert_eq!(a.amount, dec!(210.00));
    }

    #[test]
    fn gold_basis_is_the_higher_bar() {
        // Wealth above the silver nisab but below the gold one.
        let assets = ZakatAssets {
            cash: dec!(2000),
            ..Default::default()
        };
        assert!(assess(&assets, GOLD, SILVER, NisabBasis::Silver).unwrap().due);
        assert!(!assess(&assets, GOLD, SILVER, NisabBasis::Gold).unwrap().due);
    }

    #[test]
    fn negative_input_is_rejected() {
        let assets = ZakatAssets {
            cash: dec!(-5),
            ..Default::default()
        };
        assert_eq!(
            assess(&assets, GOLD, SILVER, NisabBasis::Silver),
            Err(ZakatError::NegativeInput { field: "cash" })
        );
    }

    #[test]
    fn zero_price_is_rejected() {
        let assets = ZakatAssets::default();
        assert_eq!(
            assess(&assets, Decimal::ZERO, SILVER, NisabBasis::Gold),
            Err(ZakatError::InvalidPrice { metal: "gold" })
        );
    }

    #[test]
    fn rounding_is_two_places() {
        let assets = ZakatAssets {
            cash: dec!(1000.01),
            ..Default::default()
        };
        let a = assess(&assets, GOLD, SILVER, NisabBasis::Silver).unwrap();
        // 1000.01 * 0.025 = 25.00025 -> 25.00
        assert_eq!(a.amount, dec!(25.00));
    }
}
