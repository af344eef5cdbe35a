use crate::domain::model::Property;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const APARTMENT_BASE: Decimal = dec!(700);
const APARTMENT_SECOND_BEDROOM: Decimal = dec!(200);
const APARTMENT_NO_CHILDREN_FACTOR: Decimal = dec!(0.95);

const HOUSE_BASE: Decimal = dec!(900);
const HOUSE_SECOND_BEDROOM: Decimal = dec!(250);

const PARKING_SURCHARGE: Decimal = dec!(300);

const STUDIO_BASE: Decimal = dec!(1200);
const STUDIO_PARKING_TIER: Decimal = dec!(250);
const STUDIO_EXTRA_SPACE: Decimal = dec!(60);
const STUDIO_TIER_SPACES: u32 = 2;

impl Property {
    /// Monthly rent for this property, rounded to cents.
    pub fn monthly_rent(&self) -> Decimal {
        let rent = match *self {
            Property::Apartment {
                bedrooms,
                parking,
                has_children,
            } => {
                let mut value = APARTMENT_BASE;
                if bedrooms == 2 {
                    value += APARTMENT_SECOND_BEDROOM;
                }
                if parking > 0 {
                    value += PARKING_SURCHARGE;
                }
                // 無小孩折扣最後才乘上去
                if !has_children {
                    value *= APARTMENT_NO_CHILDREN_FACTOR;
                }
                value
            }
            Property::House { bedrooms, parking } => {
                let mut value = HOUSE_BASE;
                if bedrooms == 2 {
                    value += HOUSE_SECOND_BEDROOM;
                }
                if parking > 0 {
                    value += PARKING_SURCHARGE;
                }
                value
            }
            Property::Studio { parking } => match parking {
                0 => STUDIO_BASE,
                1..=STUDIO_TIER_SPACES => STUDIO_BASE + STUDIO_PARKING_TIER,
                _ => {
                    let extra = Decimal::from(parking - STUDIO_TIER_SPACES);
                    STUDIO_BASE + STUDIO_PARKING_TIER + extra * STUDIO_EXTRA_SPACE
                }
            },
        };

        rent.round_dp(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apartment_pricing() {
        assert_eq!(Property::apartment(1, 0, true).unwrap().monthly_rent(), dec!(700.00));
        assert_eq!(Property::apartment(2, 0, true).unwrap().monthly_rent(), dec!(900.00));
        assert_eq!(Property::apartment(1, 3, true).unwrap().monthly_rent(), dec!(1000.00));
        assert_eq!(Property::apartment(2, 1, false).unwrap().monthly_rent(), dec!(1140.00));
        assert_eq!(Property::apartment(1, 0, false).unwrap().monthly_rent(), dec!(665.00));
    }

    #[test]
    fn test_house_pricing() {
        assert_eq!(Property::house(1, 0).unwrap().monthly_rent(), dec!(900.00));
        assert_eq!(Property::house(2, 0).unwrap().monthly_rent(), dec!(1150.00));
        assert_eq!(Property::house(2, 4).unwrap().monthly_rent(), dec!(1450.00));
    }

    #[test]
    fn test_studio_tiers() {
        assert_eq!(Property::studio(0).monthly_rent(), dec!(1200.00));
        assert_eq!(Property::studio(1).monthly_rent(), dec!(1450.00));
        assert_eq!(Property::studio(2).monthly_rent(), dec!(1450.00));
        assert_eq!(Property::studio(3).monthly_rent(), dec!(1510.00));
        assert_eq!(Property::studio(5).monthly_rent(), dec!(1630.00));
    }

    #[test]
    fn test_parking_surcharge_is_flat() {
        let one = Property::house(1, 1).unwrap().monthly_rent();
        let many = Property::house(1, 10).unwrap().monthly_rent();
        assert_eq!(one, many);
    }
}
