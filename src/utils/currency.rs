use rust_decimal::Decimal;

/// Formats an amount as Brazilian reais: `R$ 1.234,56`.
pub fn format_brl(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let plain = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    format!("R$ {}{},{}", sign, grouped, frac_part)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_brl() {
        assert_eq!(format_brl(dec!(700)), "R$ 700,00");
        assert_eq!(format_brl(dec!(1140)), "R$ 1.140,00");
        assert_eq!(format_brl(dec!(666.67)), "R$ 666,67");
        assert_eq!(format_brl(dec!(1234567.891)), "R$ 1.234.567,89");
        assert_eq!(format_brl(dec!(0)), "R$ 0,00");
    }

    #[test]
    fn test_format_brl_negative() {
        assert_eq!(format_brl(dec!(-2000.5)), "R$ -2.000,50");
    }
}
