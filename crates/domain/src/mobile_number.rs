use thiserror::Error;

const INTERNATIONAL_LEN: usize = 14;
const LOCAL_LEN: usize = 11;
const COUNTRY_CODE: &str = "+234";

#[derive(Error, Debug, PartialEq)]
pub enum MobileNumberError {
    #[error("Mobile number could not be parsed: `{0}`")]
    Unparsable(String),
}

/// Normalizes a mobile number to the international format the sms carrier
/// requires.
///
/// International numbers like `+2347181354770` are kept as is, local numbers
/// like `07181354770` lose their leading digit and get the country code.
pub fn parse_mobile_number(mobile_number: &str) -> Result<String, MobileNumberError> {
    let mobile_number = mobile_number.trim();
    match mobile_number.chars().count() {
        INTERNATIONAL_LEN => Ok(mobile_number.to_string()),
        LOCAL_LEN => {
            let local = mobile_number.chars().skip(1).collect::<String>();
            Ok(format!("{}{}", COUNTRY_CODE, local))
        }
        _ => Err(MobileNumberError::Unparsable(mobile_number.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_international_numbers() {
        assert_eq!(
            parse_mobile_number("+2347181354770"),
            Ok("+2347181354770".to_string())
        );
    }

    #[test]
    fn adds_country_code_to_local_numbers() {
        assert_eq!(
            parse_mobile_number("07181354770"),
            Ok("+2347181354770".to_string())
        );
        assert_eq!(
            parse_mobile_number(" 07181354770 "),
            Ok("+2347181354770".to_string())
        );
    }

    #[test]
    fn rejects_other_lengths() {
        assert!(parse_mobile_number("").is_err());
        assert!(parse_mobile_number("12345").is_err());
        assert!(parse_mobile_number("+23471813547701").is_err());
    }
}
