//! Parsing of raw text fields into student values.
//!
//! These checks run before the roster sees anything. Range checking is left
//! to the roster so that a parsed `" 101 "` still fails with `OutOfRange`.

use crate::error::ValidationError;

pub fn parse_name(raw: &str) -> Result<String, ValidationError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(name.to_string())
}

pub fn parse_grade(raw: &str) -> Result<f64, ValidationError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(ValidationError::EmptyGradeInput);
    }
    text.parse::<f64>()
        .map_err(|_| ValidationError::NotANumber(text.to_string()))
}

/// Parse both fields of an add form.
///
/// Emptiness of either field is reported before the grade is parsed.
pub fn parse_student_fields(name: &str, grade: &str) -> Result<(String, f64), ValidationError> {
    let name = parse_name(name)?;
    let grade = parse_grade(grade)?;
    Ok((name, grade))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_name() {
        assert_eq!(parse_name("  Ivan  ").unwrap(), "Ivan");
        assert_eq!(parse_name(""), Err(ValidationError::EmptyName));
        assert_eq!(parse_name(" \t "), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_parse_grade() {
        assert_eq!(parse_grade("87"), Ok(87.0));
        assert_eq!(parse_grade(" 92.5\n"), Ok(92.5));
        assert_eq!(parse_grade(" 101 "), Ok(101.0));
        assert_eq!(parse_grade("-4"), Ok(-4.0));
        assert_eq!(parse_grade(""), Err(ValidationError::EmptyGradeInput));
        assert_eq!(parse_grade("   "), Err(ValidationError::EmptyGradeInput));
        assert_eq!(
            parse_grade("abc"),
            Err(ValidationError::NotANumber("abc".to_string()))
        );
        assert_eq!(
            parse_grade("9 0"),
            Err(ValidationError::NotANumber("9 0".to_string()))
        );
    }

    #[test]
    fn test_parse_grade_accepts_special_floats() {
        // Rejected later by the roster's range check
        assert!(parse_grade("NaN").unwrap().is_nan());
        assert_eq!(parse_grade("inf"), Ok(f64::INFINITY));
    }

    #[test]
    fn test_parse_student_fields_reports_empty_before_nan() {
        assert_eq!(
            parse_student_fields("", "abc"),
            Err(ValidationError::EmptyName)
        );
        assert_eq!(
            parse_student_fields("Judy", ""),
            Err(ValidationError::EmptyGradeInput)
        );
        assert_eq!(
            parse_student_fields(" Judy ", "64.5"),
            Ok(("Judy".to_string(), 64.5))
        );
    }
}
