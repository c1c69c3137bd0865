//! printf-style value format strings (`%.2f`, `%d%%`, `%s m/s`).
//!
//! A format string holds literal text and exactly one conversion of the form
//! `%[flags][width][.precision]type`; `%%` is a literal percent sign.

use crate::error::{BadgeError, Result};
use crate::value::ClassifiedValue;

/// Largest accepted field width or precision.
pub const MAX_FIELD: usize = 256;

#[derive(Debug, Default, Clone, Copy)]
struct Spec {
    left: bool,
    zero: bool,
    plus: bool,
    space: bool,
    alternate: bool,
    width: usize,
    precision: Option<usize>,
    conversion: char,
}

/// Apply `format` to `value`.
pub fn apply(format: &str, value: &ClassifiedValue) -> Result<String> {
    let invalid = |reason: &str| BadgeError::InvalidFormat {
        format: format.to_string(),
        reason: reason.to_string(),
    };

    let mut out = String::new();
    let mut converted = false;
    let mut chars = format.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        let mut spec = Spec::default();
        while let Some(&flag) = chars.peek() {
            match flag {
                '-' => spec.left = true,
                '0' => spec.zero = true,
                '+' => spec.plus = true,
                ' ' => spec.space = true,
                '#' => spec.alternate = true,
                _ => break,
            }
            chars.next();
        }
        spec.width = read_field(&mut chars).ok_or_else(|| invalid("width too large"))?;
        if chars.peek() == Some(&'.') {
            chars.next();
            let precision =
                read_field(&mut chars).ok_or_else(|| invalid("precision too large"))?;
            spec.precision = Some(precision);
        }
        spec.conversion = chars.next().ok_or_else(|| invalid("incomplete format"))?;

        if spec.conversion == '%' {
            out.push('%');
            continue;
        }
        if converted {
            return Err(invalid("only one conversion is allowed"));
        }
        converted = true;
        out.push_str(&convert(&spec, value).map_err(|reason| invalid(&reason))?);
    }

    if !converted {
        return Err(invalid("no conversion for the value"));
    }
    Ok(out)
}

fn convert(spec: &Spec, value: &ClassifiedValue) -> std::result::Result<String, String> {
    let body = match spec.conversion {
        's' => {
            let text = value.to_string();
            let text = match spec.precision {
                Some(p) => text.chars().take(p).collect(),
                None => text,
            };
            return Ok(pad(spec, String::new(), text, false));
        }
        'r' => {
            let text = match value {
                ClassifiedValue::Text(s) => format!("'{s}'"),
                other => other.to_string(),
            };
            return Ok(pad(spec, String::new(), text, false));
        }
        'd' | 'i' | 'u' => {
            let n = as_integer(value, spec.conversion)?;
            return Ok(signed(spec, n < 0, n.unsigned_abs().to_string()));
        }
        'x' | 'X' | 'o' => {
            let ClassifiedValue::Integer(n) = value else {
                return Err(format!(
                    "%{} requires an integer, not a {}",
                    spec.conversion,
                    value.kind().as_str()
                ));
            };
            let magnitude = n.unsigned_abs();
            let (digits, prefix) = match spec.conversion {
                'x' => (format!("{magnitude:x}"), "0x"),
                'X' => (format!("{magnitude:X}"), "0X"),
                _ => (format!("{magnitude:o}"), "0o"),
            };
            let digits = if spec.alternate {
                format!("{prefix}{digits}")
            } else {
                digits
            };
            return Ok(signed(spec, *n < 0, digits));
        }
        'f' | 'F' | 'e' | 'E' | 'g' | 'G' => as_real(value, spec.conversion)?,
        other => return Err(format!("unsupported conversion '%{other}'")),
    };

    let negative = body.is_sign_negative() && !body.is_nan();
    let magnitude = body.abs();
    let precision = spec.precision.unwrap_or(6);
    let digits = if !magnitude.is_finite() {
        let text = if magnitude.is_nan() { "nan" } else { "inf" };
        if spec.conversion.is_ascii_uppercase() {
            text.to_ascii_uppercase()
        } else {
            text.to_string()
        }
    } else {
        match spec.conversion {
            'f' | 'F' => format!("{magnitude:.precision$}"),
            'e' | 'E' => exponent(magnitude, precision, spec.conversion == 'E'),
            _ => general(magnitude, precision, spec.alternate, spec.conversion == 'G'),
        }
    };
    Ok(signed(spec, negative, digits))
}

fn as_integer(value: &ClassifiedValue, conversion: char) -> std::result::Result<i64, String> {
    match value {
        ClassifiedValue::Integer(n) => Ok(*n),
        ClassifiedValue::Float(x) if x.is_finite() => Ok(x.trunc() as i64),
        other => Err(format!(
            "%{conversion} requires a number, not a {}",
            other.kind().as_str()
        )),
    }
}

fn as_real(value: &ClassifiedValue, conversion: char) -> std::result::Result<f64, String> {
    match value {
        ClassifiedValue::Integer(n) => Ok(*n as f64),
        ClassifiedValue::Float(x) => Ok(*x),
        other => Err(format!(
            "%{conversion} requires a number, not a {}",
            other.kind().as_str()
        )),
    }
}

/// `d.ddde+XX` with at least two exponent digits.
fn exponent(x: f64, precision: usize, upper: bool) -> String {
    let raw = format!("{x:.precision$e}");
    let (mantissa, exp) = raw.split_once('e').unwrap_or((raw.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let sign = if exp < 0 { '-' } else { '+' };
    let e = if upper { 'E' } else { 'e' };
    format!("{mantissa}{e}{sign}{:02}", exp.abs())
}

fn general(x: f64, precision: usize, alternate: bool, upper: bool) -> String {
    let p = precision.max(1);
    if x == 0.0 {
        return if alternate {
            format!("{:.*}", p - 1, 0.0)
        } else {
            "0".to_string()
        };
    }
    // Exponent after rounding to `p` significant digits.
    let rounded = format!("{:.*e}", p - 1, x);
    let exp: i32 = rounded
        .split_once('e')
        .and_then(|(_, e)| e.parse().ok())
        .unwrap_or(0);

    let text = if exp < -4 || exp >= p as i32 {
        exponent(x, p - 1, upper)
    } else {
        let decimals = (p as i32 - 1 - exp).max(0) as usize;
        format!("{x:.decimals$}")
    };
    if alternate {
        text
    } else {
        strip_trailing_zeros(&text)
    }
}

fn strip_trailing_zeros(text: &str) -> String {
    let (mantissa, rest) = match text.find(['e', 'E']) {
        Some(idx) => text.split_at(idx),
        None => (text, ""),
    };
    if !mantissa.contains('.') {
        return text.to_string();
    }
    let trimmed = mantissa.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed}{rest}")
}

fn signed(spec: &Spec, negative: bool, digits: String) -> String {
    let sign = if negative {
        "-"
    } else if spec.plus {
        "+"
    } else if spec.space {
        " "
    } else {
        ""
    };
    pad(spec, sign.to_string(), digits, true)
}

/// Read a run of digits, or `None` when it exceeds [`MAX_FIELD`].
fn read_field(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<usize> {
    let mut n: usize = 0;
    while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
        n = n.checked_mul(10)?.checked_add(d as usize)?;
        if n > MAX_FIELD {
            return None;
        }
        chars.next();
    }
    Some(n)
}

fn pad(spec: &Spec, sign: String, body: String, numeric: bool) -> String {
    let len = sign.chars().count() + body.chars().count();
    if len >= spec.width {
        return format!("{sign}{body}");
    }
    let fill = spec.width - len;
    if spec.left {
        format!("{sign}{body}{}", " ".repeat(fill))
    } else if spec.zero && numeric {
        format!("{sign}{}{body}", "0".repeat(fill))
    } else {
        format!("{}{sign}{body}", " ".repeat(fill))
    }
}
