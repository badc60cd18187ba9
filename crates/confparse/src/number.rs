/// Format a f64 as canonical cell text.
/// Requirements:
/// - no exponent notation
/// - no trailing fractional zeros (strip the decimal point if none remains)
/// - -0 normalized to 0
/// - non-finite values spelled `inf`, `-inf`, `NaN` so the text stays
///   re-parseable by `str::parse::<f64>`
pub(crate) fn format_canonical_f64(value: f64) -> String {
    if value.is_nan() {
        return String::from("NaN");
    }
    if value.is_infinite() {
        return String::from(if value.is_sign_negative() { "-inf" } else { "inf" });
    }
    if value == 0.0 {
        return String::from("0");
    }

    let negative = value < 0.0;
    let mut buf = ryu::Buffer::new();
    let raw = buf.format_finite(if negative { -value } else { value });
    canonicalize(raw, negative)
}

/// f32 counterpart of [`format_canonical_f64`]; formats with f32 precision
/// rather than widening, so `0.1f32` renders as `0.1`.
pub(crate) fn format_canonical_f32(value: f32) -> String {
    if value.is_nan() {
        return String::from("NaN");
    }
    if value.is_infinite() {
        return String::from(if value.is_sign_negative() { "-inf" } else { "inf" });
    }
    if value == 0.0 {
        return String::from("0");
    }

    let negative = value < 0.0;
    let mut buf = ryu::Buffer::new();
    let raw = buf.format_finite(if negative { -value } else { value });
    canonicalize(raw, negative)
}

fn canonicalize(raw: &str, negative: bool) -> String {
    let body = if let Some(exp_index) = raw.find(['e', 'E']) {
        let mantissa = &raw[..exp_index];
        let exp: i32 = raw[exp_index + 1..].parse().unwrap_or(0);
        expand_exponent(mantissa, exp)
    } else {
        String::from(raw)
    };
    let trimmed = trim_fraction(body);
    if negative {
        let mut out = String::with_capacity(1 + trimmed.len());
        out.push('-');
        out.push_str(&trimmed);
        out
    } else {
        trimmed
    }
}

fn expand_exponent(mantissa: &str, exp: i32) -> String {
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let mut digits = String::with_capacity(int_part.len() + frac_part.len());
    digits.push_str(int_part);
    digits.push_str(frac_part);

    // Decimal point position counted from the left of `digits`.
    let point = int_part.len() as i32 + exp;

    if point <= 0 {
        let zeros = (-point) as usize;
        let mut out = String::with_capacity(digits.len() + zeros + 2);
        out.push_str("0.");
        for _ in 0..zeros {
            out.push('0');
        }
        out.push_str(&digits);
        out
    } else if point as usize >= digits.len() {
        let zeros = point as usize - digits.len();
        let mut out = digits;
        out.reserve(zeros);
        for _ in 0..zeros {
            out.push('0');
        }
        out
    } else {
        let split = point as usize;
        let mut out = String::with_capacity(digits.len() + 1);
        out.push_str(&digits[..split]);
        out.push('.');
        out.push_str(&digits[split..]);
        out
    }
}

fn trim_fraction(mut s: String) -> String {
    if let Some(dot) = s.find('.') {
        let mut end = s.len();
        while end > dot + 1 && s.as_bytes()[end - 1] == b'0' {
            end -= 1;
        }
        if end == dot + 1 {
            end = dot;
        }
        s.truncate(end);
    }
    s
}
