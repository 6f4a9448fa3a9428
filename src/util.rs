// util.rs

use std::io::Write;

pub fn writeln_ignore_broken_pipe<W: Write, S: AsRef<str>>(mut w: W, s: S) -> std::io::Result<()> {
    match writeln!(w, "{}", s.as_ref()) {
        Err(ref e) if e.kind() == std::io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

/// Render an f64 the way the calculator prints it: integer-valued results
/// keep a trailing `.0` (so `add 2 3` shows `5.0`, not `5`), everything else
/// uses the default shortest representation.
pub fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 {
        format!("{:.1}", n)
    } else {
        format!("{}", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_valued_results_keep_a_decimal() {
        assert_eq!(format_number(5.0), "5.0");
        assert_eq!(format_number(-3.0), "-3.0");
        assert_eq!(format_number(0.0), "0.0");
    }

    #[test]
    fn fractional_results_print_in_full() {
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(1.0 / 3.0), format!("{}", 1.0_f64 / 3.0));
    }

    #[test]
    fn non_finite_values_fall_through() {
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(format_number(f64::NAN), "NaN");
    }
}
