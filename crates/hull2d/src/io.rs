//! Plain-text point format and hull printing.
//!
//! Input: whitespace-separated `N x1 y1 … xN yN`. Output: one line per hull,
//! `<label>: <k> x1 y1 … xk yk`.

use crate::error::{HullError, Result};
use crate::geom2::Point;

/// Largest point count accepted from text or requested from a generator.
pub const MAX_POINTS: usize = 10_000_000;

/// Points read from text, plus how many of the announced `N` were missing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParsedPoints {
    pub points: Vec<Point>,
    pub missing: usize,
}

/// Parse `N x1 y1 … xN yN`.
///
/// Empty input yields no points and nothing missing. Coordinates beyond
/// `2N` are ignored; an odd trailing coordinate is dropped. Counts above
/// [`MAX_POINTS`] are rejected as `HullError::Parse`.
pub fn parse_points(text: &str) -> Result<ParsedPoints> {
    let mut tokens = text.split_whitespace();
    let Some(first) = tokens.next() else {
        return Ok(ParsedPoints::default());
    };
    let n = parse_count(first)?;
    let n_coords = n.checked_mul(2).ok_or_else(|| HullError::Parse {
        token: first.to_string(),
    })?;
    let coords = tokens
        .take(n_coords)
        .map(|t| {
            t.parse::<f64>().map_err(|_| HullError::Parse {
                token: t.to_string(),
            })
        })
        .collect::<Result<Vec<f64>>>()?;
    let points: Vec<Point> = coords
        .chunks_exact(2)
        .map(|c| Point::new(c[0], c[1]))
        .collect();
    Ok(ParsedPoints {
        missing: n - points.len(),
        points,
    })
}

/// Accepts `12` and also `12.0` (counts written by float-only tools).
fn parse_count(token: &str) -> Result<usize> {
    let err = || HullError::Parse {
        token: token.to_string(),
    };
    let n = match token.parse::<usize>() {
        Ok(n) => n,
        Err(_) => {
            let x: f64 = token.parse().map_err(|_| err())?;
            if !(x >= 0.0 && x.fract() == 0.0 && x <= MAX_POINTS as f64) {
                return Err(err());
            }
            x as usize
        }
    };
    if n > MAX_POINTS {
        return Err(err());
    }
    Ok(n)
}

/// `"<label>: <k> x1 y1 x2 y2 …"`.
pub fn format_hull(label: &str, vertices: &[Point]) -> String {
    let mut out = format!("{label}: {}", vertices.len());
    for v in vertices {
        out.push_str(&format!(" {} {}", v.x, v.y));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn parses_count_and_pairs() {
        let parsed = parse_points("3\n0 0  2 0\n1 1.5\n").unwrap();
        assert_eq!(
            parsed.points,
            vec![vector![0.0, 0.0], vector![2.0, 0.0], vector![1.0, 1.5]]
        );
        assert_eq!(parsed.missing, 0);
    }

    #[test]
    fn short_input_reports_missing() {
        let parsed = parse_points("5 0 0 1 1 7").unwrap();
        assert_eq!(parsed.points.len(), 2);
        assert_eq!(parsed.missing, 3);
        assert_eq!(parse_points("  \n").unwrap(), ParsedPoints::default());
        assert_eq!(parse_points("4.0").unwrap().missing, 4);
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(
            parse_points("2 0 0 x 1").unwrap_err(),
            HullError::Parse { token: "x".into() }
        );
        assert!(parse_points("-1").is_err());
        assert!(parse_points("2.5 0 0").is_err());
    }

    #[test]
    fn oversized_counts_are_parse_errors() {
        for text in ["18446744073709551615 0 0", "4000000000 0 0", "1e12 0 0"] {
            let token = text.split(' ').next().unwrap();
            assert_eq!(
                parse_points(text).unwrap_err(),
                HullError::Parse {
                    token: token.into()
                },
                "{text}"
            );
        }
        let at_cap = format!("{MAX_POINTS} 0 0");
        assert_eq!(parse_points(&at_cap).unwrap().missing, MAX_POINTS - 1);
    }

    #[test]
    fn formats_like_the_reference_output() {
        let hull = vec![vector![0.0, 0.0], vector![2.0, 0.0], vector![1.5, 2.0]];
        assert_eq!(format_hull("Jarvis", &hull), "Jarvis: 3 0 0 2 0 1.5 2");
        assert_eq!(format_hull("Graham", &[]), "Graham: 0");
    }
}
