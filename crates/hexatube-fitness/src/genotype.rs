//! Text form of binary genotypes.
//!
//! One gene per whitespace-separated token, `1`/`0` (or `true`/`false`), in
//! site order. Files hold one genotype per line; blank lines are skipped.

use std::io::BufRead;

use hexatube_lattice::Occupancy;

use crate::{Error, Result};

fn parse_gene(position: usize, token: &str) -> Result<bool> {
    match token {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        _ => Err(Error::InvalidToken {
            position,
            token: token.to_string(),
        }),
    }
}

/// Parse exactly `expected_len` genes from `text`.
pub fn parse_genotype(text: &str, expected_len: usize) -> Result<Vec<bool>> {
    let genes = text
        .split_whitespace()
        .enumerate()
        .map(|(position, token)| parse_gene(position, token))
        .collect::<Result<Vec<_>>>()?;
    if genes.len() != expected_len {
        return Err(Error::ShapeMismatch {
            expected: expected_len,
            actual: genes.len(),
        });
    }
    Ok(genes)
}

/// Render a genotype as space-separated `0`/`1`.
pub fn format_genotype<O: Occupancy + ?Sized>(v: &O) -> String {
    let mut out = String::with_capacity(2 * v.len());
    for i in 0..v.len() {
        if i > 0 {
            out.push(' ');
        }
        out.push(if v.is_occupied(i) { '1' } else { '0' });
    }
    out
}

/// Read one genotype per non-blank line.
pub fn read_genotypes<R: BufRead>(reader: R, expected_len: usize) -> Result<Vec<Vec<bool>>> {
    let mut genotypes = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        genotypes.push(parse_genotype(&line, expected_len)?);
    }
    Ok(genotypes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_binary_tokens() {
        let v = parse_genotype("1 0 true\tfalse\n1", 5).unwrap();
        assert_eq!(v, vec![true, false, true, false, true]);
    }

    #[test]
    fn rejects_bad_token() {
        let err = parse_genotype("1 0 2 1", 4).unwrap_err();
        assert!(matches!(err, Error::InvalidToken { position: 2, ref token } if token == "2"));
    }

    #[test]
    fn rejects_wrong_length() {
        let err = parse_genotype("1 0 1", 4).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { expected: 4, actual: 3 }));
    }

    #[test]
    fn format_then_parse() {
        let v = [true, false, false, true];
        let text = format_genotype(&v);
        assert_eq!(text, "1 0 0 1");
        assert_eq!(parse_genotype(&text, 4).unwrap(), v.to_vec());
        assert_eq!(format_genotype(&[false; 0]), "");
    }

    #[test]
    fn reads_lines_skipping_blanks() {
        let input = "1 1 0\n\n  \n0 0 1\n";
        let genotypes = read_genotypes(input.as_bytes(), 3).unwrap();
        assert_eq!(genotypes, vec![vec![true, true, false], vec![false, false, true]]);
    }

    #[test]
    fn read_reports_bad_line() {
        let input = "1 1 0\n1 x 0\n";
        assert!(matches!(
            read_genotypes(input.as_bytes(), 3),
            Err(Error::InvalidToken { position: 1, .. })
        ));
    }
}
