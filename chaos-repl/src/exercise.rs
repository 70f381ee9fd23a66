//! Builds exercises of the form `<rewritten log_b(b^k)> = k`.

use chaos_expr::{error::kind::InvalidLiteral, Expr, Literal};
use chaos_rewrite::Rewriter;
use log::debug;
use rand::{seq::SliceRandom, Rng, RngCore};
use std::{ops::Range, str::FromStr};
use crate::error::Error;

/// Bases of randomly generated answers.
pub const BASES: [Literal; 6] = [
    Literal::Integer(2),
    Literal::Integer(3),
    Literal::Integer(4),
    Literal::Integer(5),
    Literal::Integer(10),
    Literal::E,
];

/// Exponents of randomly generated answers.
pub const EXPONENTS: Range<u32> = 1..5;

/// The largest exponent accepted in interactive mode.
pub const MAX_EXPONENT: u32 = 16;

/// A rewritten logarithm together with the integer it evaluates to.
#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    /// The rewritten expression.
    pub expr: Expr,

    /// The value of [`Exercise::expr`].
    pub answer: u32,
}

impl Exercise {
    /// Formats the exercise as a line of display math, `$$ <markup> = <answer> $$`.
    pub fn line(&self) -> String {
        format!("$$ {} = {} $$", self.expr.render(), self.answer)
    }
}

/// Builds `log_b(b^k)`. The power is folded into a single literal for numeric bases, and kept as
/// `b^k` (or plain `b` when `k = 1`) for `e` and `pi`.
pub fn answer(base: Literal, k: u32) -> Result<Expr, Error> {
    let arg = match base {
        Literal::E | Literal::Pi if k == 1 => Expr::from(base),
        Literal::E | Literal::Pi => Expr::pow(base.into(), Expr::int(k.into())),
        Literal::Integer(b) => match b.checked_pow(k) {
            Some(power) => Expr::int(power),
            None => Expr::pow(Expr::int(b), Expr::int(k.into())),
        },
        Literal::Float(b) => Expr::from(Literal::float(b.powf(k.into()))?),
    };
    Ok(Expr::log(base.into(), arg))
}

/// Draws a random base and exponent.
pub fn random_request(rng: &mut dyn RngCore) -> (Literal, u32) {
    let base = *BASES.choose(&mut *rng).unwrap_or(&Literal::Integer(2));
    (base, rng.gen_range(EXPONENTS))
}

/// Rewrites `log_b(b^k)` the given number of times.
///
/// Fails if the answer itself does not evaluate, for example when the base is 1.
pub fn generate<R: RngCore>(
    rewriter: &Rewriter,
    (base, k): (Literal, u32),
    passes: usize,
    rng: &mut R,
) -> Result<Exercise, Error> {
    let mut expr = answer(base, k)?;
    expr.eval()?;

    for pass in 0..passes {
        expr = rewriter.rewrite(&expr, rng);
        debug!("pass {}: {} nodes", pass, expr.node_count());
    }
    Ok(Exercise { expr, answer: k })
}

/// Generates `count` random exercises, formats them, and sorts them from shortest to longest.
pub fn batch<R: RngCore>(rewriter: &Rewriter, count: usize, passes: usize, rng: &mut R) -> Vec<String> {
    let mut lines = Vec::with_capacity(count);
    for _ in 0..count {
        let request = random_request(rng);
        match generate(rewriter, request, passes, rng) {
            Ok(exercise) => lines.push(exercise.line()),
            // every random base is valid, so this is unreachable in practice
            Err(err) => log::warn!("skipping exercise: {}", err),
        }
    }
    lines.sort_by_key(String::len);
    lines
}

/// Returns the lines in `[skip, skip + take)`, clamped to the available lines.
pub fn window(lines: &[String], skip: usize, take: Option<usize>) -> &[String] {
    let start = skip.min(lines.len());
    let end = match take {
        Some(take) => start.saturating_add(take).min(lines.len()),
        None => lines.len(),
    };
    &lines[start..end]
}

/// Splits the line into words, with the byte range of each.
fn words(line: &str) -> Vec<(Range<usize>, &str)> {
    let mut words = Vec::new();
    let mut start = None;
    for (i, c) in line.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some(s)) => {
                words.push((s..i, &line[s..i]));
                start = None;
            },
            (false, None) => start = Some(i),
            _ => (),
        }
    }
    if let Some(s) = start {
        words.push((s..line.len(), &line[s..]));
    }
    words
}

/// Parses a line typed in interactive mode.
///
/// Returns [`None`] for a blank line, which requests a random exercise.
pub fn parse_request(line: &str) -> Result<Option<(Literal, u32)>, Error> {
    let words = words(line);
    let [(base_span, base), (exp_span, exp)] = words.as_slice() else {
        if words.is_empty() {
            return Ok(None);
        }
        return Err(Error::Request {
            line: line.to_string(),
            span: 0..line.len(),
            message: format!("expected a base and an exponent, found {} words", words.len()),
        });
    };

    let base = Literal::from_str(base).map_err(|_| chaos_expr::Error::new(
        line,
        vec![base_span.clone()],
        InvalidLiteral { value: base.to_string() },
    ))?;

    let exp = exp.parse::<u32>().ok()
        .filter(|exp| *exp <= MAX_EXPONENT)
        .ok_or_else(|| Error::Request {
            line: line.to_string(),
            span: exp_span.clone(),
            message: format!("the exponent must be an integer from 0 to {}", MAX_EXPONENT),
        })?;

    Ok(Some((base, exp)))
}
