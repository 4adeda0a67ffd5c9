//! Expert Plus: the terminal level, mixing six problem families.
//!
//! Each family has a pure builder that takes already-drawn operands and
//! returns `(expression, answer)`; `generate` only does the drawing. The
//! builders are what the fixed-operand tests exercise.

use rand::Rng;
use crate::quiz_engine::{
    helpers::{binary, pick, question},
    models::{Level, Question, QuestionKind},
    numeric::{format_scaled, strip_zero_fraction, Fraction},
};

const FRACTION_DENOMINATORS: [i64; 4] = [2, 3, 4, 5];
/// Roots of the radicands offered in the mixed pattern (4, 9, 16, 25).
const MIXED_ROOTS: [i64; 4] = [2, 3, 4, 5];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Family {
    ThreeDigit,
    FractionSum,
    Decimal,
    SquareRoot,
    Power,
    Mixed,
}

impl Family {
    const ALL: [Family; 6] = [
        Family::ThreeDigit,
        Family::FractionSum,
        Family::Decimal,
        Family::SquareRoot,
        Family::Power,
        Family::Mixed,
    ];

    fn key(self) -> &'static str {
        match self {
            Family::ThreeDigit  => "ThreeDigit",
            Family::FractionSum => "FractionSum",
            Family::Decimal     => "Decimal",
            Family::SquareRoot  => "SquareRoot",
            Family::Power       => "Power",
            Family::Mixed       => "Mixed",
        }
    }

    fn kind(self) -> QuestionKind {
        match self {
            Family::FractionSum => QuestionKind::Fraction,
            Family::Mixed       => QuestionKind::Expression,
            _                   => QuestionKind::Simple,
        }
    }
}

/// `a + b` or `a - b` on three-digit numbers. Subtraction has no floor.
pub(crate) fn three_digit(a: i64, b: i64, add: bool) -> (String, String) {
    if add {
        (binary(a, "+", b), (a + b).to_string())
    } else {
        (binary(a, "-", b), (a - b).to_string())
    }
}

/// `n1/d1 + n2/d2`, cross-multiplied and reduced to lowest terms.
pub(crate) fn unlike_fraction_sum(n1: i64, d1: i64, n2: i64, d2: i64) -> (String, String) {
    let sum = Fraction::new(n1 * d2 + n2 * d1, d1 * d2).reduced();
    (format!("{n1}/{d1} + {n2}/{d2}"), sum.to_string())
}

/// Add or subtract two values given in hundredths. Operands are shown with
/// both decimals; the answer drops an all-zero fraction (`5.00` → `5`).
pub(crate) fn decimal(a_cents: i64, b_cents: i64, add: bool) -> (String, String) {
    let (op, result) = if add {
        ("+", a_cents + b_cents)
    } else {
        ("-", a_cents - b_cents)
    };
    (
        binary(format_scaled(a_cents, 2), op, format_scaled(b_cents, 2)),
        strip_zero_fraction(&format_scaled(result, 2)),
    )
}

/// `√(root²)`; the radicand is built from the root so it is always a perfect square.
pub(crate) fn square_root(root: i64) -> (String, String) {
    (format!("√{}", root * root), root.to_string())
}

pub(crate) fn power(base: i64, exponent: u32) -> (String, String) {
    (format!("{base}^{exponent}"), base.pow(exponent).to_string())
}

/// `(a × √(root²)) + c`, with `c` given in tenths. The answer is rounded to
/// one decimal, which is exact since every term is a multiple of 0.1.
pub(crate) fn mixed(a: i64, root: i64, c_tenths: i64) -> (String, String) {
    let total_tenths = a * root * 10 + c_tenths;
    (
        format!("({a} × √{}) + {}", root * root, format_scaled(c_tenths, 1)),
        strip_zero_fraction(&format_scaled(total_tenths, 1)),
    )
}

pub fn generate<R: Rng>(rng: &mut R, question_id: String) -> Question {
    let family = pick(rng, &Family::ALL);

    let (expression, answer) = match family {
        Family::ThreeDigit => {
            let a = rng.gen_range(100..=999i64);
            let b = rng.gen_range(100..=999i64);
            three_digit(a, b, rng.gen_bool(0.5))
        }
        Family::FractionSum => {
            // Second index skips the first one's slot so the denominators differ.
            let i1 = rng.gen_range(0..FRACTION_DENOMINATORS.len());
            let mut i2 = rng.gen_range(0..FRACTION_DENOMINATORS.len() - 1);
            if i2 >= i1 {
                i2 += 1;
            }
            let (d1, d2) = (FRACTION_DENOMINATORS[i1], FRACTION_DENOMINATORS[i2]);
            let n1 = rng.gen_range(1..d1);
            let n2 = rng.gen_range(1..d2);
            unlike_fraction_sum(n1, d1, n2, d2)
        }
        Family::Decimal => {
            let a = rng.gen_range(0..=999i64);
            let b = rng.gen_range(0..=999i64);
            decimal(a, b, rng.gen_bool(0.5))
        }
        Family::SquareRoot => square_root(rng.gen_range(1..=20i64)),
        Family::Power => {
            let base = rng.gen_range(2..=11i64);
            let exponent = rng.gen_range(2..=4u32);
            power(base, exponent)
        }
        Family::Mixed => {
            let a = rng.gen_range(2..=6i64);
            let root = pick(rng, &MIXED_ROOTS);
            let c = rng.gen_range(0..=49i64);
            mixed(a, root, c)
        }
    };

    question(question_id, Level::ExpertPlus, family.kind(), family.key(), expression, answer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz_engine::numeric::gcd;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::BTreeSet;

    fn int(s: &str) -> i64 {
        s.parse().unwrap_or_else(|_| panic!("not an integer: '{s}'"))
    }

    /// Parse a fixed-point literal with exactly `places` decimals into scaled units.
    fn scaled(s: &str, places: usize) -> i64 {
        let (whole, frac) = s.split_once('.').unwrap_or_else(|| panic!("no decimals in '{s}'"));
        assert_eq!(frac.len(), places, "'{s}' should have {places} decimals");
        int(&format!("{whole}{frac}"))
    }

    fn sample(seed: u64, n: usize) -> Vec<Question> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..n).map(|i| generate(&mut rng, i.to_string())).collect()
    }

    #[test]
    fn unlike_fractions_halves_and_thirds() {
        let (expr, ans) = unlike_fraction_sum(1, 2, 1, 3);
        assert_eq!(expr, "1/2 + 1/3");
        assert_eq!(ans, "5/6");
    }

    #[test]
    fn unlike_fractions_reduce_to_lowest_terms() {
        // 1/2 + 1/4 = 6/8 = 3/4
        assert_eq!(unlike_fraction_sum(1, 2, 1, 4).1, "3/4");
        // 1/2 + 2/4 = 8/8 = 1
        assert_eq!(unlike_fraction_sum(1, 2, 2, 4).1, "1");
        // 3/4 + 1/2 = 10/8 = 5/4
        assert_eq!(unlike_fraction_sum(3, 4, 1, 2).1, "5/4");
    }

    #[test]
    fn square_root_of_144_is_12() {
        assert_eq!(square_root(12), ("√144".to_string(), "12".to_string()));
        assert_eq!(square_root(1).1, "1");
    }

    #[test]
    fn powers_are_exact() {
        assert_eq!(power(11, 4), ("11^4".to_string(), "14641".to_string()));
        assert_eq!(power(2, 2).1, "4");
    }

    #[test]
    fn decimals_strip_only_whole_zero_fractions() {
        assert_eq!(decimal(340, 5, false), ("3.40 - 0.05".to_string(), "3.35".to_string()));
        assert_eq!(decimal(250, 250, true).1, "5");
        assert_eq!(decimal(150, 120, true).1, "2.70");
        assert_eq!(decimal(5, 999, false).1, "-9.94");
        assert_eq!(decimal(0, 0, false).1, "0");
    }

    #[test]
    fn mixed_rounds_to_one_decimal() {
        assert_eq!(mixed(3, 4, 25), ("(3 × √16) + 2.5".to_string(), "14.5".to_string()));
        assert_eq!(mixed(2, 2, 0), ("(2 × √4) + 0.0".to_string(), "4".to_string()));
    }

    #[test]
    fn three_digit_subtraction_may_be_negative() {
        assert_eq!(three_digit(100, 999, false).1, "-899");
        assert_eq!(three_digit(100, 999, true).1, "1099");
    }

    #[test]
    fn generated_fraction_sums_use_distinct_denominators_in_lowest_terms() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut checked = 0;
        for i in 0..3000 {
            let q = generate(&mut rng, i.to_string());
            if q.kind != QuestionKind::Fraction {
                continue;
            }
            checked += 1;
            let terms: Vec<&str> = q.expression.split(" + ").collect();
            let d1 = terms[0].split_once('/').unwrap().1;
            let d2 = terms[1].split_once('/').unwrap().1;
            assert_ne!(d1, d2, "{}", q.expression);
            if let Some((num, den)) = q.answer.split_once('/') {
                let (num, den): (i64, i64) = (num.parse().unwrap(), den.parse().unwrap());
                assert_eq!(gcd(num, den), 1, "{} not reduced", q.answer);
                assert!(den > 1);
            } else {
                q.answer.parse::<i64>().expect("bare integer answer");
            }
        }
        assert!(checked > 0);
    }

    #[test]
    fn all_six_families_appear() {
        let mut rng = StdRng::seed_from_u64(2024);
        let seen: std::collections::HashSet<String> =
            (0..1000).map(|i| generate(&mut rng, i.to_string()).pattern).collect();
        for family in Family::ALL {
            let key = format!("ExpertPlus:{}", family.key());
            assert!(seen.contains(&key), "{key} never generated");
        }
    }

    #[test]
    fn three_digit_operands_in_range_with_both_operators() {
        let mut ops = BTreeSet::new();
        for q in sample(31, 6000).iter().filter(|q| q.pattern == "ExpertPlus:ThreeDigit") {
            let parts: Vec<&str> = q.expression.split(' ').collect();
            assert_eq!(parts.len(), 3, "{}", q.expression);
            for operand in [parts[0], parts[2]] {
                assert!((100..=999).contains(&int(operand)), "{}", q.expression);
            }
            ops.insert(parts[1].to_string());
        }
        assert_eq!(ops, BTreeSet::from(["+".to_string(), "-".to_string()]));
    }

    #[test]
    fn decimal_operands_stay_below_ten_with_two_places() {
        let mut max_cents = 0;
        for q in sample(32, 6000).iter().filter(|q| q.pattern == "ExpertPlus:Decimal") {
            let parts: Vec<&str> = q.expression.split(' ').collect();
            assert_eq!(parts.len(), 3, "{}", q.expression);
            assert!(parts[1] == "+" || parts[1] == "-", "{}", q.expression);
            for operand in [parts[0], parts[2]] {
                let cents = scaled(operand, 2);
                assert!((0..=999).contains(&cents), "{}", q.expression);
                max_cents = max_cents.max(cents);
            }
        }
        assert!(max_cents > 900, "decimal operands never approach 9.99 (max {max_cents})");
    }

    #[test]
    fn square_roots_cover_first_twenty_perfect_squares() {
        let mut roots = BTreeSet::new();
        for q in sample(33, 6000).iter().filter(|q| q.pattern == "ExpertPlus:SquareRoot") {
            let radicand = int(q.expression.strip_prefix('√').unwrap());
            let root = int(&q.answer);
            assert_eq!(root * root, radicand, "{}", q.expression);
            roots.insert(root);
        }
        assert_eq!(roots, (1..=20).collect::<BTreeSet<i64>>());
    }

    #[test]
    fn power_bases_and_exponents_span_their_ranges() {
        let (mut bases, mut exponents) = (BTreeSet::new(), BTreeSet::new());
        for q in sample(34, 6000).iter().filter(|q| q.pattern == "ExpertPlus:Power") {
            let (base, exponent) = q.expression.split_once('^').unwrap();
            bases.insert(int(base));
            exponents.insert(int(exponent));
        }
        assert_eq!(bases, (2..=11).collect::<BTreeSet<i64>>());
        assert_eq!(exponents, (2..=4).collect::<BTreeSet<i64>>());
    }

    #[test]
    fn mixed_terms_span_their_ranges() {
        let (mut factors, mut radicands, mut tenths) =
            (BTreeSet::new(), BTreeSet::new(), BTreeSet::new());
        for q in sample(35, 6000).iter().filter(|q| q.pattern == "ExpertPlus:Mixed") {
            // (a × √b) + c
            let inner = q.expression.strip_prefix('(').unwrap();
            let (a, rest) = inner.split_once(" × √").unwrap();
            let (b, c) = rest.split_once(") + ").unwrap();
            factors.insert(int(a));
            radicands.insert(int(b));
            tenths.insert(scaled(c, 1));
        }
        assert_eq!(factors, (2..=6).collect::<BTreeSet<i64>>());
        assert_eq!(radicands, BTreeSet::from([4, 9, 16, 25]));
        assert_eq!(tenths, (0..=49).collect::<BTreeSet<i64>>());
    }

    #[test]
    fn fraction_denominator_pairs_cover_all_ordered_pairs() {
        let mut pairs = BTreeSet::new();
        for q in sample(36, 6000).iter().filter(|q| q.kind == QuestionKind::Fraction) {
            let terms: Vec<&str> = q.expression.split(" + ").collect();
            let (n1, d1) = terms[0].split_once('/').unwrap();
            let (n2, d2) = terms[1].split_once('/').unwrap();
            let (d1, d2) = (int(d1), int(d2));
            assert!((1..d1).contains(&int(n1)) && (1..d2).contains(&int(n2)), "{}", q.expression);
            pairs.insert((d1, d2));
        }
        // 4 first choices × 3 distinct second choices.
        assert_eq!(pairs.len(), 12, "{pairs:?}");
        assert!(pairs.iter().all(|(a, b)| a != b && FRACTION_DENOMINATORS.contains(a) && FRACTION_DENOMINATORS.contains(b)));
    }
}
