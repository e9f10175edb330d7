//! Default statement normalization

use std::collections::BTreeMap;

use crate::traits::SubjectNormalizer;
use crate::Proposition;

const OPERATORS: &[char] = &['<', '>', '=', '!', '≤', '≥', '≠'];

/// Case- and whitespace-insensitive statement key
///
/// Lowercases, collapses whitespace runs to one space and removes whitespace
/// adjacent to comparison operators, so `"DSCR<1.2"` and `" dscr  <  1.2 "`
/// share a key.
#[derive(Debug, Clone, Copy, Default)]
pub struct CanonicalStatement;

impl SubjectNormalizer for CanonicalStatement {
    fn normalize(&self, statement: &str) -> String {
        let collapsed = statement
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        let chars: Vec<char> = collapsed.chars().collect();
        let mut out = String::with_capacity(collapsed.len());
        for (i, c) in chars.iter().enumerate() {
            if *c == ' ' {
                let prev_op = i > 0 && OPERATORS.contains(&chars[i - 1]);
                let next_op = chars.get(i + 1).is_some_and(|n| OPERATORS.contains(n));
                if prev_op || next_op {
                    continue;
                }
            }
            out.push(*c);
        }
        out
    }
}

/// Collapse propositions that share a subject, keeping the most recent
///
/// Ties on timestamp go to the later entry in the slice. Keys are the
/// normalized subjects.
pub fn latest_by_subject<'a>(
    propositions: &'a [Proposition],
    normalizer: &dyn SubjectNormalizer,
) -> BTreeMap<String, &'a Proposition> {
    let mut latest: BTreeMap<String, &'a Proposition> = BTreeMap::new();
    for prop in propositions {
        let key = normalizer.normalize(&prop.statement);
        match latest.get(&key) {
            Some(existing) if existing.timestamp > prop.timestamp => {}
            _ => {
                latest.insert(key, prop);
            }
        }
    }
    latest
}
