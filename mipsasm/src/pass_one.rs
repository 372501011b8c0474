use crate::constants::{label_regex, PROLOGUE};
use crate::labels::Labels;

/// An executable line that survived label stripping. `index` is its
/// position in the label-free stream, which is what branch offsets and
/// jump targets are measured against.
#[derive(Debug, Clone)]
pub struct SourceLine {
    pub index: usize,
    pub text: String,
}

pub struct PassOne {
    pub lines: Vec<SourceLine>,
    pub labels: Labels,
}

/// First pass: clean the source, prepend the stack prologue, then scan
/// for label definitions and strip them.
pub fn pass_one(program: &str) -> PassOne {
    scan(clean_lines(program))
}

/// Drop comments and blank lines. The prologue goes in front before
/// any label is scanned, shifting every line position by one.
fn clean_lines(program: &str) -> Vec<String> {
    let mut lines = vec![PROLOGUE.to_owned()];
    lines.extend(
        program
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_owned),
    );
    lines
}

/// A label's target is its raw position minus the number of label
/// definitions stripped before it, i.e. its position in the label-free
/// stream. Executable lines get their index by the same arithmetic.
fn scan(raw: Vec<String>) -> PassOne {
    let mut labels = Labels::new();
    let mut lines = Vec::new();
    let mut stripped = 0;

    for (position, text) in raw.into_iter().enumerate() {
        if let Some(caps) = label_regex().captures(&text) {
            labels.add(&caps["name"], position - stripped);
            stripped += 1;
        } else {
            lines.push(SourceLine {
                index: position - stripped,
                text,
            });
        }
    }

    PassOne { lines, labels }
}
