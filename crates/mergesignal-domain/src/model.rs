use mergesignal_types::MatchMode;
use regex::Regex;
use std::fmt;

/// Every condition a pull request can be matched against, plus how they combine.
///
/// A set whose groups are all empty is disabled; see [`SignalSet::enabled`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignalSet {
    pub label: LabelSignals,

    /// Substrings searched in the body and in every comment.
    pub comment_substrings: Vec<String>,

    /// Strings the body or a single comment must equal.
    pub comments: Vec<String>,

    /// Substrings searched in the body only.
    pub pr_body_substrings: Vec<String>,

    /// Exact target branch names.
    pub branches: Vec<String>,

    /// Target branch patterns, anchored at both ends.
    pub branch_patterns: Vec<BranchPattern>,

    /// Exact logins of the pull request author.
    pub creators: Vec<String>,

    pub mode: MatchMode,
}

/// Label requirements carry their own mode, independent of the enclosing set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabelSignals {
    pub mode: MatchMode,
    pub values: Vec<String>,
}

impl SignalSet {
    /// True when at least one group carries a value.
    pub fn enabled(&self) -> bool {
        let size = self.label.values.len()
            + self.comment_substrings.len()
            + self.comments.len()
            + self.pr_body_substrings.len()
            + self.branches.len()
            + self.branch_patterns.len()
            + self.creators.len();
        size > 0
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid branch pattern '{pattern}': {source}")]
pub struct BranchPatternError {
    pub pattern: String,
    pub source: regex::Error,
}

/// A target branch regular expression that must match the entire branch name.
///
/// The pattern is wrapped as `^(?:pattern)$`, so alternations are anchored as a whole.
/// A `.` outside a character class does not match `/`: wildcards stay inside one
/// path segment of the branch name, and crossing a segment takes an explicit `/`.
#[derive(Clone)]
pub struct BranchPattern {
    source: String,
    regex: Regex,
}

impl BranchPattern {
    pub fn new(pattern: &str) -> Result<Self, BranchPatternError> {
        let anchored = format!("^(?:{})$", segment_dots(pattern));
        let regex = Regex::new(&anchored).map_err(|e| BranchPatternError {
            pattern: pattern.to_string(),
            source: e,
        })?;
        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    /// The pattern as written in configuration.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_full_match(&self, branch: &str) -> bool {
        self.regex.is_match(branch)
    }
}

/// Rewrite every `.` outside a character class (and not escaped) to `[^/]`.
///
/// Tracks the `x` flag per group so that `#` comments in verbose patterns are
/// copied through untouched.
fn segment_dots(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.chars().peekable();
    let mut class_depth = 0usize;
    let mut verbose = false;
    let mut groups: Vec<bool> = Vec::new();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                out.push(c);
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            }
            '[' => {
                class_depth += 1;
                out.push(c);
                // A leading `]` (after an optional `^`) is a literal member.
                if let Some(&'^') = chars.peek() {
                    out.push('^');
                    chars.next();
                }
                if let Some(&']') = chars.peek() {
                    out.push(']');
                    chars.next();
                }
            }
            ']' if class_depth > 0 => {
                class_depth -= 1;
                out.push(c);
            }
            '(' if class_depth == 0 => {
                out.push(c);
                groups.push(verbose);
                if chars.peek() == Some(&'?') {
                    out.push('?');
                    chars.next();
                    let mut enable = true;
                    let mut flagged = verbose;
                    while let Some(&f) = chars.peek() {
                        match f {
                            '-' => enable = false,
                            'x' => flagged = enable,
                            f if f.is_ascii_alphabetic() => {}
                            _ => break,
                        }
                        out.push(f);
                        chars.next();
                    }
                    match chars.peek() {
                        // `(?x)` changes the enclosing group.
                        Some(&')') => {
                            out.push(')');
                            chars.next();
                            groups.pop();
                            verbose = flagged;
                        }
                        Some(&':') => {
                            out.push(':');
                            chars.next();
                            verbose = flagged;
                        }
                        _ => {}
                    }
                }
            }
            ')' if class_depth == 0 => {
                out.push(c);
                if let Some(outer) = groups.pop() {
                    verbose = outer;
                }
            }
            '#' if verbose && class_depth == 0 => {
                out.push(c);
                let mut closed = false;
                for comment in chars.by_ref() {
                    out.push(comment);
                    if comment == '\n' {
                        closed = true;
                        break;
                    }
                }
                // The anchoring suffix must not land inside the comment.
                if !closed {
                    out.push('\n');
                }
            }
            '.' if class_depth == 0 => out.push_str("[^/]"),
            _ => out.push(c),
        }
    }
    out
}

impl PartialEq for BranchPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for BranchPattern {}

impl fmt::Debug for BranchPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BranchPattern").field(&self.source).finish()
    }
}

impl fmt::Display for BranchPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_is_disabled() {
        assert!(!SignalSet::default().enabled());
    }

    #[test]
    fn any_single_value_enables_the_set() {
        let sets = [
            SignalSet {
                label: LabelSignals {
                    mode: MatchMode::All,
                    values: vec!["a".to_string()],
                },
                ..SignalSet::default()
            },
            SignalSet {
                comment_substrings: vec!["a".to_string()],
                ..SignalSet::default()
            },
            SignalSet {
                comments: vec!["a".to_string()],
                ..SignalSet::default()
            },
            SignalSet {
                pr_body_substrings: vec!["a".to_string()],
                ..SignalSet::default()
            },
            SignalSet {
                branches: vec!["main".to_string()],
                ..SignalSet::default()
            },
            SignalSet {
                branch_patterns: vec![BranchPattern::new("main").expect("valid pattern")],
                ..SignalSet::default()
            },
            SignalSet {
                creators: vec!["octocat".to_string()],
                ..SignalSet::default()
            },
        ];
        for set in sets {
            assert!(set.enabled(), "{set:?} should be enabled");
        }
    }

    #[test]
    fn mode_alone_does_not_enable_the_set() {
        let set = SignalSet {
            mode: MatchMode::All,
            label: LabelSignals {
                mode: MatchMode::All,
                values: Vec::new(),
            },
            ..SignalSet::default()
        };
        assert!(!set.enabled());
    }

    #[test]
    fn branch_pattern_is_anchored_at_both_ends() {
        let p = BranchPattern::new("release/.*").expect("valid pattern");
        assert!(p.is_full_match("release/1.0"));
        assert!(!p.is_full_match("pre-release/1.0"));
        assert!(!p.is_full_match("release/1.0/hotfix"));
    }

    #[test]
    fn wildcards_cross_segments_only_through_explicit_slashes() {
        let p = BranchPattern::new("release/.*/.*").expect("valid pattern");
        assert!(p.is_full_match("release/1.0/hotfix"));
        assert!(!p.is_full_match("release/1.0"));

        let p = BranchPattern::new("(.|/)*").expect("valid pattern");
        assert!(p.is_full_match("any/depth/at/all"));
    }

    #[test]
    fn verbose_comments_do_not_hide_later_wildcards() {
        let p = BranchPattern::new("(?x)release/ # [x\n .*").expect("valid pattern");
        assert!(p.is_full_match("release/1.0"));
        assert!(!p.is_full_match("release/1.0/hotfix"));

        let p = BranchPattern::new("(?x) release/ .* # trailing [comment").expect("valid pattern");
        assert!(p.is_full_match("release/2.0"));
        assert!(!p.is_full_match("release/2.0/hotfix"));
    }

    #[test]
    fn verbose_flag_is_scoped_to_its_group() {
        assert_eq!(
            segment_dots("(?x: a # [b\n)#[c.d]."),
            "(?x: a # [b\n)#[c.d][^/]"
        );
        assert_eq!(segment_dots("(?x)(?-x)#."), "(?x)(?-x)#[^/]");

        let p = BranchPattern::new("issue#.*").expect("valid pattern");
        assert!(p.is_full_match("issue#12"));
        assert!(!p.is_full_match("issue#1/2"));
    }

    #[test]
    fn escaped_and_class_dots_stay_literal() {
        assert_eq!(segment_dots("v1\\.x"), "v1\\.x");
        assert_eq!(segment_dots("[.]"), "[.]");
        assert_eq!(segment_dots("[].]."), "[].][^/]");
        assert_eq!(segment_dots("[^]a]."), "[^]a][^/]");
        assert_eq!(segment_dots("[[:alpha:].]+."), "[[:alpha:].]+[^/]");

        let p = BranchPattern::new("v1\\.[0-9]").expect("valid pattern");
        assert!(p.is_full_match("v1.2"));
        assert!(!p.is_full_match("v1x2"));
    }

    #[test]
    fn branch_pattern_alternation_is_anchored_as_a_group() {
        let p = BranchPattern::new("main|develop").expect("valid pattern");
        assert!(p.is_full_match("main"));
        assert!(p.is_full_match("develop"));
        assert!(!p.is_full_match("main-old"));
        assert!(!p.is_full_match("old-develop"));
    }

    #[test]
    fn malformed_branch_pattern_is_rejected() {
        let err = BranchPattern::new("release/(").expect_err("unbalanced group");
        assert_eq!(err.pattern, "release/(");
        assert!(err.to_string().starts_with("invalid branch pattern 'release/('"));
    }

    #[test]
    fn branch_pattern_keeps_source_text() {
        let p = BranchPattern::new("v[0-9]+").expect("valid pattern");
        assert_eq!(p.as_str(), "v[0-9]+");
        assert_eq!(p.to_string(), "v[0-9]+");
        assert_eq!(format!("{p:?}"), "BranchPattern(\"v[0-9]+\")");
    }
}
