/// Splits a path into its non-empty `/`-delimited segments.
pub fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// A segment carrying a `:` marker matches any value at its position.
pub fn is_dynamic_segment(segment: &str) -> bool {
    segment.contains(':')
}

/// Specificity of one segment sequence against another. Higher counts rank
/// higher; `Disqualified` is a separate channel, not a low score, and callers
/// must treat it as "can never match" rather than compare it numerically.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum MatchScore {
    /// Two static segments at the same position differ, ruling the pair out
    /// regardless of the remaining positions.
    Disqualified,
    /// Number of positions where the segments are literally equal.
    Count(u32),
}

impl MatchScore {
    /// Flattens to the conventional integer form: `-1` for disqualification,
    /// the literal match count otherwise.
    pub fn as_i32(self) -> i32 {
        match self {
            MatchScore::Disqualified => -1,
            MatchScore::Count(n) => n as i32,
        }
    }
}

/// Scores how well two segment sequences line up, walking paired positions up
/// to the shorter length. Literal equality adds one; a dynamic segment on
/// either side is compatible with anything but adds nothing; two differing
/// static segments disqualify the pair immediately.
pub fn score<A: AsRef<str>, B: AsRef<str>>(segments_a: &[A], segments_b: &[B]) -> MatchScore {
    let mut count = 0;
    for (a, b) in segments_a.iter().zip(segments_b) {
        let (a, b) = (a.as_ref(), b.as_ref());
        if a == b {
            count += 1;
        } else if !is_dynamic_segment(a) && !is_dynamic_segment(b) {
            return MatchScore::Disqualified;
        }
    }
    MatchScore::Count(count)
}

#[cfg(test)]
mod tests {
    use super::{is_dynamic_segment, score, split_segments, MatchScore};

    #[test]
    fn test_split_segments() {
        assert_eq!(split_segments("/a//b/"), ["a", "b"]);
        assert_eq!(split_segments("/users/42"), ["users", "42"]);
        assert!(split_segments("/").is_empty());
        assert!(split_segments("").is_empty());
    }

    #[test]
    fn test_is_dynamic_segment() {
        assert!(is_dynamic_segment(":id"));
        assert!(!is_dynamic_segment("users"));
        assert!(!is_dynamic_segment(""));
    }

    #[test]
    fn test_score() {
        let tests = [
            (vec!["users", ":id"], vec!["users", "42"], MatchScore::Count(1)),
            (vec!["users", "42"], vec!["posts", "42"], MatchScore::Disqualified),
            (vec![], vec!["anything"], MatchScore::Count(0)),
            (vec!["users", "42"], vec!["users", "42"], MatchScore::Count(2)),
            (vec![":a"], vec![":b"], MatchScore::Count(0)),
            (vec![":a"], vec![":a"], MatchScore::Count(1)),
            (
                vec!["users", ":id", "posts"],
                vec!["users", "42", "comments"],
                MatchScore::Disqualified,
            ),
        ];
        for (a, b, want) in tests {
            assert_eq!(score(&a, &b), want);
            assert_eq!(score(&b, &a), want);
        }
    }

    #[test]
    fn test_score_on_split_paths() {
        let pattern = split_segments("/users/:id/posts");
        let path = split_segments("/users/42/posts");
        assert_eq!(score(&pattern, &path), MatchScore::Count(2));
    }

    #[test]
    fn test_score_as_i32() {
        assert_eq!(MatchScore::Disqualified.as_i32(), -1);
        assert_eq!(MatchScore::Count(0).as_i32(), 0);
        assert_eq!(MatchScore::Count(3).as_i32(), 3);
    }
}
