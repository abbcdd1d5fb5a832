//! Stack trace location extraction
//!
//! Finds a human-readable `file:line` reference in a failure's captured
//! stack trace.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Matches a URL-shaped frame suffix: `http(s)://<host>/<path>:<line>:<col>`
/// at the end of the frame line.
static FRAME_LOCATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://[^/]+/(.*):([0-9]+):[0-9]+$").expect("valid frame regex"));

/// A source location extracted from a stack frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    pub file: String,
    pub line: String,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ( At line {} in file {} )", self.line, self.file)
    }
}

/// Extracts source locations from raw stack trace text.
///
/// Frames that mention the host framework's own identifier are treated as
/// internal and skipped, so the located frame points at user code.
#[derive(Clone, Debug)]
pub struct TraceLocator {
    framework_token: String,
}

impl TraceLocator {
    /// Create a locator that filters frames containing `framework_token`
    /// (case-insensitive substring match)
    pub fn new(framework_token: impl Into<String>) -> Self {
        Self {
            framework_token: framework_token.into().to_lowercase(),
        }
    }

    /// Scan the stack text for a locatable non-framework frame.
    ///
    /// When several frames match, the last match wins: the result is
    /// overwritten on each hit, so the deepest matching frame in scan order
    /// is returned. Scanning stops at the first blank line in the stack
    /// text. Returns `None` when no non-framework frame carries a parseable
    /// location; callers fall back to the raw trace text.
    pub fn locate(&self, stack: &str) -> Option<Location> {
        let mut located = None;

        for frame in stack.lines() {
            // Scanning stops at the first blank line; frames after it are
            // never considered.
            if frame.is_empty() {
                break;
            }
            if frame.to_lowercase().contains(&self.framework_token) {
                continue;
            }
            if let Some(caps) = FRAME_LOCATION.captures(frame) {
                located = Some(Location {
                    file: caps[1].to_string(),
                    line: caps[2].to_string(),
                });
            }
        }

        located
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locator() -> TraceLocator {
        TraceLocator::new("jasmine")
    }

    #[test]
    fn test_locates_simple_frame() {
        let stack = "Error: expected 2 got 3\n    at http://localhost:8000/spec/calc.js:12:5";
        let loc = locator().locate(stack).unwrap();
        assert_eq!(loc.file, "spec/calc.js");
        assert_eq!(loc.line, "12");
    }

    #[test]
    fn test_skips_framework_frames() {
        let stack = "at http://localhost/lib/Jasmine-core.js:1000:3\n\
                     at http://localhost/spec/calc.js:12:5";
        let loc = locator().locate(stack).unwrap();
        assert_eq!(loc.file, "spec/calc.js");
    }

    #[test]
    fn test_last_match_wins() {
        // Two user frames both match; the locator keeps the last one scanned.
        let stack = "at http://localhost/spec/first.js:1:1\n\
                     at http://localhost/spec/second.js:2:2";
        let loc = locator().locate(stack).unwrap();
        assert_eq!(loc.file, "spec/second.js");
        assert_eq!(loc.line, "2");
    }

    #[test]
    fn test_blank_line_ends_the_scan() {
        // Frames after a blank line are never scanned, so an earlier match
        // survives and a later-only match is missed entirely.
        let stack = "at http://localhost/spec/first.js:1:1\n\
                     \n\
                     at http://localhost/spec/second.js:2:2";
        let loc = locator().locate(stack).unwrap();
        assert_eq!(loc.file, "spec/first.js");

        let stack = "\nat http://localhost/spec/only.js:3:3";
        assert!(locator().locate(stack).is_none());
    }

    #[test]
    fn test_no_match_yields_none() {
        assert!(locator().locate("Error: boom\n    at native code").is_none());
        assert!(locator().locate("").is_none());
    }

    #[test]
    fn test_all_frames_framework() {
        let stack = "at http://localhost/jasmine.js:1:1\nat http://localhost/JASMINE/core.js:2:2";
        assert!(locator().locate(stack).is_none());
    }

    #[test]
    fn test_location_must_end_line() {
        // Trailing text after the column defeats the end-anchored pattern.
        let stack = "at http://localhost/spec/calc.js:12:5 (anonymous)";
        assert!(locator().locate(stack).is_none());
    }

    #[test]
    fn test_https_and_port_hosts() {
        let stack = "at https://ci.example.com:8443/build/spec/calc.js:7:10";
        let loc = locator().locate(stack).unwrap();
        assert_eq!(loc.file, "build/spec/calc.js");
        assert_eq!(loc.line, "7");
    }

    #[test]
    fn test_location_display() {
        let loc = Location {
            file: "spec/calc.js".to_string(),
            line: "12".to_string(),
        };
        assert_eq!(loc.to_string(), " ( At line 12 in file spec/calc.js )");
    }
}
