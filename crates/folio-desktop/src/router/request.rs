//! Request tokens for asynchronous completions
//!
//! A fetch started for one case study must not overwrite state after the
//! visitor has moved to another. Every change of the open case study bumps
//! the guard's generation; a completion is applied only if its token still
//! matches. Each token also carries a serial so two requests made in the same
//! view stay distinguishable.

/// Handle returned when a request starts
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestToken {
    serial: u64,
    generation: u64,
    case_study: Option<String>,
}

impl RequestToken {
    /// Case study the request was made for
    pub fn case_study(&self) -> Option<&str> {
        self.case_study.as_deref()
    }
}

/// Navigation generation counter
#[derive(Clone, Debug, Default)]
pub struct RequestGuard {
    generation: u64,
    issued: u64,
}

impl RequestGuard {
    /// Record that the open case study changed
    #[inline]
    pub fn bump(&mut self) {
        self.generation += 1;
    }

    /// Current generation
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Issue a token for a request made for `case_study`
    pub fn issue(&mut self, case_study: Option<&str>) -> RequestToken {
        self.issued += 1;
        RequestToken {
            serial: self.issued,
            generation: self.generation,
            case_study: case_study.map(str::to_string),
        }
    }

    /// Whether a completion for `token` may still be applied
    pub fn is_current(&self, token: &RequestToken, case_study: Option<&str>) -> bool {
        token.generation == self.generation && token.case_study.as_deref() == case_study
    }
}
