use super::calculator::CalculatorError;

/// Sequence number of a total request. Later requests carry larger tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcStatus {
    Idle,
    Computing,
}

/// What happened to a finished request
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Latest request succeeded, total replaced
    Applied(f64),
    /// Latest request failed, previous total kept
    Failed(CalculatorError),
    /// A newer request was issued meanwhile, response dropped
    Stale,
}

/// Displayed total plus the bookkeeping that keeps it in step with the most
/// recently *issued* request.
///
/// Responses can arrive in any order. Only the one whose token matches the
/// latest issued token may touch the total; everything older is dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct TotalTracker {
    total: f64,
    latest: u64,
    status: CalcStatus,
    last_error: Option<CalculatorError>,
}

impl Default for TotalTracker {
    fn default() -> Self {
        Self {
            total: 0.0,
            latest: 0,
            status: CalcStatus::Idle,
            last_error: None,
        }
    }
}

impl TotalTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn status(&self) -> CalcStatus {
        self.status
    }

    pub fn is_computing(&self) -> bool {
        self.status == CalcStatus::Computing
    }

    /// Error of the latest request, cleared by the next success
    pub fn last_error(&self) -> Option<&CalculatorError> {
        self.last_error.as_ref()
    }

    /// Issue a token for a request that is about to go out
    pub fn begin(&mut self) -> RequestToken {
        self.latest += 1;
        self.status = CalcStatus::Computing;
        RequestToken(self.latest)
    }

    /// Empty selection: total is zero, no request needed. Still consumes a
    /// token so any request in flight becomes stale.
    pub fn reset_to_zero(&mut self) -> RequestToken {
        self.latest += 1;
        self.total = 0.0;
        self.status = CalcStatus::Idle;
        self.last_error = None;
        RequestToken(self.latest)
    }

    pub fn is_latest(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }

    /// Record the outcome of the request identified by `token`
    pub fn resolve(&mut self, token: RequestToken, outcome: Result<f64, CalculatorError>) -> Resolution {
        if !self.is_latest(token) {
            return Resolution::Stale;
        }
        self.status = CalcStatus::Idle;
        match outcome {
            Ok(total) => {
                self.total = total;
                self.last_error = None;
                Resolution::Applied(total)
            }
            Err(e) => {
                self.last_error = Some(e.clone());
                Resolution::Failed(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_computing_idle() {
        let mut t = TotalTracker::new();
        assert_eq!(t.status(), CalcStatus::Idle);

        let token = t.begin();
        assert!(t.is_computing());

        assert_eq!(t.resolve(token, Ok(30.0)), Resolution::Applied(30.0));
        assert_eq!(t.status(), CalcStatus::Idle);
        assert_eq!(t.total(), 30.0);
    }

    #[test]
    fn test_failure_keeps_previous_total() {
        let mut t = TotalTracker::new();
        let first = t.begin();
        t.resolve(first, Ok(12.0));

        let second = t.begin();
        let err = CalculatorError::Transport("connection refused".into());
        assert_eq!(t.resolve(second, Err(err.clone())), Resolution::Failed(err.clone()));
        assert_eq!(t.total(), 12.0);
        assert_eq!(t.status(), CalcStatus::Idle);
        assert_eq!(t.last_error(), Some(&err));

        let third = t.begin();
        t.resolve(third, Ok(14.0));
        assert!(t.last_error().is_none());
    }

    #[test]
    fn test_older_response_arriving_last_is_dropped() {
        let mut t = TotalTracker::new();
        let a = t.begin();
        let b = t.begin();

        assert_eq!(t.resolve(b, Ok(40.0)), Resolution::Applied(40.0));
        assert_eq!(t.resolve(a, Ok(30.0)), Resolution::Stale);
        assert_eq!(t.total(), 40.0);
    }

    #[test]
    fn test_older_response_arriving_first_is_dropped() {
        let mut t = TotalTracker::new();
        let a = t.begin();
        let b = t.begin();

        assert_eq!(t.resolve(a, Ok(30.0)), Resolution::Stale);
        assert!(t.is_computing());
        assert_eq!(t.total(), 0.0);

        t.resolve(b, Ok(40.0));
        assert_eq!(t.total(), 40.0);
        assert!(!t.is_computing());
    }

    #[test]
    fn test_stale_failure_does_not_record_error() {
        let mut t = TotalTracker::new();
        let a = t.begin();
        let b = t.begin();
        t.resolve(b, Ok(5.0));
        assert_eq!(t.resolve(a, Err(CalculatorError::Malformed("no total".into()))), Resolution::Stale);
        assert!(t.last_error().is_none());
    }

    #[test]
    fn test_reset_to_zero_invalidates_in_flight_request() {
        let mut t = TotalTracker::new();
        let a = t.begin();
        t.reset_to_zero();

        assert_eq!(t.resolve(a, Ok(99.0)), Resolution::Stale);
        assert_eq!(t.total(), 0.0);
        assert_eq!(t.status(), CalcStatus::Idle);
    }

    #[test]
    fn test_tokens_increase() {
        let mut t = TotalTracker::new();
        let a = t.begin();
        let b = t.reset_to_zero();
        let c = t.begin();
        assert!(a < b && b < c);
        assert_eq!(c.value(), 3);
    }
}
