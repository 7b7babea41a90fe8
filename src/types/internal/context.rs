use std::net::IpAddr;

use poem::Request;
use uuid::Uuid;

/// Request context that flows from the API layer into services
///
/// Carries what the service layer needs for tracing: a per-request id, the
/// caller's address and, once the bearer token is validated, the trainer id.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestContext {
    /// Unique identifier for this request (for tracing across layers)
    pub request_id: Uuid,

    /// IP address of the client making the request
    pub ip_address: Option<IpAddr>,

    /// Authenticated trainer, if any
    pub trainer_id: Option<i32>,
}

impl RequestContext {
    /// Create a new RequestContext with a generated request_id
    pub fn new() -> Self {
        Self {
            request_id: Uuid::new_v4(),
            ip_address: None,
            trainer_id: None,
        }
    }

    /// Build a context from an incoming HTTP request
    pub fn from_request(req: &Request) -> Self {
        Self {
            ip_address: Self::extract_ip_address(req),
            ..Self::new()
        }
    }

    /// Mark the context as authenticated for the given trainer
    pub fn with_trainer(mut self, trainer_id: i32) -> Self {
        self.trainer_id = Some(trainer_id);
        self
    }

    /// Extract IP address from request headers
    ///
    /// Checks X-Forwarded-For, X-Real-IP, and falls back to remote address.
    fn extract_ip_address(req: &Request) -> Option<IpAddr> {
        // Check X-Forwarded-For header (proxy/load balancer)
        if let Some(forwarded) = req.header("X-Forwarded-For") {
            if let Some(ip) = forwarded.split(',').next() {
                return ip.trim().parse().ok();
            }
        }

        // Check X-Real-IP header (nginx)
        if let Some(real_ip) = req.header("X-Real-IP") {
            return real_ip.parse().ok();
        }

        req.remote_addr().as_socket_addr().map(|addr| addr.ip())
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_context_is_unauthenticated() {
        let ctx = RequestContext::new();

        assert!(ctx.trainer_id.is_none());
        assert!(ctx.ip_address.is_none());
    }

    #[test]
    fn test_request_ids_are_unique() {
        assert_ne!(RequestContext::new().request_id, RequestContext::new().request_id);
    }

    #[test]
    fn test_with_trainer_sets_trainer_id() {
        let ctx = RequestContext::new().with_trainer(7);

        assert_eq!(ctx.trainer_id, Some(7));
    }

    #[test]
    fn test_from_request_prefers_forwarded_for() {
        let req = Request::builder()
            .header("X-Forwarded-For", "203.0.113.9, 10.0.0.1")
            .header("X-Real-IP", "198.51.100.2")
            .finish();

        let ctx = RequestContext::from_request(&req);

        assert_eq!(ctx.ip_address, Some("203.0.113.9".parse().unwrap()));
    }

    #[test]
    fn test_from_request_falls_back_to_real_ip() {
        let req = Request::builder()
            .header("X-Real-IP", "198.51.100.2")
            .finish();

        let ctx = RequestContext::from_request(&req);

        assert_eq!(ctx.ip_address, Some("198.51.100.2".parse().unwrap()));
    }
}
