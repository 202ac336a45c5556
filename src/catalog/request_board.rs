use crate::catalog::CatalogError;
use crate::catalog::loader::{ensure_unique_ids, parse};
use crate::catalog::serialized::SerializedPostedRequest;
use crate::domain::{BloodTypeFilter, PostedRequest};
use tracing::{debug, info, instrument};

const BLOOD_REQUESTS_JSON: &str = include_str!("../../resources/blood_requests.json");

/// The posted blood requests, in the order they were published.
#[derive(Debug, Clone)]
pub struct RequestBoard {
    requests: Vec<PostedRequest>,
}

impl RequestBoard {
    pub fn embedded() -> Result<Self, CatalogError> {
        RequestBoard::from_json(BLOOD_REQUESTS_JSON)
    }

    #[instrument(skip_all)]
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        info!("📋 Loading blood requests...");
        let requests = parse::<SerializedPostedRequest, PostedRequest>(json, "blood requests")?;
        ensure_unique_ids(&requests, |request| request.id, "blood requests")?;

        info!("📋 Loading blood requests... OK, {} request(s)", requests.len());
        Ok(RequestBoard { requests })
    }

    pub fn requests(&self) -> &[PostedRequest] {
        &self.requests
    }

    /// Requests for exactly the selected blood type, fulfilled ones included.
    pub fn filter(&self, blood_type: BloodTypeFilter) -> Vec<&PostedRequest> {
        let requests = self
            .requests
            .iter()
            .filter(|request| blood_type.admits(request.blood_type))
            .collect::<Vec<_>>();
        debug!("{} of {} request(s) match {:?}", requests.len(), self.requests.len(), blood_type);
        requests
    }
}
