pub const TEST_EXP_NAME: &str = "blue";
pub const TEST_EXP_FULL_NAME: &str = "peerlab-exp-blue";

// apiserver paths for the objects the tests touch
pub const STS_LIST_URL: &str = "/apis/apps/v1/namespaces/peerlab/statefulsets";
pub const PODS_LIST_URL: &str = "/api/v1/namespaces/peerlab/pods";
pub const SVC_LIST_URL: &str = "/api/v1/namespaces/peerlab/services";
