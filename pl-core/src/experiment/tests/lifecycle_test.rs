use assertables::*;
use httpmock::prelude::*;

use super::*;

const SVC_URL: &str = "/api/v1/namespaces/peerlab/services/peerlab-exp-blue";
const STS_URL: &str = "/apis/apps/v1/namespaces/peerlab/statefulsets/peerlab-exp-blue";
const SCALE_URL: &str = "/apis/apps/v1/namespaces/peerlab/statefulsets/peerlab-exp-blue/scale";

fn handle_no_experiments(fake_apiserver: &mut MockServerBuilder) {
    fake_apiserver.handle(|when, then| {
        when.method(GET).path(STS_LIST_URL);
        then.json_body(list_body("StatefulSetList", "apps/v1", Vec::<appsv1::StatefulSet>::new()));
    });
}

fn handle_existing_experiment(fake_apiserver: &mut MockServerBuilder, peer_set: appsv1::StatefulSet) {
    fake_apiserver.handle(move |when, then| {
        when.method(GET).path(STS_LIST_URL);
        then.json_body(list_body("StatefulSetList", "apps/v1", vec![peer_set.clone()]));
    });
    fake_apiserver.handle(|when, then| {
        when.method(GET).path(PODS_LIST_URL);
        then.json_body(list_body("PodList", "v1", vec![test_pod("Running")]));
    });
}

#[rstest]

#[tokio::test]
async fn test_create(test_config: ExperimentConfig, test_service: corev1::Service, test_peer_set: appsv1::StatefulSet) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    handle_no_experiments(&mut fake_apiserver);
    fake_apiserver.handle_not_found(SVC_URL.into());
    fake_apiserver.handle(move |when, then| {
        when.method(POST).path(SVC_LIST_URL);
        then.json_body_obj(&test_service);
    });
    fake_apiserver.handle(move |when, then| {
        when.method(POST).path(STS_LIST_URL).body_matches("\"replicas\":3");
        then.json_body_obj(&test_peer_set);
    });

    create_experiment(client, &test_config).await.unwrap();
    fake_apiserver.assert();
}

#[rstest]

#[tokio::test]
async fn test_create_service_already_exists(
    test_config: ExperimentConfig,
    test_service: corev1::Service,
    test_peer_set: appsv1::StatefulSet,
) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    handle_no_experiments(&mut fake_apiserver);
    fake_apiserver.handle(move |when, then| {
        when.method(GET).path(SVC_URL);
        then.json_body_obj(&test_service);
    });
    fake_apiserver.handle_never(|when, then| {
        when.method(POST).path(SVC_LIST_URL);
        then.status(500);
    });
    fake_apiserver.handle(move |when, then| {
        when.method(POST).path(STS_LIST_URL);
        then.json_body_obj(&test_peer_set);
    });

    create_experiment(client, &test_config).await.unwrap();
    fake_apiserver.assert();
}

#[rstest]

#[tokio::test]
async fn test_create_collision(test_config: ExperimentConfig, test_peer_set: appsv1::StatefulSet) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    handle_existing_experiment(&mut fake_apiserver, test_peer_set);
    fake_apiserver.handle_never(|when, then| {
        when.method(POST);
        then.status(500);
    });

    let err = create_experiment(client, &test_config).await.unwrap_err();

    assert_eq!(format!("{}", err.root_cause()), format!("experiment '{TEST_EXP_NAME}' already exists"));
    fake_apiserver.assert();
}

#[rstest]

#[tokio::test]
async fn test_create_index_error_aborts(test_config: ExperimentConfig) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver.handle(|when, then| {
        when.method(GET).path(STS_LIST_URL);
        then.status(500).json_body(status_internal_error());
    });
    // an indeterminate existence check must not be treated as "not found"
    fake_apiserver.handle_never(|when, then| {
        when.method(POST);
        then.status(500);
    });

    let err = create_experiment(client, &test_config).await.unwrap_err();

    assert_contains!(format!("{}", err.root_cause()), "the cluster is on fire");
    fake_apiserver.assert();
}

#[rstest]

#[tokio::test]
async fn test_create_service_lookup_error_aborts(test_config: ExperimentConfig) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    handle_no_experiments(&mut fake_apiserver);
    fake_apiserver.handle(|when, then| {
        when.method(GET).path(SVC_URL);
        then.status(500).json_body(status_internal_error());
    });
    fake_apiserver.handle_never(|when, then| {
        when.method(POST);
        then.status(500);
    });

    let err = create_experiment(client, &test_config).await.unwrap_err();

    assert_contains!(format!("{}", err.root_cause()), "the cluster is on fire");
    fake_apiserver.assert();
}

#[rstest]

#[tokio::test]
async fn test_create_peer_set_failure_leaves_service(test_config: ExperimentConfig, test_service: corev1::Service) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    handle_no_experiments(&mut fake_apiserver);
    fake_apiserver.handle_not_found(SVC_URL.into());
    fake_apiserver.handle(move |when, then| {
        when.method(POST).path(SVC_LIST_URL);
        then.json_body_obj(&test_service);
    });
    fake_apiserver.handle(|when, then| {
        when.method(POST).path(STS_LIST_URL);
        then.status(500).json_body(status_internal_error());
    });
    // best-effort semantics: the already-created service must not be
    // rolled back when the StatefulSet create fails
    fake_apiserver.handle_never(|when, then| {
        when.method(DELETE).path(SVC_URL);
        then.json_body(status_ok());
    });

    let err = create_experiment(client, &test_config).await.unwrap_err();

    assert_contains!(format!("{}", err.root_cause()), "the cluster is on fire");
    fake_apiserver.assert();
}

#[rstest]

#[tokio::test]
async fn test_delete(test_peer_set: appsv1::StatefulSet) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    handle_existing_experiment(&mut fake_apiserver, test_peer_set);
    fake_apiserver.handle(|when, then| {
        when.method(DELETE).path(STS_URL);
        then.json_body(status_ok());
    });
    fake_apiserver.handle(|when, then| {
        when.method(DELETE).path(SVC_URL);
        then.json_body(status_ok());
    });

    delete_experiment(client, TEST_EXP_NAME).await.unwrap();
    fake_apiserver.assert();
}

#[rstest]

#[tokio::test]
async fn test_delete_not_found() {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    handle_no_experiments(&mut fake_apiserver);
    fake_apiserver.handle_never(|when, then| {
        when.method(DELETE);
        then.status(500);
    });

    let err = delete_experiment(client, TEST_EXP_NAME).await.unwrap_err();

    assert_eq!(format!("{}", err.root_cause()), format!("experiment '{TEST_EXP_NAME}' not found"));
    fake_apiserver.assert();
}

#[rstest]

#[tokio::test]
async fn test_delete_peer_set_failure_skips_service(test_peer_set: appsv1::StatefulSet) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    handle_existing_experiment(&mut fake_apiserver, test_peer_set);
    fake_apiserver.handle(|when, then| {
        when.method(DELETE).path(STS_URL);
        then.status(500).json_body(status_internal_error());
    });
    fake_apiserver.handle_never(|when, then| {
        when.method(DELETE).path(SVC_URL);
        then.json_body(status_ok());
    });

    let err = delete_experiment(client, TEST_EXP_NAME).await.unwrap_err();

    assert_contains!(format!("{}", err.root_cause()), "the cluster is on fire");
    fake_apiserver.assert();
}

#[rstest]

#[tokio::test]
async fn test_scale(test_peer_set: appsv1::StatefulSet) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    handle_existing_experiment(&mut fake_apiserver, test_peer_set);
    fake_apiserver.handle(|when, then| {
        when.method(PATCH).path(SCALE_URL).body_matches("\\{\"spec\":\\{\"replicas\":7\\}\\}");
        then.json_body(serde_json::json!({
            "apiVersion": "autoscaling/v1",
            "kind": "Scale",
            "metadata": {"name": TEST_EXP_FULL_NAME, "namespace": EXPERIMENT_NAMESPACE},
            "spec": {"replicas": 7},
        }));
    });

    scale_experiment(client, TEST_EXP_NAME, 7).await.unwrap();
    fake_apiserver.assert();
}

#[rstest]

#[tokio::test]
async fn test_scale_not_found() {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    handle_no_experiments(&mut fake_apiserver);
    fake_apiserver.handle_never(|when, then| {
        when.method(PATCH);
        then.status(500);
    });

    let err = scale_experiment(client, TEST_EXP_NAME, 7).await.unwrap_err();

    assert_eq!(format!("{}", err.root_cause()), format!("experiment '{TEST_EXP_NAME}' not found"));
    fake_apiserver.assert();
}
