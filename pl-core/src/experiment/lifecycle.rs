use clockabilly::prelude::*;
use kube::api::{
    Api,
    Patch,
};
use serde_json::json;
use tracing::debug;

use super::*;
use crate::k8s::bounded;
use crate::prelude::*;

/// Create the managed group for a new experiment: a headless service for
/// peer discovery, then the StatefulSet running the peers. The service is
/// only created if absent; a StatefulSet-creation failure after the service
/// step leaves the service in place (cleanup is delete's job).
pub async fn create_experiment(client: kube::Client, config: &ExperimentConfig) -> EmptyResult {
    let index = experiment_index(client.clone())
        .await
        .inspect_err(|e| println!("[ERROR] could not determine existing experiments: {e}"))?;
    if index.contains_key(&config.name) {
        println!("[ERROR] experiment '{}' already exists", config.name);
        return Err(ExperimentError::already_exists(&config.name));
    }
    debug!("creating experiment from {:?}", config);

    let full_name = to_full_name(&config.name);
    let labels = experiment_labels(&full_name, UtcClock.now());

    let svc_api: Api<corev1::Service> = Api::namespaced(client.clone(), EXPERIMENT_NAMESPACE);
    // get_opt disambiguates "absent" (expected, go create it) from any other
    // lookup failure, which aborts the whole operation
    match bounded(READ_DEADLINE, "get service", svc_api.get_opt(&full_name)).await {
        Ok(Some(_)) => (),
        Ok(None) => {
            let svc = build_headless_service(&full_name, &labels);
            if let Err(e) = bounded(WRITE_DEADLINE, "create service", svc_api.create(&Default::default(), &svc)).await
            {
                println!("[ERROR] failed to create headless service '{full_name}': {e}");
                return Err(e);
            }
            println!("[INFO] headless service '{full_name}' created");
        },
        Err(e) => {
            println!("[ERROR] failed to get service '{full_name}': {e}");
            return Err(e);
        },
    }

    let sts_api: Api<appsv1::StatefulSet> = Api::namespaced(client, EXPERIMENT_NAMESPACE);
    let peer_set = build_peer_set(config, &labels);
    if let Err(e) = bounded(WRITE_DEADLINE, "create statefulset", sts_api.create(&Default::default(), &peer_set)).await
    {
        println!("[ERROR] failed to create experiment '{}': {e}", config.name);
        return Err(e);
    }

    println!("[INFO] experiment '{}' created", config.name);
    Ok(())
}

/// Tear down an experiment's managed group: the StatefulSet first, then its
/// headless service. A StatefulSet-delete failure aborts before the service
/// delete is attempted.
pub async fn delete_experiment(client: kube::Client, exp_name: &str) -> EmptyResult {
    let index = experiment_index(client.clone())
        .await
        .inspect_err(|e| println!("[ERROR] could not determine existing experiments: {e}"))?;
    if !index.contains_key(exp_name) {
        println!("[ERROR] experiment '{exp_name}' not found");
        return Err(ExperimentError::not_found(exp_name));
    }

    let full_name = to_full_name(exp_name);
    let sts_api: Api<appsv1::StatefulSet> = Api::namespaced(client.clone(), EXPERIMENT_NAMESPACE);
    if let Err(e) = bounded(WRITE_DEADLINE, "delete statefulset", sts_api.delete(&full_name, &Default::default())).await
    {
        println!("[ERROR] failed to delete experiment '{exp_name}': {e}");
        return Err(e);
    }

    let svc_api: Api<corev1::Service> = Api::namespaced(client, EXPERIMENT_NAMESPACE);
    if let Err(e) = bounded(WRITE_DEADLINE, "delete service", svc_api.delete(&full_name, &Default::default())).await {
        println!("[ERROR] failed to delete service '{full_name}': {e}");
        return Err(e);
    }

    println!("[INFO] experiment '{exp_name}' deleted");
    Ok(())
}

/// Set the desired peer count through the scale subresource; nothing else
/// about the experiment changes.
pub async fn scale_experiment(client: kube::Client, exp_name: &str, replicas: i32) -> EmptyResult {
    let index = experiment_index(client.clone())
        .await
        .inspect_err(|e| println!("[ERROR] could not determine existing experiments: {e}"))?;
    if !index.contains_key(exp_name) {
        println!("[ERROR] experiment '{exp_name}' not found");
        return Err(ExperimentError::not_found(exp_name));
    }

    let full_name = to_full_name(exp_name);
    let sts_api: Api<appsv1::StatefulSet> = Api::namespaced(client, EXPERIMENT_NAMESPACE);
    let scale_patch = json!({"spec": {"replicas": replicas}});
    if let Err(e) = bounded(
        WRITE_DEADLINE,
        "update scale",
        sts_api.patch_scale(&full_name, &Default::default(), &Patch::Merge(scale_patch)),
    )
    .await
    {
        println!("[ERROR] failed to scale experiment '{exp_name}' to '{replicas}' peers: {e}");
        return Err(e);
    }

    println!("[INFO] experiment '{exp_name}' scaled to '{replicas}' peers");
    Ok(())
}
