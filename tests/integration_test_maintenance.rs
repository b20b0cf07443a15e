mod common;

use common::TestApp;
use rentmate::domain::models::maintenance::{MaintenanceRequest, NewMaintenanceParams};

fn params(tenant_id: &str, title: &str, priority: &str) -> NewMaintenanceParams {
    NewMaintenanceParams {
        tenant_id: tenant_id.to_string(),
        property_id: "p-1".to_string(),
        unit_id: "u-1".to_string(),
        title: title.to_string(),
        description: "Details provided by the tenant".to_string(),
        priority: priority.to_string(),
    }
}

#[tokio::test]
async fn test_tenant_submits_and_landlord_progresses_request() {
    let app = TestApp::new();

    let request = MaintenanceRequest::new(params("t-1", "Leaking faucet", "medium")).unwrap();
    let request = app.state.maintenance_repo.create(&request).await.unwrap();
    assert_eq!(request.status, "pending");

    let request = app
        .state
        .maintenance_repo
        .update_status(&request.id, "in-progress")
        .await
        .unwrap();
    assert_eq!(request.status, "in-progress");

    let request = app
        .state
        .maintenance_repo
        .update_status(&request.id, "completed")
        .await
        .unwrap();
    assert_eq!(request.status, "completed");
    assert!(request.updated_at >= request.submitted_at);
}

#[tokio::test]
async fn test_invalid_status_is_rejected_and_state_kept() {
    let app = TestApp::new();
    let request = MaintenanceRequest::new(params("t-1", "Broken heater", "high")).unwrap();
    let request = app.state.maintenance_repo.create(&request).await.unwrap();

    assert!(app
        .state
        .maintenance_repo
        .update_status(&request.id, "done")
        .await
        .is_err());

    let stored = app
        .state
        .maintenance_repo
        .find_by_id(&request.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.status, "pending");
}

#[tokio::test]
async fn test_tenant_portal_lists_only_own_requests() {
    let app = TestApp::new();

    for (tenant, title) in [("t-1", "Leaking faucet"), ("t-1", "Stuck window"), ("t-2", "No hot water")] {
        let request = MaintenanceRequest::new(params(tenant, title, "low")).unwrap();
        app.state.maintenance_repo.create(&request).await.unwrap();
    }

    let mine = app.state.maintenance_repo.list_by_tenant("t-1").await.unwrap();
    assert_eq!(mine.len(), 2);
    assert!(mine.iter().all(|r| r.tenant_id == "t-1"));
    assert_eq!(app.state.maintenance_repo.list().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_unknown_request_id_is_not_found() {
    let app = TestApp::new();
    assert!(app
        .state
        .maintenance_repo
        .update_status("missing", "completed")
        .await
        .is_err());
}
