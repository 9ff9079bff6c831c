//! Repository and service tests against an in-memory SQLite database.

use std::sync::Arc;

use common::{AppError, DatabaseConfig};
use domain::{NewTenant, NewTenantUser, TenantChanges, TenantUserChanges};
use tenant_service_lib::infra::Database;
use tenant_service_lib::service::{ServiceContainer, Services, TenantService, TenantUserService};

async fn setup() -> Services {
    let db = Database::connect(&DatabaseConfig::in_memory())
        .await
        .expect("in-memory database");
    Services::from_connection(db.get_connection())
}

fn new_tenant(slug: &str) -> NewTenant {
    NewTenant {
        name: "Acme".to_string(),
        slug: slug.to_string(),
        connection_string: "Host=x".to_string(),
    }
}

fn new_user(tenant_id: uuid::Uuid, email: &str) -> NewTenantUser {
    NewTenantUser {
        tenant_id,
        email: email.to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        password: "secret123".to_string(),
    }
}

#[tokio::test]
async fn test_create_tenant_stores_lowercase_slug() {
    let services = setup().await;
    let tenants = services.tenants();

    let created = tenants.create_tenant(new_tenant("Acme-Corp")).await.unwrap();
    assert_eq!(created.slug, "acme-corp");
    assert!(created.is_active);

    let fetched = tenants.get_tenant(created.id).await.unwrap();
    assert_eq!(fetched, created);

    let by_slug = tenants.find_tenant_by_slug("ACME-CORP").await.unwrap();
    assert_eq!(by_slug.map(|t| t.id), Some(created.id));
}

#[tokio::test]
async fn test_slugs_differing_in_case_conflict() {
    let services = setup().await;
    let tenants = services.tenants();

    tenants.create_tenant(new_tenant("acme")).await.unwrap();
    let result = tenants.create_tenant(new_tenant("ACME")).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    assert_eq!(tenants.list_tenants().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_concurrent_creates_with_same_slug() {
    let services = setup().await;
    let tenants = services.tenants();

    let attempts = (0..4).map(|_| {
        let tenants = Arc::clone(&tenants);
        async move { tenants.create_tenant(new_tenant("race")).await }
    });
    let results = futures::future::join_all(attempts).await;

    let created = results.iter().filter(|r| r.is_ok()).count();
    let conflicts = results
        .iter()
        .filter(|r| matches!(r, Err(AppError::Conflict(_))))
        .count();

    assert_eq!(created, 1);
    assert_eq!(conflicts, 3);
}

#[tokio::test]
async fn test_empty_update_only_bumps_updated_at() {
    let services = setup().await;
    let tenants = services.tenants();

    let created = tenants.create_tenant(new_tenant("acme")).await.unwrap();
    let updated = tenants
        .update_tenant(created.id, TenantChanges::default())
        .await
        .unwrap();

    assert_eq!(updated.name, created.name);
    assert_eq!(updated.is_active, created.is_active);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);
}

#[tokio::test]
async fn test_update_unknown_tenant() {
    let services = setup().await;

    let result = services
        .tenants()
        .update_tenant(uuid::Uuid::new_v4(), TenantChanges::default())
        .await;

    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_delete_tenant_then_get() {
    let services = setup().await;
    let tenants = services.tenants();

    let created = tenants.create_tenant(new_tenant("acme")).await.unwrap();
    tenants.delete_tenant(created.id).await.unwrap();

    assert!(matches!(
        tenants.get_tenant(created.id).await,
        Err(AppError::NotFound)
    ));
    assert!(matches!(
        tenants.delete_tenant(created.id).await,
        Err(AppError::NotFound)
    ));
}

#[tokio::test]
async fn test_delete_tenant_cascades_to_users() {
    let services = setup().await;
    let tenants = services.tenants();
    let users = services.tenant_users();

    let acme = tenants.create_tenant(new_tenant("acme")).await.unwrap();
    let other = tenants.create_tenant(new_tenant("other")).await.unwrap();
    let doomed = users.create_user(new_user(acme.id, "a@b.com")).await.unwrap();
    let survivor = users.create_user(new_user(other.id, "a@b.com")).await.unwrap();

    tenants.delete_tenant(acme.id).await.unwrap();

    assert!(matches!(
        users.get_user(doomed.id).await,
        Err(AppError::NotFound)
    ));
    assert!(users.list_users_by_tenant(acme.id).await.unwrap().is_empty());
    assert_eq!(users.get_user(survivor.id).await.unwrap().id, survivor.id);
}

#[tokio::test]
async fn test_email_unique_per_tenant_only() {
    let services = setup().await;
    let tenants = services.tenants();
    let users = services.tenant_users();

    let t1 = tenants.create_tenant(new_tenant("t1")).await.unwrap();
    let t2 = tenants.create_tenant(new_tenant("t2")).await.unwrap();

    users.create_user(new_user(t1.id, "a@b.com")).await.unwrap();
    users.create_user(new_user(t2.id, "a@b.com")).await.unwrap();

    let duplicate = users.create_user(new_user(t1.id, "a@b.com")).await;
    assert!(matches!(duplicate, Err(AppError::Conflict(_))));

    assert_eq!(users.list_users_by_tenant(t1.id).await.unwrap().len(), 1);
    assert_eq!(users.list_users_by_tenant(t2.id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_user_for_unknown_tenant() {
    let services = setup().await;

    let result = services
        .tenant_users()
        .create_user(new_user(uuid::Uuid::new_v4(), "a@b.com"))
        .await;

    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_user_password_is_hashed_and_verifiable() {
    let services = setup().await;
    let tenant = services
        .tenants()
        .create_tenant(new_tenant("acme"))
        .await
        .unwrap();

    let users = services.tenant_users();
    let created = users.create_user(new_user(tenant.id, "a@b.com")).await.unwrap();
    let fetched = users.get_user(created.id).await.unwrap();

    assert_ne!(fetched.password_hash, "secret123");
    assert!(fetched.verify_password("secret123"));
    assert!(!fetched.verify_password("wrong-password"));
}

#[tokio::test]
async fn test_update_user_keeps_email_and_password() {
    let services = setup().await;
    let tenant = services
        .tenants()
        .create_tenant(new_tenant("acme"))
        .await
        .unwrap();

    let users = services.tenant_users();
    let created = users.create_user(new_user(tenant.id, "a@b.com")).await.unwrap();
    let updated = users
        .update_user(
            created.id,
            TenantUserChanges {
                first_name: Some("Grace".to_string()),
                last_name: None,
                is_active: Some(false),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.first_name, "Grace");
    assert_eq!(updated.last_name, "Lovelace");
    assert!(!updated.is_active);
    assert_eq!(updated.email, created.email);
    assert_eq!(updated.password_hash, created.password_hash);
    assert!(updated.updated_at > created.updated_at);

    users.delete_user(created.id).await.unwrap();
    assert!(matches!(
        users.delete_user(created.id).await,
        Err(AppError::NotFound)
    ));
}

#[tokio::test]
async fn test_concurrent_tenant_updates_of_different_fields() {
    let services = setup().await;
    let tenants = services.tenants();

    let created = tenants.create_tenant(new_tenant("acme")).await.unwrap();
    let (renamed, deactivated) = futures::join!(
        tenants.update_tenant(
            created.id,
            TenantChanges {
                name: Some("Acme Inc".to_string()),
                is_active: None,
            },
        ),
        tenants.update_tenant(
            created.id,
            TenantChanges {
                name: None,
                is_active: Some(false),
            },
        ),
    );
    renamed.unwrap();
    deactivated.unwrap();

    let fetched = tenants.get_tenant(created.id).await.unwrap();
    assert_eq!(fetched.name, "Acme Inc");
    assert!(!fetched.is_active);
    assert_eq!(fetched.slug, created.slug);
    assert!(fetched.updated_at > created.updated_at);
}

#[tokio::test]
async fn test_concurrent_user_updates_of_different_fields() {
    let services = setup().await;
    let tenant = services
        .tenants()
        .create_tenant(new_tenant("acme"))
        .await
        .unwrap();

    let users = services.tenant_users();
    let created = users.create_user(new_user(tenant.id, "a@b.com")).await.unwrap();
    let (first, last) = futures::join!(
        users.update_user(
            created.id,
            TenantUserChanges {
                first_name: Some("Grace".to_string()),
                ..Default::default()
            },
        ),
        users.update_user(
            created.id,
            TenantUserChanges {
                last_name: Some("Hopper".to_string()),
                ..Default::default()
            },
        ),
    );
    first.unwrap();
    last.unwrap();

    let fetched = users.get_user(created.id).await.unwrap();
    assert_eq!(fetched.first_name, "Grace");
    assert_eq!(fetched.last_name, "Hopper");
    assert!(fetched.is_active);
    assert_eq!(fetched.password_hash, created.password_hash);
}

#[tokio::test]
async fn test_concurrent_creates_with_same_email() {
    let services = setup().await;
    let tenant = services
        .tenants()
        .create_tenant(new_tenant("acme"))
        .await
        .unwrap();
    let users = services.tenant_users();
    let tenant_id = tenant.id;

    let attempts = (0..4).map(|_| {
        let users = Arc::clone(&users);
        async move { users.create_user(new_user(tenant_id, "a@b.com")).await }
    });
    let results = futures::future::join_all(attempts).await;

    let created = results.iter().filter(|r| r.is_ok()).count();
    let conflicts = results
        .iter()
        .filter(|r| matches!(r, Err(AppError::Conflict(_))))
        .count();

    assert_eq!(created, 1);
    assert_eq!(conflicts, 3);
    assert_eq!(users.list_users_by_tenant(tenant_id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_empty_user_update_only_bumps_updated_at() {
    let services = setup().await;
    let tenant = services
        .tenants()
        .create_tenant(new_tenant("acme"))
        .await
        .unwrap();

    let users = services.tenant_users();
    let created = users.create_user(new_user(tenant.id, "a@b.com")).await.unwrap();
    let once = users
        .update_user(created.id, TenantUserChanges::default())
        .await
        .unwrap();
    let twice = users
        .update_user(created.id, TenantUserChanges::default())
        .await
        .unwrap();

    assert_eq!(once.first_name, created.first_name);
    assert_eq!(once.last_name, created.last_name);
    assert_eq!(once.email, created.email);
    assert_eq!(once.created_at, created.created_at);
    assert!(once.updated_at > created.updated_at);
    assert!(twice.updated_at > once.updated_at);
}

#[tokio::test]
async fn test_update_unknown_user() {
    let services = setup().await;

    let result = services
        .tenant_users()
        .update_user(uuid::Uuid::new_v4(), TenantUserChanges::default())
        .await;

    assert!(matches!(result, Err(AppError::NotFound)));
}
