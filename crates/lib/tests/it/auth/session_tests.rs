//! Session restore across page loads

use shiftgate::{
    AuthConfig, AuthService,
    page::RecordingNavigator,
    session::UserId,
    storage::{MemoryStorage, SessionStorage},
};

use crate::helpers::*;

#[test]
fn test_session_survives_page_navigation() {
    let page = logged_in_page("/index.html", COORDINATOR_EMAIL, COORDINATOR_PASSWORD);

    // Same tab, next page: a fresh service over the same storage
    let next = setup_page_with(sample_directory(), page.storage.clone(), "/pages/admin.html");

    let session = next.service.current_user().expect("Session should be restored");
    assert_eq!(session.id, UserId::from(2));
    assert_eq!(session.display_name, "Carla Ruiz");
    assert!(next.service.is_admin());
}

#[test]
fn test_new_tab_starts_logged_out() {
    let _page = logged_in_page("/index.html", USER_EMAIL, USER_PASSWORD);

    let other_tab = setup_page("/index.html");

    assert!(!other_tab.service.is_authenticated());
}

#[test]
fn test_corrupt_session_is_treated_as_absent() {
    let storage = MemoryStorage::new();
    storage.set_item("currentUser", "{not json").unwrap();

    let page = setup_page_with(sample_directory(), storage, "/pages/admin.html");

    assert!(!page.service.is_authenticated());
    assert!(!page.service.check_page_access());
}

#[test]
fn test_wrong_shape_session_is_treated_as_absent() {
    let storage = MemoryStorage::new();
    storage
        .set_item("currentUser", r#"{"id": 1, "nombre": "Sin correo"}"#)
        .unwrap();

    let page = setup_page_with(sample_directory(), storage, "/index.html");

    assert!(!page.service.is_authenticated());
}

#[test]
fn test_session_written_by_pages_is_readable() {
    // Shape written by the existing page scripts
    let storage = MemoryStorage::new();
    storage
        .set_item(
            "currentUser",
            r#"{"id":3,"nombre":"Diego Sanz","correo":"diego@turnos.es","permisos":"desarrollador"}"#,
        )
        .unwrap();

    let page = setup_page_with(sample_directory(), storage, "/index.html");

    assert!(page.service.is_developer());
}

#[test]
fn test_unreadable_storage_starts_logged_out() {
    let service = AuthService::new(
        AuthConfig::default(),
        Box::new(sample_directory()),
        Box::new(FailingStorage),
        Box::new(RecordingNavigator::new("/index.html")),
    );

    assert!(!service.is_authenticated());
}

#[test]
fn test_reload_picks_up_external_logout() {
    let mut page = logged_in_page("/index.html", USER_EMAIL, USER_PASSWORD);

    page.storage.remove_item("currentUser").unwrap();
    assert!(page.service.is_authenticated());

    page.service.reload();
    assert!(!page.service.is_authenticated());
}

#[test]
fn test_custom_storage_key() {
    let storage = MemoryStorage::new();
    let config = AuthConfig {
        storage_key: "turnosSession".to_string(),
        ..AuthConfig::default()
    };
    let mut service = AuthService::new(
        config,
        Box::new(sample_directory()),
        Box::new(storage.clone()),
        Box::new(RecordingNavigator::new("/index.html")),
    );

    service.login(USER_EMAIL, USER_PASSWORD).unwrap();

    assert!(storage.contains_key("turnosSession"));
    assert!(!storage.contains_key("currentUser"));
}
