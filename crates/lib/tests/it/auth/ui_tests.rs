//! Permission-driven UI refresh

use std::collections::HashMap;

use shiftgate::{
    AuthConfig, AuthService,
    page::{InfoField, MemoryDocument, MemoryElement, RecordingNavigator},
    storage::MemoryStorage,
};

use crate::helpers::*;

/// A page with two admin-only elements, one binding per info field and an
/// unknown binding
struct SamplePage {
    document: MemoryDocument,
    admin_only: Vec<MemoryElement>,
    info: HashMap<InfoField, MemoryElement>,
    unknown: MemoryElement,
}

fn sample_document() -> SamplePage {
    let mut document = MemoryDocument::new();
    let admin_only: Vec<MemoryElement> = (0..2)
        .map(|_| document.push(MemoryElement::new().with_attribute("data-admin-only", "")))
        .collect();
    let info: HashMap<InfoField, MemoryElement> = InfoField::ALL
        .into_iter()
        .map(|field| {
            let element = MemoryElement::new()
                .with_attribute("data-user-info", field.key())
                .with_text("--");
            (field, document.push(element))
        })
        .collect();
    let unknown = document.push(
        MemoryElement::new()
            .with_attribute("data-user-info", "telefono")
            .with_text("--"),
    );
    SamplePage {
        document,
        admin_only,
        info,
        unknown,
    }
}

#[test]
fn test_logged_out_hides_admin_elements_and_leaves_info() {
    let page = setup_page("/index.html");
    let sample = sample_document();

    page.service.update_ui(&sample.document);

    assert!(sample.admin_only.iter().all(|e| !e.is_visible()));
    assert!(sample.info.values().all(|e| e.text() == "--"));
}

#[test]
fn test_coordinator_sees_admin_elements_and_info() {
    let page = logged_in_page("/index.html", COORDINATOR_EMAIL, COORDINATOR_PASSWORD);
    let sample = sample_document();

    page.service.update_ui(&sample.document);

    assert!(sample.admin_only.iter().all(|e| e.is_visible()));
    assert_eq!(sample.info[&InfoField::Name].text(), "Carla Ruiz");
    assert_eq!(sample.info[&InfoField::Email].text(), COORDINATOR_EMAIL);
    assert_eq!(sample.info[&InfoField::PermissionLabel].text(), "Coordinador");
    assert_eq!(
        sample.info[&InfoField::PermissionDescription].text(),
        "Acceso administrativo"
    );
    assert_eq!(sample.info[&InfoField::Casilla].text(), "Caja 2, Mostrador");
    assert_eq!(sample.unknown.text(), "--");
}

#[test]
fn test_regular_user_does_not_see_admin_elements() {
    let page = logged_in_page("/index.html", USER_EMAIL, USER_PASSWORD);
    let sample = sample_document();

    page.service.update_ui(&sample.document);

    assert!(sample.admin_only.iter().all(|e| !e.is_visible()));
    assert_eq!(sample.info[&InfoField::PermissionLabel].text(), "Usuario");
    assert_eq!(
        sample.info[&InfoField::PermissionDescription].text(),
        "Solo puede gestionar turnos"
    );
    assert_eq!(sample.info[&InfoField::Casilla].text(), "Caja 1, Caja 2");
}

#[test]
fn test_legacy_admin_is_shown_as_administrator() {
    let page = logged_in_page("/index.html", ADMIN_EMAIL, ADMIN_PASSWORD);
    let sample = sample_document();

    page.service.update_ui(&sample.document);

    assert_eq!(sample.info[&InfoField::PermissionLabel].text(), "Administrador");
    assert_eq!(
        sample.info[&InfoField::PermissionDescription].text(),
        "Acceso administrativo"
    );
    assert_eq!(
        sample.info[&InfoField::Casilla].text(),
        "Sin casilla asignada"
    );
}

#[test]
fn test_developer_labels() {
    let page = logged_in_page("/index.html", DEVELOPER_EMAIL, DEVELOPER_PASSWORD);
    let sample = sample_document();

    page.service.update_ui(&sample.document);

    assert_eq!(sample.info[&InfoField::PermissionLabel].text(), "Desarrollador");
    assert_eq!(
        sample.info[&InfoField::PermissionDescription].text(),
        "Acceso completo al sistema"
    );
}

#[test]
fn test_logout_then_refresh_hides_admin_elements() {
    let mut page = logged_in_page("/index.html", DEVELOPER_EMAIL, DEVELOPER_PASSWORD);
    let sample = sample_document();
    page.service.update_ui(&sample.document);
    assert!(sample.admin_only.iter().all(|e| e.is_visible()));

    page.service.logout().unwrap();
    page.service.update_ui(&sample.document);

    assert!(sample.admin_only.iter().all(|e| !e.is_visible()));
}

#[test]
fn test_casilla_falls_back_when_directory_fails() {
    let mut service = AuthService::new(
        AuthConfig::default(),
        Box::new(FlakyDirectory::new()),
        Box::new(MemoryStorage::new()),
        Box::new(RecordingNavigator::new("/index.html")),
    );
    service.login(USER_EMAIL, USER_PASSWORD).unwrap();
    let sample = sample_document();

    service.update_ui(&sample.document);

    assert_eq!(
        sample.info[&InfoField::Casilla].text(),
        "Sin casilla asignada"
    );
    // Permission check failed too, so admin elements stay hidden
    assert!(sample.admin_only.iter().all(|e| !e.is_visible()));
}

#[test]
fn test_on_page_load_gates_then_refreshes() {
    let page = logged_in_page("/pages/configuracion.html", USER_EMAIL, USER_PASSWORD);
    let sample = sample_document();

    let granted = page.service.on_page_load(&sample.document);

    assert!(!granted);
    assert_eq!(page.navigator.last_redirect().as_deref(), Some("admin.html"));
    assert_eq!(sample.info[&InfoField::Name].text(), "Uma Gil");
}
