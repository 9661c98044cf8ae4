//! JSON-backed directory tests

use shiftgate::{
    AuthConfig, AuthService, Result,
    directory::{Casilla, DirectoryError, InMemoryDirectory, UserDirectory, UserRecord},
    page::{InfoField, RecordingNavigator},
    session::{PermissionLevel, UserId},
    storage::MemoryStorage,
};

use crate::helpers::*;

/// Export shape of the turnos `db` object, with a string id and a user
/// without the `bloqueado` flag
const EXPORT: &str = r#"{
  "usuarios": [
    {"id": 1, "nombre": "Ana", "correo": "Ana@Turnos.es", "contrasena": "a1", "permisos": "coordinador", "bloqueado": false},
    {"id": "legacy-7", "nombre": "Luis", "correo": "luis@turnos.es", "contrasena": "l7", "permisos": "admin"}
  ],
  "casillas": [
    {"id": 10, "nombre": "Caja 1", "usuarios": [1, "legacy-7"]}
  ]
}"#;

#[test]
fn test_load_export() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("usuarios.json");
    std::fs::write(&path, EXPORT).unwrap();

    let directory = InMemoryDirectory::load_from_file(&path).unwrap();

    let users = directory.users().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[1].id, UserId::from("legacy-7"));
    assert_eq!(users[1].permission_level, PermissionLevel::LegacyAdmin);
    assert!(!users[1].blocked);

    let casillas = directory.assigned_casillas(&UserId::from("legacy-7")).unwrap();
    assert_eq!(casillas.len(), 1);
}

#[test]
fn test_login_against_loaded_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("usuarios.json");
    std::fs::write(&path, EXPORT).unwrap();
    let directory = InMemoryDirectory::load_from_file(&path).unwrap();

    let mut page = setup_page_with(directory, MemoryStorage::new(), "/index.html");
    let session = page.service.login("luis@TURNOS.es", "l7").unwrap();

    assert_eq!(session.id, UserId::from("legacy-7"));
    assert!(page.service.is_admin());
    assert!(page.service.is_coordinator());
}

#[test]
fn test_save_then_load_keeps_blocked_flag() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("usuarios.json");
    let mut directory = sample_directory();
    directory.set_blocked(&UserId::from(2), true).unwrap();

    directory.save_to_file(&path).unwrap();
    let loaded = InMemoryDirectory::load_from_file(&path).unwrap();

    assert!(loaded.user(&UserId::from(2)).unwrap().blocked);
    assert!(!loaded.check_permission(&UserId::from(2), "admin").unwrap());
}

#[test]
fn test_missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = InMemoryDirectory::load_from_file(dir.path().join("nope.json")).unwrap_err();
    assert_eq!(err.module(), "directory");
    assert!(err.is_not_found());
    assert!(err.is_io_error());
}

#[test]
fn test_malformed_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("usuarios.json");
    std::fs::write(&path, r#"{"usuarios": [{"id": 1}]}"#).unwrap();

    let err = InMemoryDirectory::load_from_file(&path).unwrap_err();
    assert!(err.is_serialization_error());
}

/// `getUsuarios()` payload from the page's `db`, with nulls, a float id and a
/// record missing its credentials
const DB_USERS: &str = r#"[
  {"id": 1, "nombre": "Ana", "correo": "ana@turnos.es", "contrasena": "a1", "permisos": "coordinador", "bloqueado": false},
  {"id": 2, "nombre": null, "correo": "nadia@turnos.es", "contrasena": "n2", "permisos": null, "bloqueado": null},
  {"id": 3.5, "nombre": "Rota", "correo": "rota@turnos.es", "contrasena": "r3"},
  {"id": 4, "nombre": "Sin correo"}
]"#;

/// `obtenerCasillasDeUsuario()` payload: names only
const DB_CASILLAS: &str = r#"[{"nombre": "Caja 1"}, {"nombre": "Mostrador"}]"#;

/// Directory answering from raw `db` payloads, decoded the way the browser
/// directory decodes them.
struct PayloadDirectory {
    users: serde_json::Value,
    casillas: serde_json::Value,
}

impl PayloadDirectory {
    fn new(users: &str, casillas: &str) -> Self {
        Self {
            users: serde_json::from_str(users).unwrap(),
            casillas: serde_json::from_str(casillas).unwrap(),
        }
    }
}

impl UserDirectory for PayloadDirectory {
    fn users(&self) -> Result<Vec<UserRecord>> {
        let users = UserRecord::decode_list(self.users.clone())
            .map_err(|e| DirectoryError::Malformed { source: e })?;
        Ok(users)
    }

    fn check_permission(&self, user_id: &UserId, level: &str) -> Result<bool> {
        Ok(self
            .users()?
            .iter()
            .any(|u| &u.id == user_id && !u.blocked && u.permission_level.grants(level)))
    }

    fn assigned_casillas(&self, _user_id: &UserId) -> Result<Vec<Casilla>> {
        let casillas = serde_json::from_value(self.casillas.clone())
            .map_err(|e| DirectoryError::Malformed { source: e })?;
        Ok(casillas)
    }
}

fn payload_service(directory: PayloadDirectory) -> AuthService {
    AuthService::new(
        AuthConfig::default(),
        Box::new(directory),
        Box::new(MemoryStorage::new()),
        Box::new(RecordingNavigator::new("/index.html")),
    )
}

#[test]
fn test_db_user_list_keeps_good_records() {
    let directory = PayloadDirectory::new(DB_USERS, "[]");
    let users = directory.users().unwrap();

    let ids: Vec<String> = users.iter().map(|u| u.id.to_string()).collect();
    assert_eq!(ids, vec!["1", "2"]);
    assert_eq!(users[1].display_name, "");
    assert_eq!(users[1].permission_level, PermissionLevel::User);
    assert!(!users[1].blocked);
}

#[test]
fn test_login_survives_bad_db_records() {
    let mut service = payload_service(PayloadDirectory::new(DB_USERS, "[]"));

    let session = service.login("NADIA@turnos.es", "n2").unwrap();
    assert_eq!(session.id, UserId::from(2));
    assert!(service.has_permission("usuario"));
    assert!(!service.is_admin());

    let err = service.login("rota@turnos.es", "r3").unwrap_err();
    assert!(err.is_invalid_credentials());
}

#[test]
fn test_db_user_list_must_be_an_array() {
    let directory = PayloadDirectory::new(r#"{"usuarios": []}"#, "[]");
    let err = directory.users().unwrap_err();
    assert!(err.is_serialization_error());
}

#[test]
fn test_name_only_casillas_render() {
    let mut service = payload_service(PayloadDirectory::new(DB_USERS, DB_CASILLAS));
    let session = service.login("ana@turnos.es", "a1").unwrap();

    let casillas = service.directory().assigned_casillas(&session.id).unwrap();
    assert!(casillas.iter().all(|c| c.id.is_none()));
    assert_eq!(
        InfoField::Casilla.render(&session, service.directory()),
        "Caja 1, Mostrador"
    );
}
