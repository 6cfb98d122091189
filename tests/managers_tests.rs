mod support;

use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;

use suba_admin::managers::{
    ClickOutcome, DraftState, DriversManager, FareManager, FormModal, PassengersManager,
    RoutesManager, INCOMPLETE_DRAFT_MESSAGE, INVALID_FARE_MESSAGE,
};
use suba_admin::models::driver::DriverStatus;
use suba_admin::models::route::GeoPoint;
use suba_admin::session::{SessionRepository, StorageKey};
use suba_admin::utils::errors::AdminError;

use support::*;

fn dec(value: &str) -> Decimal {
    Decimal::from_str(value).unwrap()
}

fn origin() -> GeoPoint {
    GeoPoint::new(8.2976, -62.7415)
}

fn destination() -> GeoPoint {
    GeoPoint::new(8.3101, -62.7002)
}

#[tokio::test]
async fn test_driver_search_and_stats() {
    let backend = FakeBackend::start().await;
    let mut manager = DriversManager::new(admin_client(&backend).await);
    manager.load().await.unwrap();

    assert_eq!(manager.filtered().len(), 2);
    let stats = manager.stats();
    assert_eq!((stats.total, stats.active, stats.inactive), (2, 1, 1));

    manager.set_search("lic-002");
    let found = manager.filtered();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "María Pérez");

    manager.set_search("CARLOS@");
    assert_eq!(manager.filtered()[0].id, "d1");

    manager.set_search("");
    assert_eq!(manager.filtered().len(), manager.list().len());
}

#[tokio::test]
async fn test_created_driver_is_reconciled_without_duplicates() {
    let backend = FakeBackend::start().await;
    let mut manager = DriversManager::new(admin_client(&backend).await);
    manager.load().await.unwrap();

    manager.open_create();
    {
        let form = manager.form_mut().unwrap();
        form.name = "Pedro Salas".to_string();
        form.email = "pedro@suba.com".to_string();
        form.password = "secreto1".to_string();
        form.license_number = "LIC-100".to_string();
        form.phone = "0416-3333333".to_string();
    }
    let created = manager.submit().await.unwrap();
    assert_eq!(created.status, DriverStatus::Active);
    assert_eq!(manager.list().len(), 3);
    assert!(!manager.form().is_open());

    manager.load().await.unwrap();
    assert_eq!(manager.list().len(), 3);
    assert_eq!(
        manager.list().items().iter().filter(|d| d.id == created.id).count(),
        1
    );
}

#[tokio::test]
async fn test_invalid_driver_form_stays_open_without_network() {
    let backend = FakeBackend::start().await;
    let mut manager = DriversManager::new(admin_client(&backend).await);
    manager.load().await.unwrap();
    let before = backend.request_count();

    manager.open_create();
    manager.form_mut().unwrap().name = "Solo Nombre".to_string();

    let err = manager.submit().await.unwrap_err();
    assert!(err.is_validation());
    assert_eq!(backend.request_count(), before);
    assert!(matches!(manager.form(), FormModal::Create(form) if form.name == "Solo Nombre"));
}

#[tokio::test]
async fn test_edit_updates_in_place_and_never_sends_password() {
    let backend = FakeBackend::start().await;
    let mut manager = DriversManager::new(admin_client(&backend).await);
    manager.load().await.unwrap();

    manager.open_edit("d2").unwrap();
    assert_eq!(manager.form().form().unwrap().password, "");
    {
        let form = manager.form_mut().unwrap();
        form.name = "María P. Rondón".to_string();
        form.status = DriverStatus::Active;
    }
    manager.submit().await.unwrap();

    assert_eq!(manager.list().len(), 2);
    let driver = manager.list().get("d2").unwrap();
    assert_eq!(driver.name, "María P. Rondón");
    assert!(driver.is_active());
    assert!(!backend.password_sent_on_update());
}

#[tokio::test]
async fn test_driver_delete_requires_confirmation() {
    let backend = FakeBackend::start().await;
    let mut manager = DriversManager::new(admin_client(&backend).await);
    manager.load().await.unwrap();

    manager.request_delete("d1").unwrap();
    assert_eq!(manager.pending_delete().unwrap().name, "Carlos Rivas");
    manager.cancel_delete();
    assert!(manager.confirm_delete().await.unwrap_err().is_validation());
    assert_eq!(backend.driver_count(), 2);

    manager.request_delete("d1").unwrap();
    let removed = manager.confirm_delete().await.unwrap();
    assert_eq!(removed.id, "d1");
    assert!(manager.list().get("d1").is_none());
    assert!(manager.pending_delete().is_none());
    assert_eq!(backend.driver_count(), 1);
}

#[tokio::test]
async fn test_failed_reload_keeps_previous_items() {
    let backend = FakeBackend::start().await;
    let client = admin_client(&backend).await;
    let mut manager = DriversManager::new(client.clone());
    manager.load().await.unwrap();

    client.session().repository().remove_item(StorageKey::Token).await.unwrap();

    let err = manager.load().await.unwrap_err();
    assert!(matches!(err, AdminError::Backend { status: 401, .. }));
    assert_eq!(manager.list().len(), 2);
    assert_eq!(manager.list().error(), Some("No autorizado"));
    assert!(!manager.list().is_loading());
}

#[tokio::test]
async fn test_passenger_search_and_credit_total() {
    let backend = FakeBackend::start().await;
    let mut manager = PassengersManager::new(admin_client(&backend).await);
    manager.load().await.unwrap();

    let stats = manager.stats();
    assert_eq!(stats.total, 2);
    assert_eq!(stats.total_credit, dec("30.5"));

    manager.set_search("torres");
    assert_eq!(manager.filtered().len(), 1);
    manager.set_search("ANA@CORREO");
    assert_eq!(manager.filtered()[0].id, "p1");
}

#[tokio::test]
async fn test_route_saved_from_draft_in_backend_mode() {
    let backend = FakeBackend::start().await;
    let mut manager = RoutesManager::new(admin_client(&backend).await);
    manager.load().await.unwrap();

    assert_eq!(manager.click(origin()).await.unwrap(), ClickOutcome::Started(origin()));
    assert_eq!(
        manager.click(destination()).await.unwrap(),
        ClickOutcome::Completed(destination())
    );
    assert_eq!(manager.click(origin()).await.unwrap(), ClickOutcome::Ignored);
    assert!(manager.draft().preview().is_none());

    manager.draft_mut().name = "Unare - Puerto Ordaz".to_string();
    manager.draft_mut().fare_input = "3.5".to_string();

    let route = manager.save_draft().await.unwrap();
    assert_eq!(route.fare, Some(dec("3.5")));
    assert_eq!(route.start_point, origin());
    assert_eq!(manager.list().len(), 3);
    assert_eq!(manager.draft().state(), DraftState::Empty);
    assert!(manager.draft().name.is_empty());
}

#[tokio::test]
async fn test_incomplete_draft_is_rejected_without_network() {
    let backend = FakeBackend::start().await;
    let mut manager = RoutesManager::new(admin_client(&backend).await);
    let before = backend.request_count();

    manager.click(origin()).await.unwrap();
    manager.draft_mut().name = "Ruta sin destino".to_string();

    let err = manager.save_draft().await.unwrap_err();
    assert_eq!(err.user_message(), INCOMPLETE_DRAFT_MESSAGE);
    assert_eq!(backend.request_count(), before);
}

#[tokio::test]
async fn test_client_mode_sends_computed_geometry() {
    let backend = FakeBackend::start().await;
    let provider = Arc::new(ScriptedRouting::ok());
    let mut manager = RoutesManager::with_provider(admin_client(&backend).await, provider.clone());

    manager.click(origin()).await.unwrap();
    assert_eq!(provider.calls(), 0);
    manager.click(destination()).await.unwrap();
    assert_eq!(provider.calls(), 1);

    let preview = manager.draft().preview().unwrap();
    assert_eq!(preview.formatted_distance(), "7.50 km");
    assert_eq!(manager.draft().polyline().len(), 2);

    manager.draft_mut().name = "Calculada".to_string();
    let route = manager.save_draft().await.unwrap();
    assert_eq!(route.distance, 7.5);
    assert_eq!(route.duration, 15.0);
}

#[tokio::test]
async fn test_client_mode_failure_keeps_only_the_start_point() {
    let backend = FakeBackend::start().await;
    let provider = Arc::new(ScriptedRouting::failing());
    let mut manager = RoutesManager::with_provider(admin_client(&backend).await, provider.clone());

    manager.click(origin()).await.unwrap();
    let err = manager.click(destination()).await.unwrap_err();
    assert!(matches!(err, AdminError::Routing(_)));
    assert_eq!(manager.draft().state(), DraftState::StartOnly { start: origin() });
    assert!(manager.draft().preview().is_none());
}

#[tokio::test]
async fn test_toggle_flips_activation() {
    let backend = FakeBackend::start().await;
    let mut manager = RoutesManager::new(admin_client(&backend).await);
    manager.load().await.unwrap();

    let route = manager.toggle_active("r1").await.unwrap();
    assert!(!route.is_active);
    assert_eq!(manager.stats().active, 1);

    let route = manager.toggle_active("r1").await.unwrap();
    assert!(route.is_active);
    assert_eq!(manager.stats().active, 2);
}

#[tokio::test]
async fn test_deactivate_keeps_route_but_permanent_delete_removes_it() {
    let backend = FakeBackend::start().await;
    let mut manager = RoutesManager::new(admin_client(&backend).await);
    manager.load().await.unwrap();

    manager.deactivate("r2").await.unwrap();
    let route = manager.list().get("r2").unwrap();
    assert!(!route.is_active);
    assert_eq!(manager.list().len(), 2);

    manager.request_delete("r2").unwrap();
    manager.confirm_delete().await.unwrap();
    assert!(manager.list().get("r2").is_none());
    assert_eq!(manager.list().len(), 1);
    assert!(backend.route("r2").is_none());
}

#[tokio::test]
async fn test_fare_preview_and_save() {
    let backend = FakeBackend::start().await;
    let client = admin_client(&backend).await;
    let mut manager = FareManager::new(client.clone());

    manager.load().await.unwrap();
    assert_eq!(manager.input(), "100");
    assert!(manager.change_preview().is_none());

    manager.set_input("150.5");
    let change = manager.change_preview().unwrap();
    assert_eq!(change.display(), "+50.50%");
    assert_eq!(change.summary(), "Bs. 100,00 → Bs. 150,50");

    let saved = manager.save().await.unwrap();
    assert_eq!(saved.fare, dec("150.5"));
    assert!(manager.change_preview().is_none());

    let general = client.get_general_fare().await.unwrap().unwrap();
    assert_eq!(general.fare, dec("150.5"));
}

#[tokio::test]
async fn test_invalid_fare_is_rejected_without_network() {
    let backend = FakeBackend::start().await;
    let mut manager = FareManager::new(admin_client(&backend).await);
    manager.load().await.unwrap();
    let before = backend.request_count();

    for input in ["0", "-5", "abc", "", "79228162514264337593543950335"] {
        manager.set_input(input);
        let err = manager.save().await.unwrap_err();
        assert_eq!(err.user_message(), INVALID_FARE_MESSAGE);
    }
    assert_eq!(backend.request_count(), before);
}

#[tokio::test]
async fn test_huge_fare_input_shows_no_preview() {
    let backend = FakeBackend::start().await;
    let mut manager = FareManager::new(admin_client(&backend).await);
    manager.load().await.unwrap();

    manager.set_input("79228162514264337593543950335");
    assert!(manager.change_preview().is_none());

    manager.set_input("1e40");
    assert!(manager.change_preview().is_none());

    manager.set_input("1000000000");
    assert!(manager.change_preview().is_some());
}

#[tokio::test]
async fn test_general_fare_is_created_when_none_exists() {
    let backend = FakeBackend::start_without_fares().await;
    let client = admin_client(&backend).await;
    let mut manager = FareManager::new(client.clone());

    assert!(manager.load().await.unwrap().is_none());
    assert_eq!(manager.input(), "");

    manager.set_input("80");
    assert!(manager.change_preview().is_none());
    let created = manager.save().await.unwrap();
    assert_eq!(created.fare, dec("80"));
    assert_eq!(manager.current().unwrap().id, created.id);
    assert_eq!(client.get_fares().await.unwrap().len(), 1);
}
