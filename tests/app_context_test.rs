mod common;

use common::{setup_app, setup_app_with, RecordingLauncher};
use lumen::app_context::ConnectReport;
use lumen::config::Settings;
use lumen::errors::DeleteOutcome;
use lumen::services::{NewAlert, NewChannel, NewDevice};
use sea_orm::ConnectionTrait;

fn device(name: &str, address: &str, model: &str) -> NewDevice {
    NewDevice {
        name: name.to_string(),
        address: address.to_string(),
        model: model.to_string(),
        firmware: Some("1.0.0".to_string()),
    }
}

#[tokio::test]
async fn test_connect_all_report_counts_each_device() {
    let test_app = setup_app_with(
        Settings::default(),
        RecordingLauncher::failing_for(&["10.0.0.3"]),
    )
    .await;
    let app = &test_app.app;

    app.create_device(device("Desk", "10.0.0.2", "lumen-strip"))
        .await
        .unwrap();
    app.create_device(device("Shelf", "10.0.0.3", "lumen-bulb"))
        .await
        .unwrap();
    app.create_device(device("Tv", "10.0.0.4", "acme-tv"))
        .await
        .unwrap();

    let report = app.connect_all_devices().await.unwrap();

    assert_eq!(
        report,
        ConnectReport {
            launched: 1,
            failed: 1,
            skipped: 1,
        }
    );
}

#[tokio::test]
async fn test_supported_models_come_from_settings() {
    let settings = Settings {
        supported_models: vec!["acme-tv".to_string()],
        ..Settings::default()
    };
    let test_app = setup_app_with(settings, RecordingLauncher::default()).await;

    let tv = test_app
        .app
        .create_device(device("Tv", "10.0.0.4", "acme-tv"))
        .await
        .unwrap();
    let strip = test_app
        .app
        .create_device(device("Desk", "10.0.0.2", "lumen-strip"))
        .await
        .unwrap();

    assert!(tv.supported);
    assert!(!strip.supported);
}

#[tokio::test]
async fn test_delete_device_returns_annotated_record() {
    let test_app = setup_app().await;
    let app = &test_app.app;
    let created = app
        .create_device(device("Desk", "10.0.0.2", "lumen-strip"))
        .await
        .unwrap();

    match app.delete_device(created.device.id).await {
        DeleteOutcome::Deleted(annotated) => {
            assert_eq!(annotated.device.id, created.device.id);
            assert!(annotated.supported);
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert!(app.list_devices().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_start_takeover_missing_channel_leaves_controller_idle() {
    let test_app = setup_app().await;

    let session = test_app.app.start_takeover(3).await.unwrap();

    assert!(session.is_none());
    assert!(test_app.app.takeover_status().await.is_none());
    assert!(test_app.controller.started().is_empty());
    assert_eq!(test_app.controller.stop_count(), 0);
}

#[tokio::test]
async fn test_delete_channel_and_alert_outcomes() {
    let test_app = setup_app().await;
    let app = &test_app.app;

    let channel = app
        .channel_service()
        .create(NewChannel {
            name: "Ambient".to_string(),
            description: None,
            enabled: None,
        })
        .await
        .unwrap();
    let alert = app
        .alert_service()
        .create(NewAlert {
            title: "Offline".to_string(),
            message: None,
            severity: None,
        })
        .await
        .unwrap();

    assert_eq!(
        app.delete_channel(channel.id).await.into_model().map(|c| c.id),
        Some(channel.id)
    );
    assert!(matches!(
        app.delete_channel(channel.id).await,
        DeleteOutcome::NotFound
    ));
    assert_eq!(
        app.delete_alert(alert.id).await.into_model().map(|a| a.id),
        Some(alert.id)
    );

    test_app
        .db
        .execute_unprepared("DROP TABLE alerts")
        .await
        .unwrap();
    assert!(matches!(
        app.delete_alert(alert.id).await,
        DeleteOutcome::Failed(_)
    ));
}
