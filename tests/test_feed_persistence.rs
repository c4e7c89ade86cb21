pub mod common;

use common::*;
use serial_test::serial;
use std::time::Duration;
use tempfile::TempDir;
use tokio::time::timeout;
use transit_notifier::{
    application,
    service::{fanout_service::FanoutService, notifications_feed_service::NotificationsFeedService},
};

#[tokio::test]
#[serial]
async fn feed_survives_agent_restart() -> anyhow::Result<()> {
    let feed_dir = TempDir::new()?;

    let hub = TestHub::bind().await;
    let env = create_test_env(hub.url(), feed_dir.path());
    let (state, state_to_close) = application::create_state(&env).await?;
    let (callback, mut delivered) = create_recording_subscriber();
    state.fanout_service.subscribe(callback).await;
    let mut session = hub.accept().await;
    session.emit("ShiftStarted", "driver 7 started").await;
    session.emit("BusSOS", "engine fire").await;
    for _ in 0..2 {
        timeout(Duration::from_secs(5), delivered.recv())
            .await?
            .unwrap();
    }
    let records_before = state.notifications_feed_service.records().await;
    application::close(state_to_close).await;
    drop(session);
    drop(hub);

    // Fresh hub and state over the same feed slot
    let hub = TestHub::bind().await;
    let env = create_test_env(hub.url(), feed_dir.path());
    let (state, state_to_close) = application::create_state(&env).await?;

    let records_after = state.notifications_feed_service.records().await;
    assert_eq!(records_after, records_before);

    application::close(state_to_close).await;

    Ok(())
}

#[tokio::test]
#[serial]
async fn read_marks_survive_agent_restart() -> anyhow::Result<()> {
    let feed_dir = TempDir::new()?;

    let hub = TestHub::bind().await;
    let env = create_test_env(hub.url(), feed_dir.path());
    let (state, state_to_close) = application::create_state(&env).await?;
    let (callback, mut delivered) = create_recording_subscriber();
    state.fanout_service.subscribe(callback).await;
    let mut session = hub.accept().await;
    session.emit("ShiftStarted", "driver 7 started").await;
    session.emit("ShiftEnded", "driver 7 done").await;
    for _ in 0..2 {
        timeout(Duration::from_secs(5), delivered.recv())
            .await?
            .unwrap();
    }
    state.notifications_feed_service.mark_all_read().await?;
    application::close(state_to_close).await;
    drop(session);
    drop(hub);

    let hub = TestHub::bind().await;
    let env = create_test_env(hub.url(), feed_dir.path());
    let (state, state_to_close) = application::create_state(&env).await?;

    let records = state.notifications_feed_service.records().await;
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|record| record.read));
    assert_eq!(state.notifications_feed_service.unread_count().await, 0);

    application::close(state_to_close).await;

    Ok(())
}

#[tokio::test]
#[serial]
async fn removed_record_stays_gone_after_restart() -> anyhow::Result<()> {
    let feed_dir = TempDir::new()?;

    let hub = TestHub::bind().await;
    let env = create_test_env(hub.url(), feed_dir.path());
    let (state, state_to_close) = application::create_state(&env).await?;
    let (callback, mut delivered) = create_recording_subscriber();
    state.fanout_service.subscribe(callback).await;
    let mut session = hub.accept().await;
    session.emit("ShiftStarted", "driver 7 started").await;
    session.emit("BusSOS", "engine fire").await;
    for _ in 0..2 {
        timeout(Duration::from_secs(5), delivered.recv())
            .await?
            .unwrap();
    }
    let records = state.notifications_feed_service.records().await;
    let removed_id = records[0].id;
    let kept_id = records[1].id;
    state.notifications_feed_service.remove(removed_id).await?;
    application::close(state_to_close).await;
    drop(session);
    drop(hub);

    let hub = TestHub::bind().await;
    let env = create_test_env(hub.url(), feed_dir.path());
    let (state, state_to_close) = application::create_state(&env).await?;

    let records = state.notifications_feed_service.records().await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, kept_id);

    application::close(state_to_close).await;

    Ok(())
}

#[tokio::test]
#[serial]
async fn cleared_feed_stays_empty_after_restart() -> anyhow::Result<()> {
    let feed_dir = TempDir::new()?;

    let hub = TestHub::bind().await;
    let env = create_test_env(hub.url(), feed_dir.path());
    let (state, state_to_close) = application::create_state(&env).await?;
    let (callback, mut delivered) = create_recording_subscriber();
    state.fanout_service.subscribe(callback).await;
    let mut session = hub.accept().await;
    session.emit("BusSOS", "engine fire").await;
    timeout(Duration::from_secs(5), delivered.recv())
        .await?
        .unwrap();
    state.notifications_feed_service.clear().await?;
    application::close(state_to_close).await;
    drop(session);
    drop(hub);

    let hub = TestHub::bind().await;
    let env = create_test_env(hub.url(), feed_dir.path());
    let (state, state_to_close) = application::create_state(&env).await?;

    assert!(state.notifications_feed_service.records().await.is_empty());

    application::close(state_to_close).await;

    Ok(())
}

#[tokio::test]
#[serial]
async fn ids_grow_across_agent_restart() -> anyhow::Result<()> {
    let feed_dir = TempDir::new()?;

    let hub = TestHub::bind().await;
    let env = create_test_env(hub.url(), feed_dir.path());
    let (state, state_to_close) = application::create_state(&env).await?;
    let (callback, mut delivered) = create_recording_subscriber();
    state.fanout_service.subscribe(callback).await;
    let mut session = hub.accept().await;
    session.emit("ShiftStarted", "driver 7 started").await;
    timeout(Duration::from_secs(5), delivered.recv())
        .await?
        .unwrap();
    application::close(state_to_close).await;
    drop(session);
    drop(hub);

    let hub = TestHub::bind().await;
    let env = create_test_env(hub.url(), feed_dir.path());
    let (state, state_to_close) = application::create_state(&env).await?;
    let (callback, mut delivered) = create_recording_subscriber();
    state.fanout_service.subscribe(callback).await;
    let mut session = hub.accept().await;
    session.emit("ShiftEnded", "driver 7 done").await;
    timeout(Duration::from_secs(5), delivered.recv())
        .await?
        .unwrap();

    let records = state.notifications_feed_service.records().await;
    assert_eq!(records.len(), 2);
    assert!(records[0].id > records[1].id);

    application::close(state_to_close).await;

    Ok(())
}
