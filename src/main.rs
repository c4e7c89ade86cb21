use transit_notifier::{
    application::{self, ApplicationEnv},
    service::fanout_service::FanoutService,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    #[cfg(debug_assertions)]
    {
        // Ignore error because .env file is not required
        // as long as env variables are set
        let _ = dotenvy::dotenv();
    }

    let env = ApplicationEnv::parse()?;

    application::setup_tracing(&env)?;

    tracing::info!("creating state");
    let (state, state_to_close) = application::create_state(&env).await?;

    tracing::info!("watching notification feed");
    let subscription_id = state
        .fanout_service
        .subscribe(Box::new(|record| {
            tracing::info!(
                id = record.id,
                kind = record.kind.as_ref(),
                title = %record.title,
                "notification"
            );
        }))
        .await;

    application::shutdown_signal().await;

    state.fanout_service.unsubscribe(subscription_id).await;
    application::close(state_to_close).await;

    tracing::info!("feed agent closed");

    Ok(())
}
