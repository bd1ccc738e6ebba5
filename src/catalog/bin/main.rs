use clap::Parser;
use lambda_http::tower::ServiceExt;
use lambda_http::{run, Error};
use bookstore::books::factory::create_book_repository;
use bookstore::catalog::controller::build_router;
use bookstore::core::controller::AppState;
use bookstore::core::domain::Configuration;
use bookstore::utils::aws::setup_tracing;

// See https://docs.aws.amazon.com/lambda/latest/dg/lambda-rust.html
// https://docs.aws.amazon.com/lambda/latest/dg/rust-http-events.html

#[tokio::main]
async fn main() -> Result<(), Error> {
    setup_tracing();

    let config = Configuration::parse();
    tracing::info!(store = ?config.store, "starting bookstore");

    let book_repository = create_book_repository(&config).await.map_err(|err| {
        tracing::error!(error = %err, "failed to create book repository");
        err
    })?;
    let bind = config.bind;
    let app = build_router(AppState::new(config, book_repository));

    // the runtime api is only set inside a Lambda execution environment
    if std::env::var_os("AWS_LAMBDA_RUNTIME_API").is_some() {
        let app = app.map_request(|req: lambda_http::Request| {
            req.map(|body| axum::body::Body::from(body.to_vec()))
        });
        return run(app).await;
    }

    tracing::info!(addr = %bind, "serving locally");
    axum::Server::bind(&bind)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
        tracing::info!("CTRL+C received");
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
                tracing::info!("SIGTERM received");
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutting down");
}
