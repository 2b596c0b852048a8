use std::process;

use remotion_lambda::{RemotionClient, config, telemetry};
use tracing::{Dispatch, Level, dispatcher, error};
use tracing_subscriber::fmt as tracing_fmt;

mod commands;

use commands::AppError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "command failed");
        return;
    }

    let subscriber = tracing_fmt()
        .with_max_level(Level::ERROR)
        .with_writer(std::io::stderr)
        .finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, "command failed");
    });
}

async fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli()?;
    telemetry::init(&settings.logging)?;

    let client = RemotionClient::connect(settings.lambda.client_config()).await?;

    match cli_args.command {
        config::Command::Render(args) => commands::render(&client, args).await,
        config::Command::Still(args) => commands::still(&client, args).await,
        config::Command::Progress(args) => commands::progress(&client, args).await,
    }
}
